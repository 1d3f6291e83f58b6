//! Configuration for the motif search.
//!
//! Quick examples
//!
//! Default behavior (degree-sampled roots, first-unmapped extension check,
//! function-equality dedupe):
//! ```
//! use motif_subgraph::Config;
//! let cfg = Config::default();
//! ```
//!
//! Root every input vertex and collapse isomorphic duplicates:
//! ```
//! use motif_subgraph::{Config, Dedupe};
//! let cfg = Config::builder().sample_count(usize::MAX).isomorphic().build();
//! assert_eq!(cfg.dedupe, Dedupe::Isomorphic);
//! ```

use motif_graph::Graph;

/// Global search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// How many input vertices (in insertion order) are tried as roots.
    /// `None` or zero means a third of the input vertex count.
    pub sample_count: Option<usize>,
    /// How strictly a candidate is checked against already-mapped vertices.
    pub extension_check: ExtensionCheck,
    /// How results are deduplicated after the search.
    pub dedupe: Dedupe,
    /// Search roots in parallel. Only honored with the `rayon` feature.
    pub parallel: bool,
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Number of roots to take from `input`.
    #[must_use]
    pub fn samples_for(&self, input: &Graph) -> usize {
        match self.sample_count {
            Some(n) if n > 0 => n,
            _ => input.vertex_count() / 3,
        }
    }
}

/// Which already-mapped query neighbours a candidate is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExtensionCheck {
    /// Walk the query neighbours of the vertex being placed in order and
    /// accept the candidate at the first neighbour that is not yet mapped.
    /// Mapped neighbours seen before that point must be adjacent to the
    /// candidate. Results stay comparable with earlier runs of this engine.
    #[default]
    FirstUnmapped,
    /// Require adjacency to the image of every mapped query neighbour.
    /// Prunes more and never yields a non edge-preserving mapping, but is a
    /// different algorithm and may report a different result set.
    AllNeighbours,
}

/// Control how completed mappings are deduplicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dedupe {
    /// Drop only mappings with an identical query-to-input function.
    #[default]
    Function,
    /// Additionally collapse mappings that embed the same structure on the
    /// same input vertices (see [`crate::are_isomorphic`]).
    Isomorphic,
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    #[must_use]
    pub const fn sample_count(mut self, count: usize) -> Self {
        self.config.sample_count = Some(count);
        self
    }

    /// Fall back to the default of a third of the input vertices.
    #[must_use]
    pub const fn default_samples(mut self) -> Self {
        self.config.sample_count = None;
        self
    }

    #[must_use]
    pub const fn extension_check(mut self, check: ExtensionCheck) -> Self {
        self.config.extension_check = check;
        self
    }

    #[must_use]
    pub const fn first_unmapped(self) -> Self {
        self.extension_check(ExtensionCheck::FirstUnmapped)
    }

    #[must_use]
    pub const fn all_neighbours(self) -> Self {
        self.extension_check(ExtensionCheck::AllNeighbours)
    }

    #[must_use]
    pub const fn dedupe(mut self, dedupe: Dedupe) -> Self {
        self.config.dedupe = dedupe;
        self
    }

    #[must_use]
    pub const fn isomorphic(self) -> Self {
        self.dedupe(Dedupe::Isomorphic)
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
