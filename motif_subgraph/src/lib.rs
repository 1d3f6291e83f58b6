//! Subgraph-isomorphism search for network motifs.
//!
//! Finds every occurrence of a small query graph inside a larger input
//! graph. The search is seeded from sampled input vertices in degree order;
//! after a vertex has been used as a root it is removed from a private
//! working copy of the input, so each embedding is found from exactly one
//! root.
//!
//! ```
//! use motif_graph::{Graph, QueryGraph};
//! use motif_subgraph::{Config, find_subgraphs};
//!
//! let query = QueryGraph::from_edges("edge", [("a", "b")]).unwrap();
//! let input = Graph::from_edges([("x", "y"), ("y", "z")]).unwrap();
//! let config = Config::builder().sample_count(3).isomorphic().build();
//!
//! let found = find_subgraphs(&query, &input, &config).unwrap();
//! assert_eq!(found.len(), 2);
//! ```

mod config;
mod driver;
mod error;
mod extension;
mod frequency;
mod heuristics;
mod isomorphism;
mod key;
mod mapping;
mod memo;
mod pruning;

pub use config::{Config, ConfigBuilder, Dedupe, ExtensionCheck};
pub use driver::Embeddings;
pub use error::SearchError;
pub use frequency::MotifFrequency;
pub use isomorphism::{are_isomorphic, dedupe_isomorphic};
pub use key::VertexSetKey;
pub use mapping::{Mapping, PartialMapping};

use motif_graph::{Graph, QueryGraph};

/// Entry point for motif searches.
pub struct SubgraphMatcher<'query, 'input, 'cfg> {
    /// The pattern to search for.
    query: &'query QueryGraph,
    /// The graph to search within. Never modified.
    input: &'input Graph,
    /// Configuration settings for the search.
    config: &'cfg Config,
}

impl<'query, 'input, 'cfg> SubgraphMatcher<'query, 'input, 'cfg> {
    /// Validates `query` and prepares a search.
    ///
    /// # Errors
    ///
    /// See [`validate_query`].
    pub fn new(
        query: &'query QueryGraph,
        input: &'input Graph,
        config: &'cfg Config,
    ) -> Result<Self, SearchError> {
        validate_query(query)?;
        Ok(Self {
            query,
            input,
            config,
        })
    }

    /// Runs the root-elimination search and returns every mapping found,
    /// deduplicated by function equality only.
    #[must_use]
    pub fn enumerate_all(&self) -> Embeddings {
        driver::search(self.query, self.input, self.config)
    }

    /// Runs the search and applies the configured [`Dedupe`] mode.
    #[must_use]
    pub fn find(&self) -> Vec<Mapping> {
        let embeddings = self.enumerate_all();
        match self.config.dedupe {
            Dedupe::Function => embeddings.mappings,
            Dedupe::Isomorphic => dedupe_isomorphic(embeddings.mappings, self.query),
        }
    }
}

/// Validates `query` and runs the root-elimination search.
///
/// # Errors
///
/// See [`validate_query`].
pub fn find_mappings(
    query: &QueryGraph,
    input: &Graph,
    config: &Config,
) -> Result<Embeddings, SearchError> {
    Ok(SubgraphMatcher::new(query, input, config)?.enumerate_all())
}

/// Validates `query`, runs the search and applies the configured dedupe.
///
/// # Errors
///
/// See [`validate_query`].
pub fn find_subgraphs(
    query: &QueryGraph,
    input: &Graph,
    config: &Config,
) -> Result<Vec<Mapping>, SearchError> {
    Ok(SubgraphMatcher::new(query, input, config)?.find())
}

/// Rejects query graphs the search cannot handle.
///
/// # Errors
///
/// An empty query, a query with an isolated vertex (unless it is the only
/// vertex), or a query that is not connected.
pub fn validate_query(query: &QueryGraph) -> Result<(), SearchError> {
    let label = || query.label().to_owned();

    if query.is_empty() {
        return Err(SearchError::EmptyQuery { label: label() });
    }
    if query.vertex_count() > 1 {
        if let Some(vertex) = query.isolated_vertices().next() {
            return Err(SearchError::IsolatedVertex {
                label: label(),
                vertex: vertex.to_owned(),
            });
        }
        if !query.is_connected() {
            return Err(SearchError::DisconnectedQuery { label: label() });
        }
    }
    Ok(())
}
