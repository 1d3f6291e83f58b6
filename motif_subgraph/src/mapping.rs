//! Query-to-input vertex mappings.

use std::sync::Arc;

use indexmap::IndexMap;
use itertools::Itertools;
use motif_graph::Graph;

/// A partial function from query vertices (domain) to input vertices (range).
///
/// Entries keep their insertion order: the heuristics walk the domain from
/// the most recently mapped vertex backwards, and the driver files completed
/// mappings under the image inserted last. Equality ignores that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialMapping {
    /// Query vertex -> input vertex, in insertion order.
    function: IndexMap<String, String>,
}

impl PartialMapping {
    #[contracts::debug_ensures(ret.is_empty())]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The single-entry mapping `{h -> g}` a search is rooted at.
    #[contracts::debug_ensures(ret.len() == 1)]
    #[must_use]
    pub fn seeded(h: &str, g: &str) -> Self {
        let mut function = IndexMap::with_capacity(1);
        function.insert(h.to_owned(), g.to_owned());
        Self { function }
    }

    /// A copy of `self` extended with `m -> n`.
    #[contracts::debug_requires(!self.contains(m))]
    #[contracts::debug_ensures(ret.len() == self.len() + 1)]
    #[must_use]
    pub fn extended(&self, m: &str, n: &str) -> Self {
        let mut function = IndexMap::with_capacity(self.function.len() + 1);
        function.extend(self.function.iter().map(|(k, v)| (k.clone(), v.clone())));
        function.insert(m.to_owned(), n.to_owned());
        Self { function }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.function.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.function.is_empty()
    }

    /// Whether query vertex `h` is in the domain.
    #[must_use]
    pub fn contains(&self, h: &str) -> bool {
        self.function.contains_key(h)
    }

    /// Image of query vertex `h`.
    #[must_use]
    pub fn get(&self, h: &str) -> Option<&str> {
        self.function.get(h).map(String::as_str)
    }

    /// Query vertices in insertion order.
    pub fn domain(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.function.keys().map(String::as_str)
    }

    /// Input vertices in insertion order.
    pub fn range(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.function.values().map(String::as_str)
    }

    /// `(query, input)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.function.iter().map(|(h, g)| (h.as_str(), g.as_str()))
    }

    /// The input vertex inserted last.
    #[must_use]
    pub fn last_image(&self) -> Option<&str> {
        self.function.last().map(|(_, g)| g.as_str())
    }

    /// No two query vertices share an image.
    #[must_use]
    pub fn is_injective(&self) -> bool {
        self.range().all_unique()
    }

    /// Order-independent identity of the function, usable as a hash key.
    #[must_use]
    pub fn signature(&self) -> Vec<(String, String)> {
        self.function
            .iter()
            .map(|(h, g)| (h.clone(), g.clone()))
            .sorted_unstable()
            .collect()
    }
}

/// A complete mapping of the query graph into the input graph.
///
/// Alongside the function it carries two subgraphs over the mapped input
/// vertices. [`Mapping::input_subgraph`] holds every edge the unmodified input
/// graph has between them; [`Mapping::map_on_input_subgraph`] holds only the
/// images of query edges. They differ whenever the chosen input vertices
/// have adjacencies the query does not ask for.
#[derive(Clone, Debug)]
pub struct Mapping {
    function: PartialMapping,
    /// Images of the query edges.
    map_on_input_subgraph: Graph,
    /// Induced subgraph of the unmodified input over the range. Shared
    /// between mappings onto the same vertex set.
    input_subgraph: Arc<Graph>,
}

impl Mapping {
    #[must_use]
    pub const fn new(
        function: PartialMapping,
        map_on_input_subgraph: Graph,
        input_subgraph: Arc<Graph>,
    ) -> Self {
        Self {
            function,
            map_on_input_subgraph,
            input_subgraph,
        }
    }

    #[must_use]
    pub const fn function(&self) -> &PartialMapping {
        &self.function
    }

    /// `(query, input)` pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.function.pairs()
    }

    /// Image of query vertex `h`.
    #[must_use]
    pub fn get(&self, h: &str) -> Option<&str> {
        self.function.get(h)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.function.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.function.is_empty()
    }

    #[must_use]
    pub fn last_image(&self) -> Option<&str> {
        self.function.last_image()
    }

    #[must_use]
    pub fn is_injective(&self) -> bool {
        self.function.is_injective()
    }

    #[must_use]
    pub const fn map_on_input_subgraph(&self) -> &Graph {
        &self.map_on_input_subgraph
    }

    #[must_use]
    pub fn input_subgraph(&self) -> &Graph {
        &self.input_subgraph
    }

    /// Shorthand for [`crate::are_isomorphic`].
    #[must_use]
    pub fn is_isomorphic_with(&self, other: &Self, query: &Graph) -> bool {
        crate::are_isomorphic(self, other, query)
    }
}

/// Mappings are equal when their functions are; the subgraphs follow from it.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function
    }
}

impl Eq for Mapping {}
