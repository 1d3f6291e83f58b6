//! Per-search memoization tables.
//!
//! One [`SearchContext`] is created for every top-level search and threaded
//! through the recursion. Nothing is shared between searches, so separate
//! searches (or separate roots searched in parallel) never see each other's
//! entries.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use motif_graph::Graph;

use crate::config::ExtensionCheck;
use crate::key::VertexSetKey;

/// Search-scoped state: the graphs being matched and the memo tables.
pub(crate) struct SearchContext<'a> {
    /// The pattern being searched for.
    query: &'a Graph,
    /// The caller's input graph, before any root elimination.
    pristine: &'a Graph,
    /// How candidates are checked against mapped neighbours.
    extension_check: ExtensionCheck,
    /// Range set -> input neighbours of the range outside it.
    neighbours_of_range: HashMap<VertexSetKey, Rc<[String]>>,
    /// Domain set -> next query vertex to map, if any.
    most_constrained: HashMap<VertexSetKey, Option<String>>,
    /// Range set -> induced subgraph of the pristine input.
    input_subgraphs: HashMap<VertexSetKey, Arc<Graph>>,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(query: &'a Graph, pristine: &'a Graph, extension_check: ExtensionCheck) -> Self {
        Self {
            query,
            pristine,
            extension_check,
            neighbours_of_range: HashMap::new(),
            most_constrained: HashMap::new(),
            input_subgraphs: HashMap::new(),
        }
    }

    pub(crate) const fn query(&self) -> &'a Graph {
        self.query
    }

    pub(crate) const fn extension_check(&self) -> ExtensionCheck {
        self.extension_check
    }

    /// Cached neighbours of `range`, computing them with `compute` on a miss.
    pub(crate) fn neighbours_of_range_or_insert_with(
        &mut self,
        key: VertexSetKey,
        compute: impl FnOnce() -> Vec<String>,
    ) -> Rc<[String]> {
        if let Some(hit) = self.neighbours_of_range.get(&key) {
            tracing::trace!("neighbours-of-range cache hit for {:?}", key.as_slice());
            return Rc::clone(hit);
        }
        let computed: Rc<[String]> = compute().into();
        self.neighbours_of_range.insert(key, Rc::clone(&computed));
        computed
    }

    /// Cached next query vertex for `domain`, computing it on a miss.
    pub(crate) fn most_constrained_or_insert_with(
        &mut self,
        key: VertexSetKey,
        compute: impl FnOnce() -> Option<String>,
    ) -> Option<String> {
        self.most_constrained.entry(key).or_insert_with(compute).clone()
    }

    /// Induced subgraph of the pristine input over `key`, computed once per
    /// vertex set by testing every pair of members for an edge.
    pub(crate) fn input_subgraph(&mut self, key: VertexSetKey) -> Arc<Graph> {
        let pristine = self.pristine;
        let sub = self
            .input_subgraphs
            .entry(key)
            .or_insert_with_key(|key| Arc::new(pristine.induced_subgraph(key.iter())));
        Arc::clone(sub)
    }

    #[cfg(test)]
    pub(crate) fn cached_ranges(&self) -> usize {
        self.neighbours_of_range.len()
    }

    #[cfg(test)]
    pub(crate) fn cached_domains(&self) -> usize {
        self.most_constrained.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_subgraph_is_shared_per_vertex_set() {
        let query = Graph::from_edges([("a", "b")]).unwrap();
        let input = Graph::from_edges([("x", "y"), ("y", "z"), ("z", "x")]).unwrap();
        let mut ctx = SearchContext::new(&query, &input, ExtensionCheck::default());

        let first = ctx.input_subgraph(["x", "y"].into_iter().collect());
        let second = ctx.input_subgraph(["y", "x"].into_iter().collect());

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.edge_count(), 1);
    }

    #[test]
    fn neighbours_cache_is_set_keyed() {
        let graph = Graph::new();
        let mut ctx = SearchContext::new(&graph, &graph, ExtensionCheck::default());

        let first = ctx.neighbours_of_range_or_insert_with(["p", "q"].into_iter().collect(), || {
            vec!["r".to_owned()]
        });
        let second = ctx.neighbours_of_range_or_insert_with(["q", "p"].into_iter().collect(), || {
            unreachable!("second lookup should hit the cache")
        });

        assert_eq!(&*first, &*second);
        assert_eq!(ctx.cached_ranges(), 1);
    }
}
