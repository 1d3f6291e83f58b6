//! Undirected, vertex-labeled simple graph.

use std::cmp::Reverse;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::GraphError;

/// An undirected simple graph keyed by string vertex identifiers.
///
/// Vertices and neighbour lists keep the order in which they were added.
/// That order is what "first discovered" means for [`Graph::degree_sequence`]
/// and is the neighbour order seen by the search heuristics, so removal
/// always shifts rather than swaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// Vertex to its neighbours, both in insertion order.
    adjacency: IndexMap<String, IndexSet<String>>,
    /// Number of undirected edges.
    edge_count: usize,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list of undirected edges.
    ///
    /// # Errors
    ///
    /// Fails on the first self-loop or repeated edge.
    pub fn from_edges<I, S>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<String>) -> bool {
        let vertex = vertex.into();
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexSet::new());
        true
    }

    /// Adds an edge, adding its endpoints as needed.
    ///
    /// # Errors
    ///
    /// Rejects self-loops and edges that are already present.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) -> Result<(), GraphError> {
        let (u, v) = (u.into(), v.into());
        if self.contains_edge(&u, &v) {
            return Err(GraphError::duplicate_edge(u, v));
        }
        self.insert_edge(u, v).map(|_| ())
    }

    /// Adds an edge unless it already exists. Returns whether it was added.
    ///
    /// # Errors
    ///
    /// Rejects self-loops.
    pub fn insert_edge(
        &mut self,
        u: impl Into<String>,
        v: impl Into<String>,
    ) -> Result<bool, GraphError> {
        let (u, v) = (u.into(), v.into());
        if u == v {
            return Err(GraphError::self_loop(u));
        }
        if self.contains_edge(&u, &v) {
            return Ok(false);
        }

        self.adjacency.entry(u.clone()).or_default().insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);
        self.edge_count += 1;
        Ok(true)
    }

    /// Removes a vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, vertex: &str) -> bool {
        let Some(neighbours) = self.adjacency.shift_remove(vertex) else {
            return false;
        };
        for n in &neighbours {
            if let Some(back) = self.adjacency.get_mut(n.as_str()) {
                back.shift_remove(vertex);
            }
        }
        self.edge_count -= neighbours.len();
        true
    }

    #[must_use]
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    #[must_use]
    pub fn contains_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbours| neighbours.contains(v))
    }

    /// Neighbours of `vertex` in insertion order; empty for an unknown vertex.
    pub fn neighbors<'a>(&'a self, vertex: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(String::as_str))
    }

    /// Adjacent degree of `vertex`, zero if it is not in the graph.
    #[must_use]
    pub fn degree(&self, vertex: &str) -> usize {
        self.adjacency.get(vertex).map_or(0, IndexSet::len)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Each undirected edge once, oriented from the earlier-added endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(i, (u, neighbours))| {
                neighbours
                    .iter()
                    .filter(move |v| self.adjacency.get_index_of(v.as_str()).is_some_and(|j| j > i))
                    .map(move |v| (u.as_str(), v.as_str()))
            })
    }

    /// A complete graph on n vertices has n(n-1)/2 edges.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        self.edge_count == n * n.saturating_sub(1) / 2
    }

    /// The first `count` vertices, ordered by non-increasing degree.
    ///
    /// The prefix is taken before sorting, so this is the highest-degree
    /// ordering of the first `count` vertices added, not a global top-N.
    /// Ties keep their insertion order.
    #[must_use]
    pub fn degree_sequence(&self, count: usize) -> Vec<String> {
        self.vertices()
            .take(count)
            .sorted_by_key(|v| Reverse(self.degree(v)))
            .map(str::to_owned)
            .collect()
    }

    /// Subgraph over `vertices` with every edge of `self` between them.
    ///
    /// Vertices not present in `self` are ignored.
    #[must_use]
    pub fn induced_subgraph<'a>(&self, vertices: impl IntoIterator<Item = &'a str>) -> Self {
        let members: Vec<&str> = vertices
            .into_iter()
            .filter(|v| self.contains_vertex(v))
            .unique()
            .collect();

        let mut sub = Self::new();
        for v in &members {
            sub.add_vertex(*v);
        }
        for (u, v) in members.iter().tuple_combinations() {
            if self.contains_edge(u, v) {
                sub.adjacency[*u].insert((*v).to_owned());
                sub.adjacency[*v].insert((*u).to_owned());
                sub.edge_count += 1;
            }
        }
        sub
    }

    /// Vertices with no incident edge.
    pub fn isolated_vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency
            .iter()
            .filter(|(_, neighbours)| neighbours.is_empty())
            .map(|(v, _)| v.as_str())
    }

    /// True when every vertex is reachable from the first one.
    ///
    /// The empty graph counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return true;
        };

        let mut seen: IndexSet<&str> = IndexSet::from([start]);
        let mut frontier = vec![start];
        while let Some(v) = frontier.pop() {
            for n in self.neighbors(v) {
                if seen.insert(n) {
                    frontier.push(n);
                }
            }
        }
        seen.len() == self.vertex_count()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.edge_count == 0 {
            return Ok(());
        }
        let edges = self.edges().map(|(u, v)| format!("[{u}-{v}]")).join(",");
        write!(f, "Graph-Edges_{edges}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn square() -> Graph {
        Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]).unwrap()
    }

    #[test]
    fn add_edge_rejects_self_loop_and_duplicates() {
        let mut g = Graph::new();
        g.add_edge("a", "b").unwrap();

        assert!(matches!(
            g.add_edge("a", "a"),
            Err(GraphError::SelfLoop { .. })
        ));
        assert!(matches!(
            g.add_edge("b", "a"),
            Err(GraphError::DuplicateEdge { .. })
        ));
        assert!(!g.insert_edge("b", "a").unwrap());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn remove_vertex_drops_incident_edges_and_keeps_order() {
        let mut g = square();
        assert!(g.remove_vertex("b"));
        assert!(!g.remove_vertex("b"));

        assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["a", "c", "d"]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree("c"), 1);
        assert!(!g.contains_edge("a", "b"));
        assert_eq!(g.neighbors("a").collect::<Vec<_>>(), vec!["d"]);
    }

    #[test]
    fn edges_are_reported_once() {
        let g = square();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&("a", "b")));
        assert!(edges.contains(&("a", "d")));
        assert!(!edges.contains(&("b", "a")));
    }

    #[rstest]
    #[case::single(vec![], 1, true)]
    #[case::edge(vec![("a", "b")], 2, true)]
    #[case::path(vec![("a", "b"), ("b", "c")], 3, false)]
    #[case::triangle(vec![("a", "b"), ("b", "c"), ("c", "a")], 3, true)]
    fn is_complete_counts_edges(
        #[case] edges: Vec<(&str, &str)>,
        #[case] vertices: usize,
        #[case] expected: bool,
    ) {
        let mut g = Graph::from_edges(edges).unwrap();
        if g.is_empty() {
            g.add_vertex("solo");
        }
        assert_eq!(g.vertex_count(), vertices);
        assert_eq!(g.is_complete(), expected);
    }

    #[test]
    fn degree_sequence_sorts_only_the_prefix() {
        // hub is added last, so a prefix of 3 never sees it.
        let g = Graph::from_edges([("a", "b"), ("c", "hub"), ("a", "hub"), ("b", "hub")]).unwrap();

        assert_eq!(g.degree_sequence(3), vec!["a", "b", "c"]);
        assert_eq!(g.degree_sequence(10), vec!["hub", "a", "b", "c"]);
        assert!(Graph::new().degree_sequence(3).is_empty());
    }

    #[test]
    fn induced_subgraph_keeps_incidental_edges() {
        let mut g = square();
        g.add_edge("a", "c").unwrap();
        let sub = g.induced_subgraph(["a", "b", "c", "missing"]);

        assert_eq!(sub.vertex_count(), 3);
        assert_eq!(sub.edge_count(), 3);
        assert!(sub.contains_edge("c", "a"));
        assert!(sub.is_complete());
    }

    #[test]
    fn connectivity_and_isolated_vertices() {
        let mut g = square();
        assert!(g.is_connected());
        assert_eq!(g.isolated_vertices().count(), 0);

        g.add_vertex("lonely");
        assert!(!g.is_connected());
        assert_eq!(g.isolated_vertices().collect::<Vec<_>>(), vec!["lonely"]);
    }

    #[test]
    fn display_lists_edges() {
        let g = Graph::from_edges([("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(g.to_string(), "Graph-Edges_[a-b],[b-c]");
        assert_eq!(Graph::new().to_string(), "");
    }

    #[test]
    fn clone_is_independent() {
        let g = square();
        let mut working = g.clone();
        working.remove_vertex("a");
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(working.vertex_count(), 3);
    }
}
