//! Query (pattern) graphs.

use std::ops::{Deref, DerefMut};

use crate::{Graph, GraphError};

/// A pattern graph together with a provenance label.
///
/// The label is carried through to reports only; it plays no part in
/// matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryGraph {
    /// Free-form provenance label, e.g. the file the pattern came from.
    label: String,
    graph: Graph,
}

impl QueryGraph {
    #[must_use]
    pub fn new(label: impl Into<String>, graph: Graph) -> Self {
        Self {
            label: label.into(),
            graph,
        }
    }

    /// Builds a labeled query graph from a list of edges.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_edges`].
    pub fn from_edges<I, S>(label: impl Into<String>, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Ok(Self::new(label, Graph::from_edges(edges)?))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl Deref for QueryGraph {
    type Target = Graph;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl DerefMut for QueryGraph {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.graph
    }
}

impl From<Graph> for QueryGraph {
    fn from(graph: Graph) -> Self {
        Self::new(String::new(), graph)
    }
}
