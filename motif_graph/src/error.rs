//! Error types for graph construction and loading.

use thiserror::Error;

/// Errors raised while building or loading a graph.
///
/// Graphs handed to the search are assumed to be simple and undirected, so
/// every way of breaking that assumption is rejected here rather than during
/// the search.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge joined a vertex to itself.
    #[error("self-loop on vertex '{vertex}'")]
    SelfLoop { vertex: String },

    /// An edge between the two vertices was already present.
    #[error("duplicate edge '{u}'-'{v}'")]
    DuplicateEdge { u: String, v: String },

    /// An edge-list line could not be read as one or two identifiers.
    #[error("malformed edge-list line: '{content}'")]
    Malformed { content: String },

    /// A structural error found on a specific edge-list line.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<GraphError>,
    },

    /// The edge-list file could not be read.
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Create a self-loop error.
    pub fn self_loop(vertex: impl Into<String>) -> Self {
        Self::SelfLoop {
            vertex: vertex.into(),
        }
    }

    /// Create a duplicate edge error.
    pub fn duplicate_edge(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self::DuplicateEdge {
            u: u.into(),
            v: v.into(),
        }
    }

    /// Attach a 1-based line number to this error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}
