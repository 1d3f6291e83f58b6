//! Plain-text edge-list loading.
//!
//! One edge per line as two whitespace-separated vertex identifiers. A line
//! holding a single identifier declares a vertex with no edges. Blank lines
//! and lines starting with `#` are ignored.

use std::path::Path;

use tracing::debug;

use crate::{Graph, GraphError, QueryGraph};

/// Parses an edge list into a graph.
///
/// # Errors
///
/// Malformed lines, self-loops and repeated edges are reported together with
/// their 1-based line number.
pub fn parse_edge_list(text: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let added = match tokens.as_slice() {
            [vertex] => {
                graph.add_vertex(*vertex);
                Ok(())
            }
            [u, v] => graph.add_edge(*u, *v),
            _ => Err(GraphError::Malformed {
                content: line.to_owned(),
            }),
        };
        added.map_err(|e| e.at_line(idx + 1))?;
    }

    Ok(graph)
}

/// Reads and parses an edge-list file.
///
/// # Errors
///
/// I/O failures and anything [`parse_edge_list`] rejects.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let graph = parse_edge_list(&text)?;
    debug!(
        "loaded {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads an edge-list file as a query graph labeled with the file stem.
///
/// # Errors
///
/// Same as [`load_edge_list`].
pub fn load_query_graph(path: impl AsRef<Path>) -> Result<QueryGraph, GraphError> {
    let path = path.as_ref();
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(QueryGraph::new(label, load_edge_list(path)?))
}
