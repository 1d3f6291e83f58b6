//! Graph model for motif search.
//!
//! Provides the undirected, string-labeled [`Graph`] that both the input
//! network and the pattern are expressed in, the labeled [`QueryGraph`]
//! wrapper, and edge-list loading.

mod edge_list;
mod error;
mod graph;
mod query;

pub use edge_list::{load_edge_list, load_query_graph, parse_edge_list};
pub use error::GraphError;
pub use graph::Graph;
pub use query::QueryGraph;
