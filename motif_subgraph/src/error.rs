//! Errors raised before a search starts.
//!
//! The search itself never fails: an input with no occurrence of the query
//! yields an empty result. Everything here is a validation failure on the
//! query graph.

use thiserror::Error;

/// Reasons a query graph cannot be searched for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The query graph has no vertices.
    #[error("query graph '{label}' is empty")]
    EmptyQuery { label: String },

    /// A query vertex has no edges, so it can never join the search frontier.
    #[error("query graph '{label}' has isolated vertex '{vertex}'")]
    IsolatedVertex { label: String, vertex: String },

    /// The query graph falls apart into several components.
    #[error("query graph '{label}' is not connected")]
    DisconnectedQuery { label: String },
}
