//! Rendering search results for the terminal.

use std::fmt;

use motif_subgraph::{Embeddings, Mapping, MotifFrequency};
use serde::Serialize;

/// One query vertex and the input vertex it maps to.
#[derive(Debug, Serialize)]
pub struct MappedVertex {
    pub query: String,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct MappingReport {
    /// Pairs in the order they were mapped.
    pub function: Vec<MappedVertex>,
    /// Images of the query edges.
    pub edges: Vec<(String, String)>,
}

impl From<&Mapping> for MappingReport {
    fn from(mapping: &Mapping) -> Self {
        Self {
            function: mapping
                .pairs()
                .map(|(query, input)| MappedVertex {
                    query: query.to_owned(),
                    input: input.to_owned(),
                })
                .collect(),
            edges: mapping
                .map_on_input_subgraph()
                .edges()
                .map(|(u, v)| (u.to_owned(), v.to_owned()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub label: String,
    pub mapping_count: usize,
    pub threshold: usize,
    pub is_frequent: bool,
    pub roots: Vec<String>,
    pub supported_pairs: usize,
    /// Empty when only counts were requested.
    pub mappings: Vec<MappingReport>,
}

impl Report {
    pub fn new(frequency: &MotifFrequency, embeddings: &Embeddings) -> Self {
        Self {
            label: frequency.label.clone(),
            mapping_count: frequency.mapping_count,
            threshold: frequency.threshold,
            is_frequent: frequency.is_frequent,
            roots: embeddings.roots.clone(),
            supported_pairs: embeddings.supported_pairs,
            mappings: frequency.mappings.iter().map(MappingReport::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Motif '{}' ===", self.label)?;
        writeln!(f, "roots searched: {}", self.roots.len())?;
        writeln!(f, "supported pairs: {}", self.supported_pairs)?;
        writeln!(f, "mappings: {}", self.mapping_count)?;
        writeln!(
            f,
            "frequent: {} (threshold {})",
            if self.is_frequent { "yes" } else { "no" },
            self.threshold
        )?;

        for (i, mapping) in self.mappings.iter().enumerate() {
            let pairs = mapping
                .function
                .iter()
                .map(|p| format!("{}->{}", p.query, p.input))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{i}: [{pairs}]")?;
        }
        Ok(())
    }
}
