//! Frequent-motif classification over search results.

use motif_graph::QueryGraph;

use crate::mapping::Mapping;

/// How often a query graph occurs in the input, and whether that makes it a
/// frequent motif.
#[derive(Clone, Debug)]
pub struct MotifFrequency {
    /// Label of the query graph.
    pub label: String,
    /// Number of mappings found.
    pub mapping_count: usize,
    /// Count at or above which the query is frequent.
    pub threshold: usize,
    pub is_frequent: bool,
    /// The mappings themselves; empty when only counts were requested.
    pub mappings: Vec<Mapping>,
}

impl MotifFrequency {
    /// Classifies `query` from the mappings found for it.
    #[must_use]
    pub fn classify(
        query: &QueryGraph,
        mappings: Vec<Mapping>,
        threshold: usize,
        counts_only: bool,
    ) -> Self {
        let mapping_count = mappings.len();
        let is_frequent = mapping_count >= threshold;
        tracing::info!(
            "query '{}': {} mappings, threshold {}, frequent: {}",
            query.label(),
            mapping_count,
            threshold,
            is_frequent
        );

        Self {
            label: query.label().to_owned(),
            mapping_count,
            threshold,
            is_frequent,
            mappings: if counts_only { Vec::new() } else { mappings },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use motif_graph::Graph;
    use rstest::rstest;

    use super::*;
    use crate::mapping::PartialMapping;

    fn some_mappings(n: usize) -> Vec<Mapping> {
        (0..n)
            .map(|i| {
                Mapping::new(
                    PartialMapping::seeded("a", &format!("v{i}")),
                    Graph::new(),
                    Arc::new(Graph::new()),
                )
            })
            .collect()
    }

    #[rstest]
    #[case::below(2, 3, false)]
    #[case::at(3, 3, true)]
    #[case::above(5, 3, true)]
    #[case::zero_threshold(0, 0, true)]
    fn frequent_at_or_above_threshold(
        #[case] found: usize,
        #[case] threshold: usize,
        #[case] expected: bool,
    ) {
        let query = QueryGraph::from_edges("q", [("a", "b")]).unwrap();
        let report = MotifFrequency::classify(&query, some_mappings(found), threshold, false);
        assert_eq!(report.is_frequent, expected);
        assert_eq!(report.mapping_count, found);
        assert_eq!(report.mappings.len(), found);
    }

    #[test]
    fn counts_only_drops_mapping_detail() {
        let query = QueryGraph::from_edges("q", [("a", "b")]).unwrap();
        let report = MotifFrequency::classify(&query, some_mappings(4), 1, true);
        assert_eq!(report.mapping_count, 4);
        assert!(report.mappings.is_empty());
        assert_eq!(report.label, "q");
    }
}
