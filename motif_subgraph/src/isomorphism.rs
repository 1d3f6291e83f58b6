//! Deciding whether two mappings are the same embedding.
//!
//! The search reports every function it finds, so symmetric patterns show
//! up once per automorphism. Callers that want one entry per embedded
//! structure collapse them with [`dedupe_isomorphic`].

use std::collections::HashMap;

use motif_graph::Graph;

use crate::key::VertexSetKey;
use crate::mapping::Mapping;

/// Whether `a` and `b` embed the same structure.
///
/// Tests, stopping at the first failure:
/// 1. same domain and range vertex sets;
/// 2. same number of query-edge images;
/// 3. every vertex has the same degree among the query-edge images of both.
///
/// When only the degree test fails but `query` is complete, the mappings
/// still count as isomorphic: any relabeling of a complete pattern is an
/// automorphism.
#[must_use]
pub fn are_isomorphic(a: &Mapping, b: &Mapping, query: &Graph) -> bool {
    let fa = a.function();
    let fb = b.function();
    let same_range = fa.range().collect::<VertexSetKey>() == fb.range().collect::<VertexSetKey>();
    let same_domain =
        fa.domain().collect::<VertexSetKey>() == fb.domain().collect::<VertexSetKey>();
    if !(same_range && same_domain) {
        return false;
    }

    let ga = a.map_on_input_subgraph();
    let gb = b.map_on_input_subgraph();
    if ga.edge_count() != gb.edge_count() {
        return false;
    }

    let degree_mismatch = ga.vertices().any(|v| ga.degree(v) != gb.degree(v));
    if degree_mismatch {
        return query.is_complete();
    }
    true
}

/// Keeps the first mapping of every isomorphism class, in input order.
#[must_use]
pub fn dedupe_isomorphic(mappings: Vec<Mapping>, query: &Graph) -> Vec<Mapping> {
    let before = mappings.len();

    // Isomorphic mappings share a range, so only compare within a range set.
    let mut by_range: HashMap<VertexSetKey, Vec<usize>> = HashMap::new();
    let mut kept: Vec<Mapping> = Vec::new();

    for mapping in mappings {
        let key: VertexSetKey = mapping.function().range().collect();
        let bucket = by_range.entry(key).or_default();
        if bucket
            .iter()
            .any(|&i| are_isomorphic(&kept[i], &mapping, query))
        {
            continue;
        }
        bucket.push(kept.len());
        kept.push(mapping);
    }

    tracing::debug!(
        "isomorphic dedupe: {} mappings -> {} classes",
        before,
        kept.len()
    );
    kept
}
