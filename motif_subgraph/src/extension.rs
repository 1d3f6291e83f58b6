//! Recursive isomorphic-extension search.
//!
//! Grows a partial mapping one query vertex at a time until it covers the
//! whole query graph. Each level picks the next query vertex with
//! [`most_constrained_neighbour`], draws candidates from
//! [`neighbours_of_range`], filters them with [`is_compatible`] and recurses.

use std::collections::HashSet;

use motif_graph::Graph;

use crate::heuristics::{most_constrained_neighbour, neighbours_of_range};
use crate::key::VertexSetKey;
use crate::mapping::{Mapping, PartialMapping};
use crate::memo::SearchContext;
use crate::pruning::is_compatible;

/// All complete mappings extending `partial` within `working`.
///
/// An empty result means no extension exists; that is not an error.
pub(crate) fn isomorphic_extension(
    ctx: &mut SearchContext<'_>,
    working: &Graph,
    partial: PartialMapping,
) -> Vec<Mapping> {
    let query = ctx.query();
    if partial.len() == query.vertex_count() {
        return vec![complete(ctx, partial)];
    }

    let Some(m) = most_constrained_neighbour(ctx, &partial) else {
        tracing::trace!(
            "dead end: no unmapped neighbour of domain {:?}",
            partial.domain().collect::<Vec<_>>()
        );
        return Vec::new();
    };

    let pool = neighbours_of_range(ctx, &partial, working);
    let check = ctx.extension_check();

    let mut found: Vec<Mapping> = Vec::new();
    let mut seen: HashSet<Vec<(String, String)>> = HashSet::new();

    for n in pool.iter() {
        if !is_compatible(working, query, n, &m, &partial, check) {
            continue;
        }

        let next = partial.extended(&m, n);
        for child in isomorphic_extension(ctx, working, next) {
            if child.is_injective() && seen.insert(child.function().signature()) {
                found.push(child);
            }
        }
    }

    if found.is_empty() {
        tracing::trace!(
            "backtracking: {} candidates for query vertex {} gave no mapping",
            pool.len(),
            m
        );
    }
    found
}

/// Turns a total partial mapping into a [`Mapping`].
fn complete(ctx: &mut SearchContext<'_>, partial: PartialMapping) -> Mapping {
    debug_assert_eq!(partial.len(), ctx.query().vertex_count());

    let mut on_input = Graph::new();
    for (u, v) in ctx.query().edges() {
        let (Some(fu), Some(fv)) = (partial.get(u), partial.get(v)) else {
            continue;
        };
        if let Err(e) = on_input.insert_edge(fu, fv) {
            tracing::trace!("image of query edge {u}-{v} skipped: {e}");
        }
    }

    let key: VertexSetKey = partial.range().collect();
    let input_subgraph = ctx.input_subgraph(key);
    Mapping::new(partial, on_input, input_subgraph)
}
