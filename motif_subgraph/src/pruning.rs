//! Cheap necessary-condition tests used to skip hopeless assignments.

use motif_graph::Graph;

use crate::config::ExtensionCheck;
use crate::mapping::PartialMapping;

/// Whether input vertex `g` might host query vertex `h`.
///
/// Rejects when `g` has a lower degree than `h`. Otherwise accepts as soon
/// as any neighbour of `g` has at least the degree of any neighbour of `h`.
/// This is a loose pairwise test, not a matching between the two
/// neighbourhoods: passing it does not mean an embedding exists.
pub(crate) fn can_support(query: &Graph, h: &str, input: &Graph, g: &str) -> bool {
    if input.degree(g) < query.degree(h) {
        return false;
    }

    query.neighbors(h).any(|hn| {
        let needed = query.degree(hn);
        input.neighbors(g).any(|gn| input.degree(gn) >= needed)
    })
}

/// Whether input vertex `n` may be assigned to query vertex `m`.
///
/// Walks the query neighbours of `m` in order. A mapped neighbour `d` needs
/// `n` to be adjacent to its image. With [`ExtensionCheck::FirstUnmapped`]
/// the walk stops and accepts at the first unmapped neighbour, so mapped
/// neighbours listed after it are never checked.
pub(crate) fn is_compatible(
    input: &Graph,
    query: &Graph,
    n: &str,
    m: &str,
    partial: &PartialMapping,
    check: ExtensionCheck,
) -> bool {
    for d in query.neighbors(m) {
        match partial.get(d) {
            None if check == ExtensionCheck::FirstUnmapped => return true,
            None => {}
            Some(fd) if !input.contains_edge(n, fd) => return false,
            Some(_) => {}
        }
    }
    true
}
