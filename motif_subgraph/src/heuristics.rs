//! Ordering and candidate generation for the extension search.

use std::rc::Rc;

use indexmap::IndexSet;
use motif_graph::Graph;

use crate::key::VertexSetKey;
use crate::mapping::PartialMapping;
use crate::memo::SearchContext;

/// Picks the next query vertex to map.
///
/// Walks the domain from the most recently mapped vertex backwards and
/// returns the first query neighbour not yet in the domain. There is no
/// degree ranking: this is a plain frontier pick. `None` means the domain
/// has no unmapped neighbours left.
///
/// Memoized per domain *set*, so the answer recorded for a set is the one
/// computed from whichever insertion order reached it first.
pub(crate) fn most_constrained_neighbour(
    ctx: &mut SearchContext<'_>,
    partial: &PartialMapping,
) -> Option<String> {
    let query = ctx.query();
    let key: VertexSetKey = partial.domain().collect();
    ctx.most_constrained_or_insert_with(key, || {
        partial
            .domain()
            .rev()
            .flat_map(|d| query.neighbors(d))
            .find(|n| !partial.contains(n))
            .map(str::to_owned)
    })
}

/// Input vertices adjacent to the current range but not part of it.
///
/// This is the candidate pool for the next assignment. Memoized per range
/// set against `working`; the driver only ever removes vertices that are no
/// longer reachable from later ranges, so entries never go stale.
pub(crate) fn neighbours_of_range(
    ctx: &mut SearchContext<'_>,
    partial: &PartialMapping,
    working: &Graph,
) -> Rc<[String]> {
    let key: VertexSetKey = partial.range().collect();
    ctx.neighbours_of_range_or_insert_with(key, || {
        let used: IndexSet<&str> = partial.range().collect();
        let pool: IndexSet<&str> = partial
            .range()
            .rev()
            .flat_map(|g| working.neighbors(g))
            .filter(|n| !used.contains(n))
            .collect();
        pool.into_iter().map(str::to_owned).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtensionCheck;

    fn path() -> Graph {
        Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d")]).unwrap()
    }

    #[test]
    fn frontier_pick_starts_from_latest_domain_vertex() {
        let query = path();
        let input = Graph::new();
        let mut ctx = SearchContext::new(&query, &input, ExtensionCheck::default());

        let f = PartialMapping::seeded("b", "x").extended("c", "y");
        // c was mapped last, so its neighbour d wins over b's neighbour a.
        assert_eq!(most_constrained_neighbour(&mut ctx, &f).as_deref(), Some("d"));
    }

    #[test]
    fn frontier_pick_is_memoized_per_set() {
        let query = path();
        let input = Graph::new();
        let mut ctx = SearchContext::new(&query, &input, ExtensionCheck::default());

        let bc = PartialMapping::seeded("b", "x").extended("c", "y");
        let cb = PartialMapping::seeded("c", "y").extended("b", "x");

        let first = most_constrained_neighbour(&mut ctx, &bc);
        let second = most_constrained_neighbour(&mut ctx, &cb);
        assert_eq!(first, second);
        assert_eq!(ctx.cached_domains(), 1);
    }

    #[test]
    fn frontier_pick_is_none_when_domain_is_closed() {
        let query = Graph::from_edges([("a", "b")]).unwrap();
        let input = Graph::new();
        let mut ctx = SearchContext::new(&query, &input, ExtensionCheck::default());

        let f = PartialMapping::seeded("a", "x").extended("b", "y");
        assert_eq!(most_constrained_neighbour(&mut ctx, &f), None);
    }

    #[test]
    fn neighbours_of_range_excludes_range() {
        let query = path();
        let input = Graph::from_edges([("x", "y"), ("y", "z"), ("x", "w"), ("w", "y")]).unwrap();
        let mut ctx = SearchContext::new(&query, &input, ExtensionCheck::default());

        let f = PartialMapping::seeded("a", "x").extended("b", "y");
        let pool = neighbours_of_range(&mut ctx, &f, &input);

        let mut sorted: Vec<&str> = pool.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["w", "z"]);
    }
}
