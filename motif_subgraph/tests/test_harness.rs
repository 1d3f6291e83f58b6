#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Once;

use motif_graph::{Graph, QueryGraph};
use motif_subgraph::Mapping;

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mapping reduced to its sorted `(query, input)` pairs.
pub type Function = Vec<(String, String)>;

lazy_static::lazy_static! {
    pub static ref TRIANGLE: QueryGraph =
        QueryGraph::from_edges("triangle", [("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
    pub static ref PATH3: QueryGraph =
        QueryGraph::from_edges("path3", [("a", "b"), ("b", "c"), ("c", "d")]).unwrap();
    pub static ref PATH2: QueryGraph =
        QueryGraph::from_edges("path2", [("a", "b"), ("b", "c")]).unwrap();
    pub static ref SQUARE: QueryGraph =
        QueryGraph::from_edges("square", [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]).unwrap();
    pub static ref STAR3: QueryGraph =
        QueryGraph::from_edges("star3", [("c", "x"), ("c", "y"), ("c", "z")]).unwrap();
    pub static ref TAILED_TRIANGLE: QueryGraph = QueryGraph::from_edges(
        "tailed_triangle",
        [("a", "b"), ("b", "c"), ("c", "a"), ("c", "t")]
    )
    .unwrap();

    /// Two triangles {w, x, y} and {w, y, z} sharing the edge w-y.
    pub static ref DIAMOND: Graph =
        Graph::from_edges([("w", "x"), ("x", "y"), ("y", "w"), ("w", "z"), ("z", "y")]).unwrap();
    /// Star with centre s and four leaves.
    pub static ref STAR4: Graph =
        Graph::from_edges([("s", "p"), ("s", "q"), ("s", "r"), ("s", "t")]).unwrap();
}

pub fn function_of(mapping: &Mapping) -> Function {
    mapping.function().signature()
}

pub fn functions(mappings: &[Mapping]) -> BTreeSet<Function> {
    mappings.iter().map(function_of).collect()
}

/// Every injective, edge-preserving map from `query` into `input`, found by
/// trying all assignments.
pub fn brute_force(query: &Graph, input: &Graph) -> BTreeSet<Function> {
    let q: Vec<&str> = query.vertices().collect();
    let g: Vec<&str> = input.vertices().collect();
    let mut current: Vec<usize> = Vec::with_capacity(q.len());
    let mut used = vec![false; g.len()];
    let mut out = BTreeSet::new();
    backtrack(query, input, &q, &g, &mut current, &mut used, &mut out);
    out
}

fn backtrack(
    query: &Graph,
    input: &Graph,
    q: &[&str],
    g: &[&str],
    current: &mut Vec<usize>,
    used: &mut Vec<bool>,
    out: &mut BTreeSet<Function>,
) {
    if current.len() == q.len() {
        let preserves_edges = query.edges().all(|(u, v)| {
            let iu = q.iter().position(|x| *x == u).unwrap();
            let iv = q.iter().position(|x| *x == v).unwrap();
            input.contains_edge(g[current[iu]], g[current[iv]])
        });
        if preserves_edges {
            let mut f: Function = q
                .iter()
                .zip(current.iter())
                .map(|(h, &i)| ((*h).to_owned(), g[i].to_owned()))
                .collect();
            f.sort_unstable();
            out.insert(f);
        }
        return;
    }

    for i in 0..g.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(i);
        backtrack(query, input, q, g, current, used, out);
        current.pop();
        used[i] = false;
    }
}

/// Builds a graph on vertices `v0..v{n-1}` from arbitrary byte pairs,
/// skipping self-loops and repeats.
pub fn small_graph(n: u8, pairs: &[(u8, u8)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(format!("v{i}"));
    }
    for &(a, b) in pairs {
        let (a, b) = (a % n, b % n);
        if a != b {
            let _ = graph.insert_edge(format!("v{a}"), format!("v{b}"));
        }
    }
    graph
}
