//! Root-elimination driver.
//!
//! Seeds the extension search from each sampled input vertex in turn, then
//! deletes that vertex from a private working copy of the input so later
//! roots never revisit embeddings through it.

use indexmap::IndexMap;
use motif_graph::{Graph, QueryGraph};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::Config;
use crate::extension::isomorphic_extension;
use crate::mapping::{Mapping, PartialMapping};
use crate::memo::SearchContext;
use crate::pruning::can_support;

/// Everything a search produced.
#[derive(Clone, Debug, Default)]
pub struct Embeddings {
    /// Mappings found, grouped by the input vertex each was completed on.
    pub mappings: Vec<Mapping>,
    /// Input vertices used as roots, in the order they were searched.
    pub roots: Vec<String>,
    /// How many (query vertex, root) pairs passed the support test.
    pub supported_pairs: usize,
}

impl Embeddings {
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// What one root contributed.
#[derive(Debug, Default)]
struct RootResult {
    mappings: Vec<Mapping>,
    supported_pairs: usize,
}

/// Mappings found so far, filed under the image inserted last.
#[derive(Debug, Default)]
struct MappingsByKey {
    by_key: IndexMap<String, Vec<Mapping>>,
}

impl MappingsByKey {
    fn absorb(&mut self, mappings: Vec<Mapping>) {
        for mapping in mappings {
            let Some(key) = mapping.last_image() else {
                continue;
            };
            let bucket = self.by_key.entry(key.to_owned()).or_default();
            if !bucket.contains(&mapping) {
                bucket.push(mapping);
            }
        }
    }

    fn flatten(self) -> Vec<Mapping> {
        self.by_key.into_values().flatten().collect()
    }
}

/// Runs the full root-elimination search. `query` is assumed valid.
pub(crate) fn search(query: &QueryGraph, input: &Graph, config: &Config) -> Embeddings {
    let roots = input.degree_sequence(config.samples_for(input));
    tracing::info!(
        "starting motif search for '{}': query vertices: {}, input vertices: {}, roots: {}",
        query.label(),
        query.vertex_count(),
        input.vertex_count(),
        roots.len()
    );

    let per_root = if config.parallel {
        search_roots_parallel(query, input, config, &roots)
    } else {
        search_roots(query, input, config, &roots)
    };

    let mut collected = MappingsByKey::default();
    let mut supported_pairs = 0;
    for result in per_root {
        supported_pairs += result.supported_pairs;
        collected.absorb(result.mappings);
    }
    let mappings = collected.flatten();

    tracing::info!(
        "motif search for '{}' complete: {} mappings",
        query.label(),
        mappings.len()
    );

    Embeddings {
        mappings,
        roots,
        supported_pairs,
    }
}

/// Searches every root against one shrinking working copy, sharing one
/// memoization context across roots.
fn search_roots(
    query: &QueryGraph,
    input: &Graph,
    config: &Config,
    roots: &[String],
) -> Vec<RootResult> {
    let mut working = input.clone();
    let mut ctx = SearchContext::new(query.graph(), input, config.extension_check);

    let mut results = Vec::with_capacity(roots.len());
    for g in roots {
        results.push(search_root(&mut ctx, &working, g));
        working.remove_vertex(g);
    }
    debug_assert!(roots.iter().all(|g| !working.contains_vertex(g)));
    results
}

/// Searches each root on its own snapshot of the working graph (the input
/// minus every earlier root) with its own memoization context.
#[cfg(feature = "rayon")]
fn search_roots_parallel(
    query: &QueryGraph,
    input: &Graph,
    config: &Config,
    roots: &[String],
) -> Vec<RootResult> {
    let mut snapshots = Vec::with_capacity(roots.len());
    let mut working = input.clone();
    for g in roots {
        snapshots.push(working.clone());
        working.remove_vertex(g);
    }

    roots
        .par_iter()
        .zip(snapshots.par_iter())
        .map(|(g, working)| {
            let mut ctx = SearchContext::new(query.graph(), input, config.extension_check);
            search_root(&mut ctx, working, g)
        })
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn search_roots_parallel(
    query: &QueryGraph,
    input: &Graph,
    config: &Config,
    roots: &[String],
) -> Vec<RootResult> {
    tracing::warn!("parallel search requested without the `rayon` feature; searching sequentially");
    search_roots(query, input, config, roots)
}

/// Tries every query vertex on root `g`.
fn search_root(ctx: &mut SearchContext<'_>, working: &Graph, g: &str) -> RootResult {
    let query = ctx.query();
    let mut result = RootResult::default();

    for h in query.vertices() {
        if !can_support(query, h, working, g) {
            continue;
        }
        result.supported_pairs += 1;

        let mappings = isomorphic_extension(ctx, working, PartialMapping::seeded(h, g));
        if mappings.is_empty() {
            continue;
        }
        tracing::debug!(
            "maps from isomorphic extension: h = {}, g = {}, count = {}",
            h,
            g,
            mappings.len()
        );
        result.mappings.extend(mappings);
    }
    result
}
