//! Motif finder CLI
//!
//! Loads an input graph and a query graph from edge-list files, enumerates
//! every occurrence of the query in the input and reports whether it is a
//! frequent motif.

#[global_allocator]
/// Global allocator using jemalloc for better performance in parallel workloads.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod report;

use std::process::ExitCode;

use clap::Parser;
use motif_graph::{QueryGraph, load_edge_list, load_query_graph};
use motif_subgraph::{Dedupe, MotifFrequency, SubgraphMatcher, dedupe_isomorphic};
use tracing::info;

use args::{Args, FormatArg};
use report::Report;

/// Executes the motif finder.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads the input and query graphs
/// 4. Runs the search and classifies the result
/// 5. Prints the report
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config();

    info!("Loading input graph: {}", args.input.display());
    let input = load_edge_list(&args.input)?;
    info!("Loading query graph: {}", args.query.display());
    let mut query = load_query_graph(&args.query)?;
    if let Some(label) = &args.label {
        query = QueryGraph::new(label.clone(), query.into_graph());
    }

    let matcher = SubgraphMatcher::new(&query, &input, &config)?;
    let mut embeddings = matcher.enumerate_all();
    if config.dedupe == Dedupe::Isomorphic {
        embeddings.mappings = dedupe_isomorphic(embeddings.mappings, &query);
    }

    let frequency = MotifFrequency::classify(
        &query,
        embeddings.mappings.clone(),
        args.threshold,
        args.counts_only,
    );
    let report = Report::new(&frequency, &embeddings);

    match args.format {
        FormatArg::Text => print!("{report}"),
        FormatArg::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
