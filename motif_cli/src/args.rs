use std::path::PathBuf;

use clap::Parser;
use motif_subgraph::{Config, Dedupe, ExtensionCheck};

/// Motif finder - count occurrences of a query graph in an input graph
#[derive(Parser, Debug)]
#[command(name = "motif")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input graph edge list
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Path to the query graph edge list
    #[arg(short = 'q', long)]
    pub query: PathBuf,

    /// Label for the query graph (defaults to the query file name)
    #[arg(short = 'l', long)]
    pub label: Option<String>,

    /// Number of input vertices to use as roots (0 or unset: a third of the input)
    #[arg(short = 's', long)]
    pub samples: Option<usize>,

    /// Mapping count at or above which the query is reported as frequent
    #[arg(short = 't', long, default_value_t = 1)]
    pub threshold: usize,

    /// Report only the number of mappings
    #[arg(long, default_value_t = false)]
    pub counts_only: bool,

    /// How duplicate mappings are collapsed
    #[arg(long, value_enum, default_value = "function")]
    pub dedupe: DedupeArg,

    /// How candidate assignments are checked against mapped neighbours
    #[arg(long, value_enum, default_value = "first-unmapped")]
    pub extension_check: ExtensionCheckArg,

    /// Search roots in parallel
    #[arg(short = 'p', long, default_value_t = false)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

impl Args {
    /// Convert command-line arguments into search configuration
    pub fn to_config(&self) -> Config {
        let builder = match self.samples {
            Some(n) => Config::builder().sample_count(n),
            None => Config::builder().default_samples(),
        };
        builder
            .extension_check(self.extension_check.into())
            .dedupe(self.dedupe.into())
            .parallel(self.parallel)
            .build()
    }
}

/// Command-line argument wrapper for Dedupe
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DedupeArg {
    /// Drop only mappings that are the same function
    #[value(name = "function")]
    Function,
    /// Keep one mapping per embedded structure
    #[value(name = "isomorphic")]
    Isomorphic,
}

impl From<DedupeArg> for Dedupe {
    fn from(arg: DedupeArg) -> Self {
        match arg {
            DedupeArg::Function => Dedupe::Function,
            DedupeArg::Isomorphic => Dedupe::Isomorphic,
        }
    }
}

/// Command-line argument wrapper for ExtensionCheck
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExtensionCheckArg {
    /// Stop checking at the first unmapped query neighbour
    #[value(name = "first-unmapped")]
    FirstUnmapped,
    /// Check every mapped query neighbour
    #[value(name = "all-neighbours")]
    AllNeighbours,
}

impl From<ExtensionCheckArg> for ExtensionCheck {
    fn from(arg: ExtensionCheckArg) -> Self {
        match arg {
            ExtensionCheckArg::FirstUnmapped => ExtensionCheck::FirstUnmapped,
            ExtensionCheckArg::AllNeighbours => ExtensionCheck::AllNeighbours,
        }
    }
}

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}
