//! Command line argument parsing for the boolsearch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// boolsearch - boolean and wildcard search over a document corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "boolsearch")]
#[command(about = "Boolean and wildcard search over an inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BoolSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BoolSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the inverted and bigram indices from corpus files
    Index(IndexArgs),

    /// Run a query against a built index
    Search(SearchArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Corpus files or directories of `.sgm` files
    #[arg(value_name = "CORPUS", required = true, num_args = 1..)]
    pub corpus: Vec<PathBuf>,

    /// Directory the index files are written to
    #[arg(short, long, value_name = "INDEX_DIR")]
    pub output: PathBuf,

    /// Whitespace-separated punctuation list (default: built-in list)
    #[arg(long, value_name = "FILE")]
    pub punctuations: Option<PathBuf>,

    /// Whitespace-separated stop word list (default: built-in list)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Parallel indexing configuration (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (overrides the configuration)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the index directory
    #[arg(value_name = "INDEX_DIR")]
    pub index_path: PathBuf,

    /// Query type: conjunctive, disjunctive, wildcard (or 1, 2, 3)
    #[arg(value_name = "QUERY_TYPE")]
    pub query_type: String,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the index directory
    #[arg(value_name = "INDEX_DIR")]
    pub index_path: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
