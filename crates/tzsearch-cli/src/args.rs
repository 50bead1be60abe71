use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tzsearch_core::query::DEFAULT_QUERY_LIMIT;

/// CLI arguments for tzsearch
#[derive(Debug, Parser)]
#[command(
    name = "tzsearch",
    version,
    about = "CLI for querying the tzsearch city/timezone prefix index"
)]
pub struct CliArgs {
    /// Path to the city dataset, JSON or JSON.gz (default: bundled cities.json)
    #[arg(short = 'i', long = "input", env = "TZSEARCH_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the index contents
    Stats,

    /// Look up an exact city name
    Search {
        /// City name (case-insensitive)
        term: String,
    },

    /// Suggest cities starting with a prefix, nearest first
    Complete {
        /// Prefix to complete (case-insensitive)
        prefix: String,

        /// Maximum number of suggestions (must be > 0)
        #[arg(
            short = 'l',
            long = "limit",
            env = "TZSEARCH_LIMIT",
            default_value_t = DEFAULT_QUERY_LIMIT as i64,
            allow_negative_numbers = true
        )]
        limit: i64,

        /// Return every match; takes precedence over --limit and TZSEARCH_LIMIT
        #[arg(long)]
        all: bool,
    },
}
