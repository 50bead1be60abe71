//! tzsearch — command-line front end for tzsearch-core
//!
//! Loads the city dataset, builds the prefix index and answers one query.
//!
//! Usage examples
//! --------------
//!
//! - Show index statistics
//!   $ tzsearch stats
//!
//! - Exact lookup (case-insensitive)
//!   $ tzsearch search Portland
//!
//! - Autocomplete, nearest matches first
//!   $ tzsearch complete ams
//!   $ tzsearch complete s --limit 3
//!   $ tzsearch --json complete lon
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `cities.json` bundled with `tzsearch-core`. Use
//! `--input <path>` (or `TZSEARCH_INPUT`) to point at another `.json` or
//! `.json.gz` dataset. Set `RUST_LOG=debug` to see load diagnostics on stderr.
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tzsearch_cli::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    tzsearch_cli::run(&args, &mut stdout.lock())
}
