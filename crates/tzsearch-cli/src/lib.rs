//! tzsearch-cli
//! ============
//!
//! Command-line front end for the `tzsearch-core` prefix index. The binary
//! (`tzsearch`) loads a city dataset, builds the index once and answers a
//! single query; the command logic lives here so it can be driven from tests.
//!
//! Basic usage:
//!
//! ```text
//! tzsearch stats
//! tzsearch search amsterdam
//! tzsearch complete am --limit 5
//! tzsearch --json complete lon
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tzsearch_core::loader::default_dataset_path;
use tzsearch_core::query::{complete, complete_json, normalize_query, search_json};
use tzsearch_core::{CityRecord, Limit, PrefixIndex};

/// Loads the index named by `args` and writes the command's output to `out`.
pub fn run<W: Write>(args: &CliArgs, out: &mut W) -> anyhow::Result<()> {
    let input: PathBuf = args.input.clone().unwrap_or_else(default_dataset_path);
    let index = PrefixIndex::load_from_path(&input)
        .with_context(|| format!("failed to load dataset {}", input.display()))?;
    debug!(stats = ?index.stats(), "index ready");

    execute(&index, &args.command, args.json, out)
}

/// Runs one command against an already built index.
pub fn execute<W: Write>(
    index: &PrefixIndex<CityRecord>,
    command: &Commands,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Commands::Stats => {
            let stats = index.stats();
            if json {
                writeln!(out, "{}", serde_json::to_string(&stats)?)?;
            } else {
                writeln!(out, "Index statistics:")?;
                writeln!(out, "  Terms: {}", stats.terms)?;
                writeln!(out, "  Entries: {}", stats.payloads)?;
                writeln!(out, "  Nodes: {}", stats.nodes)?;
            }
        }

        Commands::Search { term } => {
            let term = normalize_query(term);
            if json {
                writeln!(out, "{}", search_json(index, &term)?)?;
            } else {
                match index.search(&term) {
                    Some(records) => write_records(out, records.iter().map(Option::as_ref))?,
                    None => writeln!(out, "No city named: {term}")?,
                }
            }
        }

        Commands::Complete { prefix, limit, all } => {
            let prefix = normalize_query(prefix);
            let limit = if *all {
                Limit::Unbounded
            } else {
                Limit::try_from(*limit)?
            };
            if json {
                writeln!(out, "{}", complete_json(index, &prefix, limit)?)?;
            } else {
                let hits = complete(index, &prefix, limit)?;
                if hits.is_empty() {
                    writeln!(out, "No cities found starting with: {prefix}")?;
                } else {
                    write_records(out, hits.into_iter())?;
                }
            }
        }
    }

    Ok(())
}

fn write_records<'a, W: Write>(
    out: &mut W,
    records: impl Iterator<Item = Option<&'a CityRecord>>,
) -> anyhow::Result<()> {
    for record in records {
        match record {
            Some(r) => writeln!(out, "{} [{}]", r.label(), r.tz)?,
            None => writeln!(out, "(no data)")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tzsearch_core::City;

    fn index() -> PrefixIndex<CityRecord> {
        let city = |name: &str, country: &str, tz: &str| City {
            city: name.into(),
            country: country.into(),
            tz: tz.into(),
            descr: "d".into(),
            lat: None,
            lng: None,
        };
        PrefixIndex::from_cities(&[
            city("Amsterdam", "Netherlands", "Europe/Amsterdam"),
            city("Amman", "Jordan", "Asia/Amman"),
            city("Amritsar", "India", "Asia/Kolkata"),
        ])
    }

    fn run_cmd(argv: &[&str]) -> anyhow::Result<String> {
        let args = CliArgs::try_parse_from(argv)?;
        let mut out = Vec::new();
        execute(&index(), &args.command, args.json, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn complete_prints_nearest_first() {
        let out = run_cmd(&["tzsearch", "complete", "AM", "--limit", "2"]).unwrap();
        assert_eq!(
            out,
            "Amman, Jordan (d) [Asia/Amman]\nAmritsar, India (d) [Asia/Kolkata]\n"
        );
    }

    #[test]
    fn complete_json_maps_no_match_to_empty_array() {
        let out = run_cmd(&["tzsearch", "--json", "complete", "zz"]).unwrap();
        assert_eq!(out.trim(), "[]");
    }

    #[test]
    fn non_positive_limit_is_an_error() {
        assert!(run_cmd(&["tzsearch", "complete", "am", "--limit", "0"]).is_err());
        assert!(run_cmd(&["tzsearch", "complete", "am", "--limit", "-2"]).is_err());
    }

    #[test]
    fn all_flag_returns_every_match() {
        let out = run_cmd(&["tzsearch", "complete", "am", "--all"]).unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn all_takes_precedence_over_limit() {
        // --limit here stands in for TZSEARCH_LIMIT, which clap treats the same way
        let out = run_cmd(&["tzsearch", "complete", "am", "--limit", "1", "--all"]).unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn empty_prefix_lists_nothing_in_either_format() {
        let out = run_cmd(&["tzsearch", "complete", ""]).unwrap();
        assert_eq!(out.trim(), "No cities found starting with:");
        let out = run_cmd(&["tzsearch", "--json", "complete", ""]).unwrap();
        assert_eq!(out.trim(), "[]");
    }

    #[test]
    fn search_reports_missing_terms() {
        let out = run_cmd(&["tzsearch", "search", "am"]).unwrap();
        assert_eq!(out.trim(), "No city named: am");
        let out = run_cmd(&["tzsearch", "--json", "search", "am"]).unwrap();
        assert_eq!(out.trim(), "null");
    }

    #[test]
    fn stats_as_json() {
        let out = run_cmd(&["tzsearch", "--json", "stats"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["terms"], 3);
        assert_eq!(v["payloads"], 3);
    }

    #[test]
    fn run_reports_missing_dataset() {
        let args = CliArgs::try_parse_from(["tzsearch", "-i", "/no/such/file.json", "stats"]).unwrap();
        let err = run(&args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("failed to load dataset"));
    }
}
