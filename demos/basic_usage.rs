//! Basic usage example for tzsearch
//!
//! Builds the index from the bundled dataset, then runs exact lookups and
//! autocomplete queries the way a request handler would.

use tzsearch_rs::loader::default_dataset_path;
use tzsearch_rs::prelude::*;
use tzsearch_rs::query::{complete_json, normalize_query};

fn main() -> Result<()> {
    println!("=== tzsearch Basic Usage Example ===\n");

    // Build once at startup, then share the handle.
    let shared = SharedIndex::get_or_try_init_with(|| {
        PrefixIndex::load_from_path(default_dataset_path())
    })?;
    let stats = shared.with_index(|index| index.stats());
    println!("✓ Indexed {} city names ({} nodes)\n", stats.terms, stats.nodes);

    println!("--- Exact lookup ---");
    for name in ["Portland", "Port", "Atlantis"] {
        match shared.search(&normalize_query(name)) {
            Some(records) => {
                for r in records.iter().flatten() {
                    println!("  {name}: {} -> {}", r.label(), r.tz);
                }
            }
            None => println!("  {name}: no match"),
        }
    }
    println!();

    println!("--- Autocomplete (default limit {DEFAULT_LIMIT}) ---");
    for prefix in ["am", "s", "zz"] {
        let hits = shared.auto_complete(prefix)?.unwrap_or_default();
        println!("  '{prefix}' -> {} suggestion(s)", hits.len());
        for r in hits.iter().flatten().take(5) {
            println!("    {} [{}]", r.label(), r.tz);
        }
    }
    println!();

    println!("--- Request route output ---");
    let json = shared.with_index(|index| complete_json(index, "lo", Limit::Count(3)))?;
    println!("  {json}");

    println!("\n--- Invalid limit ---");
    match shared.auto_complete_with_limit("am", Limit::Count(0)) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
