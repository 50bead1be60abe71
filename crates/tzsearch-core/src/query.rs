// crates/tzsearch-core/src/query.rs

//! Query boundary: turns raw user input into index lookups and serializes the
//! outcome. This is the one place where "no match" becomes an empty array.

use crate::common::Limit;
use crate::error::Result;
use crate::trie::{Completions, PrefixIndex};
use serde::Serialize;
use serde_json::Value;

/// Cap applied by the request route when the caller gives none.
pub const DEFAULT_QUERY_LIMIT: usize = 10;

/// Shorter queries are answered with `[]` without touching the index.
pub const MINIMUM_LETTERS_TO_SEARCH: usize = 1;

/// Lower-cases user input to match the keys the loader inserts.
pub fn normalize_query(term: &str) -> String {
    term.to_lowercase()
}

/// Autocomplete for a request route: queries shorter than
/// [`MINIMUM_LETTERS_TO_SEARCH`] and prefixes that match nothing both yield an
/// empty list. The limit is validated in every case.
pub fn complete<'a, T>(
    index: &'a PrefixIndex<T>,
    term: &str,
    limit: Limit,
) -> Result<Completions<'a, T>> {
    if term.chars().count() < MINIMUM_LETTERS_TO_SEARCH {
        limit.validate()?;
        return Ok(Vec::new());
    }
    Ok(index.auto_complete(term, limit)?.unwrap_or_default())
}

/// [`complete`] as a JSON array. Placeholder payloads serialize as `null`.
pub fn complete_json<T: Serialize>(
    index: &PrefixIndex<T>,
    term: &str,
    limit: Limit,
) -> Result<Value> {
    let hits = complete(index, term, limit)?;
    Ok(serde_json::to_value(hits)?)
}

/// Exact lookup as JSON: `null` when the term is not in the index.
pub fn search_json<T: Serialize>(index: &PrefixIndex<T>, term: &str) -> Result<Value> {
    match index.search(term) {
        Some(payloads) => Ok(serde_json::to_value(payloads)?),
        None => Ok(Value::Null),
    }
}
