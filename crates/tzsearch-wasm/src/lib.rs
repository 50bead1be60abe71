//! tzsearch-wasm — WebAssembly bindings for tzsearch-core
//!
//! Exposes the process-wide city index to JavaScript, e.g. from a Service
//! Worker answering autocomplete requests offline.
//!
//! What it provides
//! ----------------
//! - `load_cities(json)`: builds the shared index from a JSON array of cities.
//!   Only the first successful call builds; later calls keep the existing index.
//! - `auto_complete(term, limit?)`: suggestions nearest first, `[]` on no match.
//! - `search(term)`: exact lookup, `null` when the city is unknown.
//! - `get_stats()`: `{ terms, nodes, payloads }`.
//!
//! Quick start
//! -----------
//! ```javascript
//! import init, { load_cities, auto_complete } from 'tzsearch-wasm';
//!
//! await init();
//! const cities = await (await fetch('cities.json')).text();
//! load_cities(cities);
//! console.log(auto_complete('ams', 10));
//! ```
//!
//! Terms are lower-cased before lookup, matching the keys the loader inserts.
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use tzsearch_core::loader::read_cities;
use tzsearch_core::query::{complete, normalize_query, DEFAULT_QUERY_LIMIT};
use tzsearch_core::shared::OwnedCompletions;
use tzsearch_core::{CityRecord, IndexError, Limit, PrefixIndex, SharedIndex};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing tzsearch WASM module...".into());
}

/* --------------------------------------------------------------------------
   Pure helpers (testable off-wasm)
-------------------------------------------------------------------------- */

fn build_shared(json: &str) -> Result<&'static SharedIndex, IndexError> {
    SharedIndex::get_or_try_init_with(|| {
        let cities = read_cities(json.as_bytes())?;
        Ok(PrefixIndex::from_cities(&cities))
    })
}

fn loaded() -> Result<&'static SharedIndex, IndexError> {
    SharedIndex::get().ok_or_else(|| IndexError::NotFound("city index not loaded".into()))
}

fn complete_records(term: &str, limit: Option<f64>) -> Result<OwnedCompletions, IndexError> {
    let limit = match limit {
        Some(n) => Limit::try_from(n)?,
        None => Limit::Count(DEFAULT_QUERY_LIMIT),
    };
    let term = normalize_query(term);
    loaded()?.with_index(|index| -> Result<OwnedCompletions, IndexError> {
        let hits = complete(index, &term, limit)?;
        Ok(hits.into_iter().map(|r| r.cloned()).collect())
    })
}

fn search_records(term: &str) -> Result<Option<Vec<Option<CityRecord>>>, IndexError> {
    Ok(loaded()?.search(&normalize_query(term)))
}

fn js_err(e: IndexError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Placeholders become `null` rather than `undefined`.
fn to_js_array(records: &[Option<CityRecord>]) -> Result<JsValue, JsValue> {
    let array = js_sys::Array::new();
    for record in records {
        let v = match record {
            Some(r) => to_value(r)?,
            None => JsValue::NULL,
        };
        array.push(&v);
    }
    Ok(array.into())
}

/* --------------------------------------------------------------------------
   Exports
-------------------------------------------------------------------------- */

/// Builds the shared index from a JSON array and returns its term count.
#[wasm_bindgen]
pub fn load_cities(json: &str) -> Result<usize, JsValue> {
    let shared = build_shared(json).map_err(js_err)?;
    let stats = shared.with_index(|index| index.stats());
    web_sys::console::log_1(&format!("✓ Indexed {} city names", stats.terms).into());
    Ok(stats.terms)
}

#[wasm_bindgen]
pub fn is_loaded() -> bool {
    SharedIndex::get().is_some()
}

#[wasm_bindgen]
pub fn auto_complete(term: &str, limit: Option<f64>) -> Result<JsValue, JsValue> {
    let records = complete_records(term, limit).map_err(js_err)?;
    to_js_array(&records)
}

#[wasm_bindgen]
pub fn search(term: &str) -> Result<JsValue, JsValue> {
    match search_records(term).map_err(js_err)? {
        Some(records) => to_js_array(&records),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = loaded().map_err(js_err)?.with_index(|index| index.stats());
    Ok(to_value(&stats)?)
}
