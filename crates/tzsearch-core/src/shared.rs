// crates/tzsearch-core/src/shared.rs

//! # Shared Index Handle
//!
//! One city index per process. The first `get_or_*` call decides what the
//! index is built from; every later call gets the same instance back and its
//! initializer is never run.
//!
//! ```
//! use tzsearch_core::{CityRecord, PrefixIndex, SharedIndex};
//!
//! let a = SharedIndex::get_or_init_with(PrefixIndex::<CityRecord>::new);
//! let b = SharedIndex::get_or_create();
//! assert!(std::ptr::eq(a, b));
//! ```

use crate::common::Limit;
use crate::error::Result;
use crate::model::CityRecord;
use crate::trie::PrefixIndex;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::info;

/// Result cap used by [`SharedIndex::auto_complete`].
pub const DEFAULT_LIMIT: usize = 15;

static SHARED_INDEX: OnceCell<SharedIndex> = OnceCell::new();

/// Owned autocomplete result handed out by the shared handle.
pub type OwnedCompletions = Vec<Option<CityRecord>>;

/// Lock-guarded wrapper around a [`PrefixIndex<CityRecord>`].
///
/// Writes are serialized through the lock. Results are cloned out so that no
/// guard escapes the call.
#[derive(Debug, Default)]
pub struct SharedIndex {
    inner: RwLock<PrefixIndex<CityRecord>>,
}

impl SharedIndex {
    /// A standalone handle, not registered as the process-wide one.
    pub fn new(index: PrefixIndex<CityRecord>) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    /// The process-wide handle, created empty on first use.
    pub fn get_or_create() -> &'static SharedIndex {
        Self::get_or_init_with(PrefixIndex::new)
    }

    /// The process-wide handle; `init` runs only if no handle exists yet.
    pub fn get_or_init_with<F>(init: F) -> &'static SharedIndex
    where
        F: FnOnce() -> PrefixIndex<CityRecord>,
    {
        SHARED_INDEX.get_or_init(|| {
            let index = init();
            info!(stats = ?index.stats(), "shared index initialized");
            SharedIndex::new(index)
        })
    }

    /// Fallible variant of [`get_or_init_with`](Self::get_or_init_with). On
    /// error nothing is stored and a later call may try again.
    pub fn get_or_try_init_with<F>(init: F) -> Result<&'static SharedIndex>
    where
        F: FnOnce() -> Result<PrefixIndex<CityRecord>>,
    {
        SHARED_INDEX.get_or_try_init(|| {
            let index = init()?;
            info!(stats = ?index.stats(), "shared index initialized");
            Ok(SharedIndex::new(index))
        })
    }

    /// The process-wide handle if one was created.
    pub fn get() -> Option<&'static SharedIndex> {
        SHARED_INDEX.get()
    }

    pub fn insert(&self, term: &str, data: Option<CityRecord>) {
        self.inner.write().insert(term, data);
    }

    pub fn search(&self, term: &str) -> Option<Vec<Option<CityRecord>>> {
        self.inner.read().search(term).map(<[_]>::to_vec)
    }

    /// Autocomplete capped at [`DEFAULT_LIMIT`].
    pub fn auto_complete(&self, prefix: &str) -> Result<Option<OwnedCompletions>> {
        self.auto_complete_with_limit(prefix, Limit::Count(DEFAULT_LIMIT))
    }

    pub fn auto_complete_with_limit(
        &self,
        prefix: &str,
        limit: Limit,
    ) -> Result<Option<OwnedCompletions>> {
        let guard = self.inner.read();
        let hits = guard.auto_complete(prefix, limit)?;
        Ok(hits.map(|h| h.into_iter().map(|r| r.cloned()).collect()))
    }

    /// Runs `f` against the wrapped index under a read lock.
    pub fn with_index<R>(&self, f: impl FnOnce(&PrefixIndex<CityRecord>) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexError;

    fn record(city: &str, tz: &str) -> CityRecord {
        CityRecord {
            city: city.into(),
            country: String::new(),
            tz: tz.into(),
            descr: String::new(),
        }
    }

    #[test]
    fn forwards_to_the_wrapped_index() {
        let handle = SharedIndex::new(PrefixIndex::new());
        handle.insert("oslo", Some(record("Oslo", "Europe/Oslo")));
        handle.insert("osaka", Some(record("Osaka", "Asia/Tokyo")));

        let found = handle.search("oslo").unwrap();
        assert_eq!(found[0].as_ref().unwrap().tz, "Europe/Oslo");
        assert!(handle.search("os").is_none());

        let hits = handle.auto_complete("os").unwrap().unwrap();
        assert_eq!(hits.len(), 2);
        assert!(handle.auto_complete("x").unwrap().is_none());
    }

    #[test]
    fn default_limit_caps_results() {
        let handle = SharedIndex::new(PrefixIndex::new());
        for i in 0..40 {
            handle.insert(&format!("c{i:02}"), Some(record("c", "UTC")));
        }
        assert_eq!(handle.auto_complete("c").unwrap().unwrap().len(), DEFAULT_LIMIT);
        let three = handle.auto_complete_with_limit("c", Limit::Count(3)).unwrap();
        assert_eq!(three.unwrap().len(), 3);
    }

    #[test]
    fn default_limit_keeps_no_match_apart_from_empty_hits() {
        let handle = SharedIndex::new(PrefixIndex::new());
        // the root exists, so an empty prefix matches with nothing collected
        assert_eq!(handle.auto_complete("").unwrap(), Some(Vec::new()));
        assert_eq!(handle.auto_complete("a").unwrap(), None);
        handle.insert("", None);
        assert_eq!(handle.auto_complete("").unwrap(), Some(vec![None]));
    }

    #[test]
    fn explicit_limit_is_validated() {
        let handle = SharedIndex::new(PrefixIndex::new());
        assert!(matches!(
            handle.auto_complete_with_limit("a", Limit::Count(0)),
            Err(IndexError::InvalidArgument(_))
        ));
    }

    #[test]
    fn first_initializer_wins() {
        let first = SharedIndex::get_or_init_with(|| {
            let mut index = PrefixIndex::new();
            index.insert("first", None);
            index
        });
        let second = SharedIndex::get_or_init_with(|| {
            let mut index = PrefixIndex::new();
            index.insert("second", None);
            index
        });
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, SharedIndex::get_or_create()));
        assert!(SharedIndex::get().is_some());
        assert!(second.search("second").is_none());
    }
}
