// crates/tzsearch-core/src/lib.rs

//! # tzsearch-core
//!
//! An in-memory prefix index over city names with exact lookup and
//! breadth-first autocomplete, plus the loader that fills it from a city/timezone
//! dataset and a process-wide shared handle.
//!
//! ```no_run
//! use tzsearch_core::prelude::*;
//!
//! let index = PrefixIndex::load_from_path(tzsearch_core::loader::default_dataset_path())?;
//! if let Some(hits) = index.auto_complete("ams", Limit::Count(5))? {
//!     for city in hits.into_iter().flatten() {
//!         println!("{} -> {}", city.label(), city.tz);
//!     }
//! }
//! # Ok::<(), tzsearch_core::IndexError>(())
//! ```

pub mod common;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
#[cfg(feature = "json")]
pub mod query;
pub mod shared;
pub mod trie;

pub use crate::common::{IndexStats, Limit};
pub use crate::error::{IndexError, Result};
pub use crate::model::{City, CityRecord};
pub use crate::shared::{SharedIndex, DEFAULT_LIMIT};
pub use crate::trie::{Completions, PrefixIndex};

pub mod prelude {
    pub use crate::{
        City, CityRecord, Completions, IndexError, IndexStats, Limit, PrefixIndex, Result,
        SharedIndex, DEFAULT_LIMIT,
    };
}
