//! Umbrella crate for the tzsearch workspace; re-exports `tzsearch-core` for
//! the demos under `demos/`.
pub use tzsearch_core::*;
