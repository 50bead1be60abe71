// crates/tzsearch-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the index and its loaders.
///
/// A query that matches nothing is not an error; lookups return `None` for that.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A caller passed an argument outside the accepted domain (e.g. `limit <= 0`).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
