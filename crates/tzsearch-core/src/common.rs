// crates/tzsearch-core/src/common.rs
use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built index.
///
/// Returned by [`PrefixIndex::stats`](crate::PrefixIndex::stats). `terms` counts
/// distinct terminal nodes, while `payloads` counts every inserted entry,
/// including repeated inserts of the same term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub terms: usize,
    pub nodes: usize,
    pub payloads: usize,
}

/// Upper bound on the number of payloads collected by autocomplete.
///
/// The bound is checked between nodes, so a result may overshoot it by the
/// payload count of the last node appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(usize),
    Unbounded,
}

impl Limit {
    pub(crate) fn validate(self) -> Result<Self> {
        match self {
            Limit::Count(0) => Err(IndexError::InvalidArgument(
                "limit must be greater than zero".into(),
            )),
            other => Ok(other),
        }
    }

    #[inline]
    pub(crate) fn is_reached(self, collected: usize) -> bool {
        match self {
            Limit::Count(n) => collected >= n,
            Limit::Unbounded => false,
        }
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::Count(n)
    }
}

impl TryFrom<i64> for Limit {
    type Error = IndexError;

    fn try_from(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(IndexError::InvalidArgument(format!(
                "limit must be greater than zero, got {n}"
            )));
        }
        // saturate where usize is narrower than i64
        Ok(Limit::Count(usize::try_from(n).unwrap_or(usize::MAX)))
    }
}

/// JS numbers arrive as `f64`; `+Infinity` means no bound.
impl TryFrom<f64> for Limit {
    type Error = IndexError;

    fn try_from(n: f64) -> Result<Self> {
        if n.is_nan() || n <= 0.0 {
            return Err(IndexError::InvalidArgument(format!(
                "limit must be greater than zero, got {n}"
            )));
        }
        if n.is_infinite() {
            return Ok(Limit::Unbounded);
        }
        // `collected < 2.5` keeps going until 3
        Ok(Limit::Count(n.ceil() as usize))
    }
}
