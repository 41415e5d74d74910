//! Error types for alignment parsing and grouping.

use crate::group::Side;
use thiserror::Error;

/// Errors produced while building an [`AlignmentIndex`](crate::AlignmentIndex)
/// or partitioning it into groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A link token is not of the form `<s>-<t>`.
    #[error("bad alignment format: {token:?} ({reason})")]
    Parse { token: String, reason: &'static str },

    /// A link references a position outside its side's index space.
    #[error("{side} index {index} out of range (len {len}) in link {token:?}")]
    OutOfRange {
        side: Side,
        index: usize,
        len: usize,
        token: String,
    },

    /// An index was claimed by two clusters during a single `groups` call.
    #[error("{side} index {index} processed twice")]
    InternalInvariantViolation { side: Side, index: usize },
}

pub type Result<T> = std::result::Result<T, AlignError>;
