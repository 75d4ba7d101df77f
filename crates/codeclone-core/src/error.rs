//! Error types for codeclone-core.
//!
//! All operations fail fast: construction and comparison either succeed
//! outright or return an error immediately. There are no retries and no
//! partial-failure modes. Errors raised *inside* a counting condition are
//! not represented here: a panicking condition unwinds through [`CountVector::count_reference`](crate::CountVector::count_reference)
//! unmodified.

use thiserror::Error;

/// Errors from count-vector construction and comparison.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CountVectorError {
    /// Positionally aligned sequences disagree on length.
    ///
    /// Raised when explicitly supplied weightings do not match the number
    /// of conditions at construction, or when two vectors of unequal
    /// dimensionality are compared.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension (number of conditions, or `self.len()`).
        expected: usize,
        /// Actual dimension of the offending sequence.
        actual: usize,
    },

    /// A weighting is negative, NaN, or infinite.
    ///
    /// Non-negative finite weightings are what keep the difference metric
    /// inside `[0, 1]`, so invalid ones are rejected at construction.
    #[error("Invalid weighting at index {index}: {value} (must be finite and non-negative)")]
    InvalidWeighting {
        /// Position of the offending weighting.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias for count-vector operations.
pub type Result<T> = std::result::Result<T, CountVectorError>;
