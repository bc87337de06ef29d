//! Error type for the construction and configuration boundary.
//!
//! Numerical failure modes (singular pivots, non-positive-definite inputs,
//! non-convergence) are reported through flags and `Option` results on the
//! decompositions and solvers themselves. `LinalgError` only covers misuse:
//! data that does not fit the fixed dimensions, or invalid tuning parameters.

use thiserror::Error;

/// Errors raised when building containers or configuring iterative routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Data length does not match the fixed dimensions.
    #[error("data length mismatch: expected {expected}, got {got}")]
    InvalidData {
        /// Number of elements required by the dimensions
        expected: usize,
        /// Number of elements supplied
        got: usize,
    },

    /// A row slice has the wrong number of columns.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Column count required by the dimensions
        expected: usize,
        /// Column count supplied
        got: usize,
    },

    /// Convergence tolerance must be finite and strictly positive.
    #[error("tolerance must be finite and positive, got {value}")]
    InvalidTolerance {
        /// The rejected tolerance
        value: f64,
    },

    /// Iterative routines need at least one iteration.
    #[error("max_iter must be at least 1")]
    ZeroIterations,

    /// The order of an Lp norm must be at least 1.
    #[error("norm order must be at least 1, got {p}")]
    InvalidNormOrder {
        /// The rejected order
        p: u32,
    },
}

/// Result type for fallible construction and configuration.
pub type LinalgResult<T> = Result<T, LinalgError>;
