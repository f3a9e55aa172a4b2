//! Error types for the checked surfaces of arrayops.
//!
//! The [`kernel`](crate::kernel) never returns errors: a length mismatch there
//! is a caller bug and panics on the out-of-range index.

use thiserror::Error;

/// Errors raised by distance-matrix construction, stress evaluation and
/// option loading.
#[derive(Error, Debug)]
pub enum Error {
    /// Options could not be parsed from JSON
    #[error("JSON parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Two operands that must agree in size do not
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The original distances sum to zero, so stress is undefined
    #[error("Degenerate distances: original distances sum to zero")]
    DegenerateDistances,

    /// Original distance matrix is not symmetric with a zero diagonal
    #[error("Invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// An option value is out of range
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Result type alias for arrayops operations.
pub type Result<T> = std::result::Result<T, Error>;
