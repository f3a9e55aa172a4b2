//! # arrayops: allocation-free vector kernels
//!
//! Dense, fixed-length `f64` vector primitives for training loops that touch
//! the same embedding vectors millions of times (word-embedding estimation,
//! Sammon projection). Vectors are plain slices owned by the caller; nothing
//! here allocates, boxes or keeps a reference past the call.
//!
//! ## Quick Start
//!
//! ```rust
//! use arrayops::kernel::{dot_product, euclidean_distance, euclidean_norm, nudge};
//!
//! let xs = [1.0, 2.0, 3.0];
//! let ys = [4.0, 5.0, 6.0];
//!
//! assert_eq!(dot_product(&xs, &ys), 32.0);
//! assert!((euclidean_norm(&xs) - 14.0_f64.sqrt()).abs() < 1e-12);
//! assert!((euclidean_distance(&xs, &ys) - 27.0_f64.sqrt()).abs() < 1e-12);
//!
//! let mut w = [1.0, 1.0, 1.0];
//! nudge(&mut w, &[2.0, 2.0, 2.0], 0.5);
//! assert_eq!(w, [2.0, 2.0, 2.0]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Nudge**: scaled in-place accumulation `xs[i] += ys[i] * q`
//! - **Fold**: `Σ op(xs[i], ys[i])` for any pairwise operator
//! - **Bounded fold**: a fold that stops once the running sum reaches a limit
//! - **Sammon error**: squared differences weighted by the reference value,
//!   skipping zero references
//!
//! ## Layers
//!
//! - [`kernel`]: the unchecked hot-path functions
//! - [`sammon`]: distance matrices and stress, with checked inputs and
//!   `tracing` spans

pub mod config;
pub mod error;
pub mod kernel;
pub mod sammon;

// Re-exports for convenience
pub use config::StressOptions;
pub use error::{Error, Result};
pub use kernel::{
    add_to, dot_product, euclidean_distance, euclidean_norm, fold, fold_up_to, nudge, scale,
    subtract_from, weighted_squared_error_sum, BinaryOp, Metric,
};
pub use sammon::DistanceMatrix;
