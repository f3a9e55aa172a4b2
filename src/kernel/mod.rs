//! Kernel layer: allocation-free arithmetic on dense `f64` vectors.
//!
//! The kernel is a set of stateless functions over caller-owned slices:
//! - In-place updates ([`nudge`], [`add_to`], [`subtract_from`], [`scale`])
//! - The binary fold ([`fold`], [`fold_up_to`], [`BinaryOp`])
//! - Reductions built on the fold ([`dot_product`], [`euclidean_norm`],
//!   [`euclidean_distance`], [`weighted_squared_error_sum`])
//!
//! Operands are never length-checked in release builds. Every function walks
//! the first operand and indexes the second, so a second operand that is too
//! short panics on the out-of-range index instead of producing a wrong value.
//! Debug builds additionally assert the lengths up front.
//!
//! This layer has no dependencies on [`sammon`](crate::sammon).
//!
//! # Example
//!
//! ```rust
//! use arrayops::kernel::{dot_product, euclidean_distance, nudge, BinaryOp, SQUARED_DIFFERENCE};
//!
//! let mut word = vec![0.1, 0.2, 0.3];
//! let context = vec![0.3, 0.2, 0.1];
//!
//! let score = dot_product(&word, &context);
//! nudge(&mut word, &context, 0.05 * (1.0 - score));
//!
//! let d = euclidean_distance(&word, &context);
//! assert!((d * d - SQUARED_DIFFERENCE.fold(&word, &context)).abs() < 1e-12);
//! ```

pub mod fold;
pub mod metric;
pub mod ops;

pub use fold::{
    fold, fold_up_to, BinaryOp, Product, SammonError, SquaredDifference, PRODUCT, SAMMON_ERROR,
    SQUARED_DIFFERENCE,
};
pub use metric::{
    dot_product, euclidean_distance, euclidean_norm, squared_distance,
    weighted_squared_error_sum, Metric,
};
pub use ops::{add_to, nudge, scale, subtract_from};
