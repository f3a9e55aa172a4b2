//! Scalar reductions over vector pairs.
//!
//! All of these are folds of the operators in [`fold`](super::fold); none of
//! them allocate or mutate their inputs.

use serde::{Deserialize, Serialize};

use super::fold::{BinaryOp, PRODUCT, SAMMON_ERROR, SQUARED_DIFFERENCE};

/// Inner product `Σ xs[i] * ys[i]`.
///
/// # Example
/// ```rust
/// use arrayops::kernel::dot_product;
///
/// assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
#[inline]
pub fn dot_product(xs: &[f64], ys: &[f64]) -> f64 {
    PRODUCT.fold(xs, ys)
}

/// L2 norm `sqrt(dot_product(xs, xs))`.
#[inline]
pub fn euclidean_norm(xs: &[f64]) -> f64 {
    dot_product(xs, xs).sqrt()
}

/// Squared L2 distance `Σ (xs[i] - ys[i])²`.
#[inline]
pub fn squared_distance(xs: &[f64], ys: &[f64]) -> f64 {
    SQUARED_DIFFERENCE.fold(xs, ys)
}

/// L2 distance `sqrt(Σ (xs[i] - ys[i])²)`.
///
/// Symmetric in its arguments and zero iff the vectors are equal.
#[inline]
pub fn euclidean_distance(xs: &[f64], ys: &[f64]) -> f64 {
    squared_distance(xs, ys).sqrt()
}

/// Sammon-weighted squared error `Σ (xs[i] - ys[i])² / ys[i]`.
///
/// `ys` holds the reference values. Indices where `ys[i] == 0.0` contribute
/// nothing, which drops the zero diagonal when both operands are flattened
/// distance matrices.
///
/// # Example
/// ```rust
/// use arrayops::kernel::weighted_squared_error_sum;
///
/// let err = weighted_squared_error_sum(&[1.0, 2.0, 0.0], &[0.0, 4.0, 0.0]);
/// assert!((err - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn weighted_squared_error_sum(xs: &[f64], ys: &[f64]) -> f64 {
    SAMMON_ERROR.fold(xs, ys)
}

/// Selectable pairwise reduction.
///
/// Lets callers pick a reduction at runtime (for example from configuration)
/// while the reductions themselves stay monomorphized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Inner product
    Dot,
    /// Sum of squared differences
    SquaredEuclidean,
    /// L2 distance
    Euclidean,
    /// Sammon-weighted squared error, second operand as reference
    SammonError,
}

impl Metric {
    /// Compute this metric over `xs` and `ys`.
    pub fn compute(self, xs: &[f64], ys: &[f64]) -> f64 {
        match self {
            Metric::Dot => dot_product(xs, ys),
            Metric::SquaredEuclidean => squared_distance(xs, ys),
            Metric::Euclidean => euclidean_distance(xs, ys),
            Metric::SammonError => weighted_squared_error_sum(xs, ys),
        }
    }

    /// Compute this metric with an early exit once it reaches `limit`.
    ///
    /// Additive metrics use [`fold_up_to`](super::fold::fold_up_to) directly.
    /// `Euclidean` bounds the squared sum by `limit²` and returns the root
    /// of the partial sum, so the result still compares against `limit`.
    pub fn compute_up_to(self, xs: &[f64], ys: &[f64], limit: f64) -> f64 {
        match self {
            Metric::Dot => PRODUCT.fold_up_to(xs, ys, limit),
            Metric::SquaredEuclidean => SQUARED_DIFFERENCE.fold_up_to(xs, ys, limit),
            Metric::Euclidean => {
                let squared_limit = if limit >= 0.0 { limit * limit } else { limit };
                SQUARED_DIFFERENCE
                    .fold_up_to(xs, ys, squared_limit)
                    .sqrt()
            }
            Metric::SammonError => SAMMON_ERROR.fold_up_to(xs, ys, limit),
        }
    }
}
