//! Binary folds: reduce two vectors to a scalar through a pairwise operator.
//!
//! A fold computes `Σ op(xs[i], ys[i])` in index order starting from `0.0`.
//! Operators are anything implementing [`BinaryOp`], which includes every
//! `Fn(f64, f64) -> f64`, so the reduction is monomorphized per operator
//! and the operator body inlines into the loop.
//!
//! Three operators come predefined as zero-sized constants:
//!
//! | Constant | Term |
//! |----------|------|
//! | [`PRODUCT`] | `x * y` |
//! | [`SQUARED_DIFFERENCE`] | `(x - y)²` |
//! | [`SAMMON_ERROR`] | `(x - y)² / y`, or `0` when `y == 0` |

/// A pairwise operator that can be folded over two vectors.
pub trait BinaryOp {
    /// The term contributed by one pair of elements.
    fn apply(&self, x: f64, y: f64) -> f64;

    /// Sum of `apply(xs[i], ys[i])` over every index of `xs`.
    #[inline]
    fn fold(&self, xs: &[f64], ys: &[f64]) -> f64
    where
        Self: Sized,
    {
        fold(self, xs, ys)
    }

    /// Like [`fold`](BinaryOp::fold) but stops once the running sum reaches `limit`.
    #[inline]
    fn fold_up_to(&self, xs: &[f64], ys: &[f64], limit: f64) -> f64
    where
        Self: Sized,
    {
        fold_up_to(self, xs, ys, limit)
    }
}

impl<F> BinaryOp for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn apply(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Fold `op` over `xs` and `ys`.
///
/// Iterates `0..xs.len()`; `ys` must be at least as long.
///
/// # Example
/// ```rust
/// use arrayops::kernel::fold;
///
/// let xs = [1.0, 2.0, 3.0];
/// let ys = [4.0, 5.0, 6.0];
/// let max_sum = fold(&|x: f64, y: f64| x.max(y), &xs, &ys);
/// assert_eq!(max_sum, 15.0);
/// ```
#[inline]
pub fn fold<O: BinaryOp + ?Sized>(op: &O, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert!(
        ys.len() >= xs.len(),
        "fold: second operand too short ({} < {})",
        ys.len(),
        xs.len()
    );

    let mut sum = 0.0;
    for (i, &x) in xs.iter().enumerate() {
        sum += op.apply(x, ys[i]);
    }
    sum
}

/// Fold `op` over `xs` and `ys`, stopping as soon as the running sum is `>= limit`.
///
/// The loop guard is checked before every term, so the returned value is the
/// partial sum at the first index where it reached `limit`, or the full sum
/// if it never did. A `limit` of `0.0` or below (or NaN) returns `0.0`
/// without reading any element.
///
/// For non-negative operators the result is a lower bound on [`fold`] that
/// is `>= limit` exactly when the full fold is. Signed operators get the
/// same literal guard and may stop on a transient peak.
#[inline]
pub fn fold_up_to<O: BinaryOp + ?Sized>(op: &O, xs: &[f64], ys: &[f64], limit: f64) -> f64 {
    debug_assert!(
        ys.len() >= xs.len(),
        "fold_up_to: second operand too short ({} < {})",
        ys.len(),
        xs.len()
    );

    let mut sum = 0.0;
    let mut i = 0;
    while i < xs.len() && sum < limit {
        sum += op.apply(xs[i], ys[i]);
        i += 1;
    }
    sum
}

/// `x * y`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product;

impl BinaryOp for Product {
    #[inline]
    fn apply(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}

/// `(x - y)²`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquaredDifference;

impl BinaryOp for SquaredDifference {
    #[inline]
    fn apply(&self, x: f64, y: f64) -> f64 {
        let d = x - y;
        d * d
    }
}

/// Sammon error term `(x - y)² / y`.
///
/// `y` is a reference distance. Zero reference distances sit on the diagonal
/// of a distance matrix and contribute nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SammonError;

impl BinaryOp for SammonError {
    #[inline]
    fn apply(&self, x: f64, y: f64) -> f64 {
        if y == 0.0 {
            return 0.0;
        }
        let d = x - y;
        d * d / y
    }
}

pub const PRODUCT: Product = Product;
pub const SQUARED_DIFFERENCE: SquaredDifference = SquaredDifference;
pub const SAMMON_ERROR: SammonError = SammonError;
