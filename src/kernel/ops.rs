//! In-place element-wise updates.
//!
//! Every function walks the first operand from index 0 to `xs.len()` and reads
//! the second operand at the same index. The second operand must be at least
//! as long as the first; a shorter one panics on the out-of-range index.

/// Scaled accumulation: `xs[i] += ys[i] * q`.
///
/// This is the gradient step of embedding training loops.
///
/// # Example
/// ```rust
/// use arrayops::kernel::nudge;
///
/// let mut xs = [1.0, 1.0, 1.0];
/// nudge(&mut xs, &[2.0, 2.0, 2.0], 0.5);
/// assert_eq!(xs, [2.0, 2.0, 2.0]);
/// ```
#[inline]
pub fn nudge(xs: &mut [f64], ys: &[f64], q: f64) {
    debug_assert!(
        ys.len() >= xs.len(),
        "nudge: second operand too short ({} < {})",
        ys.len(),
        xs.len()
    );

    for (i, x) in xs.iter_mut().enumerate() {
        *x += ys[i] * q;
    }
}

/// Element-wise addition: `xs[i] += ys[i]`.
#[inline]
pub fn add_to(xs: &mut [f64], ys: &[f64]) {
    debug_assert!(
        ys.len() >= xs.len(),
        "add_to: second operand too short ({} < {})",
        ys.len(),
        xs.len()
    );

    for (i, x) in xs.iter_mut().enumerate() {
        *x += ys[i];
    }
}

/// Element-wise subtraction: `xs[i] -= ys[i]`.
#[inline]
pub fn subtract_from(xs: &mut [f64], ys: &[f64]) {
    debug_assert!(
        ys.len() >= xs.len(),
        "subtract_from: second operand too short ({} < {})",
        ys.len(),
        xs.len()
    );

    for (i, x) in xs.iter_mut().enumerate() {
        *x -= ys[i];
    }
}

/// Scale in place: `xs[i] *= q`.
#[inline]
pub fn scale(xs: &mut [f64], q: f64) {
    for x in xs.iter_mut() {
        *x *= q;
    }
}
