//! Sammon stress: how faithfully a projection preserves pairwise distances.
//!
//! Given the distances `d*` between points in the original space and `d`
//! between their images in a projection, Sammon's stress is
//!
//! ```text
//! E = 1 / Σ_{i<j} d*_ij  ·  Σ_{i<j} (d*_ij − d_ij)² / d*_ij
//! ```
//!
//! Both sums run over the full flattened `n × n` matrices here. Every pair
//! appears twice in each, and the zero diagonal of the original drops out of
//! the error term through [`SAMMON_ERROR`], so the ratio is unchanged.
//!
//! # Example
//!
//! ```rust
//! use arrayops::{sammon, DistanceMatrix, StressOptions};
//!
//! let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 1.0]];
//! let flattened = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//!
//! let original = DistanceMatrix::from_points(&points)?;
//! let projected = DistanceMatrix::from_points(&flattened)?;
//!
//! let e = sammon::stress(&original, &projected, &StressOptions::new())?;
//! assert!(e > 0.0 && e < 1.0);
//! # Ok::<(), arrayops::Error>(())
//! ```

use tracing::{debug, instrument};

use crate::config::StressOptions;
use crate::error::{Error, Result};
use crate::kernel::{euclidean_distance, weighted_squared_error_sum, BinaryOp, SAMMON_ERROR};

/// Dense, row-major matrix of pairwise distances.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    /// Number of points (rows and columns)
    n: usize,
    /// `n * n` entries, row-major
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Pairwise Euclidean distances between `points`.
    ///
    /// All points must have the dimension of the first one.
    #[instrument(skip(points), fields(point_count = points.len()))]
    pub fn from_points<P: AsRef<[f64]>>(points: &[P]) -> Result<Self> {
        let n = points.len();
        let Some(first) = points.first() else {
            return Ok(Self {
                n: 0,
                data: Vec::new(),
            });
        };

        let dim = first.as_ref().len();
        for point in points {
            let got = point.as_ref().len();
            if got != dim {
                return Err(Error::DimensionMismatch { expected: dim, got });
            }
        }

        let mut data = vec![0.0; entry_count(n)?];
        for i in 0..n {
            let a = points[i].as_ref();
            for j in (i + 1)..n {
                let d = euclidean_distance(a, points[j].as_ref());
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        debug!(dim, "built distance matrix");
        Ok(Self { n, data })
    }

    /// Wrap precomputed row-major distances for `n` points.
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self> {
        let expected = entry_count(n)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix holds no points.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range", i, j);
        self.data[i * self.n + j]
    }

    /// Distances from point `i` to every point.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// The flattened row-major entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of every entry (each pair counted twice).
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Check that the matrix is a plausible distance matrix: zero diagonal,
    /// symmetric, non-negative entries.
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.n {
            if self.get(i, i) != 0.0 {
                return Err(Error::InvalidMatrix(format!(
                    "diagonal entry ({}, {}) is {}",
                    i,
                    i,
                    self.get(i, i)
                )));
            }
            for j in (i + 1)..self.n {
                let d = self.get(i, j);
                if d != self.get(j, i) {
                    return Err(Error::InvalidMatrix(format!(
                        "entries ({}, {}) and ({}, {}) differ",
                        i, j, j, i
                    )));
                }
                if !(d >= 0.0) {
                    return Err(Error::InvalidMatrix(format!(
                        "entry ({}, {}) is {}",
                        i, j, d
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Sammon stress of `projected` against `original`.
///
/// With [`StressOptions::early_exit`] set, accumulation stops once the
/// stress reaches the threshold and the partial value is returned.
#[instrument(skip(original, projected, opts), fields(point_count = original.len()))]
pub fn stress(
    original: &DistanceMatrix,
    projected: &DistanceMatrix,
    opts: &StressOptions,
) -> Result<f64> {
    opts.validate()?;
    let total = normaliser(original, projected, opts.check_matrix)?;

    let error = match opts.early_exit {
        Some(threshold) => SAMMON_ERROR.fold_up_to(
            projected.as_slice(),
            original.as_slice(),
            error_limit(threshold, total),
        ),
        None => weighted_squared_error_sum(projected.as_slice(), original.as_slice()),
    };

    let e = error / total;
    debug!(stress = e, early_exit = ?opts.early_exit, "computed sammon stress");
    Ok(e)
}

/// Whether the stress of `projected` against `original` is at least `threshold`.
///
/// Scans only as far as needed to decide.
#[instrument(skip(original, projected), fields(point_count = original.len()))]
pub fn stress_exceeds(
    original: &DistanceMatrix,
    projected: &DistanceMatrix,
    threshold: f64,
) -> Result<bool> {
    StressOptions::with_early_exit(threshold).validate()?;
    let total = normaliser(original, projected, false)?;

    let limit = error_limit(threshold, total);
    let partial = SAMMON_ERROR.fold_up_to(projected.as_slice(), original.as_slice(), limit);
    let exceeds = partial / total >= threshold;
    debug!(exceeds, "checked sammon stress against threshold");
    Ok(exceeds)
}

/// Entries in an `n × n` matrix.
fn entry_count(n: usize) -> Result<usize> {
    n.checked_mul(n).ok_or_else(|| {
        Error::InvalidMatrix(format!("{} points overflow the matrix size", n))
    })
}

/// Smallest error sum `limit` near `threshold * total` with
/// `limit / total >= threshold`.
///
/// Any partial sum that reaches the limit then also divides out to at least
/// `threshold`, so early exit agrees with comparing the full stress.
fn error_limit(threshold: f64, total: f64) -> f64 {
    let mut limit = threshold * total;
    while limit / total < threshold {
        // limit is finite and non-negative here, so the next bit pattern is
        // the next representable value up
        limit = f64::from_bits(limit.to_bits() + 1);
    }
    limit
}

fn normaliser(original: &DistanceMatrix, projected: &DistanceMatrix, check: bool) -> Result<f64> {
    if original.len() != projected.len() {
        return Err(Error::DimensionMismatch {
            expected: original.len(),
            got: projected.len(),
        });
    }
    if check {
        original.validate()?;
    }

    let total = original.total();
    if !(total > 0.0) {
        return Err(Error::DegenerateDistances);
    }
    Ok(total)
}
