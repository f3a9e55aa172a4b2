//! Options for Sammon stress evaluation.
//!
//! Options are plain serde structs so the embedding application can keep
//! them alongside its own configuration. Missing fields take their defaults.
//!
//! ```rust
//! use arrayops::StressOptions;
//!
//! let opts = StressOptions::from_json(r#"{"early_exit": 0.05}"#)?;
//! assert_eq!(opts.early_exit, Some(0.05));
//! assert!(!opts.check_matrix);
//! # Ok::<(), arrayops::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How [`stress`](crate::sammon::stress) evaluates a projection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressOptions {
    /// Stop accumulating error once stress is known to reach this value.
    ///
    /// The returned stress is then a lower bound, still `>=` the threshold
    /// whenever the full stress is.
    pub early_exit: Option<f64>,

    /// Verify the original matrix is symmetric with a zero diagonal first.
    pub check_matrix: bool,
}

impl StressOptions {
    /// Full evaluation, no matrix check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate with an early-exit threshold.
    pub fn with_early_exit(threshold: f64) -> Self {
        Self {
            early_exit: Some(threshold),
            ..Self::default()
        }
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject thresholds that cannot bound a stress value.
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.early_exit {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(Error::InvalidOption(format!(
                    "early_exit must be a finite non-negative number, got {}",
                    threshold
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = StressOptions::from_json("{}").unwrap();
        assert_eq!(opts, StressOptions::new());
        assert_eq!(opts.early_exit, None);
        assert!(!opts.check_matrix);
    }

    #[test]
    fn test_from_json_full() {
        let opts = StressOptions::from_json(r#"{"early_exit": 0.1, "check_matrix": true}"#).unwrap();
        assert_eq!(opts.early_exit, Some(0.1));
        assert!(opts.check_matrix);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = StressOptions::from_json(r#"{"early_exit": -1.0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = StressOptions::from_json(r#"{"early_exit": "soon"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_with_early_exit_validates() {
        assert!(StressOptions::with_early_exit(0.0).validate().is_ok());
        assert!(StressOptions::with_early_exit(f64::NAN).validate().is_err());
        assert!(StressOptions::with_early_exit(f64::INFINITY).validate().is_err());
    }
}
