//! Configuration builder for DBSCAN clustering.

use crate::error::DbscanError;
use crate::result::DbscanResult;

/// Default neighborhood radius.
pub const DEFAULT_EPS: f64 = 0.5;
/// Default core-point neighborhood size (the point itself counts).
pub const DEFAULT_MIN_SAMPLES: usize = 5;

/// Configuration for DBSCAN clustering.
///
/// Construct via [`DbscanConfig::new`] or use the defaults (`eps = 0.5`,
/// `min_samples = 5`) via [`DbscanConfig::default`]. The configuration is
/// plain data: the same configuration applied to the same input always
/// produces the same labels — DBSCAN involves no randomness.
#[derive(Debug, Clone, Copy)]
pub struct DbscanConfig {
    pub(crate) eps: f64,
    pub(crate) min_samples: usize,
}

impl DbscanConfig {
    /// Create a new DBSCAN configuration.
    ///
    /// `eps` is the maximum Euclidean distance between two points for one to
    /// be considered in the other's neighborhood. `min_samples` is the number
    /// of points (including the point itself) a neighborhood must contain for
    /// the point to be a core point.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DbscanError::InvalidEps`] | `eps` is zero, negative, or non-finite |
    /// | [`DbscanError::InvalidMinSamples`] | `min_samples` is zero |
    pub fn new(eps: f64, min_samples: usize) -> Result<Self, DbscanError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(DbscanError::InvalidEps { eps });
        }
        if min_samples == 0 {
            return Err(DbscanError::InvalidMinSamples { min_samples });
        }
        Ok(Self { eps, min_samples })
    }

    /// Return the neighborhood radius.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Return the core-point neighborhood size.
    #[must_use]
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Cluster `data` (row-major feature matrix) using this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DbscanError::EmptyInput`] | `data` has no rows |
    /// | [`DbscanError::DimensionMismatch`] | A row's length differs from the first row |
    /// | [`DbscanError::NonFiniteFeature`] | A feature value is NaN or infinite |
    pub fn fit_predict(&self, data: &[Vec<f64>]) -> Result<DbscanResult, DbscanError> {
        if data.is_empty() {
            return Err(DbscanError::EmptyInput);
        }
        let expected = data[0].len();
        for (row, features) in data.iter().enumerate() {
            if features.len() != expected {
                return Err(DbscanError::DimensionMismatch {
                    row,
                    expected,
                    got: features.len(),
                });
            }
            if let Some(col) = features.iter().position(|v| !v.is_finite()) {
                return Err(DbscanError::NonFiniteFeature { row, col });
            }
        }
        Ok(crate::dbscan::fit(data, self.eps, self.min_samples))
    }
}

impl Default for DbscanConfig {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EPS, DEFAULT_MIN_SAMPLES, DbscanConfig};
    use crate::error::DbscanError;

    #[test]
    fn new_valid() {
        let cfg = DbscanConfig::new(1.5, 3).unwrap();
        assert!((cfg.eps() - 1.5).abs() < f64::EPSILON);
        assert_eq!(cfg.min_samples(), 3);
    }

    #[test]
    fn new_rejects_zero_eps() {
        let result = DbscanConfig::new(0.0, 3);
        assert!(matches!(result, Err(DbscanError::InvalidEps { .. })));
    }

    #[test]
    fn new_rejects_nan_eps() {
        let result = DbscanConfig::new(f64::NAN, 3);
        assert!(matches!(result, Err(DbscanError::InvalidEps { .. })));
    }

    #[test]
    fn new_rejects_zero_min_samples() {
        let result = DbscanConfig::new(0.5, 0);
        assert!(matches!(
            result,
            Err(DbscanError::InvalidMinSamples { min_samples: 0 })
        ));
    }

    #[test]
    fn defaults() {
        let cfg = DbscanConfig::default();
        assert!((cfg.eps() - DEFAULT_EPS).abs() < f64::EPSILON);
        assert_eq!(cfg.min_samples(), DEFAULT_MIN_SAMPLES);
    }

    #[test]
    fn fit_predict_rejects_empty() {
        let cfg = DbscanConfig::default();
        let result = cfg.fit_predict(&[]);
        assert!(matches!(result, Err(DbscanError::EmptyInput)));
    }

    #[test]
    fn fit_predict_rejects_ragged_rows() {
        let cfg = DbscanConfig::default();
        let data = vec![vec![0.0, 0.0], vec![1.0]];
        let result = cfg.fit_predict(&data);
        assert!(matches!(
            result,
            Err(DbscanError::DimensionMismatch { row: 1, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn fit_predict_rejects_non_finite() {
        let cfg = DbscanConfig::default();
        let data = vec![vec![0.0, f64::INFINITY]];
        let result = cfg.fit_predict(&data);
        assert!(matches!(
            result,
            Err(DbscanError::NonFiniteFeature { row: 0, col: 1 })
        ));
    }
}
