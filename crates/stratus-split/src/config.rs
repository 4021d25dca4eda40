//! Configuration builder for stratified splitting.

use stratus_dbscan::DbscanConfig;
use stratus_frame::Frame;

use crate::error::SplitError;
use crate::result::SplitResult;

/// Absolute tolerance when checking that percentages sum to 1.
const SUM_TOLERANCE: f64 = 1e-9;

/// Configuration for a stratified split.
///
/// Construct via [`SplitConfig::new`], then chain `with_*` methods to
/// override defaults. The last percentage identifies the remainder split,
/// which absorbs every record not drawn by the earlier splits.
///
/// # Defaults
///
/// | Parameter          | Default                         |
/// |--------------------|---------------------------------|
/// | `class_column`     | none (single implicit class)    |
/// | `stratify_columns` | none (no density sub-grouping)  |
/// | `seed`             | 42                              |
/// | `dbscan`           | `eps = 0.5`, `min_samples = 5`  |
#[derive(Debug, Clone)]
pub struct SplitConfig {
    percentages: Vec<f64>,
    class_column: Option<String>,
    stratify_columns: Option<Vec<String>>,
    seed: u64,
    dbscan: DbscanConfig,
}

impl SplitConfig {
    /// Create a new split configuration from target percentages.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SplitError::EmptyPercentages`] | `percentages` is empty |
    /// | [`SplitError::PercentageOutOfRange`] | A percentage is outside (0, 1] |
    /// | [`SplitError::PercentageSum`] | The sum differs from 1 by more than 1e-9 |
    pub fn new(percentages: Vec<f64>) -> Result<Self, SplitError> {
        if percentages.is_empty() {
            return Err(SplitError::EmptyPercentages);
        }
        for (index, &value) in percentages.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(SplitError::PercentageOutOfRange { index, value });
            }
        }
        let sum: f64 = percentages.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(SplitError::PercentageSum { sum });
        }
        Ok(Self {
            percentages,
            class_column: None,
            stratify_columns: None,
            seed: 42,
            dbscan: DbscanConfig::default(),
        })
    }

    /// Set the column whose values define the primary classes to preserve.
    #[must_use]
    pub fn with_class_column(mut self, column: impl Into<String>) -> Self {
        self.class_column = Some(column.into());
        self
    }

    /// Set the numeric columns used for density sub-grouping within each
    /// class. An empty list is treated as no stratification.
    #[must_use]
    pub fn with_stratify_columns(mut self, columns: Vec<String>) -> Self {
        self.stratify_columns = if columns.is_empty() { None } else { Some(columns) };
        self
    }

    /// Set the random seed used for without-replacement sampling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the clustering configuration used for sub-grouping. The same
    /// configuration is applied to every class group.
    #[must_use]
    pub fn with_dbscan(mut self, dbscan: DbscanConfig) -> Self {
        self.dbscan = dbscan;
        self
    }

    /// Return the target percentages.
    #[must_use]
    pub fn percentages(&self) -> &[f64] {
        &self.percentages
    }

    /// Return the number of requested splits.
    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.percentages.len()
    }

    /// Return the class column, if set.
    #[must_use]
    pub fn class_column(&self) -> Option<&str> {
        self.class_column.as_deref()
    }

    /// Return the stratify columns, if set.
    #[must_use]
    pub fn stratify_columns(&self) -> Option<&[String]> {
        self.stratify_columns.as_deref()
    }

    /// Return the random seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return the clustering configuration used for sub-grouping.
    #[must_use]
    pub fn dbscan(&self) -> DbscanConfig {
        self.dbscan
    }

    /// Split `frame` into disjoint subsets using this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SplitError::Frame`] | A configured column is missing or not numeric |
    /// | [`SplitError::Cluster`] | Sub-grouping fails on a class's feature matrix |
    pub fn split(&self, frame: &Frame) -> Result<SplitResult, SplitError> {
        crate::split::run(frame, self)
    }
}

#[cfg(test)]
mod tests {
    use super::SplitConfig;
    use crate::error::SplitError;

    #[test]
    fn new_valid() {
        let cfg = SplitConfig::new(vec![0.8, 0.2]).unwrap();
        assert_eq!(cfg.n_splits(), 2);
        assert_eq!(cfg.percentages(), &[0.8, 0.2]);
        assert_eq!(cfg.seed(), 42);
        assert!(cfg.class_column().is_none());
        assert!(cfg.stratify_columns().is_none());
    }

    #[test]
    fn new_rejects_empty() {
        let result = SplitConfig::new(vec![]);
        assert!(matches!(result, Err(SplitError::EmptyPercentages)));
    }

    #[test]
    fn new_rejects_sum_above_one() {
        let result = SplitConfig::new(vec![0.5, 0.6]);
        assert!(matches!(result, Err(SplitError::PercentageSum { .. })));
    }

    #[test]
    fn new_rejects_sum_below_one() {
        let result = SplitConfig::new(vec![0.5, 0.3]);
        assert!(matches!(result, Err(SplitError::PercentageSum { .. })));
    }

    #[test]
    fn new_rejects_zero_percentage() {
        let result = SplitConfig::new(vec![1.0, 0.0]);
        assert!(matches!(
            result,
            Err(SplitError::PercentageOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn new_rejects_negative_percentage() {
        let result = SplitConfig::new(vec![-0.2, 1.2]);
        assert!(matches!(
            result,
            Err(SplitError::PercentageOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn new_rejects_percentage_above_one() {
        let result = SplitConfig::new(vec![1.5]);
        assert!(matches!(
            result,
            Err(SplitError::PercentageOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn new_accepts_sum_within_float_tolerance() {
        // 0.3 + 0.3 + 0.4 accumulates a representation error well under 1e-9.
        let result = SplitConfig::new(vec![0.3, 0.3, 0.4]);
        assert!(result.is_ok());
    }

    #[test]
    fn new_accepts_single_split() {
        let cfg = SplitConfig::new(vec![1.0]).unwrap();
        assert_eq!(cfg.n_splits(), 1);
    }

    #[test]
    fn builder_chaining() {
        let cfg = SplitConfig::new(vec![0.5, 0.5])
            .unwrap()
            .with_class_column("label")
            .with_stratify_columns(vec!["w".to_string(), "h".to_string()])
            .with_seed(7);
        assert_eq!(cfg.class_column(), Some("label"));
        assert_eq!(cfg.stratify_columns().unwrap().len(), 2);
        assert_eq!(cfg.seed(), 7);
    }

    #[test]
    fn empty_stratify_columns_mean_none() {
        let cfg = SplitConfig::new(vec![0.5, 0.5])
            .unwrap()
            .with_stratify_columns(vec![]);
        assert!(cfg.stratify_columns().is_none());
    }
}
