//! Error types for DBSCAN configuration and input validation.

/// Errors from DBSCAN configuration and clustering.
#[derive(Debug, thiserror::Error)]
pub enum DbscanError {
    /// Returned when the neighborhood radius is zero, negative, or non-finite.
    #[error("eps must be a positive finite number, got {eps}")]
    InvalidEps {
        /// The invalid eps value provided.
        eps: f64,
    },

    /// Returned when min_samples is zero.
    #[error("min_samples must be at least 1, got {min_samples}")]
    InvalidMinSamples {
        /// The invalid min_samples value provided.
        min_samples: usize,
    },

    /// Returned when an empty feature matrix is provided.
    #[error("feature matrix must contain at least one row")]
    EmptyInput,

    /// Returned when a feature row has a different length than the first row.
    #[error("feature row {row} has {got} values, expected {expected}")]
    DimensionMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Expected number of features (from the first row).
        expected: usize,
        /// Actual number of features in this row.
        got: usize,
    },

    /// Returned when a feature value is NaN or infinite.
    #[error("non-finite feature value at row {row}, column {col}")]
    NonFiniteFeature {
        /// Zero-based row index of the offending value.
        row: usize,
        /// Zero-based column index of the offending value.
        col: usize,
    },
}
