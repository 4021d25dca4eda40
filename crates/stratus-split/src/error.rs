//! Error types for split configuration and execution.

use stratus_dbscan::DbscanError;
use stratus_frame::FrameError;

/// Errors from stratified split configuration and execution.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Returned when the percentage list is empty.
    #[error("split percentages must not be empty")]
    EmptyPercentages,

    /// Returned when a percentage is outside the half-open interval (0, 1].
    #[error("split percentage at position {index} must be in (0, 1], got {value}")]
    PercentageOutOfRange {
        /// Zero-based position of the offending percentage.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the percentages do not sum to 1 within tolerance.
    #[error("split percentages sum to {sum}, expected 1")]
    PercentageSum {
        /// The actual sum of the provided percentages.
        sum: f64,
    },

    /// Wraps a frame error encountered while grouping or selecting columns.
    #[error("frame error during stratification: {0}")]
    Frame(#[from] FrameError),

    /// Wraps a clustering error encountered during sub-grouping.
    #[error("clustering error during stratification: {0}")]
    Cluster(#[from] DbscanError),
}
