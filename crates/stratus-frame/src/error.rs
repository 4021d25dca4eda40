//! Error types for frame construction and column access.

/// Errors from frame validation and column access.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Returned when a frame is constructed with zero rows.
    #[error("frame must contain at least one row")]
    EmptyFrame,

    /// Returned when a row id is constructed from an empty string.
    #[error("row id must be a non-empty string")]
    EmptyRowId,

    /// Returned when the same row id appears more than once.
    #[error("duplicate row id \"{id}\"")]
    DuplicateRowId {
        /// The duplicated row id.
        id: String,
    },

    /// Returned when the same column name appears more than once.
    #[error("duplicate column name \"{name}\"")]
    DuplicateColumn {
        /// The duplicated column name.
        name: String,
    },

    /// Returned when a column's length differs from the number of row ids.
    #[error("column \"{name}\" has {got} values, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Expected number of values (the row count).
        expected: usize,
        /// Actual number of values in this column.
        got: usize,
    },

    /// Returned when a numeric cell is NaN or infinite.
    #[error("non-finite value in column \"{column}\" at row {row}")]
    NonFiniteValue {
        /// Name of the offending column.
        column: String,
        /// Zero-based row position of the offending cell.
        row: usize,
    },

    /// Returned when a named column does not exist in the frame.
    #[error("unknown column \"{name}\"")]
    UnknownColumn {
        /// The requested column name.
        name: String,
    },

    /// Returned when a numeric operation is requested on a categorical column.
    #[error("column \"{name}\" is not numeric")]
    NotNumeric {
        /// The requested column name.
        name: String,
    },
}
