//! CSV frame reader with full input validation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use stratus_frame::{Column, Frame, RowId};

use crate::IoError;

/// Reads a tabular dataset from a CSV file into a [`Frame`].
///
/// Expected CSV format:
/// - Header row required (first column is the record id, remaining are
///   column names)
/// - `record_id,column1,column2,...,columnN`
/// - One row per record, all rows must have the same number of columns
///
/// Column types are inferred: a column whose every cell parses as a finite
/// float becomes [`Column::Numeric`]; any other column (including one with a
/// stray `NaN` or `inf` cell) becomes [`Column::Categorical`].
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyDataset`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::DuplicateRecordId`] | Same record id appears twice |
/// | [`IoError::Frame`] | Frame validation fails (e.g. empty record id) |
pub struct FrameReader {
    path: PathBuf,
}

impl FrameReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the CSV file, returning a [`Frame`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Frame, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) allows rows with varying column counts so that our own
        // InconsistentRowLength check fires instead of a low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        })?;
        let expected_cols = header.len();
        let column_names: Vec<String> = header.iter().skip(1).map(String::from).collect();
        debug!(expected_cols, "read CSV header");

        let mut row_ids = Vec::new();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); column_names.len()];
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            if record.len() != expected_cols {
                let record_id = record.get(0).unwrap_or("").to_string();
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    record_id,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let id_str = record.get(0).unwrap_or("").to_string();
            if let Some(&first_row) = seen.get(&id_str) {
                return Err(IoError::DuplicateRecordId {
                    path: self.path.clone(),
                    record_id: id_str,
                    first_row,
                    second_row: row_index,
                });
            }
            seen.insert(id_str.clone(), row_index);

            row_ids.push(RowId::new(id_str)?);
            for (col, column) in cells.iter_mut().enumerate() {
                column.push(record.get(col + 1).unwrap_or("").to_string());
            }
        }

        if row_ids.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        let columns: Vec<(String, Column)> = column_names
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| (name, infer_column(raw)))
            .collect();

        let n_numeric = columns
            .iter()
            .filter(|(_, c)| matches!(c, Column::Numeric(_)))
            .count();
        info!(
            n_records = row_ids.len(),
            n_columns = columns.len(),
            n_numeric,
            "frame loaded"
        );

        Ok(Frame::new(row_ids, columns)?)
    }
}

/// Infer a column's type from its raw cells.
///
/// Numeric only when every cell parses as a finite float; otherwise the
/// column stays categorical with the raw text preserved.
fn infer_column(raw: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = raw
        .iter()
        .map(|cell| cell.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();
    match parsed {
        Some(values) => Column::Numeric(values),
        None => Column::Categorical(raw),
    }
}
