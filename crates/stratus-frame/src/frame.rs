//! Column-oriented frame with stable row identifiers and full input validation.

use std::collections::HashMap;
use std::fmt;

use crate::FrameError;
use crate::key::GroupKey;

/// An opaque, stable record identifier.
///
/// Wraps a non-empty string. Identifiers are not required to form a dense
/// integer range; they only need to be unique within a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(String);

impl RowId {
    /// Create a new row id from a non-empty string.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`FrameError::EmptyRowId`] | `id` is empty |
    pub fn new(id: impl Into<String>) -> Result<Self, FrameError> {
        let id = id.into();
        if id.is_empty() {
            return Err(FrameError::EmptyRowId);
        }
        Ok(Self(id))
    }

    /// Return the row id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One column of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// A column of finite floats (validated by [`Frame::new`]).
    Numeric(Vec<f64>),
    /// A column of free-form text values.
    Categorical(Vec<String>),
}

impl Column {
    /// Return the number of values in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Return true if the column has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the grouping key for the cell at `row`.
    fn key_at(&self, row: usize) -> GroupKey {
        match self {
            Self::Numeric(v) => GroupKey::from_numeric(v[row]),
            Self::Categorical(v) => GroupKey::Text(v[row].clone()),
        }
    }
}

/// A validated, immutable tabular dataset.
///
/// Row ids and columns are stored in parallel — `row_ids[i]` identifies the
/// record whose cells sit at position `i` of every column. Column order is
/// insertion order, and all group-by traversals are deterministic.
#[derive(Debug, Clone)]
pub struct Frame {
    row_ids: Vec<RowId>,
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Frame {
    /// Create a new frame, validating shape and numeric contents.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`FrameError::EmptyFrame`] | `row_ids` is empty |
    /// | [`FrameError::DuplicateRowId`] | The same row id appears twice |
    /// | [`FrameError::DuplicateColumn`] | The same column name appears twice |
    /// | [`FrameError::ColumnLengthMismatch`] | A column's length differs from the row count |
    /// | [`FrameError::NonFiniteValue`] | A numeric cell is NaN or infinite |
    pub fn new(row_ids: Vec<RowId>, columns: Vec<(String, Column)>) -> Result<Self, FrameError> {
        if row_ids.is_empty() {
            return Err(FrameError::EmptyFrame);
        }

        let mut seen_ids: HashMap<&str, ()> = HashMap::with_capacity(row_ids.len());
        for id in &row_ids {
            if seen_ids.insert(id.as_str(), ()).is_some() {
                return Err(FrameError::DuplicateRowId {
                    id: id.as_str().to_string(),
                });
            }
        }

        let n_rows = row_ids.len();
        let mut names = Vec::with_capacity(columns.len());
        let mut cols = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            if names.contains(&name) {
                return Err(FrameError::DuplicateColumn { name });
            }
            if column.len() != n_rows {
                return Err(FrameError::ColumnLengthMismatch {
                    name,
                    expected: n_rows,
                    got: column.len(),
                });
            }
            if let Column::Numeric(values) = &column
                && let Some(row) = values.iter().position(|v| !v.is_finite())
            {
                return Err(FrameError::NonFiniteValue { column: name, row });
            }
            names.push(name);
            cols.push(column);
        }

        Ok(Self { row_ids, names, columns: cols })
    }

    /// Return the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_ids.len()
    }

    /// Return the row ids in storage order.
    #[must_use]
    pub fn row_ids(&self) -> &[RowId] {
        &self.row_ids
    }

    /// Return the column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Return the column with the given name, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| &self.columns[idx])
    }

    /// Group the given row positions by the value of one column.
    ///
    /// Returns `(key, positions)` pairs in first-seen order over `rows`, so
    /// repeated calls over identical input always yield the same traversal.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::UnknownColumn`] if `name` does not exist.
    ///
    /// # Panics
    ///
    /// Panics if any position in `rows` is out of bounds for this frame.
    pub fn group_rows(
        &self,
        name: &str,
        rows: &[usize],
    ) -> Result<Vec<(GroupKey, Vec<usize>)>, FrameError> {
        let column = self.column(name).ok_or_else(|| FrameError::UnknownColumn {
            name: name.to_string(),
        })?;

        let mut order: Vec<GroupKey> = Vec::new();
        let mut groups: HashMap<GroupKey, Vec<usize>> = HashMap::new();
        for &row in rows {
            let key = column.key_at(row);
            match groups.get_mut(&key) {
                Some(members) => members.push(row),
                None => {
                    order.push(key.clone());
                    groups.insert(key, vec![row]);
                }
            }
        }

        Ok(order
            .into_iter()
            .map(|key| {
                let members = groups.remove(&key).expect("every ordered key was inserted");
                (key, members)
            })
            .collect())
    }

    /// Select the named numeric columns for the given row positions as a
    /// row-major matrix.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`FrameError::UnknownColumn`] | A named column does not exist |
    /// | [`FrameError::NotNumeric`] | A named column is categorical |
    ///
    /// # Panics
    ///
    /// Panics if any position in `rows` is out of bounds for this frame.
    pub fn numeric_matrix(
        &self,
        names: &[String],
        rows: &[usize],
    ) -> Result<Vec<Vec<f64>>, FrameError> {
        let mut selected: Vec<&Vec<f64>> = Vec::with_capacity(names.len());
        for name in names {
            match self.column(name) {
                None => {
                    return Err(FrameError::UnknownColumn { name: name.clone() });
                }
                Some(Column::Categorical(_)) => {
                    return Err(FrameError::NotNumeric { name: name.clone() });
                }
                Some(Column::Numeric(values)) => selected.push(values),
            }
        }

        Ok(rows
            .iter()
            .map(|&row| selected.iter().map(|values| values[row]).collect())
            .collect())
    }
}
