//! Per-column z-score normalization for stratification features.

/// Rescale each column of a row-major matrix to zero mean and unit variance.
///
/// Statistics are computed over the given rows only (the current group, not
/// the whole dataset), using population variance. A zero-variance column is
/// centered and left unscaled, so its values come out as exact zeros rather
/// than dividing by zero — single-row groups therefore normalize to all
/// zeros silently.
///
/// # Panics
///
/// Panics if the rows of `matrix` have unequal lengths.
#[must_use = "returns a new normalized matrix; the original is unchanged"]
pub fn zscore_columns(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    if matrix.is_empty() {
        return Vec::new();
    }
    let n_rows = matrix.len() as f64;
    let n_cols = matrix[0].len();

    let mut means = vec![0.0f64; n_cols];
    let mut scales = vec![1.0f64; n_cols];
    for col in 0..n_cols {
        let mean = matrix.iter().map(|row| row[col]).sum::<f64>() / n_rows;
        let variance = matrix
            .iter()
            .map(|row| (row[col] - mean).powi(2))
            .sum::<f64>()
            / n_rows;
        let std = variance.sqrt();
        means[col] = mean;
        if std > 0.0 {
            scales[col] = std;
        }
    }

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, &value)| (value - means[col]) / scales[col])
                .collect()
        })
        .collect()
}
