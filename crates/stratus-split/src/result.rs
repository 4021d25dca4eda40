//! Result type for stratified splitting.

use stratus_frame::RowId;

/// Result of a stratified split.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Row ids per split, one entry per requested percentage, in allocation
    /// order. The lists are pairwise disjoint and jointly cover every input
    /// record exactly once.
    pub splits: Vec<Vec<RowId>>,
    /// Total number of input records.
    pub n_records: usize,
    /// Number of strata the allocation walked.
    pub n_strata: usize,
    /// Number of distinct classes (1 for the implicit single class).
    pub n_classes: usize,
}

impl SplitResult {
    /// Return the number of records in each split.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.splits.iter().map(Vec::len).collect()
    }

    /// Return each split's observed fraction of the input records.
    #[must_use]
    pub fn shares(&self) -> Vec<f64> {
        self.splits
            .iter()
            .map(|split| split.len() as f64 / self.n_records as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use stratus_frame::RowId;

    use super::SplitResult;

    #[test]
    fn sizes_and_shares() {
        let splits = vec![
            vec![RowId::new("a").unwrap(), RowId::new("b").unwrap()],
            vec![RowId::new("c").unwrap()],
            vec![RowId::new("d").unwrap()],
        ];
        let result = SplitResult {
            splits,
            n_records: 4,
            n_strata: 1,
            n_classes: 1,
        };
        assert_eq!(result.sizes(), vec![2, 1, 1]);
        assert_eq!(result.shares(), vec![0.5, 0.25, 0.25]);
    }
}
