//! Result type for DBSCAN clustering.

use crate::label::ClusterLabel;

/// Result of a DBSCAN clustering run.
#[derive(Debug, Clone)]
pub struct DbscanResult {
    /// Cluster assignment for each input row, in input order.
    pub labels: Vec<ClusterLabel>,
    /// Number of clusters detected (noise excluded).
    pub n_clusters: usize,
}

impl DbscanResult {
    /// Return the number of rows assigned to each cluster.
    ///
    /// The returned vec has length `n_clusters`; entry `i` holds the count of
    /// rows labeled `Cluster(i)`. Noise rows are not counted.
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.n_clusters];
        for label in &self.labels {
            if let Some(index) = label.index() {
                sizes[index] += 1;
            }
        }
        sizes
    }

    /// Return the number of rows labeled as noise.
    #[must_use]
    pub fn n_noise(&self) -> usize {
        self.labels.iter().filter(|l| l.is_noise()).count()
    }

    /// Return the indices of all rows assigned to `label`.
    ///
    /// Indices correspond to positions in the matrix passed to `fit_predict`.
    #[must_use]
    pub fn members(&self, label: ClusterLabel) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| if l == label { Some(i) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DbscanResult;
    use crate::label::ClusterLabel;

    fn make_result() -> DbscanResult {
        DbscanResult {
            labels: vec![
                ClusterLabel::Cluster(0),
                ClusterLabel::Noise,
                ClusterLabel::Cluster(1),
                ClusterLabel::Cluster(0),
                ClusterLabel::Noise,
            ],
            n_clusters: 2,
        }
    }

    #[test]
    fn cluster_sizes_exclude_noise() {
        let result = make_result();
        assert_eq!(result.cluster_sizes(), vec![2, 1]);
    }

    #[test]
    fn n_noise_counts_noise_rows() {
        let result = make_result();
        assert_eq!(result.n_noise(), 2);
    }

    #[test]
    fn members_of_cluster() {
        let result = make_result();
        assert_eq!(result.members(ClusterLabel::Cluster(0)), vec![0, 3]);
        assert_eq!(result.members(ClusterLabel::Noise), vec![1, 4]);
    }
}
