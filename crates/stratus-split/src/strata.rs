//! Stratum construction: class grouping and density-based sub-grouping.

use std::collections::BTreeMap;

use stratus_dbscan::{ClusterLabel, DbscanConfig};
use stratus_frame::{Frame, GroupKey};
use tracing::debug;

use crate::SplitError;
use crate::normalize::zscore_columns;

/// The atomic allocation unit: the rows sharing one class and one sub-cluster.
#[derive(Debug, Clone)]
pub(crate) struct Stratum {
    /// Class key, or `None` for the implicit single class.
    pub(crate) class: Option<GroupKey>,
    /// Sub-cluster label within the class.
    pub(crate) cluster: ClusterLabel,
    /// Row positions in this stratum, in class-group traversal order.
    pub(crate) rows: Vec<usize>,
}

/// Partition every row of `frame` into strata.
///
/// Rows are grouped by class first — a missing class column is modeled as one
/// synthetic class covering every row, not as a separate code path. Within
/// each class, stratify columns (when given) are z-scored over that class's
/// rows only and clustered with DBSCAN; without them every row gets cluster 0.
///
/// Classes are traversed in first-seen row order and sub-clusters in sorted
/// label order with noise first, so the stratum sequence is deterministic.
/// The returned strata are pairwise disjoint and cover every row.
pub(crate) fn partition(
    frame: &Frame,
    class_column: Option<&str>,
    stratify_columns: Option<&[String]>,
    dbscan: DbscanConfig,
) -> Result<Vec<Stratum>, SplitError> {
    let all_rows: Vec<usize> = (0..frame.n_rows()).collect();

    let class_groups: Vec<(Option<GroupKey>, Vec<usize>)> = match class_column {
        Some(name) => frame
            .group_rows(name, &all_rows)?
            .into_iter()
            .map(|(key, rows)| (Some(key), rows))
            .collect(),
        None => vec![(None, all_rows)],
    };

    let mut strata = Vec::new();
    for (class, rows) in class_groups {
        let labels = match stratify_columns {
            Some(columns) => {
                let features = frame.numeric_matrix(columns, &rows)?;
                let normalized = zscore_columns(&features);
                dbscan.fit_predict(&normalized)?.labels
            }
            None => vec![ClusterLabel::Cluster(0); rows.len()],
        };

        let mut clusters: BTreeMap<ClusterLabel, Vec<usize>> = BTreeMap::new();
        for (&row, &label) in rows.iter().zip(&labels) {
            clusters.entry(label).or_default().push(row);
        }
        debug!(
            class = ?class,
            n_rows = rows.len(),
            n_subclusters = clusters.len(),
            "class partitioned"
        );

        for (cluster, members) in clusters {
            strata.push(Stratum {
                class: class.clone(),
                cluster,
                rows: members,
            });
        }
    }
    Ok(strata)
}
