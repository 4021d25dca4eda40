//! Core DBSCAN implementation.
//!
//! Neighborhoods are precomputed in parallel with rayon; cluster expansion is
//! a sequential FIFO flood fill over core points, visiting rows in index
//! order so the labeling is fully deterministic for a fixed configuration.

use rayon::prelude::*;
use std::collections::VecDeque;
use tracing::{debug, instrument};

use crate::label::ClusterLabel;
use crate::result::DbscanResult;

/// Squared Euclidean distance between two feature rows of equal length.
fn distance_sq(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Run DBSCAN over a validated row-major feature matrix.
///
/// A point's neighborhood contains every row within `eps` Euclidean distance,
/// including the point itself. Core points (neighborhood size >= min_samples)
/// seed clusters in row order; border points join the first cluster that
/// reaches them; everything else stays noise.
#[instrument(skip(data), fields(n = data.len(), eps, min_samples))]
pub(crate) fn fit(data: &[Vec<f64>], eps: f64, min_samples: usize) -> DbscanResult {
    let n = data.len();
    let eps_sq = eps * eps;

    // Neighborhood precomputation dominates the runtime (O(n^2) distance
    // pairs), so it is the part worth parallelizing.
    let neighbors: Vec<Vec<usize>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .filter(|&j| distance_sq(&data[i], &data[j]) <= eps_sq)
                .collect()
        })
        .collect();

    let core: Vec<bool> = neighbors.iter().map(|nb| nb.len() >= min_samples).collect();

    let mut labels: Vec<Option<ClusterLabel>> = vec![None; n];
    let mut n_clusters = 0usize;

    for seed in 0..n {
        if labels[seed].is_some() {
            continue;
        }
        if !core[seed] {
            // Tentative: may be relabeled as a border point when a later
            // cluster expansion reaches it.
            labels[seed] = Some(ClusterLabel::Noise);
            continue;
        }

        let cluster = ClusterLabel::Cluster(n_clusters);
        n_clusters += 1;
        labels[seed] = Some(cluster);

        let mut frontier: VecDeque<usize> = neighbors[seed].iter().copied().collect();
        while let Some(point) = frontier.pop_front() {
            match labels[point] {
                Some(ClusterLabel::Noise) => {
                    // Border point previously written off as noise.
                    labels[point] = Some(cluster);
                }
                Some(_) => {}
                None => {
                    labels[point] = Some(cluster);
                    if core[point] {
                        frontier.extend(neighbors[point].iter().copied());
                    }
                }
            }
        }
    }

    let labels: Vec<ClusterLabel> = labels
        .into_iter()
        .map(|label| label.expect("every row is labeled by the seed loop"))
        .collect();

    let n_noise = labels.iter().filter(|l| l.is_noise()).count();
    debug!(n_clusters, n_noise, "dbscan labeling complete");

    DbscanResult { labels, n_clusters }
}
