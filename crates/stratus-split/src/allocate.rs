//! Per-stratum proportional allocation with running-share rounding correction.

use rand::seq::index;
use rand_chacha::ChaCha8Rng;

/// Cumulative allocation state threaded through the stratum loop.
///
/// Tracks, for every split, how many records have been assigned so far, and
/// how many records have been processed in total. The running share per split
/// drives the ceiling/floor rounding decision on the next stratum.
#[derive(Debug, Clone)]
pub(crate) struct RunningTotals {
    assigned: Vec<usize>,
    processed: usize,
}

impl RunningTotals {
    /// Create fresh totals for `n_splits` splits.
    pub(crate) fn new(n_splits: usize) -> Self {
        Self {
            assigned: vec![0; n_splits],
            processed: 0,
        }
    }

    /// Return the total number of records processed across all strata so far.
    pub(crate) fn processed(&self) -> usize {
        self.processed
    }

    /// Return the number of records assigned to `split` so far.
    pub(crate) fn assigned(&self, split: usize) -> usize {
        self.assigned[split]
    }

    /// Fraction of processed records assigned to `split` so far.
    ///
    /// Only meaningful once at least one stratum has been processed.
    pub(crate) fn share(&self, split: usize) -> f64 {
        self.assigned[split] as f64 / self.processed as f64
    }

    /// Fold one stratum's drawn rows into the totals.
    pub(crate) fn record(&mut self, drawn: &[Vec<usize>]) {
        for (split, rows) in drawn.iter().enumerate() {
            self.assigned[split] += rows.len();
            self.processed += rows.len();
        }
    }
}

/// Compute how many rows each non-remainder split draws from a stratum of
/// `stratum_size` rows.
///
/// On the first processed stratum every ideal count `percentage * size` is
/// rounded down — there is no running share to correct against yet. On later
/// strata a split rounds up when its running share is below its target (the
/// stratum helps it catch up) and down otherwise (avoid overshooting). The
/// returned counts are not yet clamped to the stratum's remaining pool.
pub(crate) fn draw_counts(
    stratum_size: usize,
    percentages: &[f64],
    totals: &RunningTotals,
) -> Vec<usize> {
    let size = stratum_size as f64;
    percentages[..percentages.len() - 1]
        .iter()
        .enumerate()
        .map(|(split, &target)| {
            let ideal = target * size;
            let rounded = if totals.processed() > 0 && totals.share(split) < target {
                ideal.ceil()
            } else {
                ideal.floor()
            };
            rounded as usize
        })
        .collect()
}

/// Allocate one stratum's rows across all splits.
///
/// Non-remainder splits draw `min(remaining, count)` rows uniformly at random
/// without replacement from the shrinking pool, in increasing split order; the
/// last split absorbs whatever is left. The returned vec has one entry per
/// split and its row sets partition `rows`.
pub(crate) fn allocate_stratum(
    rows: &[usize],
    percentages: &[f64],
    totals: &RunningTotals,
    rng: &mut ChaCha8Rng,
) -> Vec<Vec<usize>> {
    let counts = draw_counts(rows.len(), percentages, totals);

    let mut pool: Vec<usize> = rows.to_vec();
    let mut drawn: Vec<Vec<usize>> = Vec::with_capacity(percentages.len());
    for count in counts {
        let k = count.min(pool.len());
        let chosen = index::sample(rng, pool.len(), k);

        let mut taken = vec![false; pool.len()];
        let mut picked = Vec::with_capacity(k);
        for position in chosen.iter() {
            taken[position] = true;
            picked.push(pool[position]);
        }
        // Remove drawn rows, keeping the pool's original order.
        pool = pool
            .iter()
            .enumerate()
            .filter_map(|(i, &row)| if taken[i] { None } else { Some(row) })
            .collect();
        drawn.push(picked);
    }
    drawn.push(pool);
    drawn
}
