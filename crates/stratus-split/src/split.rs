//! Split orchestration: stratum iteration, allocation, and invariant checks.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use stratus_frame::{Frame, RowId};

use crate::allocate::{self, RunningTotals};
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::result::SplitResult;
use crate::strata;

/// Run the full stratified split: partition into strata, allocate each
/// stratum across the splits, and validate the completeness invariant.
///
/// # Panics
///
/// Panics if the per-split index lists do not partition the input rows
/// exactly. That state indicates an internal bug (a record dropped or
/// double-counted), never a user input error.
#[instrument(skip(frame, config), fields(n_rows = frame.n_rows(), n_splits = config.n_splits()))]
pub(crate) fn run(frame: &Frame, config: &SplitConfig) -> Result<SplitResult, SplitError> {
    let strata = strata::partition(
        frame,
        config.class_column(),
        config.stratify_columns(),
        config.dbscan(),
    )?;

    // Strata arrive grouped by class, so distinct classes are contiguous.
    let mut n_classes = 0usize;
    let mut last_class: Option<&Option<stratus_frame::GroupKey>> = None;
    for stratum in &strata {
        if last_class != Some(&stratum.class) {
            n_classes += 1;
            last_class = Some(&stratum.class);
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed());
    let mut totals = RunningTotals::new(config.n_splits());
    let mut splits: Vec<Vec<usize>> = vec![Vec::new(); config.n_splits()];

    for stratum in &strata {
        let drawn = allocate::allocate_stratum(&stratum.rows, config.percentages(), &totals, &mut rng);
        totals.record(&drawn);
        debug!(
            class = ?stratum.class,
            cluster = %stratum.cluster,
            size = stratum.rows.len(),
            "stratum allocated"
        );
        for (split, rows) in drawn.into_iter().enumerate() {
            splits[split].extend(rows);
        }
    }

    // Completeness invariant: every input row in exactly one split.
    let total: usize = splits.iter().map(Vec::len).sum();
    assert_eq!(
        total,
        frame.n_rows(),
        "every record must be assigned to exactly one split"
    );
    let mut seen = vec![false; frame.n_rows()];
    for &row in splits.iter().flatten() {
        assert!(!seen[row], "record {row} assigned to more than one split");
        seen[row] = true;
    }

    let row_ids = frame.row_ids();
    let splits: Vec<Vec<RowId>> = splits
        .into_iter()
        .map(|rows| rows.into_iter().map(|row| row_ids[row].clone()).collect())
        .collect();

    info!(
        sizes = ?splits.iter().map(Vec::len).collect::<Vec<_>>(),
        n_strata = strata.len(),
        n_classes,
        "split complete"
    );

    Ok(SplitResult {
        splits,
        n_records: frame.n_rows(),
        n_strata: strata.len(),
        n_classes,
    })
}
