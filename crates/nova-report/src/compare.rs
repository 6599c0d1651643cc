//! Run comparison.
//!
//! Hash-first comparison with a cell-exact fallback, mirroring how one
//! would bisect a determinism failure: find the first step whose result
//! differs, then list the cells whose counts disagree.

use nova_engine::StepResult;
use nova_space::{CellIndex, DiskGrid, HitCountGrid};

use crate::hash::{hit_count_hash, step_result_hash};

/// One cell whose hit count differs between two runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// Flat offset of the cell.
    pub flat: usize,
    /// `(i, j, k)` of the cell.
    pub cell: CellIndex,
    /// Count in the reference run.
    pub recorded: u32,
    /// Count in the run under test.
    pub replayed: u32,
}

/// Compare two hit-count grids built on `grid`.
///
/// Returns an empty vector when the fingerprints match. Otherwise lists
/// every cell whose count differs, in flat order.
///
/// # Panics
///
/// Panics if either grid does not match the shape of `grid`.
pub fn compare_hit_counts(
    grid: &DiskGrid,
    recorded: &HitCountGrid,
    replayed: &HitCountGrid,
) -> Vec<CellDivergence> {
    assert_eq!(recorded.shape(), grid.shape(), "recorded grid shape mismatch");
    assert_eq!(replayed.shape(), grid.shape(), "replayed grid shape mismatch");

    if hit_count_hash(recorded) == hit_count_hash(replayed) {
        return Vec::new();
    }
    recorded
        .as_slice()
        .iter()
        .zip(replayed.as_slice())
        .enumerate()
        .filter(|(_, (r, p))| r != p)
        .map(|(flat, (&recorded, &replayed))| CellDivergence {
            flat,
            cell: grid.unflatten(flat),
            recorded,
            replayed,
        })
        .collect()
}

/// Position of the first step at which two result sequences differ.
///
/// A length mismatch counts as divergence at the end of the shorter
/// sequence. Returns `None` when the sequences are identical.
pub fn first_divergent_step(recorded: &[StepResult], replayed: &[StepResult]) -> Option<usize> {
    let common = recorded.len().min(replayed.len());
    for pos in 0..common {
        let (a, b) = (&recorded[pos], &replayed[pos]);
        if step_result_hash(a) != step_result_hash(b) || a != b {
            return Some(pos);
        }
    }
    if recorded.len() != replayed.len() {
        Some(common)
    } else {
        None
    }
}
