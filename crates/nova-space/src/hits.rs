//! Monotone per-cell hit counters.

use crate::grid::DiskGrid;

/// Per-cell count of how many events have covered each lattice cell.
///
/// Same shape and flat ordering as the [`DiskGrid`] it was built for.
/// The only mutation is [`increment`](Self::increment), so every cell is
/// non-decreasing over the lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitCountGrid {
    shape: [usize; 3],
    counts: Vec<u32>,
}

impl HitCountGrid {
    /// A zeroed counter grid matching `grid`.
    pub fn zeroed(grid: &DiskGrid) -> Self {
        Self {
            shape: grid.shape(),
            counts: vec![0; grid.cell_count()],
        }
    }

    /// Array shape `[ngrid_xy, ngrid_xy, ngrid_z]`.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always `false`: grids have at least 2x2x2 cells.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count at cell `(i, j, k)`.
    pub fn get(&self, i: usize, j: usize, k: usize) -> u32 {
        let [_, ny, nz] = self.shape;
        self.counts[(i * ny + j) * nz + k]
    }

    /// Count at a flat offset.
    pub fn get_flat(&self, flat: usize) -> u32 {
        self.counts[flat]
    }

    /// Add one hit to the cell at `flat`, returning the prior count.
    ///
    /// Saturates at `u32::MAX` rather than wrapping, so counts never
    /// decrease.
    #[inline]
    pub fn increment(&mut self, flat: usize) -> u32 {
        let cell = &mut self.counts[flat];
        let prior = *cell;
        *cell = prior.saturating_add(1);
        prior
    }

    /// Read-only view of all counts in flat row-major order.
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    /// Number of cells hit at least `threshold` times.
    pub fn count_at_least(&self, threshold: u32) -> usize {
        self.counts.iter().filter(|&&c| c >= threshold).count()
    }

    /// Cells with at least one hit.
    pub fn covered_cells(&self) -> usize {
        self.count_at_least(1)
    }

    /// Largest count in the grid (0 for an untouched grid).
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Histogram of non-zero counts.
    ///
    /// Entry `v - 1` holds the number of cells hit exactly `v` times, for
    /// `v` in `1..=max()`. Empty when no cell has been hit.
    pub fn histogram(&self) -> Vec<usize> {
        let mut bins = vec![0usize; self.max() as usize];
        for &c in &self.counts {
            if c > 0 {
                bins[c as usize - 1] += 1;
            }
        }
        bins
    }

    /// Per-threshold cell counts for thresholds `1..=max_threshold` in a
    /// single pass.
    ///
    /// `result[t - 1] == count_at_least(t)`.
    pub fn threshold_counts(&self, max_threshold: u32) -> Vec<usize> {
        let cap = max_threshold as usize;
        // exact[v] = cells with min(count, cap) == v
        let mut exact = vec![0usize; cap + 1];
        for &c in &self.counts {
            exact[(c as usize).min(cap)] += 1;
        }
        let mut at_least = vec![0usize; cap];
        let mut running = 0;
        for t in (1..=cap).rev() {
            running += exact[t];
            at_least[t - 1] = running;
        }
        at_least
    }
}
