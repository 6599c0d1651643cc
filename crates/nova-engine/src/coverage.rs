//! Cumulative coverage fractions per hit-count threshold.

use indexmap::IndexMap;
use nova_space::HitCountGrid;

/// Fraction of domain cells hit at least `t` times, keyed by `t` in
/// ascending order `1..=max_threshold`.
pub type CoverageMap = IndexMap<u32, f64>;

/// `covered / total`, or `0.0` for an empty domain.
///
/// A grid so coarse that no cell centre lies inside the disk (for example
/// `ngrid_xy = 2`, where every column sits on a corner) has no domain to
/// cover; reporting zero keeps the series finite.
pub fn coverage_fraction(covered: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        covered as f64 / total as f64
    }
}

/// Per-threshold time series of coverage fractions.
///
/// One value is appended per threshold on every [`record`](Self::record),
/// so all series always have the same length as the number of completed
/// intervals.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageHistory {
    series: Vec<Vec<f64>>,
}

impl CoverageHistory {
    /// An empty history tracking thresholds `1..=max_threshold`.
    pub fn new(max_threshold: u32) -> Self {
        Self {
            series: vec![Vec::new(); max_threshold as usize],
        }
    }

    /// Highest tracked threshold.
    pub fn max_threshold(&self) -> u32 {
        self.series.len() as u32
    }

    /// Compute coverage for the current hit counts, append it to every
    /// series, and return it as a map.
    pub fn record(&mut self, hits: &HitCountGrid, total_domain_cells: usize) -> CoverageMap {
        let counts = hits.threshold_counts(self.max_threshold());
        let mut map = CoverageMap::with_capacity(counts.len());
        for (t, (covered, series)) in counts.into_iter().zip(&mut self.series).enumerate() {
            let fraction = coverage_fraction(covered, total_domain_cells);
            series.push(fraction);
            map.insert(t as u32 + 1, fraction);
        }
        map
    }

    /// Series for threshold `t`, or `None` if `t` is not tracked.
    pub fn series(&self, t: u32) -> Option<&[f64]> {
        let idx = (t as usize).checked_sub(1)?;
        self.series.get(idx).map(Vec::as_slice)
    }

    /// Iterate `(threshold, series)` pairs in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[f64])> + '_ {
        self.series
            .iter()
            .enumerate()
            .map(|(idx, s)| (idx as u32 + 1, s.as_slice()))
    }

    /// Number of recorded intervals.
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// Whether no interval has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coverage map at a past interval position (0-based), if recorded.
    pub fn at(&self, position: usize) -> Option<CoverageMap> {
        if position >= self.len() {
            return None;
        }
        Some(
            self.iter()
                .map(|(t, s)| (t, s[position]))
                .collect::<CoverageMap>(),
        )
    }

    /// Copy of the full history keyed by threshold.
    pub fn to_map(&self) -> IndexMap<u32, Vec<f64>> {
        self.iter().map(|(t, s)| (t, s.to_vec())).collect()
    }
}
