//! Bounded-window hit-count update ("bubble stamping").
//!
//! An event at `(x0, y0, z0)` covers every cell centre within `bubble_r`.
//! Instead of scanning the whole lattice, the stamper visits only the
//! index box `[-rx, rx] x [-ry, ry] x [-rz, rz]` around the nearest cell,
//! where `r* = ceil(bubble_r / d*)`. That box always contains the sphere,
//! so the cost per event is `O(rx * ry * rz)` regardless of grid size.
//! Each axis range is also intersected with the lattice up front, so a
//! bubble larger than the grid costs no more than one full scan.
//!
//! Candidates are filtered in three stages:
//!
//! 1. **Boundary clipping**: indices outside `[0, n - 1]` on any axis are
//!    skipped. This is the normal case near the lattice edge, not an error.
//! 2. **Disk check**: columns whose `(x, y)` centre lies outside the disk
//!    are skipped. This recomputes the geometry directly instead of
//!    reading the domain mask.
//! 3. **Sphere check**: squared distance to the event centre against
//!    `bubble_r^2`.

use std::ops::RangeInclusive;

use nova_core::Point3;
use nova_space::{DiskGrid, HitCountGrid, SpaceError};

/// Outcome of stamping one event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StampReport {
    /// Cells incremented by this event.
    pub cells_hit: usize,
    /// Cells that went from zero to one hit.
    pub first_hits: usize,
}

/// Applies a fixed-radius lethal bubble to a [`HitCountGrid`].
///
/// Window extents are derived once from the grid spacing at construction
/// and reused for every event.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleStamper {
    bubble_r: f64,
    bubble_r2: f64,
    rx: i64,
    ry: i64,
    rz: i64,
}

/// Map a candidate index onto an axis of length `len`.
///
/// Returns `None` when the index falls outside the lattice; the caller
/// skips that candidate.
#[inline]
fn clip_axis(idx: i64, len: usize) -> Option<usize> {
    if idx < 0 || idx >= len as i64 {
        None
    } else {
        Some(idx as usize)
    }
}

/// Candidate indices `[center - half, center + half]` intersected with
/// `[0, len - 1]`.
///
/// Empty when the window misses the axis entirely. Saturating arithmetic
/// keeps huge windows and far-off centres from overflowing.
#[inline]
fn axis_span(center: i64, half: i64, len: usize) -> RangeInclusive<i64> {
    let lo = center.saturating_sub(half).max(0);
    let hi = center.saturating_add(half).min(len as i64 - 1);
    lo..=hi
}

impl BubbleStamper {
    /// Build a stamper for `grid` with lethal radius `bubble_r`.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidExtent`] if `bubble_r` is not finite
    /// and strictly positive.
    pub fn new(grid: &DiskGrid, bubble_r: f64) -> Result<Self, SpaceError> {
        if !bubble_r.is_finite() || bubble_r <= 0.0 {
            return Err(SpaceError::InvalidExtent {
                name: "bubble_r",
                value: bubble_r,
            });
        }
        Ok(Self {
            bubble_r,
            bubble_r2: bubble_r * bubble_r,
            rx: (bubble_r / grid.dx()).ceil() as i64,
            ry: (bubble_r / grid.dy()).ceil() as i64,
            rz: (bubble_r / grid.dz()).ceil() as i64,
        })
    }

    /// The lethal radius.
    pub fn bubble_r(&self) -> f64 {
        self.bubble_r
    }

    /// Half-window extents `[rx, ry, rz]` in cells.
    pub fn window(&self) -> [i64; 3] {
        [self.rx, self.ry, self.rz]
    }

    /// Increment every in-disk cell whose centre lies within `bubble_r`
    /// of `center`.
    ///
    /// Each cell is touched at most once per call. `hits` must have been
    /// built from the same `grid`.
    pub fn stamp(&self, grid: &DiskGrid, hits: &mut HitCountGrid, center: &Point3) -> StampReport {
        debug_assert_eq!(hits.shape(), grid.shape(), "hit grid / lattice mismatch");

        let [ci, cj, ck] = grid.nearest_index(center);
        let nxy = grid.ngrid_xy();
        let nz = grid.ngrid_z();
        let mut report = StampReport::default();

        for ii in axis_span(ci, self.rx, nxy) {
            let i = match clip_axis(ii, nxy) {
                Some(i) => i,
                None => continue,
            };
            let x = grid.x(i);
            let ddx = x - center.x;

            for jj in axis_span(cj, self.ry, nxy) {
                let j = match clip_axis(jj, nxy) {
                    Some(j) => j,
                    None => continue,
                };
                let y = grid.y(j);
                if !grid.in_disk(x, y) {
                    continue;
                }
                let ddy = y - center.y;
                let planar2 = ddx * ddx + ddy * ddy;

                for kk in axis_span(ck, self.rz, nz) {
                    let k = match clip_axis(kk, nz) {
                        Some(k) => k,
                        None => continue,
                    };
                    let ddz = grid.z(k) - center.z;
                    if planar2 + ddz * ddz <= self.bubble_r2 {
                        let prior = hits.increment(grid.flat_index(i, j, k));
                        report.cells_hit += 1;
                        if prior == 0 {
                            report.first_hits += 1;
                        }
                    }
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::EventSampler;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Unit-spaced lattice: R = 10 with 21 columns, h = 10 with 11 layers.
    fn unit_grid() -> DiskGrid {
        DiskGrid::new(10.0, 10.0, 21, 11).unwrap()
    }

    /// Full-grid reference: every in-domain cell within the sphere.
    fn brute_force(grid: &DiskGrid, center: &Point3, bubble_r: f64) -> Vec<usize> {
        let r2 = bubble_r * bubble_r;
        (0..grid.cell_count())
            .filter(|&flat| {
                let (i, j, k) = grid.unflatten(flat);
                grid.in_domain(i, j, k) && grid.cell_center(i, j, k).distance_sq(center) <= r2
            })
            .collect()
    }

    #[test]
    fn rejects_invalid_radius() {
        let grid = unit_grid();
        assert!(BubbleStamper::new(&grid, 0.0).is_err());
        assert!(BubbleStamper::new(&grid, -1.0).is_err());
        assert!(BubbleStamper::new(&grid, f64::INFINITY).is_err());
    }

    #[test]
    fn window_uses_ceiling_of_radius_over_spacing() {
        let grid = DiskGrid::new(1000.0, 100.0, 20, 10).unwrap();
        let stamper = BubbleStamper::new(&grid, 50.0).unwrap();
        // dx = 2000/19 ~ 105.3, dz = 100/9 ~ 11.1
        assert_eq!(stamper.window(), [1, 1, 5]);
    }

    #[test]
    fn tiny_bubble_hits_single_cell() {
        let grid = unit_grid();
        let mut hits = HitCountGrid::zeroed(&grid);
        let stamper = BubbleStamper::new(&grid, 0.5).unwrap();
        let center = Point3::new(0.0, 0.0, 0.0);

        let first = stamper.stamp(&grid, &mut hits, &center);
        assert_eq!(first, StampReport { cells_hit: 1, first_hits: 1 });
        assert_eq!(hits.get(10, 10, 5), 1);

        let second = stamper.stamp(&grid, &mut hits, &center);
        assert_eq!(second, StampReport { cells_hit: 1, first_hits: 0 });
        assert_eq!(hits.get(10, 10, 5), 2);
    }

    #[test]
    fn unit_bubble_hits_centre_and_six_neighbours() {
        let grid = unit_grid();
        let mut hits = HitCountGrid::zeroed(&grid);
        let stamper = BubbleStamper::new(&grid, 1.0).unwrap();
        let report = stamper.stamp(&grid, &mut hits, &Point3::new(0.0, 0.0, 0.0));
        assert_eq!(report.cells_hit, 7);
        assert_eq!(report.first_hits, 7);
        assert_eq!(hits.get(11, 10, 5), 1);
        assert_eq!(hits.get(10, 10, 6), 1);
        assert_eq!(hits.get(11, 11, 5), 0);
    }

    #[test]
    fn rim_event_clips_without_touching_outside_cells() {
        let grid = unit_grid();
        let mut hits = HitCountGrid::zeroed(&grid);
        let stamper = BubbleStamper::new(&grid, 4.0).unwrap();
        // On the rim and at the top of the slab: most of the window is
        // outside the lattice or outside the disk.
        let center = Point3::new(10.0, 0.0, 5.0);
        let report = stamper.stamp(&grid, &mut hits, &center);
        assert!(report.cells_hit > 0);
        for (flat, &c) in hits.as_slice().iter().enumerate() {
            if c > 0 {
                let (i, j, k) = grid.unflatten(flat);
                assert!(grid.in_domain(i, j, k), "stamped outside domain at {:?}", (i, j, k));
            }
        }
        assert_eq!(report.cells_hit, brute_force(&grid, &center, 4.0).len());
    }

    #[test]
    fn bubble_larger_than_grid_covers_whole_domain() {
        let grid = unit_grid();
        let mut hits = HitCountGrid::zeroed(&grid);
        let stamper = BubbleStamper::new(&grid, 20.0).unwrap();
        let report = stamper.stamp(&grid, &mut hits, &Point3::new(0.0, 0.0, 0.0));
        assert_eq!(report.cells_hit, grid.total_domain_cells());
        assert_eq!(hits.covered_cells(), grid.total_domain_cells());
    }

    #[test]
    fn axis_span_intersects_window_with_axis() {
        assert_eq!(axis_span(5, 2, 10), 3..=7);
        assert_eq!(axis_span(0, 3, 10), 0..=3);
        assert_eq!(axis_span(9, 3, 10), 6..=9);
        assert_eq!(axis_span(4, i64::MAX, 10), 0..=9);
        assert!(axis_span(-20, 3, 10).is_empty());
        assert!(axis_span(i64::MAX, 1, 10).is_empty());
    }

    #[test]
    fn enormous_bubble_costs_one_grid_scan() {
        // A window of ~1e9 cells per axis: only the clamped span is visited.
        let grid = unit_grid();
        let mut hits = HitCountGrid::zeroed(&grid);
        let stamper = BubbleStamper::new(&grid, 1e9).unwrap();
        assert!(stamper.window()[0] >= 1_000_000_000);
        let report = stamper.stamp(&grid, &mut hits, &Point3::new(3.0, -2.0, 1.0));
        assert_eq!(report.cells_hit, grid.total_domain_cells());
        assert_eq!(report.first_hits, grid.total_domain_cells());
    }

    #[test]
    fn event_off_the_lattice_hits_only_reachable_cells() {
        let grid = unit_grid();
        let mut hits = HitCountGrid::zeroed(&grid);
        let stamper = BubbleStamper::new(&grid, 3.0).unwrap();
        let far = Point3::new(1e12, 0.0, 0.0);
        assert_eq!(stamper.stamp(&grid, &mut hits, &far).cells_hit, 0);
        let rim = Point3::new(11.5, 0.0, 0.0);
        assert_eq!(
            stamper.stamp(&grid, &mut hits, &rim).cells_hit,
            brute_force(&grid, &rim, 3.0).len()
        );
    }

    proptest! {
        #[test]
        fn window_scan_matches_full_scan(
            seed in any::<u64>(),
            bubble_r in 0.3f64..6.0,
        ) {
            let grid = unit_grid();
            let sampler = EventSampler::for_grid(&grid);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let center = sampler.sample(&mut rng);

            let stamper = BubbleStamper::new(&grid, bubble_r).unwrap();
            let mut hits = HitCountGrid::zeroed(&grid);
            let report = stamper.stamp(&grid, &mut hits, &center);

            let expected = brute_force(&grid, &center, bubble_r);
            prop_assert_eq!(report.cells_hit, expected.len());
            prop_assert_eq!(report.first_hits, expected.len());
            for flat in expected {
                prop_assert_eq!(hits.get_flat(flat), 1);
            }
            prop_assert_eq!(hits.covered_cells(), report.cells_hit);
        }
    }
}
