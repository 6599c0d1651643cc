//! Hashing utilities for run comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state.
//! These hashes are not cryptographically secure; they exist for quick
//! equality checks between runs that should be identical.

use nova_engine::{SimConfig, StepResult};
use nova_space::HitCountGrid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_f64(hash: u64, v: f64) -> u64 {
    fnv1a_u64(hash, v.to_bits())
}

/// Hash every cell count together with the grid shape.
///
/// Two grids hash equal only if their shapes and all counts match (up to
/// FNV collisions).
pub fn hit_count_hash(hits: &HitCountGrid) -> u64 {
    let mut hash = FNV_OFFSET;
    for dim in hits.shape() {
        hash = fnv1a_u64(hash, dim as u64);
    }
    for &c in hits.as_slice() {
        hash = fnv1a_u32(hash, c);
    }
    hash
}

/// Hash one step result: interval, supernova total, civilization count,
/// and every `(threshold, fraction)` pair in order.
///
/// Fractions are hashed by bit pattern, so `0.0` and `-0.0` differ.
pub fn step_result_hash(result: &StepResult) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, result.interval.0);
    hash = fnv1a_u64(hash, result.supernovae);
    // Presence flag, then the value, so `None` and `Some(0)` differ.
    match result.civ_count {
        Some(n) => {
            hash = fnv1a_byte(hash, 1);
            hash = fnv1a_u64(hash, n as u64);
        }
        None => hash = fnv1a_byte(hash, 0),
    }
    for (&t, &c) in &result.coverage {
        hash = fnv1a_u32(hash, t);
        hash = fnv1a_f64(hash, c);
    }
    hash
}

/// Hash the parameters that determine a trajectory.
///
/// `seed` is passed separately because a configuration without a seed is
/// resolved by the engine at construction.
pub fn config_hash(config: &SimConfig, seed: u64) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, seed);
    hash = fnv1a_u64(hash, config.num_intervals);
    hash = fnv1a_f64(hash, config.interval_years);
    hash = fnv1a_f64(hash, config.rate_per_year);
    hash = fnv1a_f64(hash, config.radius);
    hash = fnv1a_f64(hash, config.thickness);
    hash = fnv1a_f64(hash, config.bubble_r);
    hash = fnv1a_u64(hash, config.ngrid_xy as u64);
    hash = fnv1a_u64(hash, config.ngrid_z as u64);
    hash = fnv1a_u32(hash, config.max_threshold);
    hash = fnv1a_byte(hash, config.simulate_civilizations as u8);
    hash = fnv1a_f64(hash, config.civ_emergence_rate);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use nova_core::IntervalId;
    use nova_space::DiskGrid;

    fn result(civ_count: Option<usize>) -> StepResult {
        let mut coverage = IndexMap::new();
        coverage.insert(1, 0.5);
        coverage.insert(2, 0.25);
        StepResult {
            interval: IntervalId(3),
            coverage,
            civ_count,
            supernovae: 40,
        }
    }

    #[test]
    fn hit_count_hash_tracks_counts() {
        let grid = DiskGrid::new(1.0, 1.0, 3, 2).unwrap();
        let mut a = HitCountGrid::zeroed(&grid);
        let b = a.clone();
        assert_eq!(hit_count_hash(&a), hit_count_hash(&b));
        a.increment(4);
        assert_ne!(hit_count_hash(&a), hit_count_hash(&b));
    }

    #[test]
    fn hit_count_hash_includes_shape() {
        // 4x4x2 and 2x2x8 both hold 32 zeroed cells.
        let a = HitCountGrid::zeroed(&DiskGrid::new(1.0, 1.0, 4, 2).unwrap());
        let b = HitCountGrid::zeroed(&DiskGrid::new(1.0, 1.0, 2, 8).unwrap());
        assert_eq!(a.len(), b.len());
        assert_ne!(hit_count_hash(&a), hit_count_hash(&b));
    }

    #[test]
    fn step_result_hash_distinguishes_missing_civ_count() {
        assert_ne!(
            step_result_hash(&result(None)),
            step_result_hash(&result(Some(0)))
        );
        assert_eq!(
            step_result_hash(&result(Some(7))),
            step_result_hash(&result(Some(7)))
        );
    }

    #[test]
    fn step_result_hash_depends_on_coverage() {
        let a = result(None);
        let mut b = a.clone();
        b.coverage.insert(2, 0.26);
        assert_ne!(step_result_hash(&a), step_result_hash(&b));
    }

    #[test]
    fn config_hash_depends_on_seed_and_params() {
        let cfg = SimConfig::default();
        assert_eq!(config_hash(&cfg, 1), config_hash(&cfg, 1));
        assert_ne!(config_hash(&cfg, 1), config_hash(&cfg, 2));
        let other = SimConfig {
            bubble_r: 51.0,
            ..cfg.clone()
        };
        assert_ne!(config_hash(&cfg, 1), config_hash(&other, 1));
    }
}
