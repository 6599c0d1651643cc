//! Benchmark profiles for the Nova simulator.
//!
//! - [`reference_profile`]: 20x20x10 lattice, 20 000 events per interval.
//! - [`galaxy_profile`]: the full default lattice (200x200x50) with
//!   civilizations enabled.
//!
//! Both profiles set an interval cap far beyond any benchmark so engines
//! never reach the completed state mid-measurement.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nova_engine::SimConfig;

const UNBOUNDED_INTERVALS: u64 = u64::MAX / 2;

/// Small disk, coarse lattice, no civilizations.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        num_intervals: UNBOUNDED_INTERVALS,
        interval_years: 1e6,
        rate_per_year: 0.02,
        radius: 1000.0,
        thickness: 100.0,
        bubble_r: 50.0,
        ngrid_xy: 20,
        ngrid_z: 10,
        max_threshold: 5,
        simulate_civilizations: false,
        civ_emergence_rate: 0.0,
        seed: Some(seed),
    }
}

/// Default galaxy-scale run with civilizations.
///
/// Emergence is raised well above the default so the extinction scan has
/// a population to work through.
pub fn galaxy_profile(seed: u64) -> SimConfig {
    SimConfig {
        num_intervals: UNBOUNDED_INTERVALS,
        civ_emergence_rate: 1e-4,
        seed: Some(seed),
        ..SimConfig::default()
    }
}
