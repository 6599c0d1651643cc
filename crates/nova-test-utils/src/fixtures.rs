//! Reusable simulation configurations.
//!
//! - [`scenario_config`]: the reference run (20x20x10 lattice, 5 intervals,
//!   civilizations off).
//! - [`small_config`]: a coarse lattice with many cheap events.
//! - [`civ_config`]: dense events and emergence so extinction happens
//!   within a few intervals.

use nova_engine::SimConfig;

/// R = 1000, h = 100, 20x20x10 cells, bubble 50, 20 000 expected events
/// per interval, 5 intervals, seed 1, civilizations off.
pub fn scenario_config() -> SimConfig {
    SimConfig {
        num_intervals: 5,
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
        seed: Some(1),
    }
}

pub fn small_config(seed: u64) -> SimConfig {
    SimConfig {
        num_intervals: 12,
        interval_years: 1.0,
        rate_per_year: 30.0,
        radius: 100.0,
        thickness: 20.0,
        bubble_r: 15.0,
        ngrid_xy: 16,
        ngrid_z: 6,
        max_threshold: 4,
        simulate_civilizations: false,
        civ_emergence_rate: 0.0,
        seed: Some(seed),
    }
}

pub fn civ_config(seed: u64) -> SimConfig {
    SimConfig {
        num_intervals: 10,
        rate_per_year: 20.0,
        bubble_r: 25.0,
        simulate_civilizations: true,
        civ_emergence_rate: 15.0,
        ..small_config(seed)
    }
}
