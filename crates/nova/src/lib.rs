//! Nova: Monte Carlo simulation of supernova coverage in a galactic disk.
//!
//! Supernovae occur at random positions in a thin disk. Each one sterilizes
//! a sphere around it, which is recorded in a 3-D hit-count lattice. The
//! simulation reports what fraction of the disk has been hit at least `t`
//! times, and optionally tracks civilizations that emerge at random and
//! die when a bubble reaches them.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Nova sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use nova::prelude::*;
//!
//! let config = SimConfig {
//!     num_intervals: 5,
//!     radius: 1000.0,
//!     thickness: 100.0,
//!     bubble_r: 50.0,
//!     ngrid_xy: 20,
//!     ngrid_z: 10,
//!     simulate_civilizations: false,
//!     seed: Some(1),
//!     ..SimConfig::default()
//! };
//! let mut engine = SimulationEngine::new(config).unwrap();
//! while let StepOutcome::Advanced(result) = engine.step() {
//!     assert!((0.0..=1.0).contains(&result.coverage[&1]));
//! }
//! assert_eq!(engine.current_interval(), IntervalId(5));
//!
//! let report = RunReport::from_engine(&engine);
//! let mut csv = Vec::new();
//! report.write_csv(&mut csv).unwrap();
//! assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nova-core` | IDs and points |
//! | [`space`] | `nova-space` | Disk lattice, domain mask, hit counts |
//! | [`events`] | `nova-events` | Sampling, bubble stamping, civilizations |
//! | [`engine`] | `nova-engine` | Configuration and the interval engine |
//! | [`report`] | `nova-report` | Run reports, export, fingerprints |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers and geometry (`nova-core`).
pub use nova_core as types;

/// Disk lattice and hit counts (`nova-space`).
///
/// [`space::DiskGrid`] fixes the sample points and domain mask;
/// [`space::HitCountGrid`] holds the per-cell counters.
pub use nova_space as space;

/// Event placement and effects (`nova-events`).
///
/// [`events::EventSampler`] places events and newcomers,
/// [`events::BubbleStamper`] applies a bubble to the hit counts, and
/// [`events::CivilizationRegistry`] tracks the population.
pub use nova_events as events;

/// Configuration and the simulation engine (`nova-engine`).
pub use nova_engine as engine;

/// Reports and determinism fingerprints (`nova-report`).
pub use nova_report as report;

/// Common imports for typical Nova usage.
///
/// ```rust
/// use nova::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use nova_core::{CivId, IntervalId, Point3};

    // Space
    pub use nova_space::{DiskGrid, HitCountGrid, SpaceError};

    // Events
    pub use nova_events::{Civilization, CivilizationRegistry};

    // Engine
    pub use nova_engine::{
        ConfigError, CoverageMap, SimConfig, SimulationEngine, StepMetrics, StepOutcome,
        StepResult,
    };

    // Report
    pub use nova_report::{ReportError, RunReport};
}
