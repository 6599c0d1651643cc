//! Simulation engine for Nova supernova coverage runs.
//!
//! [`SimulationEngine`] owns the grid, the hit counts, the civilization
//! registry, and a single seeded random stream. Each
//! [`step()`](SimulationEngine::step) advances one interval and returns a
//! [`StepResult`], until the configured interval count is reached and the
//! engine reports [`StepOutcome::Completed`].
//!
//! Configuration lives in [`SimConfig`], which can be built in code or
//! parsed from TOML.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coverage;
pub mod engine;
pub mod metrics;

pub use config::{ConfigError, SimConfig};
pub use coverage::{CoverageHistory, CoverageMap};
pub use engine::{SimulationEngine, StepOutcome, StepResult};
pub use metrics::StepMetrics;
