//! Test fixtures and invariant checks for Nova development.
//!
//! Provides standard [`SimConfig`](nova_engine::SimConfig) fixtures and
//! assertion helpers for the properties every run must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod invariants;

pub use fixtures::{civ_config, scenario_config, small_config};
pub use invariants::{
    assert_civilizations_consistent, assert_coverage_ordered, assert_hits_monotonic,
    run_checked,
};
