//! Run reports, export, and determinism fingerprints for Nova simulations.
//!
//! - [`RunReport`] collects the time series and summary statistics of a
//!   finished (or partially run) engine and writes them as JSON or CSV.
//! - [`hit_count_hash`], [`step_result_hash`], and [`config_hash`] give
//!   FNV-1a fingerprints for cheap equality checks between runs.
//! - [`compare_hit_counts`] and [`first_divergent_step`] locate where two
//!   runs stop agreeing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod report;

pub use compare::{compare_hit_counts, first_divergent_step, CellDivergence};
pub use error::ReportError;
pub use hash::{config_hash, hit_count_hash, step_result_hash};
pub use report::RunReport;
