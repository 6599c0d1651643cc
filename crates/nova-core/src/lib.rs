//! Core types for the Nova simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers and the [`Point3`] value type shared by
//! the grid, the event samplers, and the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod point;

pub use id::{CivId, IntervalId};
pub use point::Point3;
