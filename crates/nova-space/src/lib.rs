//! Spatial data structures for Nova simulations.
//!
//! This crate defines [`DiskGrid`], the immutable coordinate model of a
//! disk-shaped slab discretized into a regular 3-D lattice, and
//! [`HitCountGrid`], the monotone per-cell counter that events stamp into.
//!
//! # Layout
//!
//! Both structures are stored flat in row-major `(i, j, k)` order, where
//! `i` and `j` index the in-plane axes and `k` the vertical axis. Use
//! [`DiskGrid::flat_index`] to convert.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod hits;

pub use error::SpaceError;
pub use grid::{CellIndex, DiskGrid};
pub use hits::HitCountGrid;
