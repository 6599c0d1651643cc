//! Error types for grid construction.

use thiserror::Error;

/// Errors arising from [`DiskGrid`](crate::DiskGrid) construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpaceError {
    /// An axis has fewer than two samples, which would make the cell
    /// spacing a division by zero.
    #[error("{axis} must have at least 2 cells, got {cells}")]
    DegenerateAxis {
        /// Name of the offending axis (`ngrid_xy` or `ngrid_z`).
        axis: &'static str,
        /// The configured cell count.
        cells: usize,
    },
    /// A physical extent is zero, negative, or not finite.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidExtent {
        /// Name of the offending extent (`radius` or `thickness`).
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The total cell count does not fit in `usize`.
    #[error("grid of {ngrid_xy}x{ngrid_xy}x{ngrid_z} cells overflows usize")]
    CellCountOverflow {
        /// In-plane cells per axis.
        ngrid_xy: usize,
        /// Vertical cells.
        ngrid_z: usize,
    },
}
