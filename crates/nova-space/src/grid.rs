//! Disk-shaped slab discretized into a regular 3-D lattice.

use crate::error::SpaceError;
use nova_core::Point3;

/// A cell coordinate `(i, j, k)`: two in-plane axes and the vertical axis.
pub type CellIndex = (usize, usize, usize);

/// Immutable coordinate model of the simulated volume.
///
/// The lattice spans `[-R, R] x [-R, R] x [-h/2, h/2]` with `ngrid_xy`
/// samples on each in-plane axis and `ngrid_z` samples vertically, both
/// endpoints included. Cell `(i, j, k)` is centred at
/// `(-R + i*dx, -R + j*dy, -h/2 + k*dz)`.
///
/// The domain mask selects cells whose `(x, y)` projection lies inside the
/// disk `x^2 + y^2 <= R^2`; it is identical for every `k`.
///
/// # Examples
///
/// ```
/// use nova_space::DiskGrid;
///
/// let grid = DiskGrid::new(1.0, 1.0, 3, 2).unwrap();
/// assert_eq!(grid.shape(), [3, 3, 2]);
/// // The plus-shaped cross of 5 in-plane cells, replicated on 2 layers.
/// assert_eq!(grid.total_domain_cells(), 10);
/// assert!(!grid.in_domain(0, 0, 0));
/// assert!(grid.in_domain(1, 1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DiskGrid {
    radius: f64,
    thickness: f64,
    ngrid_xy: usize,
    ngrid_z: usize,
    dx: f64,
    dy: f64,
    dz: f64,
    domain_mask: Vec<bool>,
    total_domain_cells: usize,
}

impl DiskGrid {
    /// Build the grid and precompute its domain mask.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::InvalidExtent`] if `radius` or `thickness` is not
    ///   finite and strictly positive.
    /// - [`SpaceError::DegenerateAxis`] if `ngrid_xy < 2` or `ngrid_z < 2`.
    /// - [`SpaceError::CellCountOverflow`] if the lattice is too large to
    ///   index.
    pub fn new(
        radius: f64,
        thickness: f64,
        ngrid_xy: usize,
        ngrid_z: usize,
    ) -> Result<Self, SpaceError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SpaceError::InvalidExtent {
                name: "radius",
                value: radius,
            });
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(SpaceError::InvalidExtent {
                name: "thickness",
                value: thickness,
            });
        }
        if ngrid_xy < 2 {
            return Err(SpaceError::DegenerateAxis {
                axis: "ngrid_xy",
                cells: ngrid_xy,
            });
        }
        if ngrid_z < 2 {
            return Err(SpaceError::DegenerateAxis {
                axis: "ngrid_z",
                cells: ngrid_z,
            });
        }
        let cell_count = ngrid_xy
            .checked_mul(ngrid_xy)
            .and_then(|n| n.checked_mul(ngrid_z))
            .ok_or(SpaceError::CellCountOverflow { ngrid_xy, ngrid_z })?;

        let dx = 2.0 * radius / (ngrid_xy - 1) as f64;
        let dy = dx;
        let dz = thickness / (ngrid_z - 1) as f64;

        let mut grid = Self {
            radius,
            thickness,
            ngrid_xy,
            ngrid_z,
            dx,
            dy,
            dz,
            domain_mask: Vec::with_capacity(cell_count),
            total_domain_cells: 0,
        };

        for i in 0..ngrid_xy {
            let x = grid.x(i);
            for j in 0..ngrid_xy {
                let inside = grid.in_disk(x, grid.y(j));
                grid.domain_mask
                    .extend(std::iter::repeat(inside).take(ngrid_z));
                if inside {
                    grid.total_domain_cells += ngrid_z;
                }
            }
        }

        Ok(grid)
    }

    /// Disk radius `R`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Slab thickness `h`.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Samples per in-plane axis.
    pub fn ngrid_xy(&self) -> usize {
        self.ngrid_xy
    }

    /// Samples on the vertical axis.
    pub fn ngrid_z(&self) -> usize {
        self.ngrid_z
    }

    /// Array shape `[ngrid_xy, ngrid_xy, ngrid_z]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.ngrid_xy, self.ngrid_xy, self.ngrid_z]
    }

    /// Total number of lattice cells, in or out of the domain.
    pub fn cell_count(&self) -> usize {
        self.domain_mask.len()
    }

    /// Cell spacing along x.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell spacing along y. Equal to [`dx`](Self::dx) by symmetry.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Cell spacing along z.
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Physical x coordinate of column `i`.
    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        -self.radius + i as f64 * self.dx
    }

    /// Physical y coordinate of row `j`.
    #[inline]
    pub fn y(&self, j: usize) -> f64 {
        -self.radius + j as f64 * self.dy
    }

    /// Physical z coordinate of layer `k`.
    #[inline]
    pub fn z(&self, k: usize) -> f64 {
        -self.thickness / 2.0 + k as f64 * self.dz
    }

    /// Physical centre of cell `(i, j, k)`.
    pub fn cell_center(&self, i: usize, j: usize, k: usize) -> Point3 {
        Point3::new(self.x(i), self.y(j), self.z(k))
    }

    /// Whether the planar point `(x, y)` lies inside the disk.
    #[inline]
    pub fn in_disk(&self, x: f64, y: f64) -> bool {
        x * x + y * y <= self.radius * self.radius
    }

    /// Flat row-major offset of cell `(i, j, k)`.
    ///
    /// The caller must pass in-bounds indices.
    #[inline]
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.ngrid_xy && j < self.ngrid_xy && k < self.ngrid_z);
        (i * self.ngrid_xy + j) * self.ngrid_z + k
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn unflatten(&self, flat: usize) -> CellIndex {
        let k = flat % self.ngrid_z;
        let ij = flat / self.ngrid_z;
        (ij / self.ngrid_xy, ij % self.ngrid_xy, k)
    }

    /// Domain mask lookup for an in-bounds cell.
    pub fn in_domain(&self, i: usize, j: usize, k: usize) -> bool {
        self.domain_mask[self.flat_index(i, j, k)]
    }

    /// The full domain mask in flat row-major order.
    pub fn domain_mask(&self) -> &[bool] {
        &self.domain_mask
    }

    /// Number of cells inside the domain. Fixed at construction.
    pub fn total_domain_cells(&self) -> usize {
        self.total_domain_cells
    }

    /// Nearest lattice index for a physical point, per axis.
    ///
    /// Computes `round((coord + offset) / spacing)` with ties rounded to
    /// even. Results are signed and may lie outside the grid for points
    /// outside the lattice extent.
    pub fn nearest_index(&self, p: &Point3) -> [i64; 3] {
        [
            ((p.x + self.radius) / self.dx).round_ties_even() as i64,
            ((p.y + self.radius) / self.dy).round_ties_even() as i64,
            ((p.z + self.thickness / 2.0) / self.dz).round_ties_even() as i64,
        ]
    }
}
