//! Area-uniform point sampling inside the disk slab.
//!
//! The planar radius is drawn as `r = R * sqrt(u)` with `u ~ U(0, 1)`.
//! Area grows with `r^2`, so the square root is what makes the density
//! uniform per unit area; `r = R * u` would crowd points toward the
//! centre.

use nova_core::Point3;
use nova_space::DiskGrid;
use rand::Rng;
use std::f64::consts::TAU;

/// Draws points uniformly distributed by area in the disk of radius `R`
/// and uniformly in height over `[-h/2, h/2)`.
///
/// Used identically for supernova placement and civilization emergence.
/// Each sample consumes exactly three draws in the fixed order
/// `theta, u, z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventSampler {
    radius: f64,
    half_thickness: f64,
}

impl EventSampler {
    /// A sampler over the volume covered by `grid`.
    ///
    /// `DiskGrid` construction already guarantees a finite, positive
    /// radius and thickness, so every sampling range is non-empty.
    pub fn for_grid(grid: &DiskGrid) -> Self {
        Self {
            radius: grid.radius(),
            half_thickness: grid.thickness() / 2.0,
        }
    }

    /// Disk radius `R`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Slab thickness `h`.
    pub fn thickness(&self) -> f64 {
        self.half_thickness * 2.0
    }

    /// Draw one point.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point3 {
        let theta: f64 = rng.gen_range(0.0..TAU);
        let u: f64 = rng.gen();
        let r = self.radius * u.sqrt();
        let z: f64 = rng.gen_range(-self.half_thickness..self.half_thickness);
        Point3::new(r * theta.cos(), r * theta.sin(), z)
    }
}
