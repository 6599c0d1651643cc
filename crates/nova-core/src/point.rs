//! Physical-space point type.

use serde::{Deserialize, Serialize};

/// A point in physical coordinates (light-years by convention).
///
/// `x` and `y` span the disk plane; `z` is the height within the slab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// In-plane x coordinate.
    pub x: f64,
    /// In-plane y coordinate.
    pub y: f64,
    /// Height above the mid-plane.
    pub z: f64,
}

impl Point3 {
    /// Construct a point from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_sq(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Squared distance of the (x, y) projection from the disk axis.
    #[inline]
    pub fn planar_radius_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_sq_pythagorean() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance_sq(&b), 169.0);
    }

    #[test]
    fn planar_radius_ignores_z() {
        let p = Point3::new(3.0, 4.0, 100.0);
        assert_eq!(p.planar_radius_sq(), 25.0);
    }

    proptest! {
        #[test]
        fn distance_sq_symmetric_and_non_negative(
            ax in -1e4f64..1e4, ay in -1e4f64..1e4, az in -1e4f64..1e4,
            bx in -1e4f64..1e4, by in -1e4f64..1e4, bz in -1e4f64..1e4,
        ) {
            let a = Point3::new(ax, ay, az);
            let b = Point3::new(bx, by, bz);
            prop_assert!(a.distance_sq(&b) >= 0.0);
            prop_assert_eq!(a.distance_sq(&b), b.distance_sq(&a));
            prop_assert_eq!(a.distance_sq(&a), 0.0);
        }
    }
}
