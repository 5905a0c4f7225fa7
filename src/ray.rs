//! Ray representation for ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, a half-line in 3D space
//! used for intersection testing.

use crate::vector::Vector3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vector3,

    /// Direction vector of the ray.
    ///
    /// Not normalized by the type. Intersection distances are only true distances
    /// when this is unit length, which every ray built by the camera is.
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
