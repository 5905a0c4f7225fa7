//! Sphere primitive for ray casting.
//!
//! Implements ray-sphere intersection with the geometric (projection) method.

use image::Rgb;

use crate::ray::Ray;
use crate::vector::Vector3;

/// Sphere primitive defined by center, radius and surface color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vector3,

    /// Radius of the sphere.
    ///
    /// Expected to be positive. Not validated here; scene loading warns about it.
    pub radius: f64,

    /// Surface color as 8-bit RGB channels.
    pub color: Rgb<u8>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector3, radius: f64, color: Rgb<u8>) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Distance along `ray` to the near intersection, or `None` on a miss.
    ///
    /// A ray whose projection of the center falls behind its origin is a miss even
    /// when the origin lies inside the sphere. When the origin is inside and the
    /// center is ahead, the returned distance is negative and still counts as a hit.
    /// The far root is never reported.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        if tca < 0.0 {
            return None;
        }

        let radius2 = self.radius * self.radius;
        let d2 = l.dot(l) - tca * tca;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        Some(tca - thc)
    }
}
