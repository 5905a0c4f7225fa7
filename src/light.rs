//! Point light source.

use crate::vector::Vector3;

/// White point light of unit intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Position of the light in world coordinates.
    pub position: Vector3,
}

impl PointLight {
    /// Create a light at `position`.
    pub fn new(position: Vector3) -> Self {
        Self { position }
    }

    /// Unit vector from `point` towards the light, zero if `point` is at the light.
    pub fn direction_from(&self, point: Vector3) -> Vector3 {
        crate::vector::unit_or_zero(self.position - point)
    }
}
