//! 3D vector type used for points and directions.
//!
//! `Vector3` is glam's double-precision vector. Arithmetic maps onto its operators:
//! `a + b`, `a - b`, `v * s`, `a.dot(b)`, `v.length()` (magnitude) and `v.normalize()`.
//! Plain `normalize` is unguarded and yields non-finite components for a zero vector;
//! shading code uses [`unit_or_zero`] instead.

use glam::DVec3;

/// Double-precision 3D vector with value semantics.
pub type Vector3 = DVec3;

/// Normalize `v`, returning the zero vector when `v` has no usable direction.
///
/// A zero, denormal or non-finite magnitude gives `Vector3::ZERO`, so a degenerate
/// direction contributes nothing to a dot product instead of poisoning it with NaN.
pub fn unit_or_zero(v: Vector3) -> Vector3 {
    v.normalize_or_zero()
}
