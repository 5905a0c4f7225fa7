//! Lambertian shading of ray hits.
//!
//! A single point light, no ambient, specular, shadow or distance falloff terms.

use image::Rgb;

use crate::light::PointLight;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::{unit_or_zero, Vector3};

/// Color returned for rays that miss the sphere.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Trace a ray against the sphere and shade the hit.
///
/// Returns [`BACKGROUND`] on a miss, otherwise the sphere color scaled by the
/// diffuse term at the hit point.
pub fn trace(ray: &Ray, sphere: &Sphere, light: &PointLight) -> Rgb<u8> {
    let Some(t) = sphere.intersect(ray) else {
        return BACKGROUND;
    };

    let point = ray.at(t);
    let normal = unit_or_zero(point - sphere.center);
    let light_dir = light.direction_from(point);

    shade(sphere.color, diffuse(normal, light_dir))
}

/// Cosine between the surface normal and the light direction, clamped to [0, 1].
///
/// Both inputs are expected to be unit length or zero; a zero vector gives 0.
pub fn diffuse(normal: Vector3, light_dir: Vector3) -> f64 {
    normal.dot(light_dir).clamp(0.0, 1.0)
}

/// Scale each channel of `color` by `factor`, truncating toward zero.
pub fn shade(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    // NaN saturates to 0 in float-to-int casts
    let scale = |channel: u8| (f64::from(channel) * factor).clamp(0.0, 255.0) as u8;
    let Rgb([r, g, b]) = color;
    Rgb([scale(r), scale(g), scale(b)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sphere() -> Sphere {
        Sphere::new(Vector3::new(0.0, 0.0, -5.0), 2.0, Rgb([255, 0, 0]))
    }

    fn forward_ray(x: f64, y: f64) -> Ray {
        Ray::new(Vector3::new(x, y, 0.0), Vector3::NEG_Z)
    }

    #[test]
    fn miss_is_black() {
        let light = PointLight::new(Vector3::new(0.0, 0.0, -10.0));
        assert_eq!(trace(&forward_ray(-400.0, 300.0), &default_sphere(), &light), BACKGROUND);
    }

    #[test]
    fn light_along_normal_returns_full_color() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -5.0), 2.0, Rgb([200, 117, 33]));
        // Front hit point is (0, 0, -3) with normal +z
        let light = PointLight::new(Vector3::new(0.0, 0.0, 5.0));

        assert_eq!(trace(&forward_ray(0.0, 0.0), &sphere, &light), sphere.color);
    }

    #[test]
    fn light_behind_surface_is_black() {
        // Default light sits behind the sphere relative to the front hit point
        let light = PointLight::new(Vector3::new(0.0, 0.0, -10.0));
        assert_eq!(trace(&forward_ray(0.0, 0.0), &default_sphere(), &light), BACKGROUND);
    }

    #[test]
    fn shading_never_exceeds_surface_color() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -5.0), 2.0, Rgb([180, 90, 255]));
        let lights = [
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(5.0, 5.0, 0.0),
            Vector3::new(-3.0, 1.0, -2.0),
            Vector3::new(0.0, 0.0, -10.0),
        ];

        for position in lights {
            let light = PointLight::new(position);
            for y in -2..=2 {
                for x in -2..=2 {
                    let Rgb(out) = trace(&forward_ray(x as f64, y as f64), &sphere, &light);
                    for (channel, surface) in out.iter().zip(sphere.color.0) {
                        assert!(*channel <= surface, "{out:?} brighter than {:?}", sphere.color);
                    }
                }
            }
        }
    }

    #[test]
    fn oblique_light_truncates_channels() {
        // Normal +z at (0, 0, -3); light direction (1, 0, 1)/sqrt(2)
        let light = PointLight::new(Vector3::new(3.0, 0.0, 0.0));
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -5.0), 2.0, Rgb([255, 100, 1]));

        let expected_factor = std::f64::consts::FRAC_1_SQRT_2;
        let expected = Rgb([
            (255.0 * expected_factor) as u8,
            (100.0 * expected_factor) as u8,
            0,
        ]);
        assert_eq!(trace(&forward_ray(0.0, 0.0), &sphere, &light), expected);
    }

    #[test]
    fn degenerate_normal_contributes_nothing() {
        // Zero radius: the hit point coincides with the center
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -5.0), 0.0, Rgb([255, 255, 255]));
        let light = PointLight::new(Vector3::new(0.0, 0.0, 10.0));
        assert_eq!(trace(&forward_ray(0.0, 0.0), &sphere, &light), BACKGROUND);
    }

    #[test]
    fn light_at_hit_point_contributes_nothing() {
        let light = PointLight::new(Vector3::new(0.0, 0.0, -3.0));
        assert_eq!(trace(&forward_ray(0.0, 0.0), &default_sphere(), &light), BACKGROUND);
    }

    #[test]
    fn diffuse_is_clamped() {
        assert_eq!(diffuse(Vector3::Z, Vector3::NEG_Z), 0.0);
        assert_eq!(diffuse(Vector3::Z, Vector3::Z), 1.0);
        assert_eq!(diffuse(Vector3::ZERO, Vector3::Z), 0.0);
    }

    #[test]
    fn shade_handles_out_of_range_factors() {
        assert_eq!(shade(Rgb([255, 10, 0]), 1.0), Rgb([255, 10, 0]));
        assert_eq!(shade(Rgb([255, 10, 0]), 0.5), Rgb([127, 5, 0]));
        assert_eq!(shade(Rgb([255, 10, 0]), f64::NAN), BACKGROUND);
    }
}
