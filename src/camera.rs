//! Orthographic camera for ray generation and scene rendering

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::Vector3;

/// Every primary ray looks down the negative z axis.
pub const VIEW_DIRECTION: Vector3 = Vector3::NEG_Z;

/// Orthographic camera on the z = 0 plane.
///
/// Pixel (x, y) maps to a ray starting at (x - W/2, H/2 - y, 0), with the halves
/// computed by integer division, so the image is centered on the z axis with y
/// pointing up. All rays are parallel; one ray is cast per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Camera {
    /// Creates a camera for a `width` x `height` image with the progress bar enabled.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Primary ray through pixel (x, y), with y growing downwards.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let half_width = i64::from(self.image_width / 2);
        let half_height = i64::from(self.image_height / 2);

        let origin = Vector3::new(
            (i64::from(x) - half_width) as f64,
            (half_height - i64::from(y)) as f64,
            0.0,
        );
        Ray::new(origin, VIEW_DIRECTION)
    }

    /// Renders the scene into an 8-bit RGB buffer.
    ///
    /// Pixels are independent, so they are traced in parallel on the current rayon
    /// pool; each worker writes only the pixel it was handed.
    pub fn render(&self, scene: &Scene) -> RgbImage {
        let mut image = RgbImage::new(self.image_width, self.image_height);

        info!(
            "Tracing {}x{} pixels using {} threads...",
            self.image_width,
            self.image_height,
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            *pixel = scene.trace(&self.get_ray(x, y));
            pb.inc(1);
        });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        match ProgressStyle::with_template("{bar:40} {pos}/{len} ETA: {eta}") {
            Ok(style) => pb.set_style(style),
            Err(e) => debug!("Falling back to default progress style: {}", e),
        }
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::PointLight;
    use image::Rgb;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn quiet_camera(width: u32, height: u32) -> Camera {
        Camera::new(width, height).with_progress(false)
    }

    #[test]
    fn pixel_rays_are_centered_and_y_flipped() {
        let camera = quiet_camera(800, 600);

        assert_eq!(camera.get_ray(0, 0).origin, Vector3::new(-400.0, 300.0, 0.0));
        assert_eq!(camera.get_ray(400, 300).origin, Vector3::ZERO);
        assert_eq!(camera.get_ray(799, 599).origin, Vector3::new(399.0, -299.0, 0.0));
        assert_eq!(camera.get_ray(123, 45).direction, VIEW_DIRECTION);
    }

    #[test]
    fn odd_dimensions_use_integer_halves() {
        let camera = quiet_camera(5, 3);
        assert_eq!(camera.get_ray(0, 0).origin, Vector3::new(-2.0, 1.0, 0.0));
        assert_eq!(camera.get_ray(4, 2).origin, Vector3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn render_fills_requested_dimensions() {
        let image = quiet_camera(31, 17).render(&Scene::default());
        assert_eq!(image.dimensions(), (31, 17));
    }

    #[test]
    fn default_scene_center_hits_and_corner_misses() {
        let camera = quiet_camera(800, 600);
        let scene = Scene::default();

        let center = camera.get_ray(400, 300);
        let corner = camera.get_ray(0, 0);
        assert_eq!(scene.sphere.intersect(&center), Some(3.0));
        assert_eq!(scene.sphere.intersect(&corner), None);
        assert_eq!(scene.trace(&corner), BLACK);
    }

    #[test]
    fn default_light_sits_behind_every_visible_point() {
        // The default light is on the far side of the sphere, so the lit
        // hemisphere is never the one the camera sees.
        let image = quiet_camera(40, 30).render(&Scene::default());
        assert!(image.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn lit_center_is_brighter_than_corner() {
        let mut scene = Scene::default();
        scene.light = PointLight::new(Vector3::new(0.0, 0.0, 10.0));

        let image = quiet_camera(800, 600).render(&scene);
        let center = image.get_pixel(400, 300);
        let corner = image.get_pixel(0, 0);

        assert_eq!(*corner, BLACK);
        assert!(center[0] > corner[0], "center {center:?} corner {corner:?}");
        assert_eq!((center[1], center[2]), (0, 0));
    }

    #[test]
    fn render_matches_per_pixel_trace() {
        let mut scene = Scene::default();
        scene.light = PointLight::new(Vector3::new(3.0, 4.0, 2.0));
        let camera = quiet_camera(9, 7);

        let image = camera.render(&scene);
        for (x, y, pixel) in image.enumerate_pixels() {
            assert_eq!(*pixel, scene.trace(&camera.get_ray(x, y)), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn only_pixels_inside_the_disc_are_lit() {
        let mut scene = Scene::default();
        scene.light = PointLight::new(Vector3::new(0.0, 0.0, 10.0));
        let camera = quiet_camera(12, 12);

        let image = camera.render(&scene);
        for (x, y, pixel) in image.enumerate_pixels() {
            let origin = camera.get_ray(x, y).origin;
            if origin.x * origin.x + origin.y * origin.y > 4.0 {
                assert_eq!(*pixel, BLACK, "pixel ({x}, {y}) outside the sphere");
            }
        }
    }
}
