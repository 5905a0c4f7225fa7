//! Scene description and render settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML scene file,
//! then command line overrides applied by the binary.
//!
//! ```toml
//! [image]
//! width = 800
//! height = 600
//! output = "output.png"
//!
//! [sphere]
//! center = [0.0, 0.0, -5.0]
//! radius = 2.0
//! color = [255, 0, 0]
//!
//! [light]
//! position = [0.0, 0.0, -10.0]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::Rgb;
use log::warn;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::light::PointLight;
use crate::output::output_format;
use crate::ray::Ray;
use crate::shading;
use crate::sphere::Sphere;
use crate::vector::Vector3;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default output file.
pub const DEFAULT_OUTPUT: &str = "output.png";
/// Largest width or height accepted; PNG and BMP store sides as signed 32-bit values.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Bytes per pixel of the 8-bit RGB buffer.
const BYTES_PER_PIXEL: u64 = 3;

/// The single sphere and single light being rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// The only object in the scene.
    pub sphere: Sphere,
    /// The only light in the scene.
    pub light: PointLight,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            sphere: Sphere::new(Vector3::new(0.0, 0.0, -5.0), 2.0, Rgb([255, 0, 0])),
            light: PointLight::new(Vector3::new(0.0, 0.0, -10.0)),
        }
    }
}

impl Scene {
    /// Color seen along `ray`.
    pub fn trace(&self, ray: &Ray) -> Rgb<u8> {
        shading::trace(ray, &self.sphere, &self.light)
    }
}

/// Everything needed for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Output image path; the extension selects the encoder.
    pub output: PathBuf,
    /// Scene contents.
    pub scene: Scene,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            scene: Scene::default(),
        }
    }
}

impl RenderConfig {
    /// Overwrite every setting present in `file`.
    pub fn apply_file(&mut self, file: SceneFile) {
        let SceneFile { image, sphere, light } = file;

        if let Some(width) = image.width {
            self.width = width;
        }
        if let Some(height) = image.height {
            self.height = height;
        }
        if let Some(output) = image.output {
            self.output = output;
        }

        if let Some(center) = sphere.center {
            self.scene.sphere.center = Vector3::from_array(center);
        }
        if let Some(radius) = sphere.radius {
            self.scene.sphere.radius = radius;
        }
        if let Some(color) = sphere.color {
            self.scene.sphere.color = Rgb(color);
        }

        if let Some(position) = light.position {
            self.scene.light.position = Vector3::from_array(position);
        }
    }

    /// Reject settings that cannot produce an image.
    ///
    /// A non-positive sphere radius is allowed but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if !fits_in_buffer(self.width, self.height) {
            return Err(ConfigError::ImageTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        output_format(&self.output)?;

        if self.scene.sphere.radius <= 0.0 {
            warn!(
                "Sphere radius {} is not positive; the sphere will be at most a point",
                self.scene.sphere.radius
            );
        }
        Ok(())
    }
}

/// Whether a `width` x `height` RGB buffer is addressable and within encoder limits.
fn fits_in_buffer(width: u32, height: u32) -> bool {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return false;
    }
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .is_some_and(|len| usize::try_from(len).is_ok())
}

/// Contents of a TOML scene file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneFile {
    /// `[image]` table.
    pub image: ImageTable,
    /// `[sphere]` table.
    pub sphere: SphereTable,
    /// `[light]` table.
    pub light: LightTable,
}

/// `[image]` table of a scene file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ImageTable {
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Output image path.
    pub output: Option<PathBuf>,
}

/// `[sphere]` table of a scene file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SphereTable {
    /// Center as `[x, y, z]`.
    pub center: Option<[f64; 3]>,
    /// Radius.
    pub radius: Option<f64>,
    /// Surface color as `[r, g, b]`, each 0-255.
    pub color: Option<[u8; 3]>,
}

/// `[light]` table of a scene file.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LightTable {
    /// Position as `[x, y, z]`.
    pub position: Option<[f64; 3]>,
}

impl SceneFile {
    /// Parse a scene from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
