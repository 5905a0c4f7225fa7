use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use image::Rgb;
use log::LevelFilter;

use spheretracer::scene::RenderConfig;
use spheretracer::vector::Vector3;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
///
/// Scene options left unset fall back to the scene file, then to built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "spheretracer")]
#[command(about = "Ray trace a single diffuse sphere lit by a point light")]
pub struct Args {
    /// TOML scene file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels [default: 800]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Image height in pixels [default: 600]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Output file path; .png, .bmp, .ppm or .tiff [default: output.png]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Point light position as x,y,z [default: 0,0,-10]
    #[arg(long, value_name = "X,Y,Z", allow_hyphen_values = true, value_parser = parse_vector)]
    pub light: Option<Vector3>,

    /// Sphere center as x,y,z [default: 0,0,-5]
    #[arg(long, value_name = "X,Y,Z", allow_hyphen_values = true, value_parser = parse_vector)]
    pub sphere_center: Option<Vector3>,

    /// Sphere radius [default: 2]
    #[arg(long, value_name = "R", allow_hyphen_values = true)]
    pub sphere_radius: Option<f64>,

    /// Sphere color as r,g,b with channels 0-255 [default: 255,0,0]
    #[arg(long, value_name = "R,G,B", value_parser = parse_color)]
    pub sphere_color: Option<Rgb<u8>>,

    /// Number of render threads (defaults to one per logical CPU)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: Option<u16>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Apply every option given on the command line on top of `config`.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(position) = self.light {
            config.scene.light.position = position;
        }
        if let Some(center) = self.sphere_center {
            config.scene.sphere.center = center;
        }
        if let Some(radius) = self.sphere_radius {
            config.scene.sphere.radius = radius;
        }
        if let Some(color) = self.sphere_color {
            config.scene.sphere.color = color;
        }
    }
}

fn parse_triple<T: FromStr>(value: &str) -> Result<[T; 3], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [a, b, c] = parts.as_slice() else {
        return Err(format!("expected three comma-separated values, got '{}'", value));
    };

    let parse = |part: &str| {
        part.parse::<T>()
            .map_err(|_| format!("invalid component '{}' in '{}'", part, value))
    };
    Ok([parse(*a)?, parse(*b)?, parse(*c)?])
}

fn parse_vector(value: &str) -> Result<Vector3, String> {
    parse_triple::<f64>(value).map(Vector3::from_array)
}

fn parse_color(value: &str) -> Result<Rgb<u8>, String> {
    parse_triple::<u8>(value).map(Rgb)
}
