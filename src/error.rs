//! Error types for scene configuration and image output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate render settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scene file could not be read.
    #[error("failed to read scene file {}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The scene file is not valid TOML or has unexpected keys.
    #[error("failed to parse scene file {}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Width or height is zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The pixel buffer for these dimensions cannot be addressed, or a side
    /// exceeds what the image encoders accept.
    #[error("image dimensions {width}x{height} are too large")]
    ImageTooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The output path does not name a supported lossless format.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Failure to encode or write the rendered image.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Extension missing, unknown, or naming a lossy format.
    #[error("unsupported output extension '{extension}' for {}, expected one of: png, bmp, ppm, pnm, tif, tiff", path.display())]
    UnsupportedFormat {
        /// Output path as given.
        path: PathBuf,
        /// Extension found on the path, empty if none.
        extension: String,
    },

    /// Encoding or writing the file failed.
    #[error("failed to write image to {}", path.display())]
    Write {
        /// Output path as given.
        path: PathBuf,
        /// Underlying encoder or I/O error.
        #[source]
        source: image::ImageError,
    },
}
