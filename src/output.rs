//! # Output Module
//!
//! Writes the rendered pixel grid to disk. The encoder is picked from the file
//! extension and restricted to lossless formats:
//! - PNG (`.png`), the default
//! - BMP (`.bmp`)
//! - PPM (`.ppm`, `.pnm`); the grayscale and bitmap PNM subtypes are rejected
//! - TIFF (`.tif`, `.tiff`)

use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::{debug, info};

use crate::error::OutputError;

/// Resolve the lossless image format for `path` from its extension.
///
/// Checked before rendering so a bad path fails fast instead of after the work is done.
pub fn output_format(path: &Path) -> Result<ImageFormat, OutputError> {
    let unsupported = || OutputError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Tiff)) => Ok(format),
        // The PNM subtype follows the extension; only the RGB ones keep every channel
        Ok(ImageFormat::Pnm) if has_rgb_pnm_extension(path) => Ok(ImageFormat::Pnm),
        _ => Err(unsupported()),
    }
}

fn has_rgb_pnm_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm") || ext.eq_ignore_ascii_case("pnm"))
}

/// Save an 8-bit RGB image to `path`.
///
/// # Errors
///
/// Returns [`OutputError::UnsupportedFormat`] for extensions that are not lossless
/// formats and [`OutputError::Write`] when encoding or file I/O fails.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), OutputError> {
    let format = output_format(path)?;
    debug!("Encoding {}x{} image as {:?}", image.width(), image.height(), format);

    let start = std::time::Instant::now();
    image
        .save_with_format(path, format)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Image saved as {} in {:.2?}", path.display(), start.elapsed());
    Ok(())
}
