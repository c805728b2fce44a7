//! Image source backed by the `image` crate
//!
//! Only the header is read: the grid needs natural dimensions, never pixels.

use crate::io::error::{Result, TilerError};
use crate::spatial::grid::ImageMetrics;
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

/// Read the natural dimensions of an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or its format is not recognised
/// - The image reports a zero width or height
pub fn read_metrics(path: &Path) -> Result<ImageMetrics> {
    let (width, height) = image::image_dimensions(path).map_err(|e| TilerError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), width, height, "read image header");
    ImageMetrics::new(width, height)
}

/// Read the natural dimensions of an encoded image held in memory
///
/// The format is guessed from the leading bytes; unrecognised bytes surface
/// as an unsupported-format decode error.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognised image or report a zero
/// width or height
pub fn decode_metrics(bytes: &[u8]) -> Result<ImageMetrics> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;

    let (width, height) = reader.into_dimensions()?;
    ImageMetrics::new(width, height)
}
