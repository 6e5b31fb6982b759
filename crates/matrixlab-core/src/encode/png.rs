//! PNG encoding for display.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::RasterImage;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Color type matching a raster's channel count.
fn color_type(channels: u8) -> ExtendedColorType {
    match channels {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        _ => ExtendedColorType::Rgba8,
    }
}

/// Encode an image as PNG bytes.
///
/// The PNG keeps the image's channel layout (gray, gray+alpha, RGB, RGBA).
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty image and
/// `EncodeError::EncodingFailed` if the encoder rejects the data.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            color_type(image.channels()),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}
