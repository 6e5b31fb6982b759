//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Matrix Lab
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use std::fmt::Display;

use matrixlab_core::encode;
use matrixlab_core::filter::BorderMode;
use matrixlab_core::transform::Interpolation;
use matrixlab_core::RasterImage;
use wasm_bindgen::prelude::*;

/// A raster image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()`, `to_rgba()` and
/// `to_png()` copy into JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create an image from dimensions and interleaved pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 1 (gray), 2 (gray+alpha), 3 (RGB) or 4 (RGBA)
    /// * `pixels` - Pixel data, `width * height * channels` bytes, row-major
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<JsRasterImage, JsValue> {
        RasterImage::new(width, height, channels, pixels)
            .map(JsRasterImage::from_raster)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of channels per pixel
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels()
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns the interleaved pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns RGBA pixel data, ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        encode::to_rgba(&self.inner)
    }

    /// Encode the image as PNG bytes for an `<img>` element.
    pub fn to_png(&self) -> Result<Vec<u8>, JsValue> {
        encode::encode_png(&self.inner).map_err(to_js_error)
    }
}

impl JsRasterImage {
    /// Wrap a core image.
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    /// Borrow the core image for passing to core functions.
    pub(crate) fn as_raster(&self) -> &RasterImage {
        &self.inner
    }
}

/// Convert any core error into a JavaScript string error.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Convert a u8 border value to the core BorderMode enum.
///
/// Values:
/// - 0 = Reflect101 (mirror without repeating the edge)
/// - 1 = Replicate (repeat the edge pixel)
/// - 2 = Zero (pad with black)
///
/// Any other value defaults to Reflect101.
pub(crate) fn border_from_u8(value: u8) -> BorderMode {
    match value {
        1 => BorderMode::Replicate,
        2 => BorderMode::Zero,
        _ => BorderMode::Reflect101, // Default
    }
}

/// Nearest-neighbor when `nearest` is set, bilinear otherwise.
pub(crate) fn interpolation_from_bool(nearest: bool) -> Interpolation {
    if nearest {
        Interpolation::Nearest
    } else {
        Interpolation::Bilinear
    }
}
