//! WASM bindings for the convolution filters.
//!
//! # Example
//!
//! ```typescript
//! import { apply_filter } from '@matrixlab/wasm';
//!
//! const blurred = apply_filter(image, "blur", 0);
//! ```

use crate::types::{border_from_u8, to_js_error, JsRasterImage};
use matrixlab_core::filter::{apply_kernel, FilterKind};
use wasm_bindgen::prelude::*;

fn filter(image: &JsRasterImage, kind: FilterKind, border: u8) -> JsRasterImage {
    JsRasterImage::from_raster(apply_kernel(
        image.as_raster(),
        &kind.kernel(),
        border_from_u8(border),
    ))
}

/// Apply a filter by name (`"blur"` or `"sharpen"`, case-insensitive).
///
/// # Arguments
///
/// * `image` - Source image
/// * `name` - Filter name
/// * `border` - 0 = reflect-101, 1 = replicate, 2 = zero padding
///
/// # Errors
///
/// Returns an error if the filter name is unknown.
#[wasm_bindgen]
pub fn apply_filter(image: &JsRasterImage, name: &str, border: u8) -> Result<JsRasterImage, JsValue> {
    let kind = FilterKind::from_key(name)
        .ok_or_else(|| to_js_error(format!("Unknown filter: {}", name)))?;
    Ok(filter(image, kind, border))
}

/// Average every pixel with its 8 neighbors.
#[wasm_bindgen]
pub fn apply_blur(image: &JsRasterImage) -> JsRasterImage {
    filter(image, FilterKind::Blur, 0)
}

/// Emphasize edges with the 4-neighbor sharpen kernel.
#[wasm_bindgen]
pub fn apply_sharpen(image: &JsRasterImage) -> JsRasterImage {
    filter(image, FilterKind::Sharpen, 0)
}
