//! WASM bindings for the geometric transforms.
//!
//! Transforms can be passed as plain objects, matching the core serde layout:
//!
//! ```typescript
//! const params = { kind: "rotation", angle_degrees: 30 };
//! const matrix = build_matrix(params, image.width, image.height); // [a, b, tx, c, d, ty]
//! const rotated = apply_transform(image, params, false);
//! ```
//!
//! or through one typed function per transform. Parameters are clamped to
//! the slider ranges before use.

use crate::types::{interpolation_from_bool, to_js_error, JsRasterImage};
use matrixlab_core::transform::{warp_affine, ReflectAxis, RotationPivot, Transform};
use wasm_bindgen::prelude::*;

fn warp(image: &JsRasterImage, transform: Transform, nearest: bool) -> JsRasterImage {
    let src = image.as_raster();
    let matrix = transform.clamped().matrix(src.width(), src.height());
    JsRasterImage::from_raster(warp_affine(src, &matrix, interpolation_from_bool(nearest)))
}

/// Build the 2×3 matrix for a transform as `[a, b, tx, c, d, ty]`.
///
/// # Errors
///
/// Returns an error if `params` is not a valid transform object.
#[wasm_bindgen]
pub fn build_matrix(params: JsValue, width: u32, height: u32) -> Result<Vec<f64>, JsValue> {
    let transform: Transform = serde_wasm_bindgen::from_value(params).map_err(to_js_error)?;
    Ok(transform.clamped().matrix(width, height).to_array().to_vec())
}

/// Apply a transform described by a plain object.
///
/// # Arguments
///
/// * `image` - Source image
/// * `params` - Transform object, e.g. `{ kind: "scaling", sx: 2, sy: 1 }`
/// * `nearest` - Use nearest-neighbor sampling instead of bilinear
#[wasm_bindgen]
pub fn apply_transform(
    image: &JsRasterImage,
    params: JsValue,
    nearest: bool,
) -> Result<JsRasterImage, JsValue> {
    let transform: Transform = serde_wasm_bindgen::from_value(params).map_err(to_js_error)?;
    Ok(warp(image, transform, nearest))
}

/// Move the image by `tx`, `ty` pixels (each -200 to 200).
#[wasm_bindgen]
pub fn apply_translation(image: &JsRasterImage, tx: f64, ty: f64) -> JsRasterImage {
    warp(image, Transform::Translation { tx, ty }, false)
}

/// Scale the image about the top-left corner (each factor 0.1 to 3.0).
#[wasm_bindgen]
pub fn apply_scaling(image: &JsRasterImage, sx: f64, sy: f64) -> JsRasterImage {
    warp(image, Transform::Scaling { sx, sy }, false)
}

/// Rotate the image by `angle_degrees` (-180 to 180).
///
/// With `centered = false` the classic lab formula is used, which also shifts
/// the image by half its size; `centered = true` rotates about the center.
#[wasm_bindgen]
pub fn apply_rotation(image: &JsRasterImage, angle_degrees: f64, centered: bool) -> JsRasterImage {
    let pivot = if centered {
        RotationPivot::Center
    } else {
        RotationPivot::OriginShifted
    };
    warp(
        image,
        Transform::Rotation {
            angle_degrees,
            pivot,
        },
        false,
    )
}

/// Shear the image (each factor -1.0 to 1.0).
#[wasm_bindgen]
pub fn apply_shearing(image: &JsRasterImage, shx: f64, shy: f64) -> JsRasterImage {
    warp(image, Transform::Shearing { shx, shy }, false)
}

/// Mirror the image. `axis` is `"x"` (top-to-bottom) or `"y"` (left-to-right);
/// anything not starting with `y` is treated as `"x"`.
#[wasm_bindgen]
pub fn apply_reflection(image: &JsRasterImage, axis: &str) -> JsRasterImage {
    let axis = if axis.trim_start().starts_with(['y', 'Y']) {
        ReflectAxis::Y
    } else {
        ReflectAxis::X
    };
    warp(image, Transform::Reflection { axis }, false)
}
