//! Matrix Lab WASM - WebAssembly bindings for Matrix Lab
//!
//! This crate exposes the matrixlab-core transforms and filters to the
//! browser front-end.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for image data
//! - `decode` - JPEG/PNG upload decoding
//! - `transform` - Matrix construction and affine warps
//! - `filter` - Blur and sharpen
//! - `controls` - Slider and picker descriptors
//! - `lab` - Upload-once, render-per-change session
//! - `logging` - `log` records forwarded to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_rotation } from '@matrixlab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const rotated = apply_rotation(image, 45, true);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(rotated.to_rgba()), rotated.width), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod controls;
mod decode;
mod filter;
mod lab;
mod logging;
mod transform;
mod types;

// Re-export public types
pub use controls::{default_transform, filter_picker, transform_controls, transform_picker};
pub use decode::{accepted_extensions, decode_image, detect_format};
pub use filter::{apply_blur, apply_filter, apply_sharpen};
pub use lab::{JsComparison, JsLabSession};
pub use logging::set_log_level;
pub use transform::{
    apply_reflection, apply_rotation, apply_scaling, apply_shearing, apply_transform,
    apply_translation, build_matrix,
};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(log::LevelFilter::Info);
    log::debug!("matrixlab-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
