//! Session bindings: upload once, then render on every control change.
//!
//! # Example
//!
//! ```typescript
//! import { JsLabSession } from '@matrixlab/wasm';
//!
//! const session = new JsLabSession();
//! try {
//!   session.upload(new Uint8Array(await file.arrayBuffer()));
//! } catch (e) {
//!   showError(e);
//! }
//!
//! const cmp = session.render({
//!   operation: "transform",
//!   params: { kind: "translation", tx: 25, ty: 0 },
//! });
//! show(cmp.original, "Original Image");
//! show(cmp.result, cmp.caption);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use matrixlab_core::lab::{Comparison, LabSession, LabSettings, Operation, ORIGINAL_CAPTION};
use wasm_bindgen::prelude::*;

/// Original and processed images with the result caption.
#[wasm_bindgen]
pub struct JsComparison {
    inner: Comparison,
}

#[wasm_bindgen]
impl JsComparison {
    /// The uploaded image, unchanged.
    #[wasm_bindgen(getter)]
    pub fn original(&self) -> JsRasterImage {
        JsRasterImage::from_raster(self.inner.original.clone())
    }

    /// The processed image.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> JsRasterImage {
        JsRasterImage::from_raster(self.inner.result.clone())
    }

    /// Caption for the processed image.
    #[wasm_bindgen(getter)]
    pub fn caption(&self) -> String {
        self.inner.caption.clone()
    }

    /// Caption for the original image.
    #[wasm_bindgen(getter)]
    pub fn original_caption(&self) -> String {
        ORIGINAL_CAPTION.to_string()
    }
}

/// Per-user lab state. Each browser tab owns its own session.
#[wasm_bindgen]
#[derive(Default)]
pub struct JsLabSession {
    inner: LabSession,
}

#[wasm_bindgen]
impl JsLabSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsLabSession {
        Self::default()
    }

    /// Decode and keep an uploaded JPEG or PNG.
    ///
    /// On failure the previous image is dropped as well, and the error
    /// message is thrown.
    pub fn upload(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.upload(bytes).map_err(to_js_error)
    }

    /// Use an already decoded image.
    pub fn set_image(&mut self, image: &JsRasterImage) {
        self.inner.set_image(image.as_raster().clone());
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.has_image()
    }

    /// The current session image, if any.
    pub fn original(&self) -> Option<JsRasterImage> {
        self.inner.image().cloned().map(JsRasterImage::from_raster)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Replace the resampling settings, e.g. `{ interpolation: "nearest", border: "zero" }`.
    /// Missing fields fall back to their defaults.
    pub fn set_settings(&mut self, settings: JsValue) -> Result<(), JsValue> {
        let settings: LabSettings = serde_wasm_bindgen::from_value(settings).map_err(to_js_error)?;
        self.inner.set_settings(settings);
        Ok(())
    }

    /// Run one operation against the session image.
    ///
    /// # Errors
    ///
    /// Throws `"No image available"` when nothing is uploaded, or a parse
    /// error when `operation` is malformed.
    pub fn render(&self, operation: JsValue) -> Result<JsComparison, JsValue> {
        let operation: Operation =
            serde_wasm_bindgen::from_value(operation).map_err(to_js_error)?;
        self.render_operation(&operation)
    }
}

impl JsLabSession {
    fn render_operation(&self, operation: &Operation) -> Result<JsComparison, JsValue> {
        self.inner
            .render(&operation.clamped())
            .map(|inner| JsComparison { inner })
            .map_err(to_js_error)
    }
}
