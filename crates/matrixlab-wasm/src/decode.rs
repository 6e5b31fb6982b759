//! Upload decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@matrixlab/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}, ${image.channels} channel(s)`);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use matrixlab_core::decode::{self, UploadFormat};
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG file.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are empty
/// - The file is not a JPEG or PNG
/// - The file is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(to_js_error)
}

/// Detect the upload format from magic bytes.
///
/// Returns `"jpeg"`, `"png"`, or `undefined` for anything else.
#[wasm_bindgen]
pub fn detect_format(bytes: &[u8]) -> Option<String> {
    UploadFormat::detect(bytes).map(|format| match format {
        UploadFormat::Jpeg => "jpeg".to_string(),
        UploadFormat::Png => "png".to_string(),
    })
}

/// File extensions for the upload widget's `accept` attribute.
#[wasm_bindgen]
pub fn accepted_extensions() -> Vec<String> {
    [UploadFormat::Jpeg, UploadFormat::Png]
        .iter()
        .flat_map(|format| format.extensions())
        .map(|ext| ext.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrixlab_core::{encode, RasterImage};

    #[test]
    fn test_decode_png_upload() {
        let src = RasterImage::filled(6, 3, &[9, 8, 7]).unwrap();
        let png = encode::encode_png(&src).unwrap();

        let img = decode_image(&png).ok().unwrap();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 3);
        assert_eq!(img.channels(), 3);
    }

    #[test]
    fn test_detect_format() {
        let png = encode::encode_png(&RasterImage::filled(1, 1, &[0]).unwrap()).unwrap();
        assert_eq!(detect_format(&png).as_deref(), Some("png"));
        assert_eq!(detect_format(&[0xFF, 0xD8, 0xFF, 0xE0]).as_deref(), Some("jpeg"));
        assert_eq!(detect_format(b"hello"), None);
    }

    #[test]
    fn test_accepted_extensions() {
        assert_eq!(accepted_extensions(), vec!["jpg", "jpeg", "png"]);
    }
}
