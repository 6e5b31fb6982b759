//! Control descriptors for building the lab UI.
//!
//! Each function returns plain JavaScript objects, for example:
//!
//! ```typescript
//! transform_controls("scaling");
//! // [{ type: "slider", key: "sx", label: "Scale X", min: 0.1, max: 3, default: 1, step: 0.01 }, ...]
//! ```

use crate::types::to_js_error;
use matrixlab_core::controls;
use matrixlab_core::transform::{Transform, TransformKind};
use wasm_bindgen::prelude::*;

fn parse_kind(kind: &str) -> Result<TransformKind, JsValue> {
    TransformKind::from_key(kind).ok_or_else(|| to_js_error(format!("Unknown transform: {}", kind)))
}

/// Slider/choice descriptors for one transform kind.
///
/// # Errors
///
/// Returns an error if `kind` is not a known transform.
#[wasm_bindgen]
pub fn transform_controls(kind: &str) -> Result<JsValue, JsValue> {
    let controls = controls::transform_controls(parse_kind(kind)?);
    serde_wasm_bindgen::to_value(&controls).map_err(to_js_error)
}

/// The "Choose Transformation" picker.
#[wasm_bindgen]
pub fn transform_picker() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&controls::transform_picker()).map_err(to_js_error)
}

/// The "Choose Filter" picker.
#[wasm_bindgen]
pub fn filter_picker() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&controls::filter_picker()).map_err(to_js_error)
}

/// Transform object holding the slider defaults for `kind`.
#[wasm_bindgen]
pub fn default_transform(kind: &str) -> Result<JsValue, JsValue> {
    let transform = Transform::default_for(parse_kind(kind)?);
    serde_wasm_bindgen::to_value(&transform).map_err(to_js_error)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use matrixlab_core::controls::Control;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_transform_controls_serialize() {
        let value = transform_controls("translation").unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_unknown_kind() {
        assert!(transform_controls("twist").is_err());
        assert!(default_transform("twist").is_err());
    }

    #[wasm_bindgen_test]
    fn test_default_transform_round_trips() {
        let value = default_transform("rotation").unwrap();
        let transform: Transform = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(transform, Transform::default_for(TransformKind::Rotation));
    }

    #[wasm_bindgen_test]
    fn test_pickers() {
        assert!(transform_picker().unwrap().is_object());
        assert!(filter_picker().unwrap().is_object());
        assert!(matches!(controls::filter_picker(), Control::Choice { .. }));
    }
}
