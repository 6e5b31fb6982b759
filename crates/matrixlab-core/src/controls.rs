//! Descriptions of the lab's input controls.
//!
//! The front-end renders its sliders and pickers from these descriptors, so
//! ranges, labels and defaults live in one place. The same ranges are used to
//! clamp parameters that arrive from JavaScript.

use serde::Serialize;

use crate::filter::FilterKind;
use crate::transform::{ReflectAxis, TransformKind};

/// Inclusive numeric range of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl ParamRange {
    /// Clamp `value` into the range. NaN becomes the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Translation in pixels.
pub const TRANSLATION_RANGE: ParamRange = ParamRange {
    min: -200.0,
    max: 200.0,
    default: 0.0,
    step: 1.0,
};

/// Scale factor per axis.
pub const SCALE_RANGE: ParamRange = ParamRange {
    min: 0.1,
    max: 3.0,
    default: 1.0,
    step: 0.01,
};

/// Rotation angle in degrees.
pub const ANGLE_RANGE: ParamRange = ParamRange {
    min: -180.0,
    max: 180.0,
    default: 0.0,
    step: 1.0,
};

/// Shear factor per axis.
pub const SHEAR_RANGE: ParamRange = ParamRange {
    min: -1.0,
    max: 1.0,
    default: 0.0,
    step: 0.01,
};

/// One entry of a choice control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A single input widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    Slider {
        key: &'static str,
        label: &'static str,
        #[serde(flatten)]
        range: ParamRange,
    },
    Choice {
        key: &'static str,
        label: &'static str,
        options: Vec<ChoiceOption>,
    },
}

impl Control {
    pub fn key(&self) -> &'static str {
        match self {
            Control::Slider { key, .. } | Control::Choice { key, .. } => key,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::Slider { label, .. } | Control::Choice { label, .. } => label,
        }
    }
}

fn slider(key: &'static str, label: &'static str, range: ParamRange) -> Control {
    Control::Slider { key, label, range }
}

/// Picker for the geometric transform.
pub fn transform_picker() -> Control {
    Control::Choice {
        key: "kind",
        label: "Choose Transformation",
        options: TransformKind::ALL
            .iter()
            .map(|kind| ChoiceOption {
                value: kind.key(),
                label: kind.label(),
            })
            .collect(),
    }
}

/// Picker for the convolution filter.
pub fn filter_picker() -> Control {
    Control::Choice {
        key: "filter",
        label: "Choose Filter",
        options: FilterKind::ALL
            .iter()
            .map(|kind| ChoiceOption {
                value: kind.key(),
                label: kind.label(),
            })
            .collect(),
    }
}

/// Parameter controls for one transform kind.
///
/// Keys match the field names accepted by [`crate::transform::Transform`].
pub fn transform_controls(kind: TransformKind) -> Vec<Control> {
    match kind {
        TransformKind::Translation => vec![
            slider("tx", "Move X", TRANSLATION_RANGE),
            slider("ty", "Move Y", TRANSLATION_RANGE),
        ],
        TransformKind::Scaling => vec![
            slider("sx", "Scale X", SCALE_RANGE),
            slider("sy", "Scale Y", SCALE_RANGE),
        ],
        TransformKind::Rotation => vec![slider("angle_degrees", "Angle (degrees)", ANGLE_RANGE)],
        TransformKind::Shearing => vec![
            slider("shx", "Shear X", SHEAR_RANGE),
            slider("shy", "Shear Y", SHEAR_RANGE),
        ],
        TransformKind::Reflection => vec![Control::Choice {
            key: "axis",
            label: "Reflect Axis",
            options: ReflectAxis::ALL
                .iter()
                .map(|axis| ChoiceOption {
                    value: axis.key(),
                    label: axis.label(),
                })
                .collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(TRANSLATION_RANGE.clamp(250.0), 200.0);
        assert_eq!(TRANSLATION_RANGE.clamp(-250.0), -200.0);
        assert_eq!(TRANSLATION_RANGE.clamp(12.5), 12.5);
        assert_eq!(SCALE_RANGE.clamp(f64::NAN), 1.0);
        assert_eq!(SCALE_RANGE.clamp(f64::NEG_INFINITY), 0.1);
    }

    #[test]
    fn test_defaults_within_range() {
        for range in [TRANSLATION_RANGE, SCALE_RANGE, ANGLE_RANGE, SHEAR_RANGE] {
            assert!(range.min <= range.default && range.default <= range.max);
            assert!(range.step > 0.0);
        }
    }

    #[test]
    fn test_translation_controls() {
        let controls = transform_controls(TransformKind::Translation);
        let labels: Vec<_> = controls.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Move X", "Move Y"]);
        assert_eq!(controls[0].key(), "tx");
    }

    #[test]
    fn test_rotation_single_slider() {
        let controls = transform_controls(TransformKind::Rotation);
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].label(), "Angle (degrees)");
    }

    #[test]
    fn test_reflection_is_choice() {
        let controls = transform_controls(TransformKind::Reflection);
        match &controls[0] {
            Control::Choice { key, options, .. } => {
                assert_eq!(*key, "axis");
                let labels: Vec<_> = options.iter().map(|o| o.label).collect();
                assert_eq!(labels, ["X-axis", "Y-axis"]);
            }
            other => panic!("Expected choice control, got {:?}", other),
        }
    }

    #[test]
    fn test_every_kind_has_controls() {
        for kind in TransformKind::ALL {
            assert!(!transform_controls(kind).is_empty());
        }
    }

    #[test]
    fn test_pickers() {
        match transform_picker() {
            Control::Choice { options, .. } => assert_eq!(options.len(), 5),
            other => panic!("Expected choice control, got {:?}", other),
        }
        match filter_picker() {
            Control::Choice { options, .. } => {
                let values: Vec<_> = options.iter().map(|o| o.value).collect();
                assert_eq!(values, ["blur", "sharpen"]);
            }
            other => panic!("Expected choice control, got {:?}", other),
        }
    }
}
