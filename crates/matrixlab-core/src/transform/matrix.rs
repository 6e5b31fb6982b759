//! 2×3 affine matrices and the builder that maps a transform to one.
//!
//! A matrix `[[a, b, tx], [c, d, ty]]` is the forward map from source to
//! destination coordinates:
//! ```text
//! dst_x = a * x + b * y + tx
//! dst_y = c * x + d * y + ty
//! ```
//! The warp inverts it to find where each destination pixel samples from.

use serde::{Deserialize, Serialize};

use crate::controls::{ANGLE_RANGE, SCALE_RANGE, SHEAR_RANGE, TRANSLATION_RANGE};

/// A 2×3 affine matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix {
    rows: [[f64; 3]; 2],
}

impl AffineMatrix {
    /// The identity transform.
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    /// Create a matrix from its six coefficients.
    pub fn new(a: f64, b: f64, tx: f64, c: f64, d: f64, ty: f64) -> Self {
        Self {
            rows: [[a, b, tx], [c, d, ty]],
        }
    }

    /// Create a matrix from its two rows.
    pub fn from_rows(rows: [[f64; 3]; 2]) -> Self {
        Self { rows }
    }

    /// The two rows of the matrix.
    pub fn rows(&self) -> [[f64; 3]; 2] {
        self.rows
    }

    /// Coefficients flattened as `[a, b, tx, c, d, ty]`.
    pub fn to_array(&self) -> [f64; 6] {
        let [[a, b, tx], [c, d, ty]] = self.rows;
        [a, b, tx, c, d, ty]
    }

    /// Determinant of the linear 2×2 part.
    pub fn determinant(&self) -> f64 {
        let [[a, b, _], [c, d, _]] = self.rows;
        a * d - b * c
    }

    /// Whether the linear part collapses the plane onto a line or a point.
    pub fn is_singular(&self) -> bool {
        self.determinant() == 0.0
    }

    /// Map a point through the matrix.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [[a, b, tx], [c, d, ty]] = self.rows;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    /// Invert the matrix.
    ///
    /// A singular matrix inverts to the zero matrix, so every destination
    /// pixel samples the source origin and the output collapses instead of
    /// failing.
    pub fn inverse(&self) -> AffineMatrix {
        let [[a, b, tx], [c, d, ty]] = self.rows;

        let determinant = self.determinant();
        let inv_det = if determinant != 0.0 {
            1.0 / determinant
        } else {
            0.0
        };

        let new_a = d * inv_det;
        let new_b = -b * inv_det;
        let new_c = -c * inv_det;
        let new_d = a * inv_det;
        let new_tx = -(new_a * tx + new_b * ty);
        let new_ty = -(new_c * tx + new_d * ty);

        AffineMatrix::new(new_a, new_b, new_tx, new_c, new_d, new_ty)
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Axis to mirror the image about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectAxis {
    /// Mirror top-to-bottom.
    #[default]
    X,
    /// Mirror left-to-right.
    Y,
}

impl ReflectAxis {
    pub const ALL: [ReflectAxis; 2] = [ReflectAxis::X, ReflectAxis::Y];

    pub fn label(self) -> &'static str {
        match self {
            ReflectAxis::X => "X-axis",
            ReflectAxis::Y => "Y-axis",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ReflectAxis::X => "x",
            ReflectAxis::Y => "y",
        }
    }
}

/// Where a rotation is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPivot {
    /// Rotate about the top-left origin, then shift by half the image extent.
    ///
    /// This is the lab's classic formula
    /// `[[cos, -sin, w/2], [sin, cos, h/2]]`. The shift applies even at 0°,
    /// so the image moves by half its size.
    #[default]
    OriginShifted,
    /// Rotate about the image center. Identity at 0°.
    Center,
}

/// The five geometric transforms the lab offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Translation,
    Scaling,
    Rotation,
    Shearing,
    Reflection,
}

impl TransformKind {
    pub const ALL: [TransformKind; 5] = [
        TransformKind::Translation,
        TransformKind::Scaling,
        TransformKind::Rotation,
        TransformKind::Shearing,
        TransformKind::Reflection,
    ];

    /// Display name for the transform picker.
    pub fn label(self) -> &'static str {
        match self {
            TransformKind::Translation => "Translation",
            TransformKind::Scaling => "Scaling",
            TransformKind::Rotation => "Rotation",
            TransformKind::Shearing => "Shearing",
            TransformKind::Reflection => "Reflection",
        }
    }

    /// Serialized name, as used in the `kind` tag of [`Transform`].
    pub fn key(self) -> &'static str {
        match self {
            TransformKind::Translation => "translation",
            TransformKind::Scaling => "scaling",
            TransformKind::Rotation => "rotation",
            TransformKind::Shearing => "shearing",
            TransformKind::Reflection => "reflection",
        }
    }

    /// Parse a serialized name, ignoring case. Unknown names return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key.trim()))
    }
}

fn default_scale() -> f64 {
    SCALE_RANGE.default
}

/// A geometric transform together with its parameters.
///
/// Deserializes from objects such as `{"kind": "translation", "tx": 10}`.
/// Missing parameters take the control defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    Translation {
        #[serde(default)]
        tx: f64,
        #[serde(default)]
        ty: f64,
    },
    Scaling {
        #[serde(default = "default_scale")]
        sx: f64,
        #[serde(default = "default_scale")]
        sy: f64,
    },
    Rotation {
        #[serde(default)]
        angle_degrees: f64,
        #[serde(default)]
        pivot: RotationPivot,
    },
    Shearing {
        #[serde(default)]
        shx: f64,
        #[serde(default)]
        shy: f64,
    },
    Reflection {
        #[serde(default)]
        axis: ReflectAxis,
    },
}

impl Transform {
    /// The transform with every parameter at its control default.
    pub fn default_for(kind: TransformKind) -> Self {
        match kind {
            TransformKind::Translation => Transform::Translation {
                tx: TRANSLATION_RANGE.default,
                ty: TRANSLATION_RANGE.default,
            },
            TransformKind::Scaling => Transform::Scaling {
                sx: SCALE_RANGE.default,
                sy: SCALE_RANGE.default,
            },
            TransformKind::Rotation => Transform::Rotation {
                angle_degrees: ANGLE_RANGE.default,
                pivot: RotationPivot::default(),
            },
            TransformKind::Shearing => Transform::Shearing {
                shx: SHEAR_RANGE.default,
                shy: SHEAR_RANGE.default,
            },
            TransformKind::Reflection => Transform::Reflection {
                axis: ReflectAxis::default(),
            },
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Translation { .. } => TransformKind::Translation,
            Transform::Scaling { .. } => TransformKind::Scaling,
            Transform::Rotation { .. } => TransformKind::Rotation,
            Transform::Shearing { .. } => TransformKind::Shearing,
            Transform::Reflection { .. } => TransformKind::Reflection,
        }
    }

    /// Bring every parameter back into its control range.
    ///
    /// NaN falls back to the parameter's default.
    pub fn clamped(self) -> Self {
        match self {
            Transform::Translation { tx, ty } => Transform::Translation {
                tx: TRANSLATION_RANGE.clamp(tx),
                ty: TRANSLATION_RANGE.clamp(ty),
            },
            Transform::Scaling { sx, sy } => Transform::Scaling {
                sx: SCALE_RANGE.clamp(sx),
                sy: SCALE_RANGE.clamp(sy),
            },
            Transform::Rotation {
                angle_degrees,
                pivot,
            } => Transform::Rotation {
                angle_degrees: ANGLE_RANGE.clamp(angle_degrees),
                pivot,
            },
            Transform::Shearing { shx, shy } => Transform::Shearing {
                shx: SHEAR_RANGE.clamp(shx),
                shy: SHEAR_RANGE.clamp(shy),
            },
            reflection @ Transform::Reflection { .. } => reflection,
        }
    }

    /// Build the affine matrix for an image of the given size.
    pub fn matrix(&self, width: u32, height: u32) -> AffineMatrix {
        build_matrix(self, width, height)
    }
}

/// Build the 2×3 matrix for a transform applied to a `width` × `height` image.
///
/// | Transform   | Matrix                                   |
/// |-------------|------------------------------------------|
/// | Translation | `[[1, 0, tx], [0, 1, ty]]`               |
/// | Scaling     | `[[sx, 0, 0], [0, sy, 0]]`               |
/// | Rotation    | `[[cos, -sin, w/2], [sin, cos, h/2]]`    |
/// | Shearing    | `[[1, shx, 0], [shy, 1, 0]]`             |
/// | Reflection  | X: `[[1, 0, 0], [0, -1, h]]`, Y: `[[-1, 0, w], [0, 1, 0]]` |
///
/// Rotation with [`RotationPivot::Center`] instead keeps the image center fixed.
/// Parameters are used as given; call [`Transform::clamped`] first for
/// untrusted input.
pub fn build_matrix(transform: &Transform, width: u32, height: u32) -> AffineMatrix {
    let w = width as f64;
    let h = height as f64;

    match *transform {
        Transform::Translation { tx, ty } => AffineMatrix::new(1.0, 0.0, tx, 0.0, 1.0, ty),
        Transform::Scaling { sx, sy } => AffineMatrix::new(sx, 0.0, 0.0, 0.0, sy, 0.0),
        Transform::Rotation {
            angle_degrees,
            pivot,
        } => {
            let (sin, cos) = angle_degrees.to_radians().sin_cos();
            match pivot {
                RotationPivot::OriginShifted => {
                    AffineMatrix::new(cos, -sin, w / 2.0, sin, cos, h / 2.0)
                }
                RotationPivot::Center => {
                    let (cx, cy) = (w / 2.0, h / 2.0);
                    AffineMatrix::new(
                        cos,
                        -sin,
                        cx - cos * cx + sin * cy,
                        sin,
                        cos,
                        cy - sin * cx - cos * cy,
                    )
                }
            }
        }
        Transform::Shearing { shx, shy } => AffineMatrix::new(1.0, shx, 0.0, shy, 1.0, 0.0),
        Transform::Reflection { axis } => match axis {
            ReflectAxis::X => AffineMatrix::new(1.0, 0.0, 0.0, 0.0, -1.0, h),
            ReflectAxis::Y => AffineMatrix::new(-1.0, 0.0, w, 0.0, 1.0, 0.0),
        },
    }
}
