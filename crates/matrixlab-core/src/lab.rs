//! The per-interaction pipeline: session image + selected operation → comparison.
//!
//! Each time a control changes, the front-end calls [`render`] (or
//! [`LabSession::render`]) with the current selection. Nothing is cached
//! between calls; the result is derived fresh from the uploaded image.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::filter::{apply_kernel, BorderMode, FilterKind};
use crate::raster::RasterImage;
use crate::transform::{warp_affine, Interpolation, Transform};

/// Caption shown under the source image.
pub const ORIGINAL_CAPTION: &str = "Original Image";

/// Errors surfaced to the user by the lab.
#[derive(Debug, Error)]
pub enum LabError {
    /// Nothing has been uploaded, or the last upload could not be read.
    #[error("No image available")]
    NoImage,

    /// The uploaded file could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// What to do with the uploaded image.
///
/// Serialized as `{"operation": "transform", "params": {"kind": "rotation", ...}}`
/// or `{"operation": "filter", "params": "blur"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "params", rename_all = "snake_case")]
pub enum Operation {
    Transform(Transform),
    Filter(FilterKind),
}

impl Operation {
    /// Caption shown under the result image.
    pub fn caption(&self) -> String {
        match self {
            Operation::Transform(_) => "Transformed Image".to_string(),
            Operation::Filter(kind) => format!("{} Image", kind.label()),
        }
    }

    /// Clamp transform parameters into their control ranges.
    pub fn clamped(self) -> Self {
        match self {
            Operation::Transform(transform) => Operation::Transform(transform.clamped()),
            filter => filter,
        }
    }
}

/// Resampling settings shared by every render in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSettings {
    /// Interpolation for geometric transforms.
    pub interpolation: Interpolation,
    /// Edge policy for convolution filters.
    pub border: BorderMode,
}

/// Before/after pair ready for side-by-side display.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub original: RasterImage,
    pub result: RasterImage,
    /// Caption for the result image.
    pub caption: String,
}

/// Apply one operation to the uploaded image.
///
/// # Errors
///
/// Returns `LabError::NoImage` when `image` is `None`; every operation is
/// total over a present image.
pub fn render(
    image: Option<&RasterImage>,
    operation: &Operation,
    settings: &LabSettings,
) -> Result<Comparison, LabError> {
    let image = image.ok_or(LabError::NoImage)?;

    let result = match operation {
        Operation::Transform(transform) => {
            let matrix = transform.matrix(image.width(), image.height());
            debug!("{:?} -> {:?}", transform, matrix.rows());
            warp_affine(image, &matrix, settings.interpolation)
        }
        Operation::Filter(kind) => apply_kernel(image, &kind.kernel(), settings.border),
    };

    Ok(Comparison {
        original: image.clone(),
        result,
        caption: operation.caption(),
    })
}

/// State private to one user session: the uploaded image and its settings.
#[derive(Debug, Clone, Default)]
pub struct LabSession {
    image: Option<RasterImage>,
    settings: LabSettings,
}

impl LabSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: LabSettings) -> Self {
        Self {
            image: None,
            settings,
        }
    }

    /// Decode and keep an uploaded file.
    ///
    /// A failed upload clears any previous image, so the next render reports
    /// that no image is available.
    pub fn upload(&mut self, bytes: &[u8]) -> Result<(), LabError> {
        match decode_image(bytes) {
            Ok(image) => {
                self.image = Some(image);
                Ok(())
            }
            Err(e) => {
                warn!("upload rejected: {}", e);
                self.image = None;
                Err(e.into())
            }
        }
    }

    /// Use an already decoded image as the session image.
    pub fn set_image(&mut self, image: RasterImage) {
        self.image = Some(image);
    }

    pub fn clear(&mut self) {
        self.image = None;
    }

    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn settings(&self) -> &LabSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: LabSettings) {
        self.settings = settings;
    }

    /// Render an operation against the session image.
    pub fn render(&self, operation: &Operation) -> Result<Comparison, LabError> {
        render(self.image.as_ref(), operation, &self.settings)
    }
}
