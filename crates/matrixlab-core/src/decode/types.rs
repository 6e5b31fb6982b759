//! Core types for upload decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for upload decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The upload contained no bytes.
    #[error("Uploaded file is empty")]
    Empty,

    /// The file is not a JPEG or PNG.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// File formats accepted by the upload widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadFormat {
    Jpeg,
    Png,
}

impl UploadFormat {
    /// Detect the upload format from the file's magic bytes.
    ///
    /// Returns `None` for anything that is not a JPEG or PNG.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes) {
            Ok(image::ImageFormat::Jpeg) => Some(UploadFormat::Jpeg),
            Ok(image::ImageFormat::Png) => Some(UploadFormat::Png),
            _ => None,
        }
    }

    /// The matching `image` crate format.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            UploadFormat::Jpeg => image::ImageFormat::Jpeg,
            UploadFormat::Png => image::ImageFormat::Png,
        }
    }

    /// File extensions the upload widget should offer.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            UploadFormat::Jpeg => &["jpg", "jpeg"],
            UploadFormat::Png => &["png"],
        }
    }
}
