//! Display encoding for lab results.
//!
//! This module provides functionality for:
//! - Encoding images to PNG (lossless, keeps the channel layout)
//! - Expanding any channel layout to RGBA8 for an HTML canvas `ImageData`
//!
//! Nothing is written to disk; the bytes are handed straight to the page.
//!
//! # Examples
//!
//! ```ignore
//! use matrixlab_core::encode::encode_png;
//!
//! let png = encode_png(&result).unwrap();
//! println!("Encoded {} bytes", png.len());
//! ```

mod png;
mod rgba;

pub use png::{encode_png, EncodeError};
pub use rgba::to_rgba;
