//! Upload decoding for the lab.
//!
//! This module turns the bytes of an uploaded file into a [`RasterImage`]:
//! - JPEG and PNG are accepted, sniffed from their magic bytes
//! - The decoded channel layout is preserved (gray, gray+alpha, RGB, RGBA)
//! - Higher bit depths are reduced to 8 bits per channel
//!
//! # Architecture
//!
//! Decoding runs once per upload, synchronously, from the browser via the WASM
//! bindings. Every later interaction reuses the decoded image.
//!
//! # Examples
//!
//! ```ignore
//! use matrixlab_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```
//!
//! [`RasterImage`]: crate::raster::RasterImage

mod types;
mod upload;

pub use types::{DecodeError, UploadFormat};
pub use upload::decode_image;
