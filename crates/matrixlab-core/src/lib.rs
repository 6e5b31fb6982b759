//! Matrix Lab Core - geometric transforms and convolution filters
//!
//! This crate provides the image processing behind the Matrix Lab demo: an
//! uploaded picture is warped through a 2×3 affine matrix (translation,
//! scaling, rotation, shearing, reflection) or filtered with a 3×3 kernel
//! (blur, sharpen), and the result is shown next to the original.
//!
//! # Module Structure
//!
//! - `raster` - The immutable 8-bit image type (1 to 4 channels)
//! - `decode` - JPEG/PNG upload decoding
//! - `transform` - Matrix builder and affine warp
//! - `filter` - Convolution kernels and their application
//! - `encode` - PNG and RGBA output for display
//! - `controls` - Slider and picker descriptors for the front-end
//! - `lab` - Per-interaction pipeline and session state

pub mod controls;
pub mod decode;
pub mod encode;
pub mod filter;
pub mod lab;
pub mod raster;
pub mod transform;

pub use filter::{apply_filter, apply_kernel, BorderMode, ConvolutionKernel, FilterKind};
pub use lab::{render, Comparison, LabError, LabSession, LabSettings, Operation};
pub use raster::{RasterError, RasterImage};
pub use transform::{
    build_matrix, warp_affine, AffineMatrix, Interpolation, ReflectAxis, RotationPivot,
    Transform, TransformKind,
};
