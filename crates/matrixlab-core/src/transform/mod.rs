//! Geometric transforms: matrix construction and affine warping.
//!
//! A [`Transform`] (kind + parameters) is turned into a 2×3 [`AffineMatrix`]
//! by [`build_matrix`], then [`warp_affine`] resamples the image through it.
//!
//! # Coordinate System
//!
//! - Origin is the top-left pixel, x grows right, y grows down
//! - Matrices map source coordinates to destination coordinates
//! - Rotation angles are in degrees; with y pointing down, positive angles
//!   turn the image clockwise on screen
//! - The output canvas keeps the input size; content outside is clipped

mod matrix;
mod warp;

pub use matrix::{build_matrix, AffineMatrix, ReflectAxis, RotationPivot, Transform, TransformKind};
pub use warp::{warp_affine, Interpolation};
