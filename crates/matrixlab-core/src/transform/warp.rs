//! Affine warping with bilinear and nearest-neighbor interpolation.
//!
//! # Algorithm
//!
//! The warp uses inverse mapping: the matrix maps source to destination, so it
//! is inverted once and, for each pixel in the output image, we calculate the
//! source location it comes from and interpolate there:
//! ```text
//! (src_x, src_y) = inverse(M) * (dst_x, dst_y)
//! ```
//!
//! The output canvas always has the input's dimensions; content moved outside
//! it is clipped. Source taps outside the image read as 0 (black, and fully
//! transparent for images with alpha), so edges blend toward black.

use log::debug;
use serde::{Deserialize, Serialize};

use super::AffineMatrix;
use crate::raster::RasterImage;

/// Interpolation used when sampling the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Nearest source pixel, rounded. Blocky but exact for integer offsets.
    Nearest,
    /// Weighted average of the four surrounding pixels.
    #[default]
    Bilinear,
}

/// Warp an image through an affine matrix.
///
/// # Arguments
///
/// * `image` - Source image (any channel count)
/// * `matrix` - Forward source-to-destination matrix
/// * `interpolation` - How non-integer source locations are sampled
///
/// # Returns
///
/// A new `RasterImage` with the same width, height and channel count.
/// Singular matrices are accepted and produce a collapsed image.
pub fn warp_affine(
    image: &RasterImage,
    matrix: &AffineMatrix,
    interpolation: Interpolation,
) -> RasterImage {
    if image.is_empty() {
        return image.clone();
    }

    let inverse = matrix.inverse();
    let channels = image.channels() as usize;
    let (width, height) = (image.width() as usize, image.height() as usize);

    let mut output = vec![0u8; image.pixels().len()];

    for dst_y in 0..height {
        for dst_x in 0..width {
            let (src_x, src_y) = inverse.apply(dst_x as f64, dst_y as f64);

            let dst_idx = (dst_y * width + dst_x) * channels;
            let dst = &mut output[dst_idx..dst_idx + channels];

            match interpolation {
                Interpolation::Nearest => sample_nearest(image, src_x, src_y, dst),
                Interpolation::Bilinear => sample_bilinear(image, src_x, src_y, dst),
            }
        }
    }

    debug!(
        "warped {}x{} image with {:?} using {:?}",
        width,
        height,
        matrix.to_array(),
        interpolation
    );

    image.with_pixels(output)
}

/// Channel value at integer coordinates, or 0 outside the image.
#[inline]
fn tap(image: &RasterImage, px: i64, py: i64, channel: usize) -> f64 {
    if px < 0 || py < 0 || px >= image.width() as i64 || py >= image.height() as i64 {
        return 0.0;
    }
    image.pixels()[image.offset(px as usize, py as usize) + channel] as f64
}

/// Copy the closest source pixel. Leaves `dst` untouched when out of bounds.
fn sample_nearest(image: &RasterImage, x: f64, y: f64, dst: &mut [u8]) {
    let px = x.round();
    let py = y.round();

    if px < 0.0 || py < 0.0 || px >= image.width() as f64 || py >= image.height() as f64 {
        return;
    }

    let idx = image.offset(px as usize, py as usize);
    dst.copy_from_slice(&image.pixels()[idx..idx + dst.len()]);
}

/// Sample a pixel using bilinear interpolation.
///
/// Considers the 4 nearest pixels and weights their contribution based on
/// distance. Leaves `dst` untouched when no tap overlaps the image.
fn sample_bilinear(image: &RasterImage, x: f64, y: f64, dst: &mut [u8]) {
    let (w, h) = (image.width() as f64, image.height() as f64);

    if x <= -1.0 || x >= w || y <= -1.0 || y >= h || x.is_nan() || y.is_nan() {
        return;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    for (channel, out) in dst.iter_mut().enumerate() {
        let v = tap(image, x0, y0, channel) * (1.0 - fx) * (1.0 - fy)
            + tap(image, x1, y0, channel) * fx * (1.0 - fy)
            + tap(image, x0, y1, channel) * (1.0 - fx) * fy
            + tap(image, x1, y1, channel) * fx * fy;
        *out = v.clamp(0.0, 255.0).round() as u8;
    }
}
