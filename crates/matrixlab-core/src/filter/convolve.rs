//! Applying a 3×3 kernel to an image.
//!
//! Every output channel value is the weighted sum of the same channel over the
//! 3×3 neighborhood centered on the pixel, rounded and clamped to 0-255 so the
//! sharpen kernel's negative weights can't wrap around.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{ConvolutionKernel, FilterKind};
use crate::raster::RasterImage;

/// How neighbors outside the image are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Mirror without repeating the edge pixel: `gfedcb|abcdefgh|gfedcba`.
    #[default]
    Reflect101,
    /// Repeat the edge pixel: `aaaaaa|abcdefgh|hhhhhhh`.
    Replicate,
    /// Treat outside pixels as 0.
    Zero,
}

impl BorderMode {
    /// Map a possibly out-of-range index into `0..len`, or `None` for zero padding.
    ///
    /// Only offsets of one pixel past either edge occur with a 3×3 kernel.
    #[inline]
    fn resolve(self, index: i64, len: i64) -> Option<usize> {
        if (0..len).contains(&index) {
            return Some(index as usize);
        }
        match self {
            BorderMode::Zero => None,
            BorderMode::Replicate => Some(index.clamp(0, len - 1) as usize),
            BorderMode::Reflect101 => {
                if len == 1 {
                    return Some(0);
                }
                let mirrored = if index < 0 { -index } else { 2 * (len - 1) - index };
                Some(mirrored.clamp(0, len - 1) as usize)
            }
        }
    }
}

/// Apply a built-in filter with the default border mode.
pub fn apply_filter(image: &RasterImage, filter: FilterKind) -> RasterImage {
    apply_kernel(image, &filter.kernel(), BorderMode::default())
}

/// Apply a 3×3 kernel to every pixel and channel of an image.
///
/// # Arguments
///
/// * `image` - Source image (any channel count; alpha is filtered too)
/// * `kernel` - Weights, centered on the pixel being computed
/// * `border` - How neighbors past the image edge are read
///
/// # Returns
///
/// A new `RasterImage` with the same dimensions and channel count.
pub fn apply_kernel(image: &RasterImage, kernel: &ConvolutionKernel, border: BorderMode) -> RasterImage {
    if image.is_empty() {
        return image.clone();
    }

    let (width, height) = (image.width() as i64, image.height() as i64);
    let channels = image.channels() as usize;
    let src = image.pixels();

    let mut output = vec![0u8; src.len()];
    let mut acc = vec![0.0f64; channels];

    for y in 0..height {
        for x in 0..width {
            acc.iter_mut().for_each(|v| *v = 0.0);

            for dy in -1..=1 {
                let Some(sy) = border.resolve(y + dy, height) else {
                    continue;
                };
                for dx in -1..=1 {
                    let weight = kernel.weight(dx, dy);
                    if weight == 0.0 {
                        continue;
                    }
                    let Some(sx) = border.resolve(x + dx, width) else {
                        continue;
                    };
                    let idx = image.offset(sx, sy);
                    for (channel, sum) in acc.iter_mut().enumerate() {
                        *sum += weight * src[idx + channel] as f64;
                    }
                }
            }

            let dst_idx = image.offset(x as usize, y as usize);
            for (channel, sum) in acc.iter().enumerate() {
                output[dst_idx + channel] = sum.clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    debug!(
        "filtered {}x{} image ({} channel(s)) with {:?} border",
        width, height, channels, border
    );

    image.with_pixels(output)
}
