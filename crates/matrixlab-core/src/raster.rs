//! In-memory raster image shared by every operation in the lab.

use thiserror::Error;

/// Errors raised when constructing a [`RasterImage`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// Channel count outside 1..=4.
    #[error("Unsupported channel count: {0} (expected 1 to 4)")]
    InvalidChannels(u8),

    /// Pixel buffer length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    BufferMismatch { expected: usize, actual: usize },
}

/// An 8-bit raster image with 1 to 4 interleaved channels.
///
/// - 1 channel: grayscale
/// - 2 channels: grayscale + alpha
/// - 3 channels: RGB
/// - 4 channels: RGBA
///
/// Pixels are stored row-major. The image is immutable once built: every
/// operation in this crate returns a new `RasterImage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Create an image from raw interleaved pixel data.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidChannels` if `channels` is not in 1..=4 and
    /// `RasterError::BufferMismatch` if the buffer length is wrong.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if !(1..=4).contains(&channels) {
            return Err(RasterError::InvalidChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(RasterError::BufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Create an image where every pixel has the same value.
    ///
    /// `value.len()` determines the channel count.
    pub fn filled(width: u32, height: u32, value: &[u8]) -> Result<Self, RasterError> {
        let channels = u8::try_from(value.len()).unwrap_or(u8::MAX);
        if !(1..=4).contains(&channels) {
            return Err(RasterError::InvalidChannels(channels));
        }
        let pixels = value.repeat(width as usize * height as usize);
        Self::new(width, height, channels, pixels)
    }

    /// Replace the pixel buffer of a same-shaped image.
    pub(crate) fn with_pixels(&self, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Pixel buffer size mismatch");
        Self {
            width: self.width,
            height: self.height,
            channels: self.channels,
            pixels,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels per pixel.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Channel values of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x as usize, y as usize);
        Some(&self.pixels[start..start + self.channels as usize])
    }

    /// Byte offset of the pixel at `(x, y)`. Callers guarantee bounds.
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * self.channels as usize
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the last channel is alpha (2 or 4 channels).
    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_buffer() {
        let err = RasterImage::new(10, 10, 3, vec![0; 299]).unwrap_err();
        assert_eq!(
            err,
            RasterError::BufferMismatch {
                expected: 300,
                actual: 299
            }
        );
    }

    #[test]
    fn test_new_validates_channels() {
        assert_eq!(
            RasterImage::new(1, 1, 0, vec![]).unwrap_err(),
            RasterError::InvalidChannels(0)
        );
        assert_eq!(
            RasterImage::new(1, 1, 5, vec![0; 5]).unwrap_err(),
            RasterError::InvalidChannels(5)
        );
    }

    #[test]
    fn test_filled() {
        let img = RasterImage::filled(4, 2, &[10, 20, 30]).unwrap();
        assert_eq!(img.channels(), 3);
        assert_eq!(img.pixel_count(), 8);
        assert_eq!(img.pixel(3, 1), Some(&[10u8, 20, 30][..]));
    }

    #[test]
    fn test_filled_rejects_wide_pixels() {
        assert!(RasterImage::filled(2, 2, &[0; 5]).is_err());
        assert!(RasterImage::filled(2, 2, &[]).is_err());
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let img = RasterImage::filled(2, 2, &[1]).unwrap();
        assert!(img.pixel(2, 0).is_none());
        assert!(img.pixel(0, 2).is_none());
    }

    #[test]
    fn test_with_pixels_keeps_shape() {
        let img = RasterImage::filled(3, 2, &[1, 2]).unwrap();
        let zeroed = img.with_pixels(vec![0; 12]);
        assert_eq!((zeroed.width(), zeroed.height(), zeroed.channels()), (3, 2, 2));
        assert!(zeroed.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_has_alpha() {
        assert!(!RasterImage::filled(1, 1, &[0]).unwrap().has_alpha());
        assert!(RasterImage::filled(1, 1, &[0, 0]).unwrap().has_alpha());
        assert!(!RasterImage::filled(1, 1, &[0, 0, 0]).unwrap().has_alpha());
        assert!(RasterImage::filled(1, 1, &[0, 0, 0, 0]).unwrap().has_alpha());
    }

    #[test]
    fn test_empty_image() {
        let img = RasterImage::new(0, 0, 3, vec![]).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = RasterError::InvalidChannels(7);
        assert_eq!(err.to_string(), "Unsupported channel count: 7 (expected 1 to 4)");
    }
}
