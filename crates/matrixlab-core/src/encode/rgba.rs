//! RGBA8 expansion for canvas display.

use crate::raster::RasterImage;

/// Expand an image to 4 bytes per pixel (RGBA), as expected by `ImageData`.
///
/// Gray is replicated into R, G and B; missing alpha becomes 255.
pub fn to_rgba(image: &RasterImage) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(image.pixel_count() * 4);

    for px in image.pixels().chunks_exact(image.channels() as usize) {
        match *px {
            [g] => rgba.extend_from_slice(&[g, g, g, 255]),
            [g, a] => rgba.extend_from_slice(&[g, g, g, a]),
            [r, g, b] => rgba.extend_from_slice(&[r, g, b, 255]),
            [r, g, b, a] => rgba.extend_from_slice(&[r, g, b, a]),
            _ => unreachable!("raster channel count is 1 to 4"),
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_expansion() {
        let img = RasterImage::new(2, 1, 1, vec![10, 20]).unwrap();
        assert_eq!(to_rgba(&img), vec![10, 10, 10, 255, 20, 20, 20, 255]);
    }

    #[test]
    fn test_gray_alpha_expansion() {
        let img = RasterImage::new(1, 1, 2, vec![10, 99]).unwrap();
        assert_eq!(to_rgba(&img), vec![10, 10, 10, 99]);
    }

    #[test]
    fn test_rgb_expansion() {
        let img = RasterImage::new(1, 1, 3, vec![1, 2, 3]).unwrap();
        assert_eq!(to_rgba(&img), vec![1, 2, 3, 255]);
    }

    #[test]
    fn test_rgba_passthrough() {
        let img = RasterImage::new(1, 2, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(to_rgba(&img), img.pixels());
    }

    #[test]
    fn test_length() {
        let img = RasterImage::filled(13, 7, &[0, 0, 0]).unwrap();
        assert_eq!(to_rgba(&img).len(), 13 * 7 * 4);
    }
}
