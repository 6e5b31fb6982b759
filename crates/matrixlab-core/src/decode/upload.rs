//! Decoding of uploaded JPEG/PNG files.

use image::DynamicImage;
use log::debug;

use super::{DecodeError, UploadFormat};
use crate::raster::RasterImage;

/// Decode an uploaded JPEG or PNG file.
///
/// The channel layout of the file is kept: grayscale stays 1 channel, RGBA
/// stays 4 channels. 16-bit and floating point images are reduced to 8 bits
/// per channel. EXIF orientation is not applied; pixels are returned as stored.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for a zero-length upload,
/// `DecodeError::UnsupportedFormat` if the bytes are not JPEG or PNG, and
/// `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let format = UploadFormat::detect(bytes).ok_or(DecodeError::UnsupportedFormat)?;

    let img = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let raster = into_raster(img)?;
    debug!(
        "decoded {:?} upload: {}x{} with {} channel(s)",
        format,
        raster.width(),
        raster.height(),
        raster.channels()
    );
    Ok(raster)
}

/// Convert a decoded image into an 8-bit raster, preserving the channel layout.
fn into_raster(img: DynamicImage) -> Result<RasterImage, DecodeError> {
    let (width, height) = (img.width(), img.height());

    let (channels, pixels) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => match other.color().channel_count() {
            1 => (1, other.into_luma8().into_raw()),
            2 => (2, other.into_luma_alpha8().into_raw()),
            3 => (3, other.into_rgb8().into_raw()),
            _ => (4, other.into_rgba8().into_raw()),
        },
    };

    RasterImage::new(width, height, channels, pixels)
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Luma};
    use std::io::Cursor;

    // Minimal valid JPEG bytes (1x1 grayscale pixel)
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];
    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_decode_minimal_jpeg() {
        let img = decode_image(MINIMAL_JPEG).unwrap();
        assert_eq!(img.width(), 1);
        assert_eq!(img.height(), 1);
        // Single component JPEG decodes to grayscale
        assert_eq!(img.channels(), 1);
        assert_eq!(img.pixels().len(), 1);
    }

    #[test]
    fn test_decode_rgb_png() {
        let mut buf = image::RgbImage::new(3, 2);
        buf.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        let bytes = png_bytes(DynamicImage::ImageRgb8(buf));

        let img = decode_image(&bytes).unwrap();
        assert_eq!((img.width(), img.height(), img.channels()), (3, 2, 3));
        assert_eq!(img.pixel(2, 1), Some(&[10u8, 20, 30][..]));
        assert_eq!(img.pixel(0, 0), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn test_decode_rgba_png_keeps_alpha() {
        let buf = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 128]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(buf));

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.channels(), 4);
        assert!(img.has_alpha());
        assert_eq!(img.pixel(1, 1), Some(&[1u8, 2, 3, 128][..]));
    }

    #[test]
    fn test_decode_gray_png() {
        let buf = image::GrayImage::from_pixel(5, 4, Luma([77]));
        let bytes = png_bytes(DynamicImage::ImageLuma8(buf));

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.channels(), 1);
        assert!(img.pixels().iter().all(|&v| v == 77));
    }

    #[test]
    fn test_decode_16bit_png_reduced_to_8bit() {
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(2, 2, Luma([u16::MAX]));
        let bytes = png_bytes(DynamicImage::ImageLuma16(buf));

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.channels(), 1);
        assert!(img.pixels().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_unsupported_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        // JPEG header but truncated
        let truncated = &MINIMAL_JPEG[0..20];
        let result = decode_image(truncated);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_truncated_png() {
        let buf = image::RgbImage::new(8, 8);
        let bytes = png_bytes(DynamicImage::ImageRgb8(buf));
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }
}
