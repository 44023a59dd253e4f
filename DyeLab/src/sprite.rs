//! RGBA sprites
//!
//! Thin wrapper around [`image::RgbaImage`] that maps decoder failures onto
//! the crate's error type.

use image::RgbaImage;
use image::codecs::png::PngEncoder;

use crate::error::{Error, Result};

/// A 2D grid of 8-bit RGBA pixels; alpha is used as a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    #[must_use]
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Build a sprite from raw RGBA bytes, row-major.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `pixels` does not hold exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        let actual = pixels.len();
        RgbaImage::from_raw(width, height, pixels)
            .filter(|_| actual == expected)
            .map(Self::from_image)
            .ok_or(Error::DimensionMismatch { expected, actual })
    }

    /// Decode an encoded image (PNG, or anything the `image` crate can sniff).
    ///
    /// # Errors
    /// Returns [`Error::ImageLoad`] if the bytes cannot be decoded.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).map_err(|e| Error::ImageLoad {
            message: e.to_string(),
        })?;
        Ok(Self::from_image(image.to_rgba8()))
    }

    /// Encode as an 8-bit-per-channel RGBA PNG.
    ///
    /// # Errors
    /// Returns [`Error::PngEncodeFailed`] if encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut png_data = Vec::new();
        let encoder = PngEncoder::new(&mut png_data);
        self.image
            .write_with_encoder(encoder)
            .map_err(|e| Error::PngEncodeFailed {
                message: e.to_string(),
            })?;
        Ok(png_data)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Raw RGBA bytes, row-major
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[must_use]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Sprite::from_rgba(1, 1, vec![1, 2, 3, 4]).is_ok());
        assert!(matches!(
            Sprite::from_rgba(2, 1, vec![1, 2, 3, 4]),
            Err(Error::DimensionMismatch {
                expected: 8,
                actual: 4
            })
        ));
        assert!(matches!(
            Sprite::from_rgba(1, 1, vec![0; 5]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_png_round_trip_keeps_pixels() {
        let sprite = Sprite::from_rgba(2, 1, vec![10, 20, 30, 255, 0, 0, 0, 0]).unwrap();
        let bytes = sprite.to_png_bytes().unwrap();
        assert_eq!(Sprite::decode(&bytes).unwrap(), sprite);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            Sprite::decode(b"not an image"),
            Err(Error::ImageLoad { .. })
        ));
    }
}
