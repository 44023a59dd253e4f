//! Floating point RGBA buffers and the multiply blend mode
//!
//! Channels are stored as `f64` in the 0..=255 range, matching how the
//! reference pipeline converted 8-bit images before blending.

use image::RgbaImage;

use crate::catalog::Rgb;
use crate::error::{Error, Result};

/// An RGBA image with one `f64` per channel
#[derive(Debug, Clone, PartialEq)]
pub struct FloatBuffer {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl FloatBuffer {
    #[must_use]
    pub fn from_rgba(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw().iter().map(|&v| f64::from(v)).collect(),
        }
    }

    /// A fully opaque buffer filled with `color`
    #[must_use]
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let pixel = [
            f64::from(color.r()),
            f64::from(color.g()),
            f64::from(color.b()),
            255.0,
        ];
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: pixel.iter().copied().cycle().take(count * 4).collect(),
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Quantize back to 8 bits, truncating toward zero.
    ///
    /// Out-of-range values saturate and NaN becomes 0.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if the buffer does not hold
    /// `width * height * 4` values.
    pub fn to_rgba8(&self) -> Result<RgbaImage> {
        let expected = self.width as usize * self.height as usize * 4;
        if self.data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        let bytes: Vec<u8> = self.data.iter().map(|&v| v as u8).collect();
        RgbaImage::from_raw(self.width, self.height, bytes).ok_or(Error::DimensionMismatch {
            expected,
            actual: self.data.len(),
        })
    }
}

/// Blend `layer` over `base` with the multiply mode at `opacity`.
///
/// Per pixel, with every channel normalised to `0..=1`:
///
/// ```text
/// comp_alpha = min(base.a, layer.a) * opacity
/// new_alpha  = base.a + (1 - base.a) * comp_alpha
/// ratio      = comp_alpha / new_alpha
/// rgb        = clamp(layer.rgb * base.rgb) * ratio + base.rgb * (1 - ratio)
/// a          = base.a
/// ```
///
/// A pixel whose ratio is undefined (transparent base) comes out as zero.
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if the buffers differ in size.
pub fn multiply(base: &FloatBuffer, layer: &FloatBuffer, opacity: f64) -> Result<FloatBuffer> {
    if base.dimensions() != layer.dimensions() || base.data.len() != layer.data.len() {
        return Err(Error::DimensionMismatch {
            expected: base.data.len(),
            actual: layer.data.len(),
        });
    }

    let mut data = Vec::with_capacity(base.data.len());
    for (bottom, top) in base.data.chunks_exact(4).zip(layer.data.chunks_exact(4)) {
        let base_alpha = bottom[3] / 255.0;
        let layer_alpha = top[3] / 255.0;

        let comp_alpha = base_alpha.min(layer_alpha) * opacity;
        let new_alpha = base_alpha + (1.0 - base_alpha) * comp_alpha;
        let ratio = comp_alpha / new_alpha;

        for channel in 0..3 {
            let below = bottom[channel] / 255.0;
            let above = top[channel] / 255.0;
            let comp = (above * below).clamp(0.0, 1.0);
            let value = comp * ratio + below * (1.0 - ratio);
            data.push(if value.is_nan() { 0.0 } else { value } * 255.0);
        }
        data.push(base_alpha * 255.0);
    }

    Ok(FloatBuffer {
        width: base.width,
        height: base.height,
        data,
    })
}
