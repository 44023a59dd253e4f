//! Luminance conversion

use image::{Rgba, RgbaImage};

/// ITU-R 601-2 luma in 16.16 fixed point, rounded.
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let l = (u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16;
    l as u8
}

/// Convert to grayscale and back to RGBA, keeping the original alpha.
#[must_use]
pub fn to_grayscale_rgba(image: &RgbaImage) -> RgbaImage {
    let mut gray = image.clone();
    for pixel in gray.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let l = luminance(r, g, b);
        *pixel = Rgba([l, l, l, a]);
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(200, 200, 200), 200);
        // (255*19595 + 32768) >> 16
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 150);
        assert_eq!(luminance(0, 0, 255), 29);
    }

    #[test]
    fn test_alpha_is_preserved() {
        let image = RgbaImage::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255, 0, 77]).unwrap();
        let gray = to_grayscale_rgba(&image);
        assert_eq!(gray.as_raw(), &vec![76, 76, 76, 0, 150, 150, 150, 77]);
    }
}
