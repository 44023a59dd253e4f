//! Nearest-neighbor downscaling of imported sprites
//!
//! Wiki sprites are the in-game pixels upscaled by an integer factor. Picking
//! the center source pixel of every block recovers them exactly.

use image::RgbaImage;

use dyelab::catalog::ClothingSlot;
use dyelab::sprite::Sprite;

/// How much an imported original of `slot` is shrunk
#[must_use]
pub const fn reduce_factor(slot: ClothingSlot) -> u32 {
    match slot {
        ClothingSlot::Hat => 3,
        ClothingSlot::Shirt | ClothingSlot::Pants => 4,
    }
}

/// Shrink `sprite` by `factor` in both directions, nearest-neighbor.
///
/// Output pixel `x` samples source pixel `x * factor + factor / 2`. Sizes
/// round down but never below one pixel. A factor of 0 or 1 copies.
#[must_use]
pub fn downscale_nearest(sprite: &Sprite, factor: u32) -> Sprite {
    if factor <= 1 {
        return sprite.clone();
    }

    let source = sprite.as_image();
    let (width, height) = source.dimensions();
    let out_width = (width / factor).max(1);
    let out_height = (height / factor).max(1);

    let sample = |out: u32, size: u32| (out * factor + factor / 2).min(size.saturating_sub(1));
    let scaled = RgbaImage::from_fn(out_width, out_height, |x, y| {
        *source.get_pixel(sample(x, width), sample(y, height))
    });

    Sprite::from_image(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 8x8 image made of 4x4 blocks, each block one color with a
    /// marker pixel at the block's sampled position.
    fn blocky() -> Sprite {
        let image = RgbaImage::from_fn(8, 8, |x, y| {
            let block = (y / 4) * 2 + x / 4;
            if x % 4 == 2 && y % 4 == 2 {
                Rgba([block as u8 * 60, 255, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        Sprite::from_image(image)
    }

    #[test]
    fn test_samples_block_centers() {
        let scaled = downscale_nearest(&blocky(), 4);
        assert_eq!(scaled.dimensions(), (2, 2));
        assert_eq!(
            scaled.pixels(),
            &[0, 255, 0, 255, 60, 255, 0, 255, 120, 255, 0, 255, 180, 255, 0, 255]
        );
    }

    #[test]
    fn test_factor_one_copies() {
        let sprite = blocky();
        assert_eq!(downscale_nearest(&sprite, 1), sprite);
    }

    #[test]
    fn test_tiny_sprite_keeps_one_pixel() {
        let sprite = Sprite::from_rgba(2, 2, vec![9; 16]).unwrap();
        assert_eq!(downscale_nearest(&sprite, 3).dimensions(), (1, 1));
    }

    #[test]
    fn test_reduce_factor() {
        assert_eq!(reduce_factor(ClothingSlot::Hat), 3);
        assert_eq!(reduce_factor(ClothingSlot::Shirt), 4);
        assert_eq!(reduce_factor(ClothingSlot::Pants), 4);
    }
}
