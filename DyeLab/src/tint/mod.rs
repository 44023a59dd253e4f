//! Sprite tint engine
//!
//! Recolors a transparent sprite the way the game's dye pot appears to:
//!
//! 1. Convert to grayscale, keeping alpha.
//! 2. Find the brightest visible luminance (`max_value`).
//! 3. Derive a blend opacity from `max_value` (logistic curve, dark sprites get
//!    less color) and from the dye strength.
//! 4. Multiply-blend a solid layer of the dye color over the grayscale sprite.
//!
//! The constants below were fitted by eye against in-game screenshots; changing
//! any of them changes every generated asset.

pub mod blend;
pub mod curves;
pub mod grayscale;

use image::RgbaImage;

use crate::catalog::{DyeStrength, MAX_STRENGTH, Rgb, STRENGTH_STEP};
use crate::error::{DegenerateReason, Error, Result};
use crate::sprite::Sprite;

use blend::FloatBuffer;

/// Ceiling of the lightness curve
pub const LIGHTNESS_CEILING: f64 = 0.85;
/// Steepness of the lightness curve (negative: brighter sprites score lower)
pub const LIGHTNESS_STEEPNESS: f64 = -0.07;
/// Luminance at which the lightness curve is halfway
pub const LIGHTNESS_MIDPOINT: f64 = 132.0;
/// Added to the lightness curve so no sprite scores below it
pub const LIGHTNESS_FLOOR: f64 = 0.15;
/// Strength score at the weakest and strongest dye
pub const STRENGTH_SCORE_RANGE: (f64, f64) = (1.25, 2.0);

/// Intermediate results of the tint pipeline for one base sprite.
///
/// Everything here depends on the sprite alone, so one analysis can be reused
/// for every color and strength.
#[derive(Debug, Clone)]
pub struct TintAnalysis {
    /// Grayscale sprite with the original alpha
    pub grayscale: RgbaImage,
    /// Brightest luminance among visible pixels
    pub max_value: u8,
    /// Per-pixel luminance stretched so `max_value` maps to 255.
    ///
    /// Transparent pixels keep their original luminance. Not used for
    /// compositing, which blends the unstretched grayscale.
    pub lightened: Vec<f64>,
}

impl TintAnalysis {
    #[must_use]
    pub fn lightness_score(&self) -> f64 {
        lightness_score(self.max_value)
    }

    #[must_use]
    pub fn blend_opacity(&self, strength: DyeStrength) -> f64 {
        blend_opacity(self.max_value, strength)
    }
}

/// Grayscale the sprite and measure its brightness.
///
/// # Errors
/// Returns [`Error::DegenerateSprite`] when no visible pixel has any
/// luminance, since brightness cannot be renormalized against zero.
pub fn analyze(sprite: &Sprite) -> Result<TintAnalysis> {
    let grayscale = grayscale::to_grayscale_rgba(sprite.as_image());

    let mut any_visible = false;
    let mut max_value = 0u8;
    for pixel in grayscale.pixels() {
        if pixel[3] > 0 {
            any_visible = true;
            max_value = max_value.max(pixel[0]);
        }
    }

    if max_value == 0 {
        let reason = if any_visible {
            DegenerateReason::NoLuminance
        } else {
            DegenerateReason::NoVisiblePixels
        };
        return Err(Error::DegenerateSprite { reason });
    }

    let max = f64::from(max_value);
    let lightened = grayscale
        .pixels()
        .map(|pixel| {
            let luminance = f64::from(pixel[0]);
            if pixel[3] > 0 {
                curves::map_between(luminance, 0.0, max, 0.0, 255.0)
            } else {
                luminance
            }
        })
        .collect();

    Ok(TintAnalysis {
        grayscale,
        max_value,
        lightened,
    })
}

/// Lightness factor in `0.15..=1.0` for a sprite's brightest luminance
#[must_use]
pub fn lightness_score(max_value: u8) -> f64 {
    curves::logistic(
        f64::from(max_value),
        LIGHTNESS_CEILING,
        LIGHTNESS_STEEPNESS,
        LIGHTNESS_MIDPOINT,
    ) + LIGHTNESS_FLOOR
}

/// Strength factor, linear from 1.25 at 25% to 2.0 at 100%
#[must_use]
pub fn strength_score(strength: DyeStrength) -> f64 {
    let (low, high) = STRENGTH_SCORE_RANGE;
    curves::map_between(
        f64::from(strength.percent()),
        f64::from(STRENGTH_STEP),
        f64::from(MAX_STRENGTH),
        low,
        high,
    )
}

/// Opacity of the color layer, capped at 1.0.
///
/// There is no lower bound.
#[must_use]
pub fn blend_opacity(max_value: u8, strength: DyeStrength) -> f64 {
    let opacity = lightness_score(max_value) * strength_score(strength);
    let steps = f64::from(strength.percent()) / f64::from(STRENGTH_STEP) - 1.0;
    let opacity = opacity + steps * (1.0 - opacity) / 3.0;
    opacity.min(1.0)
}

/// Tint `sprite` with `color` at `strength`.
///
/// Always recomputes; callers that cache outputs decide whether to call.
///
/// # Errors
/// Returns [`Error::DegenerateSprite`] for sprites without visible
/// brightness and [`Error::DimensionMismatch`] if an internal buffer ends up
/// the wrong size.
pub fn tint(sprite: &Sprite, color: Rgb, strength: DyeStrength) -> Result<Sprite> {
    let analysis = analyze(sprite)?;
    tint_analyzed(&analysis, color, strength)
}

/// [`tint`] starting from an existing analysis
///
/// # Errors
/// Returns [`Error::DimensionMismatch`] if an internal buffer ends up the
/// wrong size.
pub fn tint_analyzed(analysis: &TintAnalysis, color: Rgb, strength: DyeStrength) -> Result<Sprite> {
    let opacity = analysis.blend_opacity(strength);
    let (width, height) = analysis.grayscale.dimensions();

    let base = FloatBuffer::from_rgba(&analysis.grayscale);
    let layer = FloatBuffer::solid(width, height, color);
    let blended = blend::multiply(&base, &layer, opacity)?;

    tracing::debug!(
        "Tinted {}x{} sprite with #{} at {}% (max {}, opacity {:.4})",
        width,
        height,
        color.to_hex(),
        strength,
        analysis.max_value,
        opacity
    );

    Ok(Sprite::from_image(blended.to_rgba8()?))
}

/// File name of a tinted variant, `<color>_<strength>.png`
#[must_use]
pub fn variant_file_name(color_name: &str, strength: DyeStrength) -> String {
    format!("{color_name}_{strength}.png")
}
