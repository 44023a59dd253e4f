//! Error types for `DyeLab`

use thiserror::Error;

/// Why a sprite cannot be tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Every pixel is fully transparent.
    NoVisiblePixels,
    /// Visible pixels exist but all of them have zero luminance.
    NoLuminance,
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateReason::NoVisiblePixels => f.write_str("no visible pixels"),
            DegenerateReason::NoLuminance => f.write_str("all visible pixels are black"),
        }
    }
}

/// The error type for `DyeLab` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Solver Errors ====================
    /// The requested dye strength is not one of 25, 50, 75 or 100.
    #[error("invalid dye strength {value}: expected one of 25, 50, 75, 100")]
    InvalidStrength {
        /// The rejected strength, in percent.
        value: i64,
    },

    /// A strength given as text is not a number.
    #[error("invalid dye strength '{text}': expected one of 25, 50, 75, 100")]
    UnparsableStrength {
        /// The rejected input.
        text: String,
    },

    // ==================== Sprite Errors ====================
    /// The base sprite could not be decoded.
    #[error("failed to load sprite: {message}")]
    ImageLoad {
        /// The decoder's error message.
        message: String,
    },

    /// Two pixel buffers that must agree in size do not.
    #[error("buffer size mismatch: expected {expected} values, found {actual}")]
    DimensionMismatch {
        /// Expected number of channel values.
        expected: usize,
        /// Actual number of channel values.
        actual: usize,
    },

    /// The sprite has no brightness to renormalize against.
    #[error("degenerate sprite: {reason}")]
    DegenerateSprite {
        /// What made the sprite degenerate.
        reason: DegenerateReason,
    },

    /// Failed to encode a sprite as PNG.
    #[error("failed to encode PNG: {message}")]
    PngEncodeFailed {
        /// The encoder's error message.
        message: String,
    },
}

/// A specialized Result type for `DyeLab` operations.
pub type Result<T> = std::result::Result<T, Error>;
