//! Quantized dye strengths

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Granularity of every dye strength, in percent.
pub const STRENGTH_STEP: u32 = 25;

/// Strongest possible dye, in percent.
pub const MAX_STRENGTH: u32 = 100;

/// Most ingredient units any recipe can hold.
///
/// Every ingredient contributes a positive multiple of [`STRENGTH_STEP`], so a
/// recipe reaching [`MAX_STRENGTH`] never needs more than this many units.
pub const MAX_UNITS: usize = (MAX_STRENGTH / STRENGTH_STEP) as usize;

/// One of the four dye strengths the game supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DyeStrength {
    /// 25%
    Quarter,
    /// 50%
    Half,
    /// 75%
    ThreeQuarters,
    /// 100%
    Full,
}

impl DyeStrength {
    /// All strengths, weakest first.
    pub const ALL: [DyeStrength; 4] = [
        DyeStrength::Quarter,
        DyeStrength::Half,
        DyeStrength::ThreeQuarters,
        DyeStrength::Full,
    ];

    /// Validate a strength given in percent.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStrength`] unless `percent` is 25, 50, 75 or 100.
    pub fn from_percent(percent: i64) -> Result<Self> {
        match percent {
            25 => Ok(DyeStrength::Quarter),
            50 => Ok(DyeStrength::Half),
            75 => Ok(DyeStrength::ThreeQuarters),
            100 => Ok(DyeStrength::Full),
            value => Err(Error::InvalidStrength { value }),
        }
    }

    /// Strength in percent.
    #[must_use]
    pub const fn percent(self) -> u32 {
        match self {
            DyeStrength::Quarter => 25,
            DyeStrength::Half => 50,
            DyeStrength::ThreeQuarters => 75,
            DyeStrength::Full => 100,
        }
    }

    /// Strength in units of [`STRENGTH_STEP`] (1..=4).
    #[must_use]
    pub const fn units(self) -> u32 {
        self.percent() / STRENGTH_STEP
    }

    /// Parse a scraped strength label such as "Strong" or "Medium".
    ///
    /// Anything that is neither strong nor medium counts as weak.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("strong") {
            DyeStrength::Full
        } else if label.contains("medium") {
            DyeStrength::Half
        } else {
            DyeStrength::Quarter
        }
    }
}

impl TryFrom<u32> for DyeStrength {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::from_percent(i64::from(value))
    }
}

impl From<DyeStrength> for u32 {
    fn from(strength: DyeStrength) -> Self {
        strength.percent()
    }
}

impl std::fmt::Display for DyeStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.percent())
    }
}

impl std::str::FromStr for DyeStrength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches('%');
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| Error::UnparsableStrength { text: s.to_string() })?;
        Self::from_percent(value)
    }
}
