//! Type definitions for catalog data

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An in-game item that can be put in a dye pot or used for tailoring.
///
/// Identity is the name alone; the image reference is carried along for
/// display and never compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque image reference (URL or path), if known
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}

// Must hash exactly like `str` so `Borrow<str>` lookups work.
impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ingredient {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Borrow<str> for Ingredient {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Format as `rrggbb` (lowercase, no leading `#`)
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

impl std::str::FromStr for Rgb {
    type Err = String;

    /// Accepts `#rrggbb`, `rrggbb` or `r,g,b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(format!("expected three components in '{s}'"));
            }
            let mut rgb = [0u8; 3];
            for (slot, part) in rgb.iter_mut().zip(&parts) {
                *slot = part
                    .parse::<u8>()
                    .map_err(|e| format!("invalid component '{part}': {e}"))?;
            }
            return Ok(Rgb(rgb));
        }

        let hex = s.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected 6 hex digits in '{s}'"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("invalid hex '{s}': {e}"))
        };
        Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

/// Where a clothing item is worn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingSlot {
    Shirt,
    Pants,
    Hat,
}

impl ClothingSlot {
    /// All slots in catalog order
    pub const ALL: [ClothingSlot; 3] = [ClothingSlot::Shirt, ClothingSlot::Pants, ClothingSlot::Hat];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClothingSlot::Shirt => "shirt",
            ClothingSlot::Pants => "pants",
            ClothingSlot::Hat => "hat",
        }
    }
}

impl std::fmt::Display for ClothingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClothingSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shirt" | "shirts" => Ok(ClothingSlot::Shirt),
            "pants" => Ok(ClothingSlot::Pants),
            "hat" | "hats" => Ok(ClothingSlot::Hat),
            _ => Err(format!(
                "Invalid slot '{s}'. Valid values: shirt, pants, hat"
            )),
        }
    }
}

/// A tailorable piece of clothing
///
/// `ingredients` are what the item is crafted from, not dye ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub name: String,
    pub slot: ClothingSlot,
    pub dyeable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl ClothingItem {
    pub fn new(name: impl Into<String>, slot: ClothingSlot, dyeable: bool) -> Self {
        Self {
            name: name.into(),
            slot,
            dyeable,
            image: None,
            ingredients: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
