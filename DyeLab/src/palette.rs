//! Built-in dye palette - the named colors sprites are tinted with

use crate::catalog::Rgb;

/// A named dye color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    /// Color name, also used in variant file names (e.g. "dark blue")
    pub name: &'static str,
    pub rgb: Rgb,
}

impl PaletteColor {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: Rgb::new(r, g, b),
        }
    }
}

/// Every dye color, alphabetical
pub const PALETTE: &[PaletteColor] = &[
    PaletteColor::new("aquamarine", 127, 255, 212),
    PaletteColor::new("black", 45, 45, 45),
    PaletteColor::new("blue", 46, 85, 183),
    PaletteColor::new("brown", 130, 73, 37),
    PaletteColor::new("copper", 179, 85, 0),
    PaletteColor::new("cyan", 0, 255, 255),
    PaletteColor::new("dark blue", 0, 0, 139),
    PaletteColor::new("dark brown", 139, 69, 19),
    PaletteColor::new("dark gray", 169, 169, 169),
    PaletteColor::new("dark green", 0, 100, 0),
    PaletteColor::new("dark pink", 255, 20, 147),
    PaletteColor::new("dark purple", 148, 0, 211),
    PaletteColor::new("dark red", 139, 0, 0),
    PaletteColor::new("dark yellow", 184, 134, 11),
    PaletteColor::new("gold", 255, 215, 0),
    PaletteColor::new("gray", 128, 128, 128),
    PaletteColor::new("green", 10, 143, 0),
    PaletteColor::new("iridium", 105, 15, 255),
    PaletteColor::new("iron", 197, 213, 224),
    PaletteColor::new("jade", 130, 158, 93),
    PaletteColor::new("light cyan", 180, 255, 255),
    PaletteColor::new("lime", 0, 255, 0),
    PaletteColor::new("orange", 255, 128, 0),
    PaletteColor::new("pale violet red", 219, 112, 147),
    PaletteColor::new("pink", 255, 163, 186),
    PaletteColor::new("poppyseed", 82, 47, 153),
    PaletteColor::new("purple", 115, 41, 181),
    PaletteColor::new("red", 220, 0, 0),
    PaletteColor::new("salmon", 255, 85, 95),
    PaletteColor::new("sand", 255, 222, 173),
    PaletteColor::new("white", 255, 255, 255),
    PaletteColor::new("yellow", 255, 230, 0),
    PaletteColor::new("yellow green", 173, 255, 47),
];

/// Total number of palette colors
pub const PALETTE_SIZE: usize = 33;

/// Find a palette color by name, ignoring ASCII case
#[must_use]
pub fn find_color(name: &str) -> Option<&'static PaletteColor> {
    PALETTE.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}
