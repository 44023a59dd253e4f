#![allow(non_snake_case)]
//! # DyeLab
//!
//! Dye recipes and sprite tinting for tailored clothing.
//!
//! ## Components
//!
//! - **Catalog** - colors, dye ingredient strengths and clothing items
//! - **Solver** - every ingredient combination that dyes a color at a strength
//! - **Tint** - deterministic recoloring of a sprite for a color and strength
//! - **Palette** - the built-in named dye colors
//!
//! ## Quick Start
//!
//! ### Finding recipes
//!
//! ```
//! use dyelab::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! catalog.insert_color(
//!     ColorEntry::new("red", Rgb::new(220, 0, 0))
//!         .with_ingredient(Ingredient::new("Cranberries"), DyeStrength::Full)
//!         .with_ingredient(Ingredient::new("Hot Pepper"), DyeStrength::Half),
//! );
//!
//! for recipe in catalog.recipes("red", 100, &[])? {
//!     println!("{recipe}");
//! }
//! # Ok::<(), dyelab::Error>(())
//! ```
//!
//! ### Tinting a sprite
//!
//! ```
//! use dyelab::prelude::*;
//!
//! let shirt = Sprite::from_rgba(1, 1, vec![180, 180, 180, 255])?;
//! let red = tint(&shirt, Rgb::new(220, 0, 0), DyeStrength::Half)?;
//! assert_eq!(red.dimensions(), (1, 1));
//! # Ok::<(), dyelab::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod palette;
pub mod solver;
pub mod sprite;
pub mod tint;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::catalog::{
        Catalog, ClothingItem, ClothingSlot, ColorEntry, DyeStrength, Ingredient, Rgb,
    };
    pub use crate::error::{DegenerateReason, Error, Result};
    pub use crate::palette::{PALETTE, PaletteColor, find_color};
    pub use crate::solver::{Combination, CombinationEntry, solve, solve_for};
    pub use crate::sprite::Sprite;
    pub use crate::tint::{TintAnalysis, analyze, tint, tint_analyzed, variant_file_name};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
