//! High-level operations over a catalog and an asset store

pub mod recipes;
pub mod tinting;

pub use recipes::{recipes, recipes_for_item, single_ingredients};
pub use tinting::{
    BatchTintOptions, BatchTintResult, ItemTintOutcome, TintProgress, dye_colors, orphaned_originals,
    tint_catalog,
    tint_file, tint_item,
};
