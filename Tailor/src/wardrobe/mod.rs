//! Outfit state: what is worn, how it is dyed, and which recipe is shown

pub mod browser;
pub mod outfit;

pub use browser::RecipeBrowser;
pub use outfit::{Dye, Outfit, OutfitPiece};
