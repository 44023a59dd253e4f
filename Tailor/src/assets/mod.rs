//! On-disk sprite store
//!
//! Layout under the root:
//!
//! ```text
//! <root>/<slot>/<item>/original.png
//! <root>/<slot>/<item>/<color>_<strength>.png
//! <root>/ingredients/<ingredient>.png
//! ```
//!
//! Item and ingredient names are sanitized to their alphanumeric characters.

pub mod naming;
pub mod resize;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use dyelab::catalog::{ClothingItem, DyeStrength, Ingredient};
use dyelab::sprite::Sprite;
use dyelab::tint::variant_file_name;

use crate::error::{Error, Result};

pub use naming::{INGREDIENTS_DIR, ORIGINAL_FILE_NAME, sanitize_name};
pub use resize::{downscale_nearest, reduce_factor};

/// Sprite files of clothing items and ingredients under one root directory
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    // Paths

    /// Directory holding all sprites of one item
    #[must_use]
    pub fn item_dir(&self, item: &ClothingItem) -> PathBuf {
        self.root
            .join(item.slot.as_str())
            .join(sanitize_name(&item.name))
    }

    #[must_use]
    pub fn original_path(&self, item: &ClothingItem) -> PathBuf {
        self.item_dir(item).join(ORIGINAL_FILE_NAME)
    }

    /// Path of the item tinted with `color` at `strength`
    #[must_use]
    pub fn variant_path(&self, item: &ClothingItem, color: &str, strength: DyeStrength) -> PathBuf {
        self.item_dir(item).join(variant_file_name(color, strength))
    }

    #[must_use]
    pub fn ingredient_path(&self, ingredient: &Ingredient) -> PathBuf {
        self.root
            .join(INGREDIENTS_DIR)
            .join(format!("{}.png", sanitize_name(ingredient.name())))
    }

    // Queries

    #[must_use]
    pub fn has_original(&self, item: &ClothingItem) -> bool {
        self.original_path(item).is_file()
    }

    #[must_use]
    pub fn has_variant(&self, item: &ClothingItem, color: &str, strength: DyeStrength) -> bool {
        self.variant_path(item, color, strength).is_file()
    }

    /// Every `original.png` under the root, sorted
    #[must_use]
    pub fn find_originals(&self) -> Vec<PathBuf> {
        let mut originals: Vec<_> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && e.file_name() == ORIGINAL_FILE_NAME)
            .map(|e| e.path().to_path_buf())
            .collect();

        originals.sort();
        originals
    }

    // Reading and writing

    /// Decode the sprite stored at `path`
    pub fn load_sprite(&self, path: &Path) -> Result<Sprite> {
        if !path.is_file() {
            return Err(Error::MissingAsset {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path)?;
        Ok(Sprite::decode(&bytes)?)
    }

    pub fn load_original(&self, item: &ClothingItem) -> Result<Sprite> {
        self.load_sprite(&self.original_path(item))
    }

    /// Encode `sprite` as PNG at `path`, creating parent directories
    pub fn save_sprite(&self, path: &Path, sprite: &Sprite) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, sprite.to_png_bytes()?)?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    // Importing

    /// Store raw image bytes as an item's original.
    ///
    /// The image is downscaled by [`reduce_factor`] for the item's slot.
    pub fn import_original(&self, item: &ClothingItem, bytes: &[u8]) -> Result<PathBuf> {
        let sprite = Sprite::decode(bytes)?;
        let scaled = downscale_nearest(&sprite, reduce_factor(item.slot));
        let path = self.original_path(item);
        self.save_sprite(&path, &scaled)?;
        tracing::info!(
            "Imported {} ({}x{} -> {}x{})",
            item.name,
            sprite.width(),
            sprite.height(),
            scaled.width(),
            scaled.height()
        );
        Ok(path)
    }

    /// Store raw image bytes as an ingredient icon, unscaled
    pub fn import_ingredient(&self, ingredient: &Ingredient, bytes: &[u8]) -> Result<PathBuf> {
        let sprite = Sprite::decode(bytes)?;
        let path = self.ingredient_path(ingredient);
        self.save_sprite(&path, &sprite)?;
        Ok(path)
    }
}
