#![allow(non_snake_case)]
//! Tailor - dye recipe lookup and sprite tinting toolkit
//!
//! Wraps the [`dyelab`] engine with a JSON catalog loader, an on-disk asset
//! store, batch tinting, outfit state and a command-line interface.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `tailor` command-line binary

// Re-export dyelab
pub use dyelab;

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod operations;
pub mod wardrobe;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

use dyelab::catalog::{Catalog, ClothingItem};
use dyelab::solver::Combination;

use assets::AssetStore;
use catalog::{CatalogProvider, JsonCatalogProvider};
use config::TailorConfig;
use operations::tinting::{BatchTintResult, TintProgress};

/// Main toolkit interface
pub struct Toolkit {
    catalog: Catalog,
    store: AssetStore,
    config: TailorConfig,
}

impl Toolkit {
    /// Build a toolkit from config, loading the configured catalog.
    ///
    /// Without a catalog path the toolkit starts with an empty catalog.
    pub fn new(config: TailorConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => JsonCatalogProvider::new(path).load()?,
            None => Catalog::new(),
        };
        Ok(Self::with_catalog(catalog, config))
    }

    /// Build a toolkit around an already loaded catalog
    pub fn with_catalog(catalog: Catalog, config: TailorConfig) -> Self {
        let store = AssetStore::new(&config.asset_root);
        Self {
            catalog,
            store,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    pub fn config(&self) -> &TailorConfig {
        &self.config
    }

    pub fn item(&self, name: &str) -> Result<&ClothingItem> {
        self.catalog
            .item(name)
            .ok_or_else(|| Error::UnknownItem(name.to_string()))
    }

    // High-level operations

    /// Recipes for dyeing a clothing item, favoring its crafting ingredients
    pub fn recipes_for_item(
        &self,
        item: &str,
        color: &str,
        strength: i64,
    ) -> Result<Vec<Combination>> {
        operations::recipes::recipes_for_item(&self.catalog, item, color, strength)
    }

    /// Tint every dyeable item with the configured settings
    pub fn tint_all<F>(&self, progress: F) -> Result<BatchTintResult>
    where
        F: Fn(&TintProgress) + Send + Sync,
    {
        operations::tinting::tint_catalog(
            &self.store,
            &self.catalog,
            &self.config.batch_options(),
            progress,
        )
    }
}
