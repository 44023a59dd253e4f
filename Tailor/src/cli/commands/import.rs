//! CLI command for importing downloaded sprites

use std::path::Path;

use dyelab::catalog::Ingredient;

use super::open_toolkit;
use crate::assets::AssetStore;
use crate::config::TailorConfig;

/// Import an image file as an item original or an ingredient icon
pub fn execute(
    config: &TailorConfig,
    name: &str,
    image: &Path,
    ingredient: bool,
    catalog: Option<&Path>,
    assets: Option<&Path>,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(image)?;

    if ingredient {
        let store = AssetStore::new(assets.unwrap_or(config.asset_root.as_path()));
        let path = store.import_ingredient(&Ingredient::new(name), &bytes)?;
        println!("Imported ingredient {name} -> {}", path.display());
        return Ok(());
    }

    let toolkit = open_toolkit(config, catalog, assets)?;
    let item = toolkit.item(name)?;
    let path = toolkit.store().import_original(item, &bytes)?;
    println!("Imported {} ({}) -> {}", item.name, item.slot, path.display());
    Ok(())
}
