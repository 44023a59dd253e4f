//! CLI command for resolving an outfit to sprite files

use std::path::Path;

use dyelab::catalog::ClothingSlot;

use super::{PieceArg, open_toolkit};
use crate::config::TailorConfig;
use crate::wardrobe::Outfit;

/// Print the sprite file of every worn piece, in drawing order
pub fn execute(
    config: &TailorConfig,
    pieces: [Option<&PieceArg>; 3],
    catalog: Option<&Path>,
    assets: Option<&Path>,
) -> anyhow::Result<()> {
    let toolkit = open_toolkit(config, catalog, assets)?;

    let mut outfit = Outfit::new();
    for (slot, piece) in ClothingSlot::ALL.into_iter().zip(pieces) {
        let Some(piece) = piece else {
            continue;
        };
        let item = toolkit.item(&piece.item)?;
        if item.slot != slot {
            let choices: Vec<&str> = toolkit
                .catalog()
                .items_in_slot(slot)
                .map(|candidate| candidate.name.as_str())
                .collect();
            anyhow::bail!(
                "{} is worn as {}, not {} (choose from: {})",
                item.name,
                item.slot,
                slot,
                choices.join(", ")
            );
        }
        outfit.select(item);
        if let Some((color, strength)) = &piece.dye {
            if toolkit.catalog().color(color).is_none() {
                anyhow::bail!("Unknown color '{color}'");
            }
            outfit.dye(slot, color, *strength)?;
        }
    }

    let layers = outfit.layers(toolkit.store(), toolkit.catalog())?;
    if layers.is_empty() {
        println!("Nothing worn");
        return Ok(());
    }

    for (slot, path) in layers {
        let marker = if path.is_file() { "" } else { " (missing)" };
        println!("  {:6} {}{}", slot.as_str(), path.display(), marker);
    }
    Ok(())
}
