//! Outfit selection and sprite variant resolution

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use dyelab::catalog::{Catalog, ClothingItem, ClothingSlot, DyeStrength};

use crate::assets::AssetStore;
use crate::error::{Error, Result};

/// A color applied at a strength
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dye {
    pub color: String,
    pub strength: DyeStrength,
}

impl Dye {
    pub fn new(color: impl Into<String>, strength: DyeStrength) -> Self {
        Self {
            color: color.into(),
            strength,
        }
    }
}

/// The item worn in one slot, optionally dyed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitPiece {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dye: Option<Dye>,
}

/// One item per slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shirt: Option<OutfitPiece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pants: Option<OutfitPiece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<OutfitPiece>,
}

impl Outfit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn piece(&self, slot: ClothingSlot) -> Option<&OutfitPiece> {
        match slot {
            ClothingSlot::Shirt => self.shirt.as_ref(),
            ClothingSlot::Pants => self.pants.as_ref(),
            ClothingSlot::Hat => self.hat.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: ClothingSlot) -> &mut Option<OutfitPiece> {
        match slot {
            ClothingSlot::Shirt => &mut self.shirt,
            ClothingSlot::Pants => &mut self.pants,
            ClothingSlot::Hat => &mut self.hat,
        }
    }

    /// Wear `item` in its slot. A dye already on that slot carries over.
    pub fn select(&mut self, item: &ClothingItem) {
        let slot = self.slot_mut(item.slot);
        let dye = slot.take().and_then(|piece| piece.dye);
        *slot = Some(OutfitPiece {
            item: item.name.clone(),
            dye,
        });
    }

    /// Take off whatever is worn in `slot`
    pub fn clear(&mut self, slot: ClothingSlot) {
        *self.slot_mut(slot) = None;
    }

    /// Dye the piece in `slot`. A strength of 0 removes the dye.
    ///
    /// # Errors
    /// Returns [`Error::EmptySlot`] when nothing is worn in `slot` and an
    /// invalid strength error for anything but 0, 25, 50, 75 or 100.
    pub fn dye(&mut self, slot: ClothingSlot, color: &str, strength: i64) -> Result<()> {
        let dye = if strength == 0 {
            None
        } else {
            Some(Dye::new(color, DyeStrength::from_percent(strength)?))
        };
        let piece = self
            .slot_mut(slot)
            .as_mut()
            .ok_or(Error::EmptySlot(slot))?;
        piece.dye = dye;
        Ok(())
    }

    /// Sprite file to show for `slot`, `None` when the slot is empty.
    ///
    /// Undyeable items and undyed pieces show the original.
    pub fn variant_path(
        &self,
        store: &AssetStore,
        catalog: &Catalog,
        slot: ClothingSlot,
    ) -> Result<Option<PathBuf>> {
        let Some(piece) = self.piece(slot) else {
            return Ok(None);
        };
        let item = catalog
            .item(&piece.item)
            .ok_or_else(|| Error::UnknownItem(piece.item.clone()))?;

        let path = match &piece.dye {
            Some(dye) if item.dyeable => store.variant_path(item, &dye.color, dye.strength),
            _ => store.original_path(item),
        };
        Ok(Some(path))
    }

    /// Sprite files of every worn piece, in drawing order
    pub fn layers(
        &self,
        store: &AssetStore,
        catalog: &Catalog,
    ) -> Result<Vec<(ClothingSlot, PathBuf)>> {
        let mut layers = Vec::new();
        for slot in ClothingSlot::ALL {
            if let Some(path) = self.variant_path(store, catalog, slot)? {
                layers.push((slot, path));
            }
        }
        Ok(layers)
    }
}
