//! Row types of the scraped catalog document

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use dyelab::catalog::{Catalog, ClothingItem, ClothingSlot, ColorEntry, DyeStrength, Ingredient, Rgb};
use dyelab::palette;

use crate::assets::sanitize_name;
use crate::error::{Error, Result};

/// The whole catalog document: dye rows and tailoring rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub dyes: Vec<DyeRow>,
    #[serde(default)]
    pub tailoring: Vec<TailoringRow>,
}

/// One row of the dyeing table: an ingredient dyes one color at one strength
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DyeRow {
    pub ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Rgb>,
    pub strength: StrengthField,
}

/// Dye strength as scraped: a label like "Strong" or a percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrengthField {
    Percent(i64),
    Label(String),
}

impl StrengthField {
    /// Resolve to a strength. Labels never fail, percents must be valid.
    pub fn resolve(&self) -> Result<DyeStrength> {
        match self {
            StrengthField::Percent(value) => Ok(DyeStrength::from_percent(*value)?),
            StrengthField::Label(label) => Ok(DyeStrength::from_label(label)),
        }
    }
}

/// One row of a tailoring table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringRow {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slot: ClothingSlot,
    /// Hat tables have no dyeable column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dyeable: Option<bool>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl CatalogDocument {
    /// Build a catalog from the rows.
    ///
    /// Dye rows group into colors in first-seen order. A color's RGB comes
    /// from its first row that has one, else from the built-in palette.
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut catalog = Catalog::new();

        for row in self.dyes {
            let strength = row.strength.resolve()?;
            let mut ingredient = Ingredient::new(row.ingredient);
            if let Some(image) = row.image {
                ingredient = ingredient.with_image(image);
            }

            if let Some(entry) = catalog.color_mut(&row.color) {
                if let Some(rgb) = row.rgb {
                    if rgb != entry.rgb {
                        tracing::warn!(
                            "Color '{}' listed with {} and {}, keeping the first",
                            row.color,
                            entry.rgb.to_hex(),
                            rgb.to_hex()
                        );
                    }
                }
                entry.insert(ingredient, strength);
                continue;
            }

            let rgb = match row.rgb {
                Some(rgb) => rgb,
                None => palette::find_color(&row.color)
                    .map(|color| color.rgb)
                    .ok_or_else(|| {
                        Error::Catalog(format!("color '{}' has no RGB value", row.color))
                    })?,
            };
            catalog.insert_color(ColorEntry::new(row.color, rgb).with_ingredient(ingredient, strength));
        }

        // sanitized names, one asset directory each
        let mut taken: IndexSet<String> = IndexSet::new();
        for row in self.tailoring {
            let name = unique_name(&row, &taken);
            if name != row.name {
                tracing::debug!("Renamed duplicate clothing item '{}' to '{}'", row.name, name);
            }
            taken.insert(sanitize_name(&name));

            let mut item = ClothingItem::new(name, row.slot, row.dyeable.unwrap_or(false))
                .with_ingredients(row.ingredients);
            if let Some(image) = row.image {
                item = item.with_image(image);
            }
            catalog.add_clothing(item);
        }

        tracing::info!(
            "Loaded catalog: {} colors, {} clothing items",
            catalog.color_count(),
            catalog.clothing().len()
        );
        Ok(catalog)
    }
}

/// Name for a tailoring row, renamed after its image when already taken.
///
/// `taken` holds sanitized names, so two items never share an asset directory.
fn unique_name(row: &TailoringRow, taken: &IndexSet<String>) -> String {
    let is_free = |candidate: &str| !taken.contains(&sanitize_name(candidate));
    if is_free(&row.name) {
        return row.name.clone();
    }
    if let Some(stem) = row.image.as_deref().and_then(image_stem) {
        if is_free(stem) {
            return stem.to_string();
        }
    }
    (2..)
        .map(|n| format!("{} ({n})", row.name))
        .find(|candidate| is_free(candidate))
        .unwrap_or_else(|| row.name.clone())
}

/// File stem of an image reference: last path segment up to its first dot
pub fn image_stem(reference: &str) -> Option<&str> {
    let file = reference.rsplit('/').next()?;
    let stem = file.split('.').next()?;
    (!stem.is_empty()).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tailoring(name: &str, image: Option<&str>) -> TailoringRow {
        TailoringRow {
            name: name.to_string(),
            image: image.map(str::to_string),
            slot: ClothingSlot::Shirt,
            dyeable: Some(true),
            ingredients: Vec::new(),
        }
    }

    #[test]
    fn test_image_stem() {
        assert_eq!(image_stem("https://wiki/images/4/4b/Shirt_42.png"), Some("Shirt_42"));
        assert_eq!(image_stem("Shirt.tar.gz"), Some("Shirt"));
        assert_eq!(image_stem("images/"), None);
    }

    #[test]
    fn test_unique_name_falls_back_to_counter() {
        let mut taken = IndexSet::new();
        taken.insert("Shirt".to_string());
        assert_eq!(unique_name(&tailoring("Shirt", None), &taken), "Shirt (2)");
        assert_eq!(
            unique_name(&tailoring("Shirt", Some("a/Shirt_2.png")), &taken),
            "Shirt_2"
        );
        assert_eq!(unique_name(&tailoring("Vest", None), &taken), "Vest");
    }

    #[test]
    fn test_unique_name_compares_sanitized() {
        let mut taken = IndexSet::new();
        taken.insert("TankTop".to_string());
        assert_eq!(unique_name(&tailoring("Tank-Top", None), &taken), "Tank-Top (2)");
        assert_eq!(
            unique_name(&tailoring("Tank Top", Some("img/Tank_Top.png")), &taken),
            "Tank Top (2)"
        );
    }

    #[test]
    fn test_colliding_items_get_distinct_dirs() {
        let document = CatalogDocument {
            dyes: Vec::new(),
            tailoring: vec![
                tailoring("Tank Top", Some("img/Tank_Top_(Green).png")),
                tailoring("Tank Top", Some("img/Tank_Top.png")),
                tailoring("Tank-Top", None),
            ],
        };
        let catalog = document.into_catalog().unwrap();
        let names: Vec<&str> = catalog.clothing().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Tank Top", "Tank Top (2)", "Tank-Top (3)"]);

        let store = crate::assets::AssetStore::new("images");
        let dirs: IndexSet<_> = catalog.clothing().iter().map(|item| store.item_dir(item)).collect();
        assert_eq!(dirs.len(), 3);
    }

    #[test]
    fn test_strength_field() {
        assert_eq!(
            StrengthField::Label("Strong".into()).resolve().unwrap(),
            DyeStrength::Full
        );
        assert_eq!(StrengthField::Percent(75).resolve().unwrap(), DyeStrength::ThreeQuarters);
        assert!(StrengthField::Percent(30).resolve().is_err());
    }

    #[test]
    fn test_color_without_rgb_uses_palette() {
        let document = CatalogDocument {
            dyes: vec![DyeRow {
                ingredient: "Cranberries".into(),
                image: None,
                color: "red".into(),
                rgb: None,
                strength: StrengthField::Label("strong".into()),
            }],
            tailoring: Vec::new(),
        };
        let catalog = document.into_catalog().unwrap();
        assert_eq!(catalog.color("red").unwrap().rgb, Rgb::new(220, 0, 0));
    }

    #[test]
    fn test_unknown_color_without_rgb() {
        let document = CatalogDocument {
            dyes: vec![DyeRow {
                ingredient: "Mystery".into(),
                image: None,
                color: "ultraviolet".into(),
                rgb: None,
                strength: StrengthField::Percent(25),
            }],
            tailoring: Vec::new(),
        };
        assert!(matches!(document.into_catalog(), Err(Error::Catalog(_))));
    }
}
