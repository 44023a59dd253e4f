//! Catalog providers
//!
//! A provider builds a [`Catalog`] from wherever the scraped dyeing and
//! tailoring tables live. The toolkit ships a JSON file provider.

pub mod document;

use std::path::{Path, PathBuf};

use dyelab::catalog::Catalog;

use crate::error::Result;

pub use document::{CatalogDocument, DyeRow, StrengthField, TailoringRow};

/// Source of a dyeing and tailoring catalog
pub trait CatalogProvider {
    /// Load and build the catalog.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or holds unusable rows.
    fn load(&self) -> Result<Catalog>;
}

/// Reads a catalog document from a JSON file
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        parse_catalog(&content)
    }
}

/// Build a catalog from a JSON document string
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    document.into_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyelab::catalog::{ClothingSlot, DyeStrength, Rgb};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "dyes": [
            { "ingredient": "Cranberries", "image": "img/Cranberries.png", "color": "red",
              "rgb": [220, 0, 0], "strength": "Strong" },
            { "ingredient": "Hot Pepper", "color": "red", "rgb": [220, 0, 0], "strength": "Medium" },
            { "ingredient": "Blueberry", "color": "blue", "rgb": [46, 85, 183], "strength": "Weak" },
            { "ingredient": "Poppy", "color": "red", "strength": 75 }
        ],
        "tailoring": [
            { "name": "Shirt", "image": "img/Shirt_1.png", "slot": "shirt", "dyeable": true,
              "ingredients": [ { "name": "Cloth", "image": "img/Cloth.png" } ] },
            { "name": "Shirt", "image": "img/Shirt_2.png", "slot": "shirt", "dyeable": false },
            { "name": "Cowboy Hat", "image": "img/Cowboy_Hat.png", "slot": "hat" }
        ]
    }"#;

    #[test]
    fn test_parse_groups_colors_in_first_seen_order() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let colors: Vec<&str> = catalog.colors().map(|c| c.name.as_str()).collect();
        assert_eq!(colors, vec!["red", "blue"]);

        let red = catalog.color("red").unwrap();
        assert_eq!(red.rgb, Rgb::new(220, 0, 0));
        assert_eq!(red.strength_of("Cranberries"), Some(DyeStrength::Full));
        assert_eq!(red.strength_of("Hot Pepper"), Some(DyeStrength::Half));
        assert_eq!(red.strength_of("Poppy"), Some(DyeStrength::ThreeQuarters));
        assert_eq!(
            catalog.color("blue").unwrap().strength_of("Blueberry"),
            Some(DyeStrength::Quarter)
        );
    }

    #[test]
    fn test_parse_clothing() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let names: Vec<&str> = catalog.clothing().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Shirt", "Shirt_2", "Cowboy Hat"]);

        let hat = catalog.item("Cowboy Hat").unwrap();
        assert_eq!(hat.slot, ClothingSlot::Hat);
        assert!(!hat.dyeable);

        let shirt = catalog.item("Shirt").unwrap();
        assert!(shirt.dyeable);
        assert_eq!(shirt.ingredients[0].name(), "Cloth");
        assert_eq!(shirt.ingredients[0].image(), Some("img/Cloth.png"));
    }

    #[test]
    fn test_invalid_percent_rejected() {
        let json = r#"{ "dyes": [ { "ingredient": "X", "color": "red", "strength": 60 } ] }"#;
        assert!(matches!(
            parse_catalog(json),
            Err(crate::Error::DyeLab(dyelab::Error::InvalidStrength { value: 60 }))
        ));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(parse_catalog("{ \"dyes\": 3 }"), Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_provider_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = JsonCatalogProvider::new(&path).load().unwrap();
        assert_eq!(catalog.color_count(), 2);
        assert_eq!(catalog.clothing().len(), 3);
    }
}
