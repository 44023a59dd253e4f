//! Recipe lookup for clothing items

use dyelab::catalog::{Catalog, DyeStrength, Ingredient};
use dyelab::solver::Combination;

use crate::error::{Error, Result};

/// Recipes that dye `item` with `color` at `strength`.
///
/// The item's crafting ingredients are favored, so recipes reusing what the
/// item is already made from come first.
pub fn recipes_for_item(
    catalog: &Catalog,
    item: &str,
    color: &str,
    strength: i64,
) -> Result<Vec<Combination>> {
    let item = catalog
        .item(item)
        .ok_or_else(|| Error::UnknownItem(item.to_string()))?;
    recipes(catalog, color, strength, &item.ingredients)
}

/// Recipes for a color, rejecting colors the catalog does not know
pub fn recipes(
    catalog: &Catalog,
    color: &str,
    strength: i64,
    favored: &[Ingredient],
) -> Result<Vec<Combination>> {
    if catalog.color(color).is_none() {
        return Err(Error::UnknownColor(color.to_string()));
    }
    let found = catalog.recipes(color, strength, favored)?;
    tracing::debug!("{} recipes for {} at {}%", found.len(), color, strength);
    Ok(found)
}

/// Ingredients that alone dye `color` at exactly `strength`
pub fn single_ingredients(catalog: &Catalog, color: &str, strength: i64) -> Result<Vec<Ingredient>> {
    let strength = DyeStrength::from_percent(strength)?;
    let entry = catalog
        .color(color)
        .ok_or_else(|| Error::UnknownColor(color.to_string()))?;
    Ok(entry.ingredients_with_strength(strength).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyelab::catalog::{ClothingItem, ClothingSlot, ColorEntry, Rgb};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert_color(
            ColorEntry::new("red", Rgb::new(220, 0, 0))
                .with_ingredient(Ingredient::new("Cranberries"), DyeStrength::Full)
                .with_ingredient(Ingredient::new("Hot Pepper"), DyeStrength::Half)
                .with_ingredient(Ingredient::new("Tulip"), DyeStrength::Half)
                .with_ingredient(Ingredient::new("Ruby"), DyeStrength::Full),
        );
        catalog.add_clothing(
            ClothingItem::new("Ruby Shirt", ClothingSlot::Shirt, true)
                .with_ingredients([Ingredient::new("Cloth"), Ingredient::new("Ruby")]),
        );
        catalog
    }

    #[test]
    fn test_item_ingredients_are_favored() {
        let found = recipes_for_item(&catalog(), "Ruby Shirt", "red", 100).unwrap();
        assert_eq!(found[0].to_string(), "1x Ruby");
        assert_eq!(found[1].to_string(), "1x Cranberries");
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(
            recipes_for_item(&catalog(), "Nope", "red", 100),
            Err(Error::UnknownItem(_))
        ));
        assert!(matches!(
            recipes_for_item(&catalog(), "Ruby Shirt", "teal", 100),
            Err(Error::UnknownColor(_))
        ));
        assert!(matches!(
            recipes(&catalog(), "red", 10, &[]),
            Err(Error::DyeLab(dyelab::Error::InvalidStrength { value: 10 }))
        ));
    }

    #[test]
    fn test_single_ingredients() {
        let names: Vec<String> = single_ingredients(&catalog(), "red", 50)
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["Hot Pepper", "Tulip"]);
    }
}
