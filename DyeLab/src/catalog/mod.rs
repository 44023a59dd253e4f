//! Catalog module - colors, dye ingredients and clothing items
//!
//! The catalog is supplied by the caller and only ever borrowed:
//! - [`ColorEntry`] maps each dye ingredient to its strength for one color
//! - [`Catalog`] owns every color plus the clothing items
//! - [`DyeStrength`] is the closed set of strengths a dye can have

pub mod strength;
pub mod types;

use indexmap::{IndexMap, IndexSet};

use crate::error::Result;
use crate::solver::{self, Combination};

pub use strength::{DyeStrength, MAX_STRENGTH, MAX_UNITS, STRENGTH_STEP};
pub use types::{ClothingItem, ClothingSlot, Ingredient, Rgb};

/// One dye color and the ingredients that produce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub rgb: Rgb,
    /// Ingredient strengths in catalog order
    pub ingredients: IndexMap<Ingredient, DyeStrength>,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
            ingredients: IndexMap::new(),
        }
    }

    /// Builder-style [`ColorEntry::insert`]
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient, strength: DyeStrength) -> Self {
        self.insert(ingredient, strength);
        self
    }

    /// Add an ingredient, replacing the strength of an existing one in place
    pub fn insert(&mut self, ingredient: Ingredient, strength: DyeStrength) {
        self.ingredients.insert(ingredient, strength);
    }

    #[must_use]
    pub fn strength_of(&self, name: &str) -> Option<DyeStrength> {
        self.ingredients.get(name).copied()
    }

    /// Ingredients whose own strength is exactly `strength`
    pub fn ingredients_with_strength(
        &self,
        strength: DyeStrength,
    ) -> impl Iterator<Item = &Ingredient> {
        self.ingredients
            .iter()
            .filter(move |(_, s)| **s == strength)
            .map(|(ingredient, _)| ingredient)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Every color and clothing item known to the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    colors: IndexMap<String, ColorEntry>,
    clothing: Vec<ClothingItem>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color, replacing any existing color with the same name
    pub fn insert_color(&mut self, entry: ColorEntry) {
        self.colors.insert(entry.name.clone(), entry);
    }

    pub fn add_clothing(&mut self, item: ClothingItem) {
        self.clothing.push(item);
    }

    #[must_use]
    pub fn color(&self, name: &str) -> Option<&ColorEntry> {
        self.colors.get(name)
    }

    /// Mutable access for providers that build a color row by row
    pub fn color_mut(&mut self, name: &str) -> Option<&mut ColorEntry> {
        self.colors.get_mut(name)
    }

    pub fn colors(&self) -> impl Iterator<Item = &ColorEntry> {
        self.colors.values()
    }

    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn clothing(&self) -> &[ClothingItem] {
        &self.clothing
    }

    #[must_use]
    pub fn item(&self, name: &str) -> Option<&ClothingItem> {
        self.clothing.iter().find(|item| item.name == name)
    }

    pub fn items_in_slot(&self, slot: ClothingSlot) -> impl Iterator<Item = &ClothingItem> {
        self.clothing.iter().filter(move |item| item.slot == slot)
    }

    pub fn dyeable_items(&self) -> impl Iterator<Item = &ClothingItem> {
        self.clothing.iter().filter(|item| item.dyeable)
    }

    /// Every distinct ingredient mentioned anywhere: crafting ingredients
    /// first, then dye ingredients, each in first-seen order.
    #[must_use]
    pub fn all_ingredients(&self) -> IndexSet<&Ingredient> {
        let crafting = self.clothing.iter().flat_map(|item| item.ingredients.iter());
        let dyes = self.colors.values().flat_map(|color| color.ingredients.keys());
        crafting.chain(dyes).collect()
    }

    /// Solve for recipes of a color by name.
    ///
    /// An unknown color has no ingredients, so it yields no recipes.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidStrength`] for a strength other than
    /// 25, 50, 75 or 100.
    pub fn recipes(
        &self,
        color: &str,
        desired_strength: i64,
        favored: &[Ingredient],
    ) -> Result<Vec<Combination>> {
        let strength = DyeStrength::from_percent(desired_strength)?;
        match self.color(color) {
            Some(entry) => Ok(solver::solve_for(entry, strength, favored)),
            None => {
                tracing::debug!("No catalog entry for color '{}'", color);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorEntry {
        ColorEntry::new("red", Rgb::new(220, 0, 0))
            .with_ingredient(Ingredient::new("Cranberries"), DyeStrength::Full)
            .with_ingredient(Ingredient::new("Hot Pepper"), DyeStrength::Half)
            .with_ingredient(Ingredient::new("Tulip"), DyeStrength::Half)
    }

    #[test]
    fn test_ingredients_with_strength() {
        let entry = red();
        let medium: Vec<&str> = entry
            .ingredients_with_strength(DyeStrength::Half)
            .map(Ingredient::name)
            .collect();
        assert_eq!(medium, vec!["Hot Pepper", "Tulip"]);
        assert_eq!(entry.strength_of("Cranberries"), Some(DyeStrength::Full));
        assert_eq!(entry.strength_of("Coal"), None);
    }

    #[test]
    fn test_unknown_color_has_no_recipes() {
        let mut catalog = Catalog::new();
        catalog.insert_color(red());
        assert!(catalog.recipes("blue", 100, &[]).unwrap().is_empty());
        assert!(catalog.recipes("blue", 60, &[]).is_err());
    }

    #[test]
    fn test_all_ingredients_deduplicates() {
        let mut catalog = Catalog::new();
        catalog.insert_color(red());
        catalog.add_clothing(
            ClothingItem::new("Tulip Shirt", ClothingSlot::Shirt, true)
                .with_ingredients([Ingredient::new("Tulip"), Ingredient::new("Cloth")]),
        );
        let names: Vec<&str> = catalog.all_ingredients().into_iter().map(Ingredient::name).collect();
        assert_eq!(names, vec!["Tulip", "Cloth", "Cranberries", "Hot Pepper"]);
    }
}
