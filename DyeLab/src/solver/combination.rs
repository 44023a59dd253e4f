//! Canonical ingredient multisets

use serde::Serialize;

use crate::catalog::{DyeStrength, Ingredient, STRENGTH_STEP};

/// One ingredient within a [`Combination`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CombinationEntry {
    pub ingredient: Ingredient,
    /// How many of this ingredient go into the dye pot
    pub count: u32,
    /// Accumulated strength in units of 25%
    pub units: u32,
}

impl CombinationEntry {
    /// Strength this entry contributes, in percent
    #[must_use]
    pub const fn strength_percent(&self) -> u32 {
        self.units * STRENGTH_STEP
    }
}

/// A dye recipe: a set of ingredients with quantities.
///
/// Entries are kept sorted by ingredient name then units and each ingredient
/// appears once, so two combinations built from the same picks in any order
/// compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Combination {
    entries: Vec<CombinationEntry>,
}

impl Combination {
    /// Build from individual picks, merging repeated ingredients.
    pub fn from_picks<'a, I>(picks: I) -> Self
    where
        I: IntoIterator<Item = (&'a Ingredient, DyeStrength)>,
    {
        let mut entries: Vec<CombinationEntry> = Vec::new();
        for (ingredient, strength) in picks {
            match entries.iter_mut().find(|e| e.ingredient == *ingredient) {
                Some(entry) => {
                    entry.count += 1;
                    entry.units += strength.units();
                }
                None => entries.push(CombinationEntry {
                    ingredient: ingredient.clone(),
                    count: 1,
                    units: strength.units(),
                }),
            }
        }

        entries.sort_by(|a, b| {
            a.ingredient
                .name()
                .cmp(b.ingredient.name())
                .then(a.units.cmp(&b.units))
        });
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CombinationEntry] {
        &self.entries
    }

    /// Number of distinct ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of items put in the pot
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.entries.iter().map(|e| e.units).sum()
    }

    /// Strength this recipe dyes at, in percent
    #[must_use]
    pub fn strength_percent(&self) -> u32 {
        self.total_units() * STRENGTH_STEP
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.ingredient.name() == name)
    }

    /// How many of `name` the recipe uses (0 if absent)
    #[must_use]
    pub fn count_of(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.ingredient.name() == name)
            .map_or(0, |e| e.count)
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}x {}", entry.count, entry.ingredient)?;
        }
        Ok(())
    }
}
