//! Dye-recipe solver
//!
//! Finds every ingredient combination whose strengths add up to a desired dye
//! strength for one color. Each ingredient strength is a multiple of 25% and
//! no dye is stronger than 100%, so four picks always suffice and the search
//! tree is exhaustive at depth [`MAX_UNITS`](crate::catalog::MAX_UNITS).
//!
//! ```
//! use dyelab::catalog::{ColorEntry, DyeStrength, Ingredient, Rgb};
//! use dyelab::solver::solve;
//!
//! let red = ColorEntry::new("red", Rgb::new(220, 0, 0))
//!     .with_ingredient(Ingredient::new("Cranberries"), DyeStrength::Full)
//!     .with_ingredient(Ingredient::new("Hot Pepper"), DyeStrength::Half);
//!
//! let recipes = solve(&red, 100, &[])?;
//! assert_eq!(recipes.len(), 2);
//! # Ok::<(), dyelab::Error>(())
//! ```

mod combination;
mod search;

use indexmap::IndexSet;

use crate::catalog::{ColorEntry, DyeStrength, Ingredient};
use crate::error::Result;

pub use combination::{Combination, CombinationEntry};

/// Find every distinct recipe for `entry` at `desired_strength` percent.
///
/// Recipes built around `favored` ingredients come first, followed by the
/// rest in discovery order. An unreachable strength gives an empty list.
///
/// # Errors
/// Returns [`crate::Error::InvalidStrength`] unless `desired_strength` is 25,
/// 50, 75 or 100.
pub fn solve(
    entry: &ColorEntry,
    desired_strength: i64,
    favored: &[Ingredient],
) -> Result<Vec<Combination>> {
    let strength = DyeStrength::from_percent(desired_strength)?;
    Ok(solve_for(entry, strength, favored))
}

/// [`solve`] with an already validated strength
#[must_use]
pub fn solve_for(entry: &ColorEntry, strength: DyeStrength, favored: &[Ingredient]) -> Vec<Combination> {
    let target = strength.units();
    let mut found = IndexSet::new();

    if !favored.is_empty() {
        search::favored_phase(entry, target, favored, &mut found);
        tracing::debug!(
            "{} favored recipe(s) for {} at {}%",
            found.len(),
            entry.name,
            strength
        );
    }

    search::general_phase(entry, target, &mut found);
    tracing::debug!("{} recipe(s) for {} at {}%", found.len(), entry.name, strength);

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MAX_STRENGTH, Rgb};
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn sample() -> ColorEntry {
        ColorEntry::new("sample", Rgb::new(10, 20, 30))
            .with_ingredient(Ingredient::new("A"), DyeStrength::Full)
            .with_ingredient(Ingredient::new("B"), DyeStrength::Half)
            .with_ingredient(Ingredient::new("C"), DyeStrength::Half)
            .with_ingredient(Ingredient::new("D"), DyeStrength::Quarter)
    }

    fn names(combo: &Combination) -> Vec<(String, u32)> {
        combo
            .entries()
            .iter()
            .map(|e| (e.ingredient.name().to_string(), e.count))
            .collect()
    }

    #[test]
    fn test_every_recipe_sums_to_target() {
        let entry = sample();
        for strength in DyeStrength::ALL {
            let recipes = solve_for(&entry, strength, &[]);
            assert!(!recipes.is_empty());
            for combo in &recipes {
                assert_eq!(combo.strength_percent(), strength.percent());
                assert!(combo.total_units() as usize <= MAX_STRENGTH as usize / 25);
            }
        }
    }

    #[test]
    fn test_no_duplicates() {
        let recipes = solve_for(&sample(), DyeStrength::Full, &[Ingredient::new("D")]);
        let unique: IndexSet<&Combination> = recipes.iter().collect();
        assert_eq!(unique.len(), recipes.len());
    }

    #[test]
    fn test_single_ingredient_catalog() {
        let entry = ColorEntry::new("x", Rgb::new(0, 0, 0))
            .with_ingredient(Ingredient::new("D"), DyeStrength::Quarter);
        let recipes = solve_for(&entry, DyeStrength::Full, &[]);
        assert_eq!(recipes.len(), 1);
        assert_eq!(names(&recipes[0]), vec![("D".to_string(), 4)]);
    }

    #[test]
    fn test_general_phase_discovery_order() {
        let recipes = solve_for(&sample(), DyeStrength::Half, &[]);
        let listed: Vec<Vec<(String, u32)>> = recipes.iter().map(names).collect();
        assert_eq!(
            listed,
            vec![
                vec![("B".to_string(), 1)],
                vec![("C".to_string(), 1)],
                vec![("D".to_string(), 2)],
            ]
        );
    }

    #[test]
    fn test_unreachable_and_empty() {
        let strong_only = ColorEntry::new("x", Rgb::new(0, 0, 0))
            .with_ingredient(Ingredient::new("A"), DyeStrength::Full);
        assert!(solve_for(&strong_only, DyeStrength::Half, &[]).is_empty());

        let empty = ColorEntry::new("y", Rgb::new(0, 0, 0));
        assert!(solve_for(&empty, DyeStrength::Full, &[Ingredient::new("A")]).is_empty());
    }

    #[test]
    fn test_invalid_strength() {
        assert!(matches!(
            solve(&sample(), 60, &[]),
            Err(Error::InvalidStrength { value: 60 })
        ));
        assert!(matches!(
            solve(&sample(), -25, &[]),
            Err(Error::InvalidStrength { value: -25 })
        ));
    }

    #[test]
    fn test_absent_favored_ingredients_are_ignored() {
        let entry = sample();
        let plain = solve_for(&entry, DyeStrength::Full, &[]);
        let favored = solve_for(&entry, DyeStrength::Full, &[Ingredient::new("Nope")]);
        assert_eq!(plain, favored);
    }

    #[test]
    fn test_favored_subset_hits_target_directly() {
        let favored = [Ingredient::new("C"), Ingredient::new("B")];
        let recipes = solve_for(&sample(), DyeStrength::Full, &favored);
        // sizes first: {C} and {B} are short and get topped up before {C, B}
        assert!(recipes[0].contains("C"));
        let both = Combination::from_picks([
            (&Ingredient::new("B"), DyeStrength::Half),
            (&Ingredient::new("C"), DyeStrength::Half),
        ]);
        let position = recipes.iter().position(|c| *c == both).unwrap();
        let first_without_favored = recipes
            .iter()
            .position(|c| !c.contains("B") && !c.contains("C"))
            .unwrap();
        assert!(position < first_without_favored);
    }
}
