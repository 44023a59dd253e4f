//! Favored and general recipe searches
//!
//! Both searches work in strength units (25% each) and push every exact hit
//! into a shared insertion-ordered set, so whichever phase finds a recipe
//! first decides its rank.

use indexmap::IndexSet;

use super::combination::Combination;
use crate::catalog::{ColorEntry, DyeStrength, Ingredient, MAX_UNITS};

type Pick<'a> = (&'a Ingredient, DyeStrength);

/// Ingredients of a color in catalog order
fn pool(entry: &ColorEntry) -> Vec<Pick<'_>> {
    entry
        .ingredients
        .iter()
        .map(|(ingredient, strength)| (ingredient, *strength))
        .collect()
}

fn units_of(picks: &[Pick<'_>]) -> u32 {
    picks.iter().map(|(_, strength)| strength.units()).sum()
}

/// Unconstrained search: 1 to [`MAX_UNITS`] picks, repetition allowed.
pub(crate) fn general_phase(entry: &ColorEntry, target: u32, found: &mut IndexSet<Combination>) {
    let pool = pool(entry);
    let mut picks = Vec::with_capacity(MAX_UNITS);
    descend(&pool, target, &mut picks, found);
}

fn descend<'a>(
    pool: &[Pick<'a>],
    remaining: u32,
    picks: &mut Vec<Pick<'a>>,
    found: &mut IndexSet<Combination>,
) {
    for &(ingredient, strength) in pool {
        let units = strength.units();
        if units > remaining {
            continue;
        }

        picks.push((ingredient, strength));
        if units == remaining {
            found.insert(Combination::from_picks(picks.iter().copied()));
        } else if picks.len() < MAX_UNITS {
            descend(pool, remaining - units, picks, found);
        }
        picks.pop();
    }
}

/// Search rooted at subsets of the favored ingredients.
///
/// Favored ingredients missing from the color are skipped. Subsets are
/// visited by size, then in index order; a subset that falls short is topped
/// up with at most two more picks from the whole color.
pub(crate) fn favored_phase(
    entry: &ColorEntry,
    target: u32,
    favored: &[Ingredient],
    found: &mut IndexSet<Combination>,
) {
    let mut chosen: Vec<Pick<'_>> = Vec::new();
    for wanted in favored {
        if let Some((ingredient, strength)) = entry.ingredients.get_key_value(wanted.name()) {
            if !chosen.iter().any(|(c, _)| *c == ingredient) {
                chosen.push((ingredient, *strength));
            }
        }
    }
    if chosen.is_empty() {
        return;
    }

    let pool = pool(entry);
    let mut search = FavoredSearch {
        pool: &pool,
        target,
        found,
    };
    let mut subset = Vec::with_capacity(MAX_UNITS);
    for size in 1..=chosen.len().min(MAX_UNITS) {
        search.visit_subsets(&chosen, size, 0, &mut subset);
    }
}

struct FavoredSearch<'a, 'f> {
    pool: &'f [Pick<'a>],
    target: u32,
    found: &'f mut IndexSet<Combination>,
}

impl<'a> FavoredSearch<'a, '_> {
    /// Complete every subset of `items` with exactly `size` elements.
    ///
    /// Branches whose strength already exceeds the target are pruned.
    fn visit_subsets(
        &mut self,
        items: &[Pick<'a>],
        size: usize,
        start: usize,
        current: &mut Vec<Pick<'a>>,
    ) {
        if current.len() == size {
            self.complete(current);
            return;
        }
        for index in start..items.len() {
            current.push(items[index]);
            if units_of(current) <= self.target {
                self.visit_subsets(items, size, index + 1, current);
            }
            current.pop();
        }
    }

    fn complete(&mut self, subset: &[Pick<'a>]) {
        let base = units_of(subset);
        if base == self.target {
            self.found.insert(Combination::from_picks(subset.iter().copied()));
            return;
        }

        let remaining = self.target - base;
        for &first in self.pool {
            let first_units = first.1.units();
            if first_units > remaining {
                continue;
            }
            if first_units == remaining {
                self.found.insert(Combination::from_picks(
                    subset.iter().copied().chain(std::iter::once(first)),
                ));
                continue;
            }
            for &second in self.pool {
                if second.1.units() == remaining - first_units {
                    self.found.insert(Combination::from_picks(
                        subset.iter().copied().chain([first, second]),
                    ));
                }
            }
        }
    }
}
