//! Paging through solver output one recipe at a time

use dyelab::solver::Combination;

/// Solver output with a current position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBrowser {
    recipes: Vec<Combination>,
    index: usize,
}

impl RecipeBrowser {
    #[must_use]
    pub fn new(recipes: Vec<Combination>) -> Self {
        Self { recipes, index: 0 }
    }

    /// Replace the recipes and go back to the first
    pub fn reset(&mut self, recipes: Vec<Combination>) {
        self.recipes = recipes;
        self.index = 0;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Combination> {
        self.recipes.get(self.index)
    }

    /// Advance, wrapping from the last recipe to the first
    pub fn next_recipe(&mut self) -> Option<&Combination> {
        if !self.recipes.is_empty() {
            self.index = (self.index + 1) % self.recipes.len();
        }
        self.current()
    }

    /// Step back, wrapping from the first recipe to the last
    pub fn previous_recipe(&mut self) -> Option<&Combination> {
        if !self.recipes.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.recipes.len() - 1);
        }
        self.current()
    }

    /// `(1-based position, total)`, `None` when empty
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.recipes.is_empty()).then(|| (self.index + 1, self.recipes.len()))
    }

    #[must_use]
    pub fn recipes(&self) -> &[Combination] {
        &self.recipes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
