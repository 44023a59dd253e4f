//! CLI command for recipe lookup

use std::path::Path;

use console::style;

use dyelab::catalog::Ingredient;

use super::open_toolkit;
use crate::config::TailorConfig;
use crate::operations;

/// Arguments of `tailor solve`
pub struct SolveArgs<'a> {
    pub color: &'a str,
    pub strength: i64,
    pub item: Option<&'a str>,
    pub favor: &'a [String],
    pub limit: Option<usize>,
    pub json: bool,
}

/// Print the recipes for a color and strength
pub fn execute(config: &TailorConfig, args: &SolveArgs<'_>, catalog: Option<&Path>) -> anyhow::Result<()> {
    let toolkit = open_toolkit(config, catalog, None)?;

    let mut recipes = if args.favor.is_empty() {
        match args.item {
            Some(item) => toolkit.recipes_for_item(item, args.color, args.strength)?,
            None => operations::recipes(toolkit.catalog(), args.color, args.strength, &[])?,
        }
    } else {
        let mut favored: Vec<Ingredient> = match args.item {
            Some(item) => toolkit.item(item)?.ingredients.clone(),
            None => Vec::new(),
        };
        let known = toolkit.catalog().all_ingredients();
        for name in args.favor.iter().map(|name| name.trim()) {
            if !known.iter().any(|ingredient| ingredient.name() == name) {
                tracing::warn!("Favored ingredient '{}' is not in the catalog", name);
            }
            favored.push(Ingredient::new(name));
        }
        operations::recipes(toolkit.catalog(), args.color, args.strength, &favored)?
    };

    let total = recipes.len();
    if let Some(limit) = args.limit {
        recipes.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes dye {} at {}%", args.color, args.strength);
        return Ok(());
    }

    println!(
        "Recipes for {} at {}% ({} found):",
        style(args.color).bold(),
        args.strength,
        total
    );
    for (i, recipe) in recipes.iter().enumerate() {
        println!("  {:>3}. {recipe}", i + 1);
    }
    if recipes.len() < total {
        println!("  ... {} more", total - recipes.len());
    }
    Ok(())
}
