//! Command execution implementations

use super::Commands;
use super::{batch, import, outfit, palette, solve, tint};
use crate::config::TailorConfig;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, config: &TailorConfig) -> anyhow::Result<()> {
        match self {
            Commands::Palette { json } => palette::execute(*json),
            Commands::Solve {
                color,
                strength,
                item,
                favor,
                limit,
                json,
                catalog,
            } => solve::execute(
                config,
                &solve::SolveArgs {
                    color,
                    strength: *strength,
                    item: item.as_deref(),
                    favor,
                    limit: *limit,
                    json: *json,
                },
                catalog.as_deref(),
            ),
            Commands::Tint {
                input,
                color,
                strength,
                output,
                catalog,
                force,
            } => tint::execute(
                config,
                input,
                color,
                *strength,
                output.as_deref(),
                catalog.as_deref(),
                *force,
            ),
            Commands::Batch {
                catalog,
                assets,
                threads,
                strengths,
                force,
                quiet,
            } => batch::execute(
                config,
                catalog.as_deref(),
                assets.as_deref(),
                &batch::BatchCliOptions {
                    threads: *threads,
                    strengths: strengths.clone(),
                    force: *force,
                    show_progress: !*quiet,
                },
            ),
            Commands::Import {
                name,
                image,
                ingredient,
                catalog,
                assets,
            } => import::execute(
                config,
                name,
                image,
                *ingredient,
                catalog.as_deref(),
                assets.as_deref(),
            ),
            Commands::Outfit {
                shirt,
                pants,
                hat,
                catalog,
                assets,
            } => outfit::execute(
                config,
                [shirt.as_ref(), pants.as_ref(), hat.as_ref()],
                catalog.as_deref(),
                assets.as_deref(),
            ),
        }
    }
}
