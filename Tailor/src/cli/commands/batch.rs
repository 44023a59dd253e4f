//! CLI command for batch tinting

use std::path::Path;
use std::time::Instant;

use dyelab::catalog::DyeStrength;
use indicatif::ProgressBar;

use super::open_toolkit;
use crate::cli::progress::{DISK, LOOKING_GLASS, PALETTE, print_done, print_step, simple_bar};
use crate::config::TailorConfig;
use crate::operations::tinting::{dye_colors, orphaned_originals, tint_catalog};

/// Command-line overrides for `tailor batch`
#[derive(Debug, Clone, Default)]
pub struct BatchCliOptions {
    pub threads: Option<usize>,
    pub strengths: Vec<i64>,
    pub force: bool,
    pub show_progress: bool,
}

/// Tint every dyeable item of the catalog into the asset store
pub fn execute(
    config: &TailorConfig,
    catalog: Option<&Path>,
    assets: Option<&Path>,
    cli: &BatchCliOptions,
) -> anyhow::Result<()> {
    let started = Instant::now();

    if cli.show_progress {
        print_step(1, 3, LOOKING_GLASS, "Loading catalog...");
    }
    let toolkit = open_toolkit(config, catalog, assets)?;

    let mut options = toolkit.config().batch_options();
    if cli.threads.is_some() {
        options.threads = cli.threads;
    }
    if !cli.strengths.is_empty() {
        options.strengths = cli
            .strengths
            .iter()
            .map(|s| DyeStrength::from_percent(*s))
            .collect::<dyelab::Result<_>>()?;
    }
    if cli.force {
        options.skip_existing = false;
    }

    let items = toolkit.catalog().dyeable_items().count();
    if items == 0 {
        println!("No dyeable items in the catalog");
        return Ok(());
    }

    if cli.show_progress {
        print_step(
            2,
            3,
            PALETTE,
            &format!(
                "Tinting {} items in {} colors...",
                items,
                dye_colors(toolkit.catalog()).len()
            ),
        );
    }

    let pb = if cli.show_progress {
        simple_bar(items as u64, "Tinting")
    } else {
        ProgressBar::hidden()
    };

    let result = tint_catalog(toolkit.store(), toolkit.catalog(), &options, |progress| {
        pb.set_position(progress.current as u64);
        if let Some(ref name) = progress.current_item {
            pb.set_message(name.clone());
        }
    })?;

    pb.finish_and_clear();

    if cli.show_progress {
        print_step(3, 3, DISK, &format!("Wrote to {}", toolkit.store().root().display()));
    }

    println!();
    println!("Tinting complete:");
    println!("  Written: {}", result.written);
    println!("  Skipped: {}", result.skipped);
    println!("  Failed: {}", result.failed);

    if !result.is_success() {
        println!();
        println!("Failures:");
        for msg in result.results.iter().filter(|m| m.starts_with("Failed")) {
            println!("  {msg}");
        }
    }

    let orphans = orphaned_originals(toolkit.store(), toolkit.catalog());
    if !orphans.is_empty() {
        println!();
        println!("Originals without a catalog item:");
        for path in &orphans {
            println!("  {}", path.display());
        }
    }

    if cli.show_progress {
        print_done(started.elapsed());
    }
    Ok(())
}
