//! Batch tinting of clothing sprites
//!
//! Work is split by item directory: one worker owns every color and strength
//! of an item, so two workers never check or write the same file. Items that
//! sanitize to an already claimed directory are reported as failed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use rayon::prelude::*;

use dyelab::catalog::{Catalog, ClothingItem, DyeStrength, Rgb};
use dyelab::palette::PALETTE;
use dyelab::sprite::Sprite;
use dyelab::tint;

use crate::assets::AssetStore;
use crate::error::{Error, Result};

/// Progress information during batch tinting
#[derive(Debug, Clone)]
pub struct TintProgress {
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Item being tinted
    pub current_item: Option<String>,
}

impl TintProgress {
    #[must_use]
    pub fn with_item(current: usize, total: usize, item: impl Into<String>) -> Self {
        Self {
            current,
            total,
            current_item: Some(item.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// What a batch renders and how
#[derive(Debug, Clone)]
pub struct BatchTintOptions {
    pub strengths: Vec<DyeStrength>,
    /// Leave variants that already exist on disk untouched
    pub skip_existing: bool,
    /// Worker count; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl Default for BatchTintOptions {
    fn default() -> Self {
        Self {
            strengths: DyeStrength::ALL.to_vec(),
            skip_existing: true,
            threads: None,
        }
    }
}

/// Result of a batch tint
#[derive(Debug, Clone, Default)]
pub struct BatchTintResult {
    /// Variants written
    pub written: usize,
    /// Variants left alone because they already existed
    pub skipped: usize,
    /// Items that could not be tinted
    pub failed: usize,
    /// One message per item
    pub results: Vec<String>,
}

impl BatchTintResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Variants of one item written and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemTintOutcome {
    pub written: usize,
    pub skipped: usize,
}

/// Colors a batch renders: the catalog's, or the built-in palette when the
/// catalog has none
#[must_use]
pub fn dye_colors(catalog: &Catalog) -> Vec<(String, Rgb)> {
    if catalog.color_count() == 0 {
        return PALETTE
            .iter()
            .map(|color| (color.name.to_string(), color.rgb))
            .collect();
    }
    catalog
        .colors()
        .map(|entry| (entry.name.clone(), entry.rgb))
        .collect()
}

/// Tint one item in every color and strength it is still missing.
///
/// The original is only read and analyzed when something needs writing.
pub fn tint_item(
    store: &AssetStore,
    item: &ClothingItem,
    colors: &[(String, Rgb)],
    options: &BatchTintOptions,
) -> Result<ItemTintOutcome> {
    let mut pending = Vec::new();
    let mut outcome = ItemTintOutcome::default();
    for (name, rgb) in colors {
        for &strength in &options.strengths {
            if options.skip_existing && store.has_variant(item, name, strength) {
                outcome.skipped += 1;
            } else {
                pending.push((name.as_str(), *rgb, strength));
            }
        }
    }
    if pending.is_empty() {
        return Ok(outcome);
    }

    let original = store.load_original(item)?;
    let analysis = tint::analyze(&original)?;
    for (name, rgb, strength) in pending {
        let tinted = tint::tint_analyzed(&analysis, rgb, strength)?;
        store.save_sprite(&store.variant_path(item, name, strength), &tinted)?;
        outcome.written += 1;
    }
    Ok(outcome)
}

/// Tint every dyeable item of the catalog in parallel
///
/// # Arguments
/// * `store` - Where originals are read and variants written
/// * `catalog` - Items and colors to render
/// * `options` - Strengths, skip policy and worker count
/// * `progress` - Callback for progress updates
///
/// # Errors
/// Only fails if the worker pool cannot be built. Per-item failures are
/// counted in the result.
pub fn tint_catalog<F>(
    store: &AssetStore,
    catalog: &Catalog,
    options: &BatchTintOptions,
    progress: F,
) -> Result<BatchTintResult>
where
    F: Fn(&TintProgress) + Send + Sync,
{
    let groups = group_by_dir(store, catalog.dyeable_items());
    let colors = dye_colors(catalog);

    let written = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total: usize = groups.iter().map(|(_, items)| items.len()).sum();

    tracing::info!(
        "Tinting {} items x {} colors x {} strengths",
        total,
        colors.len(),
        options.strengths.len()
    );

    let run = || -> Vec<String> {
        let (written, skipped, failed, processed) = (&written, &skipped, &failed, &processed);
        let (progress, colors) = (&progress, colors.as_slice());
        groups
            .par_iter()
            .flat_map_iter(|(dir, items)| {
                let owner = items[0];
                items.iter().map(move |item| {
                    let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress(&TintProgress::with_item(current, total, item.name.as_str()));

                    let outcome = if std::ptr::eq(*item, owner) {
                        tint_item(store, item, colors, options)
                    } else {
                        Err(Error::SharedAssetDir {
                            item: item.name.clone(),
                            owner: owner.name.clone(),
                            dir: dir.clone(),
                        })
                    };

                    match outcome {
                        Ok(outcome) => {
                            written.fetch_add(outcome.written, Ordering::SeqCst);
                            skipped.fetch_add(outcome.skipped, Ordering::SeqCst);
                            format!(
                                "Tinted: {} ({} written, {} skipped)",
                                item.name, outcome.written, outcome.skipped
                            )
                        }
                        Err(e) => {
                            failed.fetch_add(1, Ordering::SeqCst);
                            tracing::warn!("Failed to tint {}: {}", item.name, e);
                            format!("Failed {}: {e}", item.name)
                        }
                    }
                })
            })
            .collect()
    };

    let results = match options.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?
            .install(run),
        None => run(),
    };

    Ok(BatchTintResult {
        written: written.load(Ordering::SeqCst),
        skipped: skipped.load(Ordering::SeqCst),
        failed: failed.load(Ordering::SeqCst),
        results,
    })
}

/// Originals in the store that belong to no catalog item, sorted
#[must_use]
pub fn orphaned_originals(store: &AssetStore, catalog: &Catalog) -> Vec<PathBuf> {
    let known: HashSet<PathBuf> = catalog
        .clothing()
        .iter()
        .map(|item| store.original_path(item))
        .collect();
    store
        .find_originals()
        .into_iter()
        .filter(|path| !known.contains(path))
        .collect()
}

/// Items grouped by the directory their sprites live in, in catalog order
fn group_by_dir<'a>(
    store: &AssetStore,
    items: impl Iterator<Item = &'a ClothingItem>,
) -> Vec<(PathBuf, Vec<&'a ClothingItem>)> {
    let mut groups: IndexMap<PathBuf, Vec<&ClothingItem>> = IndexMap::new();
    for item in items {
        groups.entry(store.item_dir(item)).or_default().push(item);
    }
    groups.into_iter().collect()
}

/// Tint a single sprite file into `output`
pub fn tint_file(input: &Path, output: &Path, color: Rgb, strength: DyeStrength) -> Result<()> {
    let sprite = Sprite::decode(&std::fs::read(input)?)?;
    let tinted = tint::tint(&sprite, color, strength)?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, tinted.to_png_bytes()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyelab::catalog::{ClothingSlot, ColorEntry, Ingredient};

    fn shirt() -> ClothingItem {
        ClothingItem::new("Tank Top", ClothingSlot::Shirt, true)
    }

    #[test]
    fn test_dye_colors_fall_back_to_palette() {
        let empty = Catalog::new();
        assert_eq!(dye_colors(&empty).len(), PALETTE.len());

        let mut catalog = Catalog::new();
        catalog.insert_color(
            ColorEntry::new("red", Rgb::new(220, 0, 0))
                .with_ingredient(Ingredient::new("Cranberries"), DyeStrength::Full),
        );
        assert_eq!(dye_colors(&catalog), vec![("red".to_string(), Rgb::new(220, 0, 0))]);
    }

    #[test]
    fn test_tint_item_without_original() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        let colors = vec![("red".to_string(), Rgb::new(220, 0, 0))];
        assert!(matches!(
            tint_item(&store, &shirt(), &colors, &BatchTintOptions::default()),
            Err(Error::MissingAsset { .. })
        ));
    }

    #[test]
    fn test_tint_item_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        let item = shirt();
        let original = Sprite::from_rgba(1, 1, vec![180, 180, 180, 255]).unwrap();
        store.save_sprite(&store.original_path(&item), &original).unwrap();

        let colors = vec![("red".to_string(), Rgb::new(220, 0, 0))];
        let options = BatchTintOptions {
            strengths: vec![DyeStrength::Half, DyeStrength::Full],
            ..BatchTintOptions::default()
        };

        let first = tint_item(&store, &item, &colors, &options).unwrap();
        assert_eq!(first, ItemTintOutcome { written: 2, skipped: 0 });
        assert!(store.has_variant(&item, "red", DyeStrength::Half));

        let second = tint_item(&store, &item, &colors, &options).unwrap();
        assert_eq!(second, ItemTintOutcome { written: 0, skipped: 2 });

        let forced = BatchTintOptions {
            skip_existing: false,
            ..options
        };
        let third = tint_item(&store, &item, &colors, &forced).unwrap();
        assert_eq!(third, ItemTintOutcome { written: 2, skipped: 0 });
    }

    #[test]
    fn test_shared_dir_has_one_writer() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        let mut catalog = Catalog::new();
        catalog.insert_color(
            ColorEntry::new("red", Rgb::new(220, 0, 0))
                .with_ingredient(Ingredient::new("Cranberries"), DyeStrength::Full),
        );
        catalog.add_clothing(shirt());
        catalog.add_clothing(ClothingItem::new("Tank-Top", ClothingSlot::Shirt, true));

        let original = Sprite::from_rgba(1, 1, vec![180, 180, 180, 255]).unwrap();
        store.save_sprite(&store.original_path(&shirt()), &original).unwrap();

        let options = BatchTintOptions {
            skip_existing: false,
            threads: Some(2),
            ..BatchTintOptions::default()
        };
        let result = tint_catalog(&store, &catalog, &options, |_| {}).unwrap();

        let on_disk = std::fs::read_dir(store.item_dir(&shirt()))
            .unwrap()
            .filter(|entry| entry.as_ref().unwrap().file_name() != "original.png")
            .count();
        assert_eq!(result.written, 4);
        assert_eq!(on_disk, result.written);
        assert_eq!(result.failed, 1);
        assert!(result.results[1].starts_with("Failed Tank-Top: Tank-Top shares"));
    }

    #[test]
    fn test_orphaned_originals() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());
        let mut catalog = Catalog::new();
        catalog.add_clothing(shirt());

        let sprite = Sprite::from_rgba(1, 1, vec![180, 180, 180, 255]).unwrap();
        let stray = dir.path().join("shirt/OldVest/original.png");
        store.save_sprite(&store.original_path(&shirt()), &sprite).unwrap();
        store.save_sprite(&stray, &sprite).unwrap();

        assert_eq!(orphaned_originals(&store, &catalog), vec![stray]);
    }

    #[test]
    fn test_tint_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out/red_100.png");
        let sprite = Sprite::from_rgba(1, 1, vec![200, 200, 200, 255]).unwrap();
        std::fs::write(&input, sprite.to_png_bytes().unwrap()).unwrap();

        tint_file(&input, &output, Rgb::new(220, 0, 0), DyeStrength::Full).unwrap();
        let written = Sprite::decode(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(written.pixels(), &[172, 0, 0, 255]);
    }
}
