//! CLI command for tinting a single sprite

use std::path::{Path, PathBuf};

use dyelab::catalog::{Catalog, DyeStrength, Rgb};
use dyelab::palette;
use dyelab::tint::variant_file_name;

use crate::catalog::{CatalogProvider, JsonCatalogProvider};
use crate::config::TailorConfig;
use crate::operations::tint_file;

/// Tint `input` with a named or literal color
pub fn execute(
    config: &TailorConfig,
    input: &Path,
    color: &str,
    strength: i64,
    output: Option<&Path>,
    catalog: Option<&Path>,
    force: bool,
) -> anyhow::Result<()> {
    let strength = DyeStrength::from_percent(strength)?;

    let catalog = match catalog.or(config.catalog_path.as_deref()) {
        Some(path) => JsonCatalogProvider::new(path).load()?,
        None => Catalog::new(),
    };
    let (name, rgb) = resolve_color(&catalog, color)?;

    let output: PathBuf = match (output, name) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(name)) => input
            .parent()
            .unwrap_or(Path::new(""))
            .join(variant_file_name(&name, strength)),
        (None, None) => anyhow::bail!("--output is required for a literal color like '{color}'"),
    };

    if output.exists() && !force {
        println!("Skipping {} (already exists)", output.display());
        return Ok(());
    }

    tint_file(input, &output, rgb, strength)?;
    println!("Wrote {} (#{} at {}%)", output.display(), rgb.to_hex(), strength);
    Ok(())
}

/// Catalog color, then palette color, then a literal RGB value.
///
/// Named colors come back with their canonical name, literals without one.
fn resolve_color(catalog: &Catalog, color: &str) -> anyhow::Result<(Option<String>, Rgb)> {
    if let Some(entry) = catalog.color(color) {
        return Ok((Some(entry.name.clone()), entry.rgb));
    }
    if let Some(entry) = palette::find_color(color) {
        return Ok((Some(entry.name.to_string()), entry.rgb));
    }
    let rgb = color
        .parse::<Rgb>()
        .map_err(|e| anyhow::anyhow!("Unknown color '{color}': {e}"))?;
    Ok((None, rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyelab::catalog::ColorEntry;

    #[test]
    fn test_resolve_color() {
        let mut catalog = Catalog::new();
        catalog.insert_color(ColorEntry::new("red", Rgb::new(200, 10, 10)));

        assert_eq!(
            resolve_color(&catalog, "red").unwrap(),
            (Some("red".to_string()), Rgb::new(200, 10, 10))
        );
        assert_eq!(
            resolve_color(&catalog, "Dark Blue").unwrap(),
            (Some("dark blue".to_string()), Rgb::new(0, 0, 139))
        );
        assert_eq!(resolve_color(&catalog, "#102030").unwrap(), (None, Rgb::new(16, 32, 48)));
        assert!(resolve_color(&catalog, "not a color").is_err());
    }

    #[test]
    fn test_default_output_uses_canonical_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("shirt.png");
        let sprite = dyelab::sprite::Sprite::from_rgba(1, 1, vec![200, 200, 200, 255]).unwrap();
        std::fs::write(&input, sprite.to_png_bytes().unwrap()).unwrap();
        let config = TailorConfig::default();

        execute(&config, &input, "Dark Blue", 100, None, None, false).unwrap();
        assert!(dir.path().join("dark blue_100.png").is_file());
        assert!(!dir.path().join("Dark Blue_100.png").exists());

        assert!(execute(&config, &input, "#102030", 100, None, None, false).is_err());
        let explicit = dir.path().join("custom.png");
        execute(&config, &input, "#102030", 100, Some(&explicit), None, false).unwrap();
        assert!(explicit.is_file());
    }
}
