pub mod batch;
pub mod execute;
pub mod import;
pub mod outfit;
pub mod palette;
pub mod solve;
pub mod tint;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Subcommand;

use crate::Toolkit;
use crate::config::TailorConfig;

/// Outfit piece: `"Item Name"` or `"Item Name@color:strength"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceArg {
    pub item: String,
    pub dye: Option<(String, i64)>,
}

impl FromStr for PieceArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((item, dye)) = s.split_once('@') else {
            return Ok(PieceArg {
                item: s.trim().to_string(),
                dye: None,
            });
        };
        let (color, strength) = dye.rsplit_once(':').ok_or_else(|| {
            format!("Invalid piece '{s}'. Expected ITEM or ITEM@COLOR:STRENGTH")
        })?;
        let strength = strength
            .trim()
            .trim_end_matches('%')
            .parse::<i64>()
            .map_err(|e| format!("Invalid strength in '{s}': {e}"))?;
        Ok(PieceArg {
            item: item.trim().to_string(),
            dye: Some((color.trim().to_string(), strength)),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in dye palette
    Palette {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find ingredient combinations that dye a color at a strength
    Solve {
        /// Color name (e.g. "red", "dark blue")
        color: String,

        /// Desired strength: 25, 50, 75 or 100
        #[arg(short, long, default_value = "100")]
        strength: i64,

        /// Favor the crafting ingredients of this clothing item
        #[arg(short, long)]
        item: Option<String>,

        /// Extra favored ingredients (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        favor: Vec<String>,

        /// Only show the first N recipes
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Catalog JSON file (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Tint a single sprite
    Tint {
        /// Source PNG
        input: PathBuf,

        /// Color name from the catalog or palette, or "r,g,b" / "#rrggbb"
        #[arg(short, long)]
        color: String,

        /// Strength: 25, 50, 75 or 100
        #[arg(short, long, default_value = "100")]
        strength: i64,

        /// Output PNG (defaults to <color>_<strength>.png next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Catalog JSON file for color lookup (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Overwrite an existing output
        #[arg(long)]
        force: bool,
    },

    /// Tint every dyeable item in every color and strength
    Batch {
        /// Catalog JSON file (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Asset store root (overrides config)
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// Worker threads
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Strengths to render (comma-separated, default from config)
        #[arg(long, value_delimiter = ',')]
        strengths: Vec<i64>,

        /// Re-render variants that already exist
        #[arg(long)]
        force: bool,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Import a downloaded sprite into the asset store
    Import {
        /// Clothing item (or ingredient with --ingredient) name
        name: String,

        /// Image file to import
        image: PathBuf,

        /// Import an ingredient icon instead of a clothing original
        #[arg(long)]
        ingredient: bool,

        /// Catalog JSON file (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Asset store root (overrides config)
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },

    /// Resolve the sprite files of an outfit
    Outfit {
        /// Shirt: ITEM or ITEM@COLOR:STRENGTH
        #[arg(long)]
        shirt: Option<PieceArg>,

        /// Pants: ITEM or ITEM@COLOR:STRENGTH
        #[arg(long)]
        pants: Option<PieceArg>,

        /// Hat: ITEM or ITEM@COLOR:STRENGTH
        #[arg(long)]
        hat: Option<PieceArg>,

        /// Catalog JSON file (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Asset store root (overrides config)
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },
}

/// Build a toolkit from config with command-line overrides applied
pub(crate) fn open_toolkit(
    config: &TailorConfig,
    catalog: Option<&Path>,
    assets: Option<&Path>,
) -> anyhow::Result<Toolkit> {
    let mut config = config.clone();
    if let Some(path) = catalog {
        config.catalog_path = Some(path.to_path_buf());
    }
    if let Some(root) = assets {
        config.asset_root = root.to_path_buf();
    }
    if config.catalog_path.is_none() {
        anyhow::bail!("No catalog given. Pass --catalog or set catalog_path in the config");
    }
    Ok(Toolkit::new(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_arg() {
        assert_eq!(
            "Tank Top".parse::<PieceArg>().unwrap(),
            PieceArg {
                item: "Tank Top".into(),
                dye: None
            }
        );
        assert_eq!(
            "Tank Top@dark blue:75%".parse::<PieceArg>().unwrap(),
            PieceArg {
                item: "Tank Top".into(),
                dye: Some(("dark blue".into(), 75))
            }
        );
        assert!("Tank Top@red".parse::<PieceArg>().is_err());
        assert!("Tank Top@red:lots".parse::<PieceArg>().is_err());
    }
}
