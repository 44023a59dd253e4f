//! Persisted toolkit settings
//!
//! Stored as TOML at `<config dir>/tailor/config.toml`. Every field has a
//! default, so a missing file or a partial file both load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dyelab::catalog::DyeStrength;

use crate::error::{Error, Result};
use crate::operations::tinting::BatchTintOptions;

// Default value functions for serde
fn default_asset_root() -> PathBuf {
    PathBuf::from("images")
}
fn default_strengths() -> Vec<DyeStrength> {
    DyeStrength::ALL.to_vec()
}
fn default_true() -> bool {
    true
}

/// Toolkit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailorConfig {
    /// Root of the sprite asset store
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    /// JSON catalog document to load
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Batch worker count; unset uses one per core
    #[serde(default)]
    pub threads: Option<usize>,
    /// Strengths rendered by batch tinting
    #[serde(default = "default_strengths")]
    pub strengths: Vec<DyeStrength>,
    /// Leave already rendered variants alone
    #[serde(default = "default_true")]
    pub skip_existing: bool,
}

impl Default for TailorConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            catalog_path: None,
            threads: None,
            strengths: default_strengths(),
            skip_existing: true,
        }
    }
}

impl TailorConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("tailor").join("config.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Load from the default location, or return defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load from `path`, or return defaults if the file does not exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Batch options derived from these settings
    #[must_use]
    pub fn batch_options(&self) -> BatchTintOptions {
        BatchTintOptions {
            strengths: self.strengths.clone(),
            skip_existing: self.skip_existing,
            threads: self.threads,
        }
    }
}
