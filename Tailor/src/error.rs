//! Error types for `Tailor`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for toolkit operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Solver, tint or sprite error from the core.
    #[error("DyeLab error: {0}")]
    DyeLab(#[from] dyelab::Error),

    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Serialization Errors ====================
    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    // ==================== Catalog Errors ====================
    /// The catalog document parsed but its contents are unusable.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// No color with this name in the catalog.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// No clothing item with this name in the catalog.
    #[error("unknown clothing item: {0}")]
    UnknownItem(String),

    /// Nothing is worn in this outfit slot.
    #[error("nothing worn in slot {0}")]
    EmptySlot(dyelab::catalog::ClothingSlot),

    // ==================== Asset Errors ====================
    /// An expected sprite file is missing from the asset store.
    #[error("missing asset: {path}")]
    MissingAsset {
        /// Where the sprite was expected.
        path: PathBuf,
    },

    /// Two catalog items sanitize to the same asset directory.
    #[error("{item} shares {} with {owner}", dir.display())]
    SharedAssetDir {
        /// The item left untinted.
        item: String,
        /// The item that owns the directory.
        owner: String,
        /// The contested directory.
        dir: PathBuf,
    },

    // ==================== Config Errors ====================
    /// The platform has no config directory.
    #[error("could not determine config directory")]
    ConfigDirNotFound,

    /// The worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, Error>;
