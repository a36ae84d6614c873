// src/config.rs
//
// Runtime configuration
//
// PRINCIPLES:
// - Defaults work without any setup
// - Command-line overrides win over defaults
// - Paths are resolved once at startup

use std::path::PathBuf;

use crate::domain::CurrencyCode;
use crate::error::{AppError, AppResult};

/// File name of the snapshot inside the data directory
pub const SNAPSHOT_FILE_NAME: &str = "games.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Where menu save/load reads and writes the extent
    pub snapshot_path: PathBuf,

    /// Currency every price is shown in at startup
    pub default_currency: String,
}

impl CatalogConfig {
    /// Build the configuration, falling back to defaults for anything not given
    pub fn resolve(snapshot_path: Option<PathBuf>, default_currency: Option<String>) -> AppResult<Self> {
        let snapshot_path = match snapshot_path {
            Some(path) => path,
            None => default_snapshot_path()?,
        };

        Ok(Self {
            snapshot_path,
            default_currency: default_currency
                .unwrap_or_else(|| CurrencyCode::DEFAULT.to_string()),
        })
    }
}

/// Get the snapshot file path
///
/// Snapshot is stored in the application data directory.
/// Path structure: {APP_DATA}/gamehub/games.json
pub fn default_snapshot_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

    let gamehub_dir = app_data_dir.join("gamehub");

    // Ensure directory exists
    std::fs::create_dir_all(&gamehub_dir)?;

    Ok(gamehub_dir.join(SNAPSHOT_FILE_NAME))
}
