// src/application/commands/catalog_commands.rs

use crate::application::AppState;
use crate::error::AppResult;
use crate::infrastructure::{load_from_path, save_to_path};
use crate::services::CatalogService;

pub fn save_games(state: &AppState) -> AppResult<String> {
    save_to_path(&state.catalog, &state.config.snapshot_path)?;
    Ok("== Games successfully saved ==".to_string())
}

pub fn load_games(state: &mut AppState) -> AppResult<String> {
    load_from_path(&mut state.catalog, &state.config.snapshot_path)?;
    Ok("== Games successfully loaded ==".to_string())
}

pub fn set_currency(catalog: &mut CatalogService, code: &str) -> AppResult<String> {
    catalog.set_default_currency(code.trim())?;
    Ok("== Global currency successfully set ==".to_string())
}
