// src/application/state.rs

use crate::config::CatalogConfig;
use crate::error::AppResult;
use crate::infrastructure::{IsoCurrencyTable, SystemClock};
use crate::services::CatalogService;

/// Everything the menu needs between two choices
pub struct AppState {
    pub config: CatalogConfig,
    pub catalog: CatalogService,
}

impl AppState {
    /// Wire the catalog with the system clock and the ISO currency table
    pub fn new(config: CatalogConfig) -> AppResult<Self> {
        let catalog = CatalogService::with_default_currency(
            Box::new(SystemClock::new()),
            Box::new(IsoCurrencyTable),
            &config.default_currency,
        )?;

        Ok(Self { config, catalog })
    }
}
