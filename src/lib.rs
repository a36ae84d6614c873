// src/lib.rs
// GameHub - Local-first digital game catalog
//
// Architecture:
// - Domain-centric: validation and invariants live in the domain
// - Explicit extent: the collection of games is an owned object, not a global
// - Injected capabilities: clock and currency oracle are passed in
// - Application Layer: menu boundary

// ============================================================================
// CORE
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    parse_theme_tags,
    // Capabilities
    Clock,
    CurrencyCode,
    CurrencyOracle,
    DomainError,
    DomainResult,
    FixedClock,
    // Game
    Game,
    GameId,
    GameView,
    NewGame,
    Price,
    // Publisher
    Publisher,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, PersistenceError};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{load_extent, save_extent, GameExtent};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{load_from_path, save_to_path, IsoCurrencyTable, SystemClock};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::CatalogService;

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use config::CatalogConfig;
