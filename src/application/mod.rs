// src/application/mod.rs
//
// Application Layer - the boundary between the menu and the catalog
//
// RULES:
// - Commands call the service, never the repositories
// - Commands return text for the caller to print
// - Errors are turned into user-facing messages here

pub mod commands;
pub mod error_handling;
pub mod menu;
pub mod state;

pub use error_handling::user_message;
pub use menu::MenuOption;
pub use state::AppState;
