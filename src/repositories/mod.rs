// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories hold and move games, they do not validate them
// - Invariants are enforced by the domain before a game reaches the extent
// - A snapshot load is all-or-nothing

pub mod game_extent;
pub mod snapshot;

pub use game_extent::GameExtent;
pub use snapshot::{load_extent, save_extent};
