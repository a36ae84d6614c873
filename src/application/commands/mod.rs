// src/application/commands/mod.rs
//
// Menu command handlers

pub mod catalog_commands;
pub mod game_commands;

pub use catalog_commands::{load_games, save_games, set_currency};
pub use game_commands::{
    add_sample_tags, create_sample_games, remove_sample_tags, search_by_tag, show_all,
};
