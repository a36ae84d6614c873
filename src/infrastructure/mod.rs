// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod clock;
pub mod currency_table;
pub mod snapshot_file;

pub use clock::SystemClock;
pub use currency_table::IsoCurrencyTable;
pub use snapshot_file::{load_from_path, save_to_path};
