//! Critical Publisher Invariants:
//!
//! 1. Name is never blank
//! 2. About is never blank
//! 3. A Publisher is immutable once constructed
//! 4. A Publisher is a value: games hold their own copy

pub mod entity;
pub mod invariants;

pub use entity::Publisher;
