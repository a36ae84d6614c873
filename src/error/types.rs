// src/error/types.rs
use crate::domain::{DomainError, GameId};
use thiserror::Error;

/// Failure while saving or loading the extent
/// A failed load never touches the extent already in memory.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Invalid game record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("Game record #{index} repeats id {id}")]
    DuplicateRecord { index: usize, id: GameId },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Game not found: {0}")]
    NotFound(GameId),

    #[error("The catalog has no games")]
    EmptyCatalog,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(PersistenceError::Io(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
