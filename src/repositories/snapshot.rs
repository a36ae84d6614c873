// src/repositories/snapshot.rs
//
// Whole-extent persistence over caller-supplied byte streams.
//
// Format: a JSON array of game records in extent order. The currency is
// display state and is not part of the snapshot.

use std::collections::HashSet;
use std::io::{Read, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Clock, DomainResult, Game, GameId, NewGame, Publisher};
use crate::error::PersistenceError;
use crate::repositories::GameExtent;

#[derive(Debug, Serialize, Deserialize)]
struct PublisherRecord {
    name: String,
    about: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct GameRecord {
    id: GameId,
    title: String,
    publisher: PublisherRecord,
    description: String,
    price_cents: u64,
    release_date: NaiveDate,
    theme_tags: Vec<String>,
    publisher_note: Option<String>,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            title: game.title().to_string(),
            publisher: PublisherRecord {
                name: game.publisher().name().to_string(),
                about: game.publisher().about().to_string(),
            },
            description: game.description().to_string(),
            price_cents: game.price().cents(),
            release_date: game.release_date(),
            theme_tags: game.theme_tags().to_vec(),
            publisher_note: game.publisher_note().map(str::to_string),
        }
    }
}

impl GameRecord {
    /// Rebuild the game through the same checks as construction
    fn into_game(self, clock: &dyn Clock) -> DomainResult<Game> {
        let publisher = Publisher::new(self.publisher.name, self.publisher.about)?;
        Game::with_id(
            self.id,
            NewGame {
                title: self.title,
                publisher: Some(publisher),
                description: self.description,
                price: Some(self.price_cents as f64 / 100.0),
                release_date: Some(self.release_date),
                theme_tags: self.theme_tags,
                publisher_note: self.publisher_note,
            },
            clock,
        )
    }
}

/// I/O failures inside serde_json are reported as I/O, everything else as format
fn classify(err: serde_json::Error) -> PersistenceError {
    if err.is_io() {
        PersistenceError::Io(err.into())
    } else {
        PersistenceError::Format(err)
    }
}

/// Serialize the whole extent to `sink`
pub fn save_extent<W: Write>(extent: &GameExtent, mut sink: W) -> Result<(), PersistenceError> {
    let records: Vec<GameRecord> = extent.list_all().iter().map(GameRecord::from).collect();

    serde_json::to_writer_pretty(&mut sink, &records).map_err(classify)?;
    sink.flush()?;
    Ok(())
}

/// Read a saved extent from `source`
///
/// Every record is re-validated and ids must be unique; nothing is returned
/// unless all of them pass.
pub fn load_extent<R: Read>(source: R, clock: &dyn Clock) -> Result<Vec<Game>, PersistenceError> {
    let records: Vec<GameRecord> = serde_json::from_reader(source).map_err(classify)?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut games = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if !seen.insert(record.id) {
            return Err(PersistenceError::DuplicateRecord {
                index,
                id: record.id,
            });
        }
        let game = record
            .into_game(clock)
            .map_err(|source| PersistenceError::InvalidRecord { index, source })?;
        games.push(game);
    }
    Ok(games)
}
