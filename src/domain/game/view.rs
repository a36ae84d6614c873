use std::fmt;

use super::entity::Game;
use crate::domain::clock::Clock;
use crate::domain::currency::CurrencyCode;

/// Text rendering of a Game
///
/// Borrows the catalog-wide currency, so a currency change shows up on
/// every game the next time it is rendered.
pub struct GameView<'a> {
    game: &'a Game,
    currency: &'a CurrencyCode,
    clock: &'a dyn Clock,
}

impl<'a> GameView<'a> {
    pub fn new(game: &'a Game, currency: &'a CurrencyCode, clock: &'a dyn Clock) -> Self {
        Self {
            game,
            currency,
            clock,
        }
    }
}

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.game;

        writeln!(f, "Title: {}", game.title())?;
        writeln!(f, "Publisher:")?;
        writeln!(f, "{}", game.publisher())?;
        writeln!(f, "Description: {}", game.description())?;
        writeln!(f, "Price: {} {}", game.price(), self.currency)?;
        writeln!(f, "Release Date: {}", game.release_date())?;
        writeln!(f, "Age: {} months old", game.game_age(self.clock))?;
        writeln!(f, "Tags: [{}]", game.theme_tags().join(", "))?;
        if let Some(note) = game.publisher_note() {
            writeln!(f, "Note: {}", note)?;
        }
        Ok(())
    }
}
