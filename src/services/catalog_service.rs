// src/services/catalog_service.rs
//
// Catalog Service - owns the extent and every operation over it.
//
// RULES:
// - Games enter the extent only after full validation
// - Each mutation is validate-then-commit
// - Load replaces the extent only when the whole snapshot is valid
// - Currency is shared by all games and never stored per game

use std::fmt::Write as _;
use std::io::{Read, Write};

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::domain::{
    Clock, CurrencyCode, CurrencyOracle, DomainResult, Game, GameId, NewGame,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{load_extent, save_extent, GameExtent};

pub struct CatalogService {
    extent: GameExtent,
    clock: Box<dyn Clock>,
    currency_oracle: Box<dyn CurrencyOracle>,
    default_currency: CurrencyCode,
}

impl CatalogService {
    /// Empty catalog priced in the default currency (EUR)
    pub fn new(clock: Box<dyn Clock>, currency_oracle: Box<dyn CurrencyOracle>) -> Self {
        Self {
            extent: GameExtent::new(),
            clock,
            currency_oracle,
            default_currency: CurrencyCode::default(),
        }
    }

    /// Empty catalog priced in `currency`, which must be known to the oracle
    pub fn with_default_currency(
        clock: Box<dyn Clock>,
        currency_oracle: Box<dyn CurrencyOracle>,
        currency: &str,
    ) -> AppResult<Self> {
        let mut service = Self::new(clock, currency_oracle);
        service.set_default_currency(currency)?;
        Ok(service)
    }

    // ------------------------------------------------------------------------
    // Construction & queries
    // ------------------------------------------------------------------------

    /// Validate and append a new game to the extent
    pub fn create_game(&mut self, request: NewGame) -> AppResult<GameId> {
        let game = Game::new(request, self.clock.as_ref()).map_err(|err| {
            warn!("Game rejected: {}", err);
            AppError::Domain(err)
        })?;

        info!("Game created: {} ({})", game.title(), game.id());
        Ok(self.extent.add(game))
    }

    pub fn game(&self, id: GameId) -> AppResult<&Game> {
        self.extent.get(id).ok_or(AppError::NotFound(id))
    }

    /// Read-only view of the extent in insertion order
    pub fn list_all(&self) -> &[Game] {
        self.extent.list_all()
    }

    pub fn len(&self) -> usize {
        self.extent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Games tagged exactly `tag`; absent or blank input matches nothing
    pub fn find_with_similar_tag(&self, tag: Option<&str>) -> Vec<&Game> {
        let found = self.extent.find_with_similar_tag(tag);
        debug!("Tag search {:?} matched {} game(s)", tag, found.len());
        found
    }

    pub fn game_age(&self, id: GameId) -> AppResult<u32> {
        Ok(self.game(id)?.game_age(self.clock.as_ref()))
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    pub fn set_title(&mut self, id: GameId, title: &str) -> AppResult<()> {
        self.mutate(id, "title", |game, _| game.set_title(title))
    }

    pub fn set_description(&mut self, id: GameId, description: &str) -> AppResult<()> {
        self.mutate(id, "description", |game, _| game.set_description(description))
    }

    pub fn set_price(&mut self, id: GameId, price: f64) -> AppResult<()> {
        self.mutate(id, "price", |game, _| game.set_price(price))
    }

    pub fn set_release_date(&mut self, id: GameId, release_date: NaiveDate) -> AppResult<()> {
        self.mutate(id, "release date", |game, clock| {
            game.set_release_date(release_date, clock)
        })
    }

    pub fn add_theme_tag(&mut self, id: GameId, tag: &str) -> AppResult<()> {
        self.mutate(id, "add tag", |game, _| game.add_theme_tag(tag))
    }

    pub fn remove_theme_tag(&mut self, id: GameId, tag: &str) -> AppResult<()> {
        self.mutate(id, "remove tag", |game, _| game.remove_theme_tag(tag))
    }

    pub fn set_publisher_note(&mut self, id: GameId, note: Option<&str>) -> AppResult<()> {
        self.mutate(id, "publisher note", |game, _| game.set_publisher_note(note))
    }

    fn mutate<F>(&mut self, id: GameId, change: &str, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut Game, &dyn Clock) -> DomainResult<()>,
    {
        let game = self.extent.get_mut(id).ok_or(AppError::NotFound(id))?;
        apply(game, self.clock.as_ref()).map_err(|err| {
            warn!("Rejected {} change on game {}: {}", change, id, err);
            AppError::Domain(err)
        })?;

        debug!("Applied {} change on game {}", change, id);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Currency
    // ------------------------------------------------------------------------

    pub fn default_currency(&self) -> &CurrencyCode {
        &self.default_currency
    }

    /// Replace the shared currency; every game renders with it from now on
    pub fn set_default_currency(&mut self, code: &str) -> AppResult<()> {
        let currency = CurrencyCode::parse(code, self.currency_oracle.as_ref()).map_err(|err| {
            warn!("Currency {:?} rejected", code);
            AppError::Domain(err)
        })?;

        info!("Default currency set to {}", currency);
        self.default_currency = currency;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    pub fn render(&self, id: GameId) -> AppResult<String> {
        let game = self.game(id)?;
        Ok(game
            .view(&self.default_currency, self.clock.as_ref())
            .to_string())
    }

    /// Every game rendered in extent order, one block per game
    pub fn show_all(&self) -> String {
        render_games(self.list_all().iter(), &self.default_currency, self.clock.as_ref())
    }

    /// Render the result of a tag search
    pub fn show_with_similar_tag(&self, tag: Option<&str>) -> String {
        render_games(
            self.find_with_similar_tag(tag).into_iter(),
            &self.default_currency,
            self.clock.as_ref(),
        )
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    /// Write the whole extent to `sink`
    pub fn save<W: Write>(&self, sink: W) -> AppResult<()> {
        save_extent(&self.extent, sink)?;
        info!("Saved {} game(s)", self.extent.len());
        Ok(())
    }

    /// Replace the whole extent with the snapshot read from `source`
    /// On error the current extent is left as it was.
    pub fn load<R: Read>(&mut self, source: R) -> AppResult<usize> {
        let games = load_extent(source, self.clock.as_ref()).map_err(|err| {
            warn!("Snapshot rejected: {}", err);
            err
        })?;

        let count = games.len();
        self.extent.replace_all(games);
        info!("Loaded {} game(s)", count);
        Ok(count)
    }
}

fn render_games<'a>(
    games: impl Iterator<Item = &'a Game>,
    currency: &CurrencyCode,
    clock: &dyn Clock,
) -> String {
    let mut out = String::new();
    for game in games {
        // writing into a String cannot fail
        let _ = writeln!(out, "{}", game.view(currency, clock));
    }
    out
}
