use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::{
    normalize_publisher_note, validate_description, validate_release_date, validate_theme_tag,
    validate_theme_tags, validate_title,
};
use super::price::Price;
use super::view::GameView;
use crate::domain::clock::Clock;
use crate::domain::currency::CurrencyCode;
use crate::domain::publisher::Publisher;
use crate::domain::{DomainError, DomainResult};

/// Internal immutable identifier of a Game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inputs for constructing a Game
///
/// `None` stands for a value that was not supplied at all and is rejected
/// with that field's error.
#[derive(Debug, Clone, Default)]
pub struct NewGame {
    pub title: String,
    pub publisher: Option<Publisher>,
    pub description: String,
    pub price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub theme_tags: Vec<String>,
    pub publisher_note: Option<String>,
}

/// A digital game entry in the catalog
///
/// Fields are private: every change goes through a validating mutator,
/// so an existing Game is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    id: GameId,
    title: String,
    publisher: Publisher,
    description: String,
    price: Price,
    release_date: NaiveDate,
    theme_tags: Vec<String>,
    publisher_note: Option<String>,
}

impl Game {
    /// Create a new Game
    /// Fields are validated in declaration order and the first violation is returned
    pub fn new(request: NewGame, clock: &dyn Clock) -> DomainResult<Self> {
        Self::with_id(GameId::new(), request, clock)
    }

    /// Rebuild a Game with a known identity (used when loading snapshots)
    pub fn with_id(id: GameId, request: NewGame, clock: &dyn Clock) -> DomainResult<Self> {
        let NewGame {
            title,
            publisher,
            description,
            price,
            release_date,
            theme_tags,
            publisher_note,
        } = request;

        validate_title(&title)?;
        let publisher = publisher.ok_or(DomainError::MissingPublisher)?;
        validate_description(&description)?;
        let price = Price::from_decimal(price.ok_or(DomainError::NonPositivePrice)?)?;
        let release_date = validate_release_date(release_date, clock.today())?;
        validate_theme_tags(&theme_tags)?;
        let publisher_note = normalize_publisher_note(publisher_note.as_deref())?;

        Ok(Self {
            id,
            title,
            publisher,
            description,
            price,
            release_date,
            theme_tags,
            publisher_note,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Read-only view of the tags, in insertion order
    pub fn theme_tags(&self) -> &[String] {
        &self.theme_tags
    }

    pub fn publisher_note(&self) -> Option<&str> {
        self.publisher_note.as_deref()
    }

    pub fn has_theme_tag(&self, tag: &str) -> bool {
        self.theme_tags.iter().any(|t| t == tag)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> DomainResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> DomainResult<()> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        self.price = Price::from_decimal(price)?;
        Ok(())
    }

    /// Release date may not be later than `clock.today()`
    pub fn set_release_date(&mut self, release_date: NaiveDate, clock: &dyn Clock) -> DomainResult<()> {
        self.release_date = validate_release_date(Some(release_date), clock.today())?;
        Ok(())
    }

    /// Append a tag; exact, case-sensitive duplicates are rejected
    pub fn add_theme_tag(&mut self, tag: &str) -> DomainResult<()> {
        validate_theme_tag(tag)?;
        if self.has_theme_tag(tag) {
            return Err(DomainError::DuplicateThemeTag);
        }

        self.theme_tags.push(tag.to_string());
        Ok(())
    }

    /// Remove a tag, keeping at least one
    pub fn remove_theme_tag(&mut self, tag: &str) -> DomainResult<()> {
        validate_theme_tag(tag)?;
        let position = self
            .theme_tags
            .iter()
            .position(|t| t == tag)
            .ok_or(DomainError::UnknownThemeTag)?;
        if self.theme_tags.len() == 1 {
            return Err(DomainError::LastThemeTag);
        }

        self.theme_tags.remove(position);
        Ok(())
    }

    /// `None` or `""` clears the note
    pub fn set_publisher_note(&mut self, note: Option<&str>) -> DomainResult<()> {
        self.publisher_note = normalize_publisher_note(note)?;
        Ok(())
    }

    /// Whole months since release, truncated
    pub fn game_age(&self, clock: &dyn Clock) -> u32 {
        whole_months_between(self.release_date, clock.today())
    }

    /// Renderable view using the catalog-wide currency
    pub fn view<'a>(&'a self, currency: &'a CurrencyCode, clock: &'a dyn Clock) -> GameView<'a> {
        GameView::new(self, currency, clock)
    }
}

/// Calendar months from `from` to `to`; a month only counts once its
/// day-of-month has been reached.
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());
    if to.day() < from.day() {
        months -= 1;
    }
    u32::try_from(months).unwrap_or(0)
}
