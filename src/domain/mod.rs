// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod clock;
pub mod currency;
pub mod game;
pub mod publisher;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Publisher Domain
pub use publisher::Publisher;

// Game Domain
pub use game::{
    parse_theme_tags, Game, GameId, GameView, NewGame, Price,
};

// Capabilities
pub use clock::{Clock, FixedClock};
pub use currency::{CurrencyCode, CurrencyOracle};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// One variant per violated field or invariant, each with a fixed message.
/// A domain error never leaves an entity partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Title cannot be null or empty")]
    BlankTitle,

    #[error("Publisher cannot be null or empty")]
    MissingPublisher,

    #[error("Name cannot be null or empty")]
    BlankPublisherName,

    #[error("About cannot be null or empty")]
    BlankPublisherAbout,

    #[error("Description cannot be null or empty")]
    BlankDescription,

    #[error("Price cannot be null or less than zero")]
    NonPositivePrice,

    #[error("Price cannot have more than two decimal places")]
    PriceTooPrecise,

    #[error("Price is too large")]
    PriceTooLarge,

    /// Also raised for release dates in the future.
    #[error("Date cannot be null")]
    InvalidReleaseDate,

    #[error("Theme tag cannot be null or empty")]
    BlankThemeTag,

    #[error("Theme tags cannot be null or empty")]
    BlankThemeTags,

    #[error("Tag already exists")]
    DuplicateThemeTag,

    #[error("Tag does not exist")]
    UnknownThemeTag,

    #[error("At least one theme tag is required")]
    LastThemeTag,

    #[error("Publisher note cannot be set as whitespace")]
    WhitespacePublisherNote,

    #[error("Invalid currency")]
    InvalidCurrency,
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// True when the value is empty or only whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed_per_kind() {
        assert_eq!(
            DomainError::BlankTitle.to_string(),
            "Title cannot be null or empty"
        );
        assert_eq!(
            DomainError::PriceTooPrecise.to_string(),
            "Price cannot have more than two decimal places"
        );
        assert_eq!(
            DomainError::LastThemeTag.to_string(),
            "At least one theme tag is required"
        );
        assert_eq!(DomainError::PriceTooLarge.to_string(), "Price is too large");
        assert_eq!(DomainError::InvalidCurrency.to_string(), "Invalid currency");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }
}
