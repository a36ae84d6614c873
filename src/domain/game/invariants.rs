use chrono::NaiveDate;

// src/domain/game/invariants.rs

use crate::domain::{is_blank, DomainError, DomainResult};

pub(crate) fn validate_title(title: &str) -> DomainResult<()> {
    if is_blank(title) {
        return Err(DomainError::BlankTitle);
    }
    Ok(())
}

pub(crate) fn validate_description(description: &str) -> DomainResult<()> {
    if is_blank(description) {
        return Err(DomainError::BlankDescription);
    }
    Ok(())
}

/// Release date must be present and not later than `today`
pub(crate) fn validate_release_date(
    release_date: Option<NaiveDate>,
    today: NaiveDate,
) -> DomainResult<NaiveDate> {
    match release_date {
        Some(date) if date <= today => Ok(date),
        _ => Err(DomainError::InvalidReleaseDate),
    }
}

pub(crate) fn validate_theme_tag(tag: &str) -> DomainResult<()> {
    if is_blank(tag) {
        return Err(DomainError::BlankThemeTag);
    }
    Ok(())
}

/// Bulk tag check: at least one tag, none blank
/// Duplicates inside the bulk input are not rejected.
pub(crate) fn validate_theme_tags(tags: &[String]) -> DomainResult<()> {
    if tags.is_empty() {
        return Err(DomainError::BlankThemeTags);
    }
    tags.iter().try_for_each(|tag| validate_theme_tag(tag))
}

/// Empty or absent clears the note, whitespace is rejected,
/// anything else is kept verbatim.
pub(crate) fn normalize_publisher_note(note: Option<&str>) -> DomainResult<Option<String>> {
    match note {
        None | Some("") => Ok(None),
        Some(value) if is_blank(value) => Err(DomainError::WhitespacePublisherNote),
        Some(value) => Ok(Some(value.to_string())),
    }
}

/// Critical Game Invariants:
///
/// 1. Title and description are never blank
/// 2. Publisher is always present and valid
/// 3. Price is positive with at most two decimal places
/// 4. Release date is never later than today
/// 5. There is always at least one theme tag, and no tag is blank
/// 6. Tags added after construction never duplicate an existing tag
/// 7. Publisher note is either absent or non-blank
/// 8. Every mutation validates before it commits
/// 9. Identity (GameId) is immutable
