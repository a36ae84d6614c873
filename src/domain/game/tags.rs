// src/domain/game/tags.rs
//
// Adapter for the comma-separated tag convention.
// The entity itself only ever sees an ordered sequence of tags.

use crate::domain::{is_blank, DomainError, DomainResult};

/// Split `"Action, Adventure, Magic"` into trimmed tags
///
/// Blank input fails as a whole; blank pieces are passed through so the
/// entity reports them with the per-tag error.
pub fn parse_theme_tags(input: &str) -> DomainResult<Vec<String>> {
    if is_blank(input) {
        return Err(DomainError::BlankThemeTags);
    }

    Ok(input
        .split(',')
        .map(|tag| tag.trim().to_string())
        .collect())
}
