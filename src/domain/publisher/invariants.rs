// src/domain/publisher/invariants.rs

use crate::domain::{is_blank, DomainError, DomainResult};

pub(crate) fn validate_name(name: &str) -> DomainResult<()> {
    if is_blank(name) {
        return Err(DomainError::BlankPublisherName);
    }
    Ok(())
}

pub(crate) fn validate_about(about: &str) -> DomainResult<()> {
    if is_blank(about) {
        return Err(DomainError::BlankPublisherAbout);
    }
    Ok(())
}
