use std::fmt;

use super::invariants::{validate_about, validate_name};
use crate::domain::DomainResult;

/// The studio or company that released a game
/// Only constructible through `Publisher::new`, so both fields are always valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    name: String,
    about: String,
}

impl Publisher {
    /// Create a new Publisher
    /// `name` is checked before `about`
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let about = about.into();

        validate_name(&name)?;
        validate_about(&about)?;

        Ok(Self { name, about })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn about(&self) -> &str {
        &self.about
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\tName: {}\n\tAbout: {}", self.name, self.about)
    }
}
