// src/domain/currency.rs
//
// Currency codes shown next to every price.
// The catalog holds one shared code; games never store their own.

use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// Answers whether a currency code is recognized.
#[cfg_attr(test, mockall::automock)]
pub trait CurrencyOracle: Send + Sync {
    fn is_valid_currency_code(&self, code: &str) -> bool;
}

/// A currency code accepted by a `CurrencyOracle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const DEFAULT: &'static str = "EUR";

    /// Validate `code` against `oracle`
    pub fn parse(code: &str, oracle: &dyn CurrencyOracle) -> DomainResult<Self> {
        if code.len() != 3 || !oracle.is_valid_currency_code(code) {
            return Err(DomainError::InvalidCurrency);
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
