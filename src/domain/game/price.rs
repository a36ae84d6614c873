// src/domain/game/price.rs

use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// Allowed distance between `value * 100` and a whole number, in units of
/// the cent value's own rounding error.
const CENT_TOLERANCE_ULPS: f64 = 4.0;

/// Largest cent amount that converts to and from `f64` exactly
pub const MAX_CENTS: u64 = (1 << 53) - 1;

/// A positive price with at most two decimal places, stored as whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Convert a decimal amount into a Price
    ///
    /// Rejects non-finite and non-positive amounts, amounts above
    /// `MAX_CENTS`, then amounts whose cent value is not a whole number
    /// (`10.005`, `0.001`).
    pub fn from_decimal(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::NonPositivePrice);
        }

        let cents = value * 100.0;
        let rounded = cents.round();
        if rounded > MAX_CENTS as f64 {
            return Err(DomainError::PriceTooLarge);
        }
        if (cents - rounded).abs() > cents * f64::EPSILON * CENT_TOLERANCE_ULPS {
            return Err(DomainError::PriceTooPrecise);
        }

        Self::from_cents(rounded as u64)
    }

    pub fn from_cents(cents: u64) -> DomainResult<Self> {
        if cents == 0 {
            return Err(DomainError::NonPositivePrice);
        }
        if cents > MAX_CENTS {
            return Err(DomainError::PriceTooLarge);
        }
        Ok(Self { cents })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_places_accepted() {
        assert_eq!(Price::from_decimal(10.0).unwrap().cents(), 1000);
        assert_eq!(Price::from_decimal(9.99).unwrap().cents(), 999);
        assert_eq!(Price::from_decimal(29.99).unwrap().cents(), 2999);
        assert_eq!(Price::from_decimal(50.99).unwrap().cents(), 5099);
        assert_eq!(Price::from_decimal(1.15).unwrap().cents(), 115);
        assert_eq!(Price::from_decimal(0.01).unwrap().cents(), 1);
    }

    #[test]
    fn test_more_than_two_decimal_places_rejected() {
        assert_eq!(
            Price::from_decimal(10.005).unwrap_err(),
            DomainError::PriceTooPrecise
        );
        assert_eq!(
            Price::from_decimal(0.001).unwrap_err(),
            DomainError::PriceTooPrecise
        );
        assert_eq!(
            Price::from_decimal(19.999).unwrap_err(),
            DomainError::PriceTooPrecise
        );
        assert_eq!(
            Price::from_decimal(10.0000000001).unwrap_err(),
            DomainError::PriceTooPrecise
        );
        assert_eq!(
            Price::from_decimal(0.0099999).unwrap_err(),
            DomainError::PriceTooPrecise
        );
    }

    #[test]
    fn test_price_beyond_exact_range_rejected() {
        assert_eq!(
            Price::from_decimal(1e20).unwrap_err(),
            DomainError::PriceTooLarge
        );
        assert_eq!(
            Price::from_cents(MAX_CENTS + 1).unwrap_err(),
            DomainError::PriceTooLarge
        );
        assert_eq!(
            Price::from_decimal(90_071_992_547_409.0).unwrap().cents(),
            9_007_199_254_740_900
        );
    }

    #[test]
    fn test_non_positive_rejected() {
        for value in [0.0, -10.0, -100.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Price::from_decimal(value).unwrap_err(),
                DomainError::NonPositivePrice
            );
        }
        assert_eq!(
            Price::from_cents(0).unwrap_err(),
            DomainError::NonPositivePrice
        );
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(Price::from_decimal(40.0).unwrap().to_string(), "40.00");
        assert_eq!(Price::from_decimal(29.9).unwrap().to_string(), "29.90");
        assert_eq!(Price::from_cents(5).unwrap().to_string(), "0.05");
    }
}
