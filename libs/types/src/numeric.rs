//! Decimal price type for listings
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Listing prices are non-negative; the constructor enforces it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Price parse failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePriceError {
    #[error("not a decimal number: {0}")]
    Invalid(String),

    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative listing price
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Try to create a price, returning None if negative
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value >= Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a price from a whole number of currency units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Zero price
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check whether the price is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    /// Parse a price from a decimal string (e.g. "45.00")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s).map_err(|_| ParsePriceError::Invalid(s.to_string()))?;
        Self::try_new(value).ok_or(ParsePriceError::Negative)
    }
}
