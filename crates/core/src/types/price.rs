//! Display-price representation backed by decimal arithmetic.
//!
//! Prices flow through the catalog as formatted strings (`"$39.99"`) because
//! that is what both the static product list and the storefront feed carry.
//! [`DisplayPrice`] keeps the formatted form for rendering and parses it into
//! a [`Decimal`] only where arithmetic is needed (cart totals).
//!
//! Parsing strips a single leading `$` and accepts plain decimal strings
//! without thousands separators. Multi-currency parsing is out of scope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a display price into a decimal amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceParseError {
    /// The string held no amount after stripping the currency symbol.
    #[error("empty price string")]
    Empty,

    /// The amount was not a valid decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
}

/// A product or variant price in its formatted display form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPrice(String);

impl DisplayPrice {
    /// Wrap an already-formatted price string (e.g. `"$280"`).
    #[must_use]
    pub fn new(price: impl Into<String>) -> Self {
        Self(price.into())
    }

    /// Format a decimal amount as a two-digit dollar price.
    #[must_use]
    pub fn from_amount(amount: Decimal) -> Self {
        Self(format!("${amount:.2}"))
    }

    /// The zero price shown for products with no purchasable variant.
    #[must_use]
    pub fn zero() -> Self {
        Self("$0".to_string())
    }

    /// The formatted string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the numeric amount, stripping a single leading `$`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceParseError`] if the remainder is empty or not a
    /// plain decimal number.
    pub fn amount(&self) -> Result<Decimal, PriceParseError> {
        let raw = self.0.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw).trim();

        if raw.is_empty() {
            return Err(PriceParseError::Empty);
        }

        raw.parse::<Decimal>()
            .map_err(|_| PriceParseError::InvalidAmount(self.0.clone()))
    }
}

impl std::fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DisplayPrice {
    fn from(price: &str) -> Self {
        Self(price.to_string())
    }
}

impl From<String> for DisplayPrice {
    fn from(price: String) -> Self {
        Self(price)
    }
}
