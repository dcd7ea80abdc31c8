//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept as [`Decimal`] so totals such as `19.99 × 2` stay exact.
//! Formatting rounds half away from zero to two places, which is what shop
//! customers expect to see next to a currency symbol.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Errors that can occur when parsing a price amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price: {0:?}")]
    Invalid(String),
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The amount is above [`MAX_AMOUNT`].
    #[error("price exceeds {MAX_AMOUNT}: {0}")]
    TooLarge(Decimal),
}

/// Largest accepted unit price.
///
/// Keeps `price × quantity` summed over a cart well inside [`Decimal`]'s range
/// and keeps every amount exactly representable as a JSON number.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Parse a non-negative decimal amount such as `"19.99"`.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`PriceError::Invalid`] if the input is not a decimal number,
/// [`PriceError::Negative`] if it is below zero and [`PriceError::TooLarge`]
/// if it is above [`MAX_AMOUNT`].
pub fn parse_amount(s: &str) -> Result<Decimal, PriceError> {
    let trimmed = s.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PriceError::Invalid(s.to_string()))?;
    check_amount(amount)
}

/// Reject amounts below zero or above [`MAX_AMOUNT`].
///
/// # Errors
///
/// Returns [`PriceError::Negative`] if `amount` is below zero and
/// [`PriceError::TooLarge`] if it is above [`MAX_AMOUNT`].
pub fn check_amount(amount: Decimal) -> Result<Decimal, PriceError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(PriceError::TooLarge(amount));
    }
    Ok(amount)
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., euros, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Amount rounded to two decimal places, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "€19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.rounded())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    USD,
    #[default]
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Symbol printed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            other => Err(format!("unsupported currency code: {other}")),
        }
    }
}
