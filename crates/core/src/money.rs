//! Exact monetary values
//!
//! `Money` pairs a `rust_decimal::Decimal` amount with a three-letter
//! currency code. Arithmetic is exact and refuses to mix currencies.
//!
//! ## Boundary conversion
//!
//! Transports usually carry money as a `{currency_code, units, nanos}`
//! triple. [`MoneyParts`] is that shape; [`Money::from_parts`] and
//! [`Money::to_parts`] convert losslessly in both directions and never round.

use crate::error::{Error, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nanos per unit in the `units`/`nanos` representation.
const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// Largest number of fractional digits `MoneyParts` can carry.
const MAX_PARTS_SCALE: u32 = 9;

// =============================================================================
// Currency
// =============================================================================

/// Three-letter upper-case currency code (ISO-4217 style)
///
/// Stored inline so the type is `Copy`. Parsing is case-insensitive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// Euro, the currency contracts are quoted in unless configured otherwise
    pub const EUR: Currency = Currency(*b"EUR");

    /// Parse a currency code
    ///
    /// # Errors
    /// Returns `InvalidInput` unless the code is exactly three ASCII letters.
    pub fn parse(code: &str) -> Result<Self> {
        let bytes = code.trim().as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(Error::invalid_input(format!(
                "currency code must be three letters, got '{}'",
                code
            )));
        }
        Ok(Currency([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.as_str())
    }
}

impl TryFrom<String> for Currency {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Currency::parse(&s)
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.as_str().to_string()
    }
}

// =============================================================================
// Money
// =============================================================================

/// An exact decimal amount in a single currency
///
/// Immutable value type. Addition and subtraction go through
/// [`checked_add`](Money::checked_add) / [`checked_sub`](Money::checked_sub),
/// which reject mixed currencies and overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a new amount
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Whole major units, e.g. `Money::from_major(2500, Currency::EUR)`
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self::new(Decimal::from(units), currency)
    }

    /// Euro amount
    pub fn eur(amount: Decimal) -> Self {
        Self::new(amount, Currency::EUR)
    }

    /// The decimal amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// True if the amount is greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// True if the amount is less than zero
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Exact addition
    ///
    /// # Errors
    /// `CurrencyMismatch` if the currencies differ, `InvalidAmount` on overflow.
    pub fn checked_add(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| Error::invalid_amount(format!("{} + {} overflows", self, other)))?;
        Ok(Money::new(amount, self.currency))
    }

    /// Exact subtraction
    ///
    /// # Errors
    /// `CurrencyMismatch` if the currencies differ, `InvalidAmount` on overflow.
    pub fn checked_sub(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| Error::invalid_amount(format!("{} - {} overflows", self, other)))?;
        Ok(Money::new(amount, self.currency))
    }

    /// Sum a sequence of amounts, starting from zero in `currency`
    pub fn sum<'a, I>(currency: Currency, items: I) -> Result<Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            return Err(Error::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(())
    }

    /// Convert from the `units`/`nanos` boundary representation
    ///
    /// A blank currency code means `default_currency`. Any other code must
    /// equal `default_currency`.
    ///
    /// # Errors
    /// - `InvalidInput` for a malformed code
    /// - `CurrencyMismatch` for a foreign currency
    /// - `InvalidAmount` if `nanos` is out of range or its sign disagrees with `units`
    pub fn from_parts(parts: &MoneyParts, default_currency: Currency) -> Result<Money> {
        let currency = if parts.currency_code.trim().is_empty() {
            default_currency
        } else {
            Currency::parse(&parts.currency_code)?
        };
        if currency != default_currency {
            return Err(Error::CurrencyMismatch {
                expected: default_currency,
                actual: currency,
            });
        }

        let nanos = i64::from(parts.nanos);
        if nanos.abs() >= NANOS_PER_UNIT {
            return Err(Error::invalid_amount(format!(
                "nanos {} out of range",
                parts.nanos
            )));
        }
        if (parts.units > 0 && nanos < 0) || (parts.units < 0 && nanos > 0) {
            return Err(Error::invalid_amount(format!(
                "units {} and nanos {} have opposite signs",
                parts.units, parts.nanos
            )));
        }

        // Drop the trailing zeros the nanos term adds: 12 + 0.500000000 is 12.5
        let amount = (Decimal::from(parts.units) + Decimal::new(nanos, MAX_PARTS_SCALE)).normalize();
        Ok(Money::new(amount, currency))
    }

    /// Convert to the `units`/`nanos` boundary representation
    ///
    /// # Errors
    /// `InvalidAmount` if the amount has more than nine fractional digits or
    /// its integer part does not fit in `i64`. Nothing is rounded.
    pub fn to_parts(&self) -> Result<MoneyParts> {
        let amount = self.amount.normalize();
        if amount.scale() > MAX_PARTS_SCALE {
            return Err(Error::invalid_amount(format!(
                "{} has more than {} fractional digits",
                self, MAX_PARTS_SCALE
            )));
        }
        let units = amount
            .trunc()
            .to_i64()
            .ok_or_else(|| Error::invalid_amount(format!("{} does not fit in units", self)))?;
        let nanos = (amount.fract() * Decimal::from(NANOS_PER_UNIT))
            .to_i32()
            .ok_or_else(|| Error::invalid_amount(format!("{} has invalid nanos", self)))?;
        Ok(MoneyParts {
            currency_code: self.currency.to_string(),
            units,
            nanos,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Money as carried by RPC transports
///
/// `units` is the whole part, `nanos` the fractional part in billionths with
/// the same sign as `units`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoneyParts {
    /// Currency code; blank means the service currency
    #[serde(default)]
    pub currency_code: String,
    /// Whole units
    pub units: i64,
    /// Billionths of a unit
    #[serde(default)]
    pub nanos: i32,
}
