//! Business limits for amounts
//!
//! This module defines the limits the validation layer enforces on incoming
//! amounts: the single currency the service trades in and the minimum cost
//! of one work item. Violations surface as field-level validation errors.

use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use thiserror::Error;

/// Default minimum cost of one work item, in major units
pub const DEFAULT_MIN_WORK_COST: i64 = 100;

/// Amount limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Currency every quote and cost must be in
    pub currency: Currency,

    /// Minimum cost of a single work item (default: 100)
    pub min_work_cost: Decimal,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            currency: Currency::EUR,
            min_work_cost: Decimal::from(DEFAULT_MIN_WORK_COST),
        }
    }
}

impl Limits {
    /// Validate the currency of an amount
    pub fn validate_currency(&self, money: &Money) -> Result<(), LimitError> {
        if money.currency() != self.currency {
            return Err(LimitError::WrongCurrency {
                expected: self.currency,
                actual: money.currency(),
            });
        }
        Ok(())
    }

    /// Validate a quoted price: not negative
    pub fn validate_price(&self, price: &Money) -> Result<(), LimitError> {
        if price.is_negative() {
            return Err(LimitError::Negative {
                actual: price.amount(),
            });
        }
        Ok(())
    }

    /// Validate a work cost: strictly positive and at least `min_work_cost`
    pub fn validate_work_cost(&self, cost: &Money) -> Result<(), LimitError> {
        if !cost.is_positive() || cost.amount() < self.min_work_cost {
            return Err(LimitError::BelowMinimum {
                minimum: self.min_work_cost,
                actual: cost.amount(),
            });
        }
        Ok(())
    }
}

/// Limit violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    /// Amount is in another currency than the service's
    #[error("wrong currency: expected {expected}, got {actual}")]
    WrongCurrency {
        /// Service currency
        expected: Currency,
        /// Currency supplied
        actual: Currency,
    },

    /// Amount must not be negative
    #[error("negative amount: {actual}")]
    Negative {
        /// Amount supplied
        actual: Decimal,
    },

    /// Amount is zero, negative, or under the minimum
    #[error("amount {actual} below minimum {minimum}")]
    BelowMinimum {
        /// Configured minimum
        minimum: Decimal,
        /// Amount supplied
        actual: Decimal,
    },
}
