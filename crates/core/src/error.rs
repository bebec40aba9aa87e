//! Error types for Tally
//!
//! This module defines the domain error type shared by the store and the
//! lifecycle engine. We use `thiserror` for automatic `Display` and `Error`
//! trait implementations.

use crate::limits::LimitError;
use crate::money::Currency;
use crate::types::{ContractId, ContractStatus, Precondition};
use std::io;
use thiserror::Error;

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, Error>;

/// Domain errors
#[derive(Debug, Error)]
pub enum Error {
    /// No contract is stored under the given id
    #[error("Contract not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: ContractId,
    },

    /// The contract exists but its status forbids the requested transition
    #[error("Precondition failed on {id}: {rule} (status {status})")]
    PreconditionFailed {
        /// The contract the transition was attempted on
        id: ContractId,
        /// Status at the time of the attempt
        status: ContractStatus,
        /// The violated rule
        rule: Precondition,
    },

    /// Arithmetic or comparison between two different currencies
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency required by the operation
        expected: Currency,
        /// Currency that was supplied
        actual: Currency,
    },

    /// An amount that cannot be represented (overflow, precision, sign)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A contract with this id is already stored
    #[error("Duplicate contract id: {id}")]
    DuplicateId {
        /// The colliding id
        id: ContractId,
    },

    /// Invalid input or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Error::InvalidAmount(message.into())
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        match e {
            LimitError::WrongCurrency { expected, actual } => {
                Error::CurrencyMismatch { expected, actual }
            }
            other => Error::InvalidAmount(other.to_string()),
        }
    }
}
