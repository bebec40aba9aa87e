//! Core types and traits for Tally
//!
//! This crate defines the foundational types used throughout the system:
//! - Money, Currency, MoneyParts: exact decimal amounts and their wire shape
//! - ContractId, ContractStatus, Contract, WorkDone: the contract aggregate
//! - Precondition: status guards with their machine-readable codes
//! - Limits: currency and minimum-cost rules
//! - ContractStore: the storage abstraction the engine is written against
//! - Error: domain error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod money;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use limits::{LimitError, Limits, DEFAULT_MIN_WORK_COST};
pub use money::{Currency, Money, MoneyParts};
pub use traits::ContractStore;
pub use types::{Contract, ContractId, ContractStatus, Precondition, WorkDone};

// Re-exported so downstream crates and tests name one Decimal type
pub use rust_decimal::Decimal;
