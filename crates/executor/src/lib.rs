//! # Tally Executor
//!
//! The public API for Tally, a contract lifecycle service: quotes are
//! created, accepted, worked on, and finalized with an exact profit.
//!
//! This is the only crate users need to import. It provides:
//! - [`Tally`] - Typed interface, one method per operation
//! - [`Command`]/[`Output`] - Low-level command interface (for transports)
//! - [`Response`] - The uniform `{code, reason, errors}` envelope
//!
//! ## Quick Start
//!
//! ```text
//! use tally_executor::{Money, Tally};
//!
//! let tally = Tally::ephemeral();
//! let id = tally.new_quote("Jan Jansen", "Paint the fence", Money::eur(dec!(2500)))?;
//! tally.promote_quote(id.as_str())?;
//! tally.add_work_done(id.as_str(), "Day one", Money::eur(dec!(1200)))?;
//! tally.add_work_done(id.as_str(), "Day two", Money::eur(dec!(1000)))?;
//! assert_eq!(tally.finalize_contract(id.as_str())?, Money::eur(dec!(300)));
//! ```
//!
//! ## Lifecycle
//!
//! | Status | Reached by | Allows |
//! |--------|------------|--------|
//! | **QUOTE** | `NewQuote` | `PromoteQuote` |
//! | **ATWORK** | `PromoteQuote` | `AddWorkDone`, `FinalizeContract` |
//! | **FINALIZED** | `FinalizeContract` | lookups only |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod output;
mod response;
mod types;
pub mod validation;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Tally;
pub use command::Command;
pub use error::{Error, ErrorDetail};
pub use executor::Executor;
pub use output::Output;
pub use response::{
    Response, ResponseCode, REASON_DONE, REASON_INTERNAL, REASON_NOT_FOUND, REASON_PRECONDITION,
    REASON_VALIDATION,
};
pub use types::*;

// Re-export domain types so users don't need tally-core directly
pub use tally_core::{
    ContractId, ContractStatus, Currency, Decimal, Money, MoneyParts, WorkDone,
};

// Re-export configuration types so users don't need tally-engine directly
pub use tally_engine::{ContractService, TallyConfig, CONFIG_FILE_NAME};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
