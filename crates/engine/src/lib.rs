//! Contract lifecycle engine for Tally
//!
//! This crate sits between the stores and the command executor:
//! - ContractService: quote, promote, add work, finalize, find
//! - TallyConfig: `tally.toml` loading and defaults
//! - ContractFilter: tri-state status filters for bulk lookups
//!
//! The engine is the only component that knows which store backs the
//! service and which limits apply.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod filter;
pub mod service;

pub use config::{StoreKind, TallyConfig, CONFIG_FILE_NAME};
pub use filter::{BoolOption, ContractFilter};
pub use service::{ContractService, FoundMany};
