//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `contract` | NewQuote, PromoteQuote, AddWorkDone, FinalizeContract |
//! | `query` | Find, FindMany |
//!
//! Every handler validates its raw inputs first; a validation failure
//! returns before the engine is called.

pub mod contract;
pub mod query;
