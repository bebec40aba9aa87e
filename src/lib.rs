//! Tally - contract lifecycle service
//!
//! A customer asks for a quote, the quote is promoted to a contract, work
//! items are logged against it, and finalizing the contract yields the
//! profit: quoted price minus total work cost, computed exactly.
//!
//! # Quick Start
//!
//! ```ignore
//! use tally::{Money, Tally};
//! use rust_decimal_macros::dec;
//!
//! let tally = Tally::ephemeral();
//!
//! let id = tally.new_quote("Jan Jansen", "Paint the fence", Money::eur(dec!(2500)))?;
//! tally.promote_quote(id.as_str())?;
//! tally.add_work_done(id.as_str(), "Sanding", Money::eur(dec!(1200)))?;
//! tally.add_work_done(id.as_str(), "Painting", Money::eur(dec!(1000)))?;
//!
//! let profit = tally.finalize_contract(id.as_str())?;
//! assert_eq!(profit, Money::eur(dec!(300)));
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! [`Executor::respond`] folds any outcome into the uniform [`Response`]
//! envelope. The [`Tally`] struct provides a convenient typed interface.
//!
//! Storage and the contract service are not exposed beyond what the
//! executor re-exports.

// Re-export the public API from tally-executor
pub use tally_executor::*;
