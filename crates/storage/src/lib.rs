//! Storage layer for Tally
//!
//! This crate implements the contract stores the lifecycle engine runs on:
//! - ShardedStore: DashMap keyed by contract id, per-entry locking
//! - UnifiedStore: BTreeMap behind a single parking_lot RwLock
//!
//! Both implement [`tally_core::ContractStore`]. Which one backs a service is
//! a configuration choice; behavior is identical.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;
pub mod unified;

pub use sharded::ShardedStore;
pub use unified::UnifiedStore;
