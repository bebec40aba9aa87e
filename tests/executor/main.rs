//! Executor Layer Tests
//!
//! End-to-end tests through the public `tally` API:
//! - Command / Output / Response - the wire-facing surface
//! - Executor - validation, dispatch and error mapping
//! - Tally - high-level typed wrapper API


mod concurrency;
mod envelope;
mod find;
mod tally_api;
