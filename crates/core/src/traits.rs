//! Core traits for contract storage
//!
//! This module defines the ContractStore trait that lets the lifecycle
//! engine run against any keyed container without knowing which one.

use crate::error::Result;
use crate::types::{Contract, ContractId};

/// Keyed storage of contracts
///
/// Thread safety: All methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). `update` must hold the entry
/// exclusively for the duration of the closure, so that a status check and
/// the mutation it guards happen atomically per contract id.
pub trait ContractStore: Send + Sync {
    /// Insert a new contract under its own id
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if a contract with the same id exists.
    fn put(&self, contract: Contract) -> Result<()>;

    /// Snapshot of the contract stored under `id`, if any
    fn get(&self, id: &ContractId) -> Option<Contract>;

    /// Run `f` on the stored contract while holding it exclusively
    ///
    /// Returns false (without calling `f`) if no contract has this id.
    fn update(&self, id: &ContractId, f: &mut dyn FnMut(&mut Contract)) -> bool;

    /// Snapshots of all contracts matching `predicate`, ordered by id
    fn scan(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Contract>;

    /// Number of stored contracts
    fn len(&self) -> usize;

    /// True if nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Apply a one-shot closure through [`ContractStore::update`]
///
/// Returns `None` if the contract does not exist, otherwise the closure's
/// result.
pub fn modify<T>(
    store: &dyn ContractStore,
    id: &ContractId,
    f: impl FnOnce(&mut Contract) -> T,
) -> Option<T> {
    let mut f = Some(f);
    let mut out = None;
    let found = store.update(id, &mut |contract| {
        if let Some(f) = f.take() {
            out = Some(f(contract));
        }
    });
    if found {
        out
    } else {
        None
    }
}
