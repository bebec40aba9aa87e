//! UnifiedStore: single-table storage backend
//!
//! This module implements the ContractStore trait using:
//! - `BTreeMap<ContractId, Contract>` for ordered storage
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **One lock**: every write serializes on the table's write lock, so all
//!   transitions are atomic with respect to each other, not just per id
//! - **Ordered scans**: BTreeMap iteration already yields id order

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use parking_lot::RwLock;
use tally_core::{Contract, ContractId, ContractStore, Error, Result};
use tracing::debug;

/// Single-table contract store guarded by one RwLock
#[derive(Debug, Default)]
pub struct UnifiedStore {
    data: RwLock<BTreeMap<ContractId, Contract>>,
}

impl UnifiedStore {
    /// Create a new empty UnifiedStore
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }
}

impl ContractStore for UnifiedStore {
    fn put(&self, contract: Contract) -> Result<()> {
        let mut data = self.data.write();
        match data.entry(contract.id().clone()) {
            Entry::Occupied(existing) => {
                debug!(contract_id = %existing.key(), "duplicate contract id rejected");
                Err(Error::DuplicateId {
                    id: existing.key().clone(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(contract);
                Ok(())
            }
        }
    }

    fn get(&self, id: &ContractId) -> Option<Contract> {
        self.data.read().get(id).cloned()
    }

    fn update(&self, id: &ContractId, f: &mut dyn FnMut(&mut Contract)) -> bool {
        let mut data = self.data.write();
        match data.get_mut(id) {
            Some(contract) => {
                f(contract);
                true
            }
            None => false,
        }
    }

    fn scan(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Contract> {
        self.data
            .read()
            .values()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.data.read().len()
    }
}
