//! Sharded contract storage
//!
//! DashMap keyed by contract id.
//! Lock-free reads of other shards, sharded writes, O(1) lookups.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default
//! - `update()` holds the shard write guard for the target entry while the
//!   closure runs, so check-then-mutate is atomic per contract id
//! - Contracts on different shards never contend

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tally_core::{Contract, ContractId, ContractStore, Error, Result};
use tracing::debug;

/// Sharded contract store
#[derive(Debug, Default)]
pub struct ShardedStore {
    contracts: DashMap<ContractId, Contract>,
}

impl ShardedStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            contracts: DashMap::new(),
        }
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contracts: DashMap::with_capacity(capacity),
        }
    }
}

impl ContractStore for ShardedStore {
    fn put(&self, contract: Contract) -> Result<()> {
        match self.contracts.entry(contract.id().clone()) {
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
        self.contracts.get(id).map(|entry| entry.value().clone())
    }

    fn update(&self, id: &ContractId, f: &mut dyn FnMut(&mut Contract)) -> bool {
        match self.contracts.get_mut(id) {
            Some(mut entry) => {
                f(entry.value_mut());
                true
            }
            None => false,
        }
    }

    fn scan(&self, predicate: &dyn Fn(&Contract) -> bool) -> Vec<Contract> {
        let mut found: Vec<Contract> = self
            .contracts
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        found
    }

    fn len(&self) -> usize {
        self.contracts.len()
    }
}
