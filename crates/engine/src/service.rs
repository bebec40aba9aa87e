//! Contract lifecycle service
//!
//! `ContractService` owns a shared [`ContractStore`] and the configured
//! [`Limits`]. Every state-changing operation runs its status guard and its
//! mutation inside one `update` critical section, so two callers racing on
//! the same contract id can never both pass the guard.
//!
//! Existence is checked before status: an unknown id is always `NotFound`,
//! never `PreconditionFailed`.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tally_core::traits::modify;
use tally_core::{
    Contract, ContractId, ContractStore, Error, Limits, Money, Result, WorkDone,
};
use tally_storage::{ShardedStore, UnifiedStore};
use tracing::{debug, info};

use crate::config::{StoreKind, TallyConfig, CONFIG_FILE_NAME};
use crate::filter::ContractFilter;

/// Result of a lookup by a list of ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundMany {
    /// Contracts found, in the order their ids were requested
    pub found: Vec<Contract>,
    /// Requested ids with no contract, in request order
    pub missing: Vec<ContractId>,
}

impl FoundMany {
    /// True if every requested id was found
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The contract lifecycle engine
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct ContractService {
    store: Arc<dyn ContractStore>,
    limits: Limits,
}

impl std::fmt::Debug for ContractService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractService")
            .field("contracts", &self.store.len())
            .field("limits", &self.limits)
            .finish()
    }
}

impl ContractService {
    /// Create a service over an existing store
    pub fn new(store: Arc<dyn ContractStore>, limits: Limits) -> Self {
        Self { store, limits }
    }

    /// Open a service configured from `<dir>/tally.toml`
    ///
    /// Creates the directory and a default config file if either is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config file cannot be created or
    /// read, or if the config holds invalid values.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        TallyConfig::write_default_if_missing(&config_path)?;
        let config = TallyConfig::from_file(&config_path)?;
        let service = Self::with_config(&config)?;
        info!(
            target: "tally::service",
            path = %config_path.display(),
            currency = %service.limits.currency,
            min_work_cost = %service.limits.min_work_cost,
            store = %config.store,
            "Opened contract service"
        );
        Ok(service)
    }

    /// Build a service from an already loaded config
    pub fn with_config(config: &TallyConfig) -> Result<Self> {
        let limits = config.limits()?;
        let store: Arc<dyn ContractStore> = match config.store_kind()? {
            StoreKind::Sharded => Arc::new(ShardedStore::new()),
            StoreKind::Unified => Arc::new(UnifiedStore::new()),
        };
        Ok(Self::new(store, limits))
    }

    /// In-memory service with default limits and a sharded store
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(ShardedStore::new()), Limits::default())
    }

    /// The limits requests are validated against
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of stored contracts
    pub fn contract_count(&self) -> usize {
        self.store.len()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Create a contract in `QUOTE` and return its fresh id
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if the price is not in the service currency.
    pub fn new_quote(
        &self,
        customer_name: &str,
        description_of_work_requested: &str,
        quoted_price: Money,
    ) -> Result<ContractId> {
        self.limits.validate_currency(&quoted_price)?;
        let id = ContractId::generate();
        let contract = Contract::new_quote(
            id.clone(),
            customer_name,
            description_of_work_requested,
            quoted_price,
        );
        self.store.put(contract)?;
        info!(
            target: "tally::service",
            contract_id = %id,
            status = "QUOTE",
            quoted_price = %quoted_price,
            "Added contract as a quote"
        );
        Ok(id)
    }

    /// Accept a quote: `QUOTE` → `ATWORK`
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `PreconditionFailed(NotAQuote)` otherwise
    /// unless the contract is a quote.
    pub fn promote_quote(&self, id: &ContractId) -> Result<()> {
        self.transition(id, "promote", |c| c.promote())?;
        info!(target: "tally::service", contract_id = %id, status = "ATWORK", "Quote promoted to contract");
        Ok(())
    }

    /// Record work done on an `ATWORK` contract
    ///
    /// # Errors
    ///
    /// `NotFound`, `PreconditionFailed(NotAtWork)`, or `CurrencyMismatch`.
    pub fn add_work_done(&self, id: &ContractId, work: WorkDone) -> Result<()> {
        let cost = work.cost;
        let items = self.transition(id, "add_work", move |c| {
            c.add_work(work)?;
            Ok(c.work_items().len())
        })?;
        info!(
            target: "tally::service",
            contract_id = %id,
            cost = %cost,
            work_items = items,
            "Added work to contract"
        );
        Ok(())
    }

    /// Close an `ATWORK` contract and return its profit
    ///
    /// Profit is the quoted price minus the sum of all work costs. It may be
    /// negative, and equals the quoted price when no work was recorded.
    ///
    /// # Errors
    ///
    /// `NotFound` or `PreconditionFailed(NotAtWork)`. On any error the
    /// contract is left unchanged.
    pub fn finalize_contract(&self, id: &ContractId) -> Result<Money> {
        let (profit, work_costs, quoted_price) = self.transition(id, "finalize", |c| {
            let work_costs = c.total_work_cost()?;
            let quoted_price = *c.quoted_price();
            let profit = c.finalize()?;
            Ok((profit, work_costs, quoted_price))
        })?;
        info!(
            target: "tally::service",
            contract_id = %id,
            status = "FINALIZED",
            work_costs = %work_costs,
            quoted_price = %quoted_price,
            profit = %profit,
            "Finalized contract"
        );
        Ok(profit)
    }

    fn transition<T>(
        &self,
        id: &ContractId,
        operation: &'static str,
        f: impl FnOnce(&mut Contract) -> Result<T>,
    ) -> Result<T> {
        match modify(self.store.as_ref(), id, f) {
            None => {
                debug!(target: "tally::service", contract_id = %id, operation = operation, "Contract not found");
                Err(Error::NotFound { id: id.clone() })
            }
            Some(Err(e)) => {
                debug!(target: "tally::service", contract_id = %id, operation = operation, error = %e, "Transition rejected");
                Err(e)
            }
            Some(Ok(value)) => Ok(value),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of one contract
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn find(&self, id: &ContractId) -> Result<Contract> {
        self.store.get(id).ok_or_else(|| {
            debug!(target: "tally::service", contract_id = %id, operation = "find", "Contract not found");
            Error::NotFound { id: id.clone() }
        })
    }

    /// Snapshots of the requested contracts
    ///
    /// Missing ids are reported, not treated as errors. Duplicate ids are
    /// looked up once; results keep the order of first request.
    pub fn find_many_by_ids(&self, ids: &[ContractId]) -> FoundMany {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut result = FoundMany::default();
        for id in ids {
            if !seen.insert(id) {
                continue;
            }
            match self.store.get(id) {
                Some(contract) => result.found.push(contract),
                None => result.missing.push(id.clone()),
            }
        }
        if !result.is_complete() {
            debug!(
                target: "tally::service",
                requested = seen.len(),
                missing = result.missing.len(),
                "Some contracts not found"
            );
        }
        result
    }

    /// Snapshots of every contract the filter admits, ordered by id
    pub fn find_many_by_filter(&self, filter: &ContractFilter) -> Vec<Contract> {
        self.store.scan(&|c| filter.matches(c))
    }
}
