//! High-level typed wrapper for the Executor.
//!
//! The [`Tally`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```text
//! use tally_executor::Tally;
//!
//! let tally = Tally::open("/var/data/contracts")?;
//! let id = tally.new_quote("Jan Jansen", "Paint the fence", Money::eur(dec!(2500)))?;
//! tally.promote_quote(id.as_str())?;
//! tally.add_work_done(id.as_str(), "Sanding", Money::eur(dec!(1200)))?;
//! let profit = tally.finalize_contract(id.as_str())?;
//! ```

use std::path::Path;

use tally_core::{ContractId, Money, MoneyParts};
use tally_engine::ContractService;

use crate::convert::convert_result;
use crate::error::ErrorDetail;
use crate::types::{ContractFilter, ContractList, ContractView, Include, WorkRequest};
use crate::{Command, Error, Executor, Output, Result};

/// High-level typed wrapper for contract operations.
///
/// Every method builds a [`Command`], runs it through the executor, and
/// unpacks the expected [`Output`] variant.
#[derive(Debug, Clone)]
pub struct Tally {
    executor: Executor,
}

impl Tally {
    /// Open a service whose configuration lives in `dir`.
    ///
    /// The directory and a default `tally.toml` are created if missing.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let service = convert_result(ContractService::open(dir))?;
        Ok(Self::from_executor(Executor::new(service)))
    }

    /// In-memory service with default settings.
    pub fn ephemeral() -> Self {
        Self::from_executor(Executor::new(ContractService::ephemeral()))
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor) -> Self {
        Self { executor }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Create a quote and return its id.
    pub fn new_quote(
        &self,
        customer_name: &str,
        description_of_work_requested: &str,
        quoted_price: Money,
    ) -> Result<ContractId> {
        let parts = to_parts(&quoted_price, "quotedPrice", "Input.QuotedPrice.invalid")?;
        match self.executor.execute(Command::NewQuote {
            customer_name: customer_name.to_string(),
            description_of_work_requested: description_of_work_requested.to_string(),
            quoted_price: Some(parts),
        })? {
            Output::ContractId(id) => Ok(id),
            _ => Err(unexpected("NewQuote")),
        }
    }

    /// Accept a quote.
    pub fn promote_quote(&self, contract_id: &str) -> Result<()> {
        match self.executor.execute(Command::PromoteQuote {
            contract_id: contract_id.to_string(),
        })? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("PromoteQuote")),
        }
    }

    /// Record work done on a contract.
    pub fn add_work_done(&self, contract_id: &str, description: &str, cost: Money) -> Result<()> {
        let parts = to_parts(&cost, "work.cost", "Input.Work.Cost.invalid")?;
        match self.executor.execute(Command::AddWorkDone {
            contract_id: contract_id.to_string(),
            work: Some(WorkRequest {
                description: description.to_string(),
                cost: Some(parts),
            }),
        })? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("AddWorkDone")),
        }
    }

    /// Close a contract and return the profit made.
    pub fn finalize_contract(&self, contract_id: &str) -> Result<Money> {
        match self.executor.execute(Command::FinalizeContract {
            contract_id: contract_id.to_string(),
        })? {
            Output::Profit(profit) => Ok(profit),
            _ => Err(unexpected("FinalizeContract")),
        }
    }

    /// Full snapshot of one contract.
    pub fn find(&self, contract_id: &str) -> Result<ContractView> {
        self.find_with(contract_id, Include::Both)
    }

    /// Snapshot of one contract with selected sections.
    pub fn find_with(&self, contract_id: &str, include: Include) -> Result<ContractView> {
        match self.executor.execute(Command::Find {
            contract_id: contract_id.to_string(),
            include,
        })? {
            Output::Contract(view) => Ok(view),
            _ => Err(unexpected("Find")),
        }
    }

    /// Snapshots of the listed contracts; misses are reported, not errors.
    pub fn find_many(&self, contract_ids: &[&str]) -> Result<ContractList> {
        self.find_many_with(
            contract_ids.iter().map(|id| id.to_string()).collect(),
            ContractFilter::default(),
            Include::Both,
        )
    }

    /// Snapshots of every contract matching `filter`, ordered by id.
    pub fn find_matching(&self, filter: ContractFilter) -> Result<Vec<ContractView>> {
        Ok(self
            .find_many_with(Vec::new(), filter, Include::Both)?
            .contracts)
    }

    /// Bulk lookup with every option exposed.
    pub fn find_many_with(
        &self,
        contract_ids: Vec<String>,
        filter: ContractFilter,
        include: Include,
    ) -> Result<ContractList> {
        match self.executor.execute(Command::FindMany {
            contract_ids,
            filter,
            include,
        })? {
            Output::Contracts(list) => Ok(list),
            _ => Err(unexpected("FindMany")),
        }
    }
}

fn to_parts(money: &Money, location: &str, code: &str) -> Result<MoneyParts> {
    money.to_parts().map_err(|_| {
        Error::invalid(ErrorDetail::new(location, code).with_arg("amount", money.amount()))
    })
}

fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", command),
    }
}
