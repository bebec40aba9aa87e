//! The Executor - single entry point to Tally's engine.
//!
//! The Executor is a stateless dispatcher that routes commands to their
//! handlers and converts results to outputs.

use std::sync::Arc;

use tally_engine::ContractService;
use tracing::{debug, warn};

use crate::handlers::{contract, query};
use crate::{Command, Error, Output, Response, Result};

/// The command executor - single entry point to Tally's engine.
///
/// The Executor is **stateless**: it holds a reference to the contract
/// service but maintains no state of its own. All state lives in the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use tally_executor::{Command, Executor};
/// use tally_engine::ContractService;
///
/// let executor = Executor::new(ContractService::ephemeral());
///
/// // Single command execution
/// let result = executor.execute(Command::PromoteQuote {
///     contract_id: "Bogus".into(),
/// });
///
/// // Batch execution
/// let results = executor.execute_many(vec![cmd1, cmd2]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    service: Arc<ContractService>,
}

impl Executor {
    /// Create a new executor wrapping a contract service.
    pub fn new(service: ContractService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Create an executor sharing an existing service.
    pub fn from_shared(service: Arc<ContractService>) -> Self {
        Self { service }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let result = self.dispatch(cmd);
        match &result {
            Err(Error::Validation { errors }) => {
                debug!(target: "tally::executor", command = name, errors = errors.len(), "Validation failed");
            }
            Err(Error::Internal { reason }) => {
                warn!(target: "tally::executor", command = name, reason = %reason, "Internal error");
            }
            _ => {}
        }
        result
    }

    fn dispatch(&self, cmd: Command) -> Result<Output> {
        let service = self.service.as_ref();
        match cmd {
            Command::NewQuote {
                customer_name,
                description_of_work_requested,
                quoted_price,
            } => contract::new_quote(
                service,
                customer_name,
                description_of_work_requested,
                quoted_price,
            ),
            Command::PromoteQuote { contract_id } => contract::promote_quote(service, contract_id),
            Command::AddWorkDone { contract_id, work } => {
                contract::add_work_done(service, contract_id, work)
            }
            Command::FinalizeContract { contract_id } => {
                contract::finalize_contract(service, contract_id)
            }
            Command::Find {
                contract_id,
                include,
            } => query::find(service, contract_id, include),
            Command::FindMany {
                contract_ids,
                filter,
                include,
            } => query::find_many(service, contract_ids, filter, include),
        }
    }

    /// Execute a single command and wrap the outcome in a response envelope.
    ///
    /// Never fails: every error becomes a non-OK envelope.
    pub fn respond(&self, cmd: Command) -> Response {
        Response::from_result(self.execute(cmd))
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Get a reference to the underlying service.
    ///
    /// This is an escape hatch for advanced use cases.
    pub fn service(&self) -> &Arc<ContractService> {
        &self.service
    }
}
