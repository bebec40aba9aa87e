//! Command enum defining all Tally operations.
//!
//! Commands are the "instruction set" of Tally. Every operation the service
//! offers is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Unvalidated**: Fields carry raw boundary values; the executor validates
//!   them before anything touches the store

use serde::{Deserialize, Serialize};
use tally_core::MoneyParts;

use crate::types::*;

/// A command is a self-contained, serializable operation.
///
/// # Example
///
/// ```ignore
/// use tally_executor::{Command, MoneyParts};
///
/// let cmd = Command::NewQuote {
///     customer_name: "Jan Jansen".into(),
///     description_of_work_requested: "Paint the fence".into(),
///     quoted_price: Some(MoneyParts { currency_code: "EUR".into(), units: 2500, nanos: 0 }),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Create a contract in QUOTE.
    /// Returns: `Output::ContractId`
    NewQuote {
        #[serde(default)]
        customer_name: String,
        #[serde(default)]
        description_of_work_requested: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quoted_price: Option<MoneyParts>,
    },

    /// Accept a quote: QUOTE → ATWORK.
    /// Returns: `Output::Unit`
    PromoteQuote {
        #[serde(default)]
        contract_id: String,
    },

    /// Record work on an ATWORK contract.
    /// Returns: `Output::Unit`
    AddWorkDone {
        #[serde(default)]
        contract_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        work: Option<WorkRequest>,
    },

    /// Close an ATWORK contract.
    /// Returns: `Output::Profit`
    FinalizeContract {
        #[serde(default)]
        contract_id: String,
    },

    /// Look up one contract.
    /// Returns: `Output::Contract`
    Find {
        #[serde(default)]
        contract_id: String,
        #[serde(default)]
        include: Include,
    },

    /// Look up contracts by a list of ids, or by status filter.
    /// The two modes are mutually exclusive.
    /// Returns: `Output::Contracts`
    FindMany {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        contract_ids: Vec<String>,
        #[serde(default)]
        filter: ContractFilter,
        #[serde(default)]
        include: Include,
    },
}

impl Command {
    /// Returns the variant name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Command::NewQuote { .. } => "NewQuote",
            Command::PromoteQuote { .. } => "PromoteQuote",
            Command::AddWorkDone { .. } => "AddWorkDone",
            Command::FinalizeContract { .. } => "FinalizeContract",
            Command::Find { .. } => "Find",
            Command::FindMany { .. } => "FindMany",
        }
    }
}
