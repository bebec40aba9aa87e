//! Types used by commands and outputs.
//!
//! Contract views are detached snapshots shaped by an [`Include`] selector;
//! [`WorkRequest`] is the boundary form of a work item before validation.

use serde::{Deserialize, Serialize};
use tally_core::{Contract, ContractId, ContractStatus, Money, MoneyParts, WorkDone};

// Re-exported so callers build filters without importing tally-engine
pub use tally_engine::{BoolOption, ContractFilter};

/// Which sections of a contract a lookup returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Include {
    /// Quote and work items
    #[default]
    Both,
    /// Quote only
    QuoteOnly,
    /// Work items only
    WorkOnly,
    /// Neither: id and status only
    IdOnly,
}

impl Include {
    fn quote(&self) -> bool {
        matches!(self, Include::Both | Include::QuoteOnly)
    }

    fn work(&self) -> bool {
        matches!(self, Include::Both | Include::WorkOnly)
    }
}

/// The quote section of a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteView {
    /// What the customer asked for
    pub description_of_work_requested: String,
    /// Customer full name
    pub customer_name: String,
    /// Agreed price
    pub quoted_price: Money,
}

/// Read-only snapshot of a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractView {
    /// Contract id
    pub id: ContractId,
    /// Status at the time of the lookup
    pub status: ContractStatus,
    /// Quote section, absent if not included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteView>,
    /// Work items in insertion order, absent if not included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<Vec<WorkDone>>,
}

impl ContractView {
    /// Project a contract through an include selector
    pub fn project(contract: &Contract, include: Include) -> Self {
        Self {
            id: contract.id().clone(),
            status: contract.status(),
            quote: include.quote().then(|| QuoteView {
                description_of_work_requested: contract.description_of_work_requested().to_string(),
                customer_name: contract.customer_name().to_string(),
                quoted_price: *contract.quoted_price(),
            }),
            work: include.work().then(|| contract.work_items().to_vec()),
        }
    }
}

/// Result of a bulk lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractList {
    /// Contracts found
    pub contracts: Vec<ContractView>,
    /// Requested ids that matched nothing (id mode only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<ContractId>,
}

/// A work item as submitted, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkRequest {
    /// What was done
    #[serde(default)]
    pub description: String,
    /// What it cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<MoneyParts>,
}
