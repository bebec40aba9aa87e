//! Tri-state status filters for `findMany`

use serde::{Deserialize, Serialize};
use tally_core::{Contract, ContractStatus};

/// A yes / no / don't-care flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOption {
    /// Status must match
    Yes,
    /// Status must not match
    No,
    /// No constraint
    #[default]
    Unset,
}

impl BoolOption {
    /// True unless this flag is `Unset`
    pub fn is_set(&self) -> bool {
        !matches!(self, BoolOption::Unset)
    }

    fn admits(&self, holds: bool) -> bool {
        match self {
            BoolOption::Yes => holds,
            BoolOption::No => !holds,
            BoolOption::Unset => true,
        }
    }
}

/// Status flags combined with AND
///
/// `is_quote: Yes, is_finalized: No` selects contracts that are quotes and
/// not finalized. There is no OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractFilter {
    /// Constraint on `status == QUOTE`
    pub is_quote: BoolOption,
    /// Constraint on `status == ATWORK`
    pub is_at_work: BoolOption,
    /// Constraint on `status == FINALIZED`
    pub is_finalized: BoolOption,
}

impl ContractFilter {
    /// True if no flag is set
    pub fn is_unset(&self) -> bool {
        !(self.is_quote.is_set() || self.is_at_work.is_set() || self.is_finalized.is_set())
    }

    /// Check one contract against every flag
    pub fn matches(&self, contract: &Contract) -> bool {
        let status = contract.status();
        self.is_quote.admits(status == ContractStatus::Quote)
            && self.is_at_work.admits(status == ContractStatus::AtWork)
            && self.is_finalized.admits(status == ContractStatus::Finalized)
    }
}
