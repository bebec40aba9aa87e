//! Contract domain types
//!
//! This module defines the entity at the center of the service:
//! - ContractId: opaque identifier, generated as a UUID v4 string
//! - ContractStatus: lifecycle states with enforced transitions
//! - WorkDone: a costed work item, immutable once recorded
//! - Contract: the aggregate, holding the quote and its work items
//!
//! ## Status Transitions
//!
//! Valid transitions:
//! - Quote → AtWork (promote)
//! - AtWork → Finalized (finalize)
//! - Quote, AtWork → Abandoned (reserved, no operation triggers it)
//!
//! Finalized and Abandoned are terminal.

use crate::error::{Error, Result};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// ContractId
// =============================================================================

/// Opaque contract identifier
///
/// Generated ids are UUID v4 strings. Lookups accept any string, so a
/// caller-supplied id such as `"Bogus"` is a valid (if absent) key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the id is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ContractId {
    fn from(s: String) -> Self {
        ContractId(s)
    }
}

impl From<&str> for ContractId {
    fn from(s: &str) -> Self {
        ContractId(s.to_string())
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ContractStatus
// =============================================================================

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractStatus {
    /// Unaccepted price offer
    Quote,
    /// Quote accepted, work in progress
    AtWork,
    /// Work done, profit computed (terminal)
    Finalized,
    /// Reserved terminal state; no operation enters it
    Abandoned,
}

impl ContractStatus {
    /// Check if this is a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, ContractStatus::Finalized | ContractStatus::Abandoned)
    }

    /// Check if transition from current to target is valid
    pub fn can_transition_to(&self, target: ContractStatus) -> bool {
        matches!(
            (self, target),
            (ContractStatus::Quote, ContractStatus::AtWork)
                | (ContractStatus::AtWork, ContractStatus::Finalized)
                | (ContractStatus::Quote, ContractStatus::Abandoned)
                | (ContractStatus::AtWork, ContractStatus::Abandoned)
        )
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Quote => "QUOTE",
            ContractStatus::AtWork => "ATWORK",
            ContractStatus::Finalized => "FINALIZED",
            ContractStatus::Abandoned => "ABANDONED",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status guard that a transition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precondition {
    /// The contract must be in `Quote`
    NotAQuote,
    /// The contract must be in `AtWork`
    NotAtWork,
}

impl Precondition {
    /// Machine-readable error code reported to callers
    pub fn code(&self) -> &'static str {
        match self {
            Precondition::NotAQuote => "Not.a.quote",
            Precondition::NotAtWork => "Not.at.work",
        }
    }

    /// The status this guard requires
    pub fn required_status(&self) -> ContractStatus {
        match self {
            Precondition::NotAQuote => ContractStatus::Quote,
            Precondition::NotAtWork => ContractStatus::AtWork,
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// WorkDone
// =============================================================================

/// A unit of work recorded against a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDone {
    /// What it cost
    pub cost: Money,
    /// What was done
    pub description: String,
}

impl WorkDone {
    /// Create a work item
    pub fn new(cost: Money, description: impl Into<String>) -> Self {
        Self {
            cost,
            description: description.into(),
        }
    }
}

// =============================================================================
// Contract
// =============================================================================

/// The contract aggregate
///
/// Fields set at creation never change. Status only moves forward and work
/// items are append-only; both go through the guarded methods below.
/// Serialize-only: a contract is never rebuilt from outside data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    id: ContractId,
    status: ContractStatus,
    quoted_price: Money,
    description_of_work_requested: String,
    customer_name: String,
    work_items: Vec<WorkDone>,
}

impl Contract {
    /// Create a contract in `Quote` status
    pub fn new_quote(
        id: ContractId,
        customer_name: impl Into<String>,
        description_of_work_requested: impl Into<String>,
        quoted_price: Money,
    ) -> Self {
        Self {
            id,
            status: ContractStatus::Quote,
            quoted_price,
            description_of_work_requested: description_of_work_requested.into(),
            customer_name: customer_name.into(),
            work_items: Vec::new(),
        }
    }

    /// Contract id
    pub fn id(&self) -> &ContractId {
        &self.id
    }

    /// Current status
    pub fn status(&self) -> ContractStatus {
        self.status
    }

    /// Price quoted to the customer
    pub fn quoted_price(&self) -> &Money {
        &self.quoted_price
    }

    /// The currency every amount on this contract is in
    pub fn currency(&self) -> Currency {
        self.quoted_price.currency()
    }

    /// Description of the requested work
    pub fn description_of_work_requested(&self) -> &str {
        &self.description_of_work_requested
    }

    /// Customer full name
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Work items in the order they were added
    pub fn work_items(&self) -> &[WorkDone] {
        &self.work_items
    }

    /// Accept the quote: `Quote` → `AtWork`
    ///
    /// # Errors
    /// `PreconditionFailed(NotAQuote)` unless the status is `Quote`.
    pub fn promote(&mut self) -> Result<()> {
        self.require(Precondition::NotAQuote)?;
        self.transition_to(ContractStatus::AtWork);
        Ok(())
    }

    /// Append a work item; the contract must be `AtWork`
    ///
    /// # Errors
    /// - `PreconditionFailed(NotAtWork)` unless the status is `AtWork`
    /// - `CurrencyMismatch` if the cost is not in the contract's currency
    pub fn add_work(&mut self, work: WorkDone) -> Result<()> {
        self.require(Precondition::NotAtWork)?;
        if work.cost.currency() != self.currency() {
            return Err(Error::CurrencyMismatch {
                expected: self.currency(),
                actual: work.cost.currency(),
            });
        }
        self.work_items.push(work);
        Ok(())
    }

    /// Close the contract: `AtWork` → `Finalized`, returning the profit
    ///
    /// The profit is computed before the status changes, so a failed
    /// computation leaves the contract untouched.
    ///
    /// # Errors
    /// `PreconditionFailed(NotAtWork)` unless the status is `AtWork`.
    pub fn finalize(&mut self) -> Result<Money> {
        self.require(Precondition::NotAtWork)?;
        let profit = self.profit()?;
        self.transition_to(ContractStatus::Finalized);
        Ok(profit)
    }

    /// Sum of all work costs (zero in the contract currency if none)
    pub fn total_work_cost(&self) -> Result<Money> {
        Money::sum(self.currency(), self.work_items.iter().map(|w| &w.cost))
    }

    /// Quoted price minus total work cost; may be negative
    pub fn profit(&self) -> Result<Money> {
        self.quoted_price.checked_sub(&self.total_work_cost()?)
    }

    fn require(&self, rule: Precondition) -> Result<()> {
        if self.status != rule.required_status() {
            return Err(Error::PreconditionFailed {
                id: self.id.clone(),
                status: self.status,
                rule,
            });
        }
        Ok(())
    }

    fn transition_to(&mut self, target: ContractStatus) {
        debug_assert!(
            self.status.can_transition_to(target),
            "illegal transition {} -> {}",
            self.status,
            target
        );
        self.status = target;
    }
}
