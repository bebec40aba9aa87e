//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on service state).

use serde::{Deserialize, Serialize};
use tally_core::{ContractId, Money};

use crate::types::*;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// | Command | Output |
/// |---------|--------|
/// | `NewQuote` | `ContractId` |
/// | `PromoteQuote`, `AddWorkDone` | `Unit` |
/// | `FinalizeContract` | `Profit` |
/// | `Find` | `Contract` |
/// | `FindMany` | `Contracts` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Id of a newly created contract
    ContractId(ContractId),

    /// No return value
    Unit,

    /// Quoted price minus total work cost; may be negative
    Profit(Money),

    /// One contract snapshot
    Contract(ContractView),

    /// Bulk lookup result
    Contracts(ContractList),
}
