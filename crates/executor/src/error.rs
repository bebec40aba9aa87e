//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Uniform**: Every command reports failures through the same four variants

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field-level or rule-level problem
///
/// `location` names where the problem is (a request field path, a contract
/// id, or a fixed component name); `code` is machine readable; `args` carry
/// the values needed to render a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Request field path, contract id, or component
    pub location: String,
    /// Machine-readable error code, e.g. `Input.CustomerName.mandatory`
    pub code: String,
    /// Named arguments
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, String>,
}

impl ErrorDetail {
    /// Create a detail with no arguments
    pub fn new(location: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            code: code.into(),
            args: BTreeMap::new(),
        }
    }

    /// Add a named argument
    pub fn with_arg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }
}

/// Command execution errors.
///
/// # Categories
///
/// | Variant | Envelope code | Meaning |
/// |---------|---------------|---------|
/// | `Validation` | `VALIDATION_ERR` | Request malformed; state untouched |
/// | `NotFound` | `NOTFOUND` | No contract under the id |
/// | `Failed` | `FAILED` | Status forbids the transition |
/// | `Internal` | `FAILED` | Bug or invariant violation |
///
/// # Example
///
/// ```ignore
/// use tally_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::Failed { id, code, .. }) => {
///         println!("{} rejected: {}", id, code);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Request failed structural validation
    #[error("validation failed with {} error(s)", .errors.len())]
    Validation {
        /// Every violation found, in rule order
        errors: Vec<ErrorDetail>,
    },

    /// Contract not found
    #[error("contract not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// Business rule violated by the contract's current status
    #[error("precondition not met on {id}: {code} (status {status})")]
    Failed {
        /// Contract the transition was attempted on
        id: String,
        /// Rule code, e.g. `Not.a.quote`
        code: String,
        /// Status at the time of the attempt
        status: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description for logs
        reason: String,
    },
}

impl Error {
    /// A validation error with a single detail
    pub fn invalid(detail: ErrorDetail) -> Self {
        Error::Validation {
            errors: vec![detail],
        }
    }
}
