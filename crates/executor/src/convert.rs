//! Error conversion from internal error types.
//!
//! This module provides conversions from domain errors to the executor's
//! [`Error`] type.

use crate::Error;
use tally_core::Error as CoreError;

/// Convert a domain error to an executor Error.
///
/// Not-found and precondition failures keep their details. Everything else
/// is prevented by validation before the engine is reached, so seeing one
/// here is a bug and maps to `Internal`.
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { id } => Error::NotFound { id: id.to_string() },

            CoreError::PreconditionFailed { id, status, rule } => Error::Failed {
                id: id.to_string(),
                code: rule.code().to_string(),
                status: status.as_str().to_string(),
            },

            other @ (CoreError::CurrencyMismatch { .. }
            | CoreError::InvalidAmount(_)
            | CoreError::DuplicateId { .. }
            | CoreError::InvalidInput(_)
            | CoreError::Io(_)) => Error::Internal {
                reason: other.to_string(),
            },
        }
    }
}

/// Convert a domain Result to an executor Result.
pub fn convert_result<T>(r: tally_core::Result<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}
