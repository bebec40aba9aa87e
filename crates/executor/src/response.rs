//! The uniform response envelope.
//!
//! Every command outcome, success or failure, can be folded into a
//! [`Response`]: a status code, a short reason, an optional advisory
//! warning, the list of error details, and the output on success.
//!
//! | Outcome | Code | Reason |
//! |---------|------|--------|
//! | success | `OK` | `Done` |
//! | bulk lookup with misses | `PARTIAL_OK` | `Done` |
//! | validation failure | `VALIDATION_ERR` | `Validation failed` |
//! | unknown contract | `NOTFOUND` | `Notfound` |
//! | status forbids transition | `FAILED` | `Precondition not met` |
//! | internal error | `FAILED` | `Internal error` |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ErrorDetail;
use crate::{Error, Output, Result};

/// Reason for a successful outcome
pub const REASON_DONE: &str = "Done";
/// Reason for a missing contract
pub const REASON_NOT_FOUND: &str = "Notfound";
/// Reason for a validation failure
pub const REASON_VALIDATION: &str = "Validation failed";
/// Reason for a business-rule violation
pub const REASON_PRECONDITION: &str = "Precondition not met";
/// Reason for an internal error
pub const REASON_INTERNAL: &str = "Internal error";

/// Outcome classification with stable wire numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    /// Unrecognized; only produced when decoding
    Unknown,
    /// Operation succeeded
    Ok,
    /// Operation succeeded for part of the request
    PartialOk,
    /// Request failed validation
    ValidationErr,
    /// Business rule violated
    Failed,
    /// Contract does not exist
    Notfound,
    /// Reserved, never produced
    NotAuthorized,
}

impl ResponseCode {
    /// Wire number of this code
    pub fn as_number(&self) -> i32 {
        match self {
            ResponseCode::Unknown => 0,
            ResponseCode::Ok => 1,
            ResponseCode::PartialOk => 2,
            ResponseCode::ValidationErr => 3,
            ResponseCode::Failed => 4,
            ResponseCode::Notfound => 5,
            ResponseCode::NotAuthorized => 6,
        }
    }

    /// Decode a wire number; `None` if it names no code
    pub fn from_number(value: i32) -> Option<Self> {
        match value {
            0 => Some(ResponseCode::Unknown),
            1 => Some(ResponseCode::Ok),
            2 => Some(ResponseCode::PartialOk),
            3 => Some(ResponseCode::ValidationErr),
            4 => Some(ResponseCode::Failed),
            5 => Some(ResponseCode::Notfound),
            6 => Some(ResponseCode::NotAuthorized),
            _ => None,
        }
    }

    /// Wire name, e.g. `VALIDATION_ERR`
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Unknown => "UNKNOWN",
            ResponseCode::Ok => "OK",
            ResponseCode::PartialOk => "PARTIAL_OK",
            ResponseCode::ValidationErr => "VALIDATION_ERR",
            ResponseCode::Failed => "FAILED",
            ResponseCode::Notfound => "NOTFOUND",
            ResponseCode::NotAuthorized => "NOT_AUTHORIZED",
        }
    }

    /// True for `OK` and `PARTIAL_OK`
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Ok | ResponseCode::PartialOk)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Outcome classification
    pub code: ResponseCode,
    /// Short human-readable reason
    pub reason: String,
    /// Advisory message that does not change the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Error details; empty on success
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    /// Payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
}

impl Response {
    fn new(code: ResponseCode, reason: &str) -> Self {
        Self {
            code,
            reason: reason.to_string(),
            warning: None,
            errors: Vec::new(),
            output: None,
        }
    }

    /// Fold a successful output into an envelope
    pub fn ok(output: Output) -> Self {
        let mut response = Response::new(ResponseCode::Ok, REASON_DONE);
        if let Output::Contracts(list) = &output {
            if !list.missing.is_empty() {
                let ids: Vec<&str> = list.missing.iter().map(|id| id.as_str()).collect();
                response.code = ResponseCode::PartialOk;
                response.warning = Some(format!("Contracts not found: {}", ids.join(", ")));
            }
        }
        response.output = Some(output);
        response
    }

    /// Fold an error into an envelope
    pub fn error(err: Error) -> Self {
        match err {
            Error::Validation { errors } => Response {
                errors,
                ..Response::new(ResponseCode::ValidationErr, REASON_VALIDATION)
            },
            Error::NotFound { id } => Response {
                errors: vec![ErrorDetail::new("Contract", "Not.Found").with_arg("id", id)],
                ..Response::new(ResponseCode::Notfound, REASON_NOT_FOUND)
            },
            Error::Failed { id, code, status } => Response {
                errors: vec![ErrorDetail::new(id, code).with_arg("status", status)],
                ..Response::new(ResponseCode::Failed, REASON_PRECONDITION)
            },
            Error::Internal { .. } => Response {
                errors: vec![ErrorDetail::new("Service", "Internal")],
                ..Response::new(ResponseCode::Failed, REASON_INTERNAL)
            },
        }
    }

    /// Fold any command result into an envelope
    pub fn from_result(result: Result<Output>) -> Self {
        match result {
            Ok(output) => Response::ok(output),
            Err(err) => Response::error(err),
        }
    }

    /// True for `OK` and `PARTIAL_OK`
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

impl From<Result<Output>> for Response {
    fn from(result: Result<Output>) -> Self {
        Response::from_result(result)
    }
}
