//! Error types for the greeting function.
//!
//! Every way a request can be rejected is named here, so the HTTP handler
//! and the direct-invoke handler map the same failure to the same
//! `errorType` without relying on the runtime's unhandled-error path.

use lambda_http::http::StatusCode;
use lambda_runtime::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// A rejected greeting request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GreetingError {
    /// The body is not a JSON document, or is JSON but not an object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// A known field is present with the wrong type or an out-of-range value
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
    /// The trigger delivered a method other than POST
    #[error("Method {0} is not allowed, use POST")]
    MethodNotAllowed(String),
}

impl GreetingError {
    /// Stable name of the error kind, reported as `errorType`.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "InvalidBody",
            Self::InvalidField { .. } => "InvalidField",
            Self::MethodNotAllowed(_) => "MethodNotAllowed",
        }
    }

    /// HTTP status the error maps to at the boundary.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::InvalidField { .. } => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<GreetingError> for Diagnostic {
    fn from(error: GreetingError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}

/// JSON body returned alongside a non-2xx status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub error_message: String,
}

impl From<&GreetingError> for ErrorResponse {
    fn from(error: &GreetingError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}
