//! Typed error handling for store and handler operations
//!
//! Every failure the API can report is one of these variants. Errors are
//! handled locally in the handler layer and surfaced as a JSON body with
//! `success: false` and a human-readable `error` string; none are fatal to
//! the process.
//!
//! The HTTP contract predates this implementation: all responses, including
//! failures, use status 200, and the logical outcome is communicated only
//! through the `success` field. [`IntoResponse`] preserves that.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Errors produced by order store operations and request handling
#[derive(Debug, Clone, PartialEq)]
pub enum OrderError {
    /// Request body is missing the required email/dish shape
    InvalidPayload,

    /// Update targeted an email with no stored order
    EmailNotFound,

    /// Lookup by email found nothing
    NotFoundByEmail { email: String },

    /// Delete targeted an id or email with no stored order
    ///
    /// The key is kept as the client sent it so the error string echoes it
    /// back verbatim.
    NotFoundByKey { key: String },

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::InvalidPayload => {
                write!(f, "Must supply all properties of an order")
            }
            OrderError::EmailNotFound => {
                write!(f, "Email does not exist, cannot update")
            }
            OrderError::NotFoundByEmail { email } => {
                write!(f, "Could not find order with email: {}", email)
            }
            OrderError::NotFoundByKey { key } => {
                write!(f, "Could not find order with id={}", key)
            }
            OrderError::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::InvalidPayload => "INVALID_PAYLOAD",
            OrderError::EmailNotFound => "EMAIL_NOT_FOUND",
            OrderError::NotFoundByEmail { .. } => "NOT_FOUND",
            OrderError::NotFoundByKey { .. } => "NOT_FOUND",
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to the wire-format failure body
    pub fn to_body(&self) -> FailureBody {
        FailureBody {
            success: false,
            error: self.to_string(),
        }
    }
}

/// Failure body structure for HTTP responses
///
/// `success` is always `false` here; the field exists because clients
/// discriminate on it rather than on the status code.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.to_body())).into_response()
    }
}

/// A specialized Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;
