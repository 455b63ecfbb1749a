//! Typed error handling for the sale API
//!
//! Every collaborator failure is caught inside the handler that observed it
//! and converted to exactly one HTTP status + JSON error body. The taxonomy
//! mirrors the response contract:
//!
//! - [`ApiError::InvalidData`]: unusable entry or quantity data in a request
//! - [`ApiError::StockProblem`]: product/stock availability blocked the sale
//! - [`ApiError::NotFound`]: the requested sale does not exist
//! - [`ApiError::Internal`]: repository failure with no more specific mapping
//!
//! Coded errors serialize as `{"err": {"code": ..., "message": ...}}`; the
//! internal path carries a bare `{"message": ...}` with no code field.

use crate::config::StatusMap;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::fmt;

/// The error type for sale request handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Entry or quantity data in the request is unusable
    InvalidData { message: String },

    /// Product or stock availability blocked the sale
    StockProblem { message: String },

    /// The requested sale does not exist
    NotFound { message: String },

    /// Repository failure with no more specific mapping
    Internal { message: String },
}

impl ApiError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        ApiError::InvalidData {
            message: message.into(),
        }
    }

    pub fn stock_problem(message: impl Into<String>) -> Self {
        ApiError::StockProblem {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error under the given map
    pub fn status_code(&self, statuses: &StatusMap) -> StatusCode {
        match self {
            ApiError::InvalidData { .. } => statuses.invalid_data(),
            // Stock problems share the not-found status with missing sales.
            ApiError::StockProblem { .. } => statuses.not_found(),
            ApiError::NotFound { .. } => statuses.not_found(),
            ApiError::Internal { .. } => statuses.internal_server_error(),
        }
    }

    /// Get the machine-readable code, if this error category carries one
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            ApiError::InvalidData { .. } => Some("invalid_data"),
            ApiError::StockProblem { .. } => Some("stock_problem"),
            ApiError::NotFound { .. } => Some("not_found"),
            ApiError::Internal { .. } => None,
        }
    }

    /// Build the JSON error body
    pub fn body(&self) -> Value {
        match self.error_code() {
            Some(code) => json!({
                "err": {
                    "code": code,
                    "message": self.to_string(),
                }
            }),
            None => json!({ "message": self.to_string() }),
        }
    }

    /// Convert into an HTTP response under the given status map
    pub fn respond(&self, statuses: &StatusMap) -> Response {
        (self.status_code(statuses), Json(self.body())).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidData { message }
            | ApiError::StockProblem { message }
            | ApiError::NotFound { message }
            | ApiError::Internal { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}
