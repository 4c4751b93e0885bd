//! API error types and responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use cost_manager_core::{CostError, ErrorKind};
use cost_manager_store::StoreError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - missing or malformed input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Category is not one of the recognized categories.
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    /// Cost date outside the window in which new costs are accepted.
    #[error("date outside allowable range: {date}")]
    DateOutOfRange {
        /// The rejected date.
        date: DateTime<Utc>,
        /// First accepted instant.
        start: DateTime<Utc>,
        /// Last accepted instant.
        end: DateTime<Utc>,
    },

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Conflict - resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Route does not exist.
    #[error("endpoint not found")]
    UnknownEndpoint,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// Error class, which decides the HTTP status.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) | Self::InvalidCategory(_) | Self::DateOutOfRange { .. } => {
                ErrorKind::Validation
            }
            Self::NotFound(_) | Self::UnknownEndpoint => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Internal(_) => ErrorKind::Storage,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.kind().status_hint())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let (code, message, details) = match self {
            Self::BadRequest(msg) => ("bad_request", msg, None),
            Self::InvalidCategory(category) => (
                "invalid_category",
                format!("Invalid category: {category}"),
                Some(serde_json::json!({ "category": category })),
            ),
            Self::DateOutOfRange { date, start, end } => (
                "date_out_of_range",
                "date outside allowable range".to_string(),
                Some(serde_json::json!({
                    "date": rfc3339(date),
                    "start": rfc3339(start),
                    "end": rfc3339(end),
                })),
            ),
            Self::NotFound(msg) => ("not_found", msg, None),
            Self::Conflict(msg) => ("conflict", msg, None),
            Self::UnknownEndpoint => ("not_found", "Endpoint not found".to_string(), None),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ("internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<CostError> for ApiError {
    fn from(err: CostError) -> Self {
        match err {
            CostError::InvalidCategory(category) => Self::InvalidCategory(category),
            CostError::DateOutOfRange { date, start, end } => {
                Self::DateOutOfRange { date, start, end }
            }
            CostError::Storage(msg) => Self::Internal(msg),
            err => match err.kind() {
                ErrorKind::NotFound => Self::NotFound(err.to_string()),
                ErrorKind::Conflict => Self::Conflict(err.to_string()),
                ErrorKind::Storage => Self::Internal(err.to_string()),
                ErrorKind::Validation => Self::BadRequest(err.to_string()),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        CostError::from(err).into()
    }
}
