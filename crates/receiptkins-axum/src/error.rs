//! Axum-specific error types and mappings.
//!
//! Maps `RepositoryError` and request rejections to HTTP status codes and
//! a JSON body. Internal failures are logged here and replaced with a
//! generic message before they reach the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use receiptkins_core::RepositoryError;
use serde::Serialize;
use thiserror::Error;

/// Message sent to clients in place of internal error detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input). The message is shown to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found. The message is shown to the client.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error. The message is logged, never sent.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(detail) => {
                tracing::error!(target: "receiptkins.http", error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
