//! Axum-specific error types and mappings.
//!
//! Maps `RecipeError` and `UiError` to HTTP status codes and JSON bodies.
//! HTML pages never surface these: validation problems on the add form are
//! rendered inline by the view layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use compass_core::RecipeError;
use compass_ui::UiError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),
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
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<RecipeError> for HttpError {
    fn from(err: RecipeError) -> Self {
        if err.is_validation() {
            Self::BadRequest(err.to_string())
        } else {
            Self::NotFound(err.to_string())
        }
    }
}

impl From<UiError> for HttpError {
    fn from(err: UiError) -> Self {
        match err {
            UiError::UnknownChart(_) => Self::NotFound(err.to_string()),
            UiError::UnknownTab(_) => Self::BadRequest(err.to_string()),
        }
    }
}
