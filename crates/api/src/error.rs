//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, ApiError>`. Error bodies are always JSON with a
//! human-readable `detail` field, matching the contract the storefront
//! frontend already consumes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use vic_signature_core::ValidationError;

use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request payload violated field constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Order arithmetic check failed. The message is part of the API
    /// contract and must not change.
    #[error("Totals don't add up")]
    TotalsMismatch,

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error.
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TotalsMismatch => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let body = match &self {
            Self::Validation(err) => json!({ "detail": err.errors }),
            Self::TotalsMismatch => json!({ "detail": self.to_string() }),
            Self::Store(_) => json!({ "detail": "Internal server error" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
