//! # HTTP API Errors
//!
//! Every handler failure maps to exactly one status code. Client errors are
//! status-only; internal errors carry a fixed JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

use crate::store::StoreError;

use super::response::internal_error;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed body or path parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No person with this id
    #[error("Person not found: {0}")]
    NotFound(i64),

    /// Anything the client could not have caused
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(error = %self, "request failed");
        match self {
            ApiError::Internal(_) => internal_error(),
            other => other.status_code().into_response(),
        }
    }
}
