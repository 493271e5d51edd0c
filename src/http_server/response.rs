//! # Response Writer
//!
//! The single place JSON bodies are produced.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::observability::Event;

/// Body sent when a payload cannot be serialized
pub const INTERNAL_ERROR_BODY: &str = r#"{"errors":["Internal Server Error"]}"#;

const APPLICATION_JSON: &str = "application/json";

/// Serialize `payload` and respond with `status`.
///
/// Falls back to 500 with [`INTERNAL_ERROR_BODY`] if serialization fails.
pub fn write_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (status, [(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response(),
        Err(e) => {
            error!(event = Event::ResponseEncodeFailed.as_str(), error = %e);
            internal_error()
        }
    }
}

/// Fixed 500 response
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, APPLICATION_JSON)],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}
