//! Documentation HTTP Routes
//!
//! `/docs/*` serves the generated spec files from disk and `/swagger/*`
//! serves the interactive UI that renders them.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::openapi::{self, SWAGGER_JSON, SWAGGER_YAML};

use super::errors::{ApiError, ApiResult};
use super::response::write_json;

const SWAGGER_INDEX: &str = "/swagger/index.html";

// ==================
// Shared State
// ==================

/// Docs state shared across handlers
pub struct DocsState {
    /// Directory holding the generated spec files
    pub docs_dir: PathBuf,
    /// URL the UI loads the JSON spec from
    pub spec_url: String,
}

impl DocsState {
    pub fn new(docs_dir: impl Into<PathBuf>, spec_url: impl Into<String>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            spec_url: spec_url.into(),
        }
    }
}

// ==================
// Routes
// ==================

/// Static spec files under `/docs`
pub fn docs_routes(state: Arc<DocsState>) -> Router {
    Router::new()
        .route("/docs/*filepath", get(spec_file_handler))
        .with_state(state)
}

/// Swagger UI under `/swagger`
pub fn swagger_routes(state: Arc<DocsState>) -> Router {
    Router::new()
        .route("/swagger", get(redirect_to_index))
        .route("/swagger/", get(redirect_to_index))
        .route("/swagger/*filepath", get(swagger_ui_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn spec_file_handler(
    State(state): State<Arc<DocsState>>,
    Path(filepath): Path<String>,
) -> ApiResult<Response> {
    let name = filepath.trim_start_matches('/');
    let content_type = match name {
        SWAGGER_JSON => "application/json",
        SWAGGER_YAML => "application/yaml",
        _ => return Ok(StatusCode::NOT_FOUND.into_response()),
    };

    let path = state.docs_dir.join(name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "spec file missing");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
        Err(e) => Err(ApiError::Internal(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

async fn redirect_to_index() -> Redirect {
    Redirect::permanent(SWAGGER_INDEX)
}

async fn swagger_ui_handler(
    State(state): State<Arc<DocsState>>,
    Path(filepath): Path<String>,
) -> Response {
    match filepath.trim_start_matches('/') {
        "index.html" => Html(swagger_ui_page(&state.spec_url)).into_response(),
        "doc.json" => write_json(StatusCode::OK, &openapi::api_spec()),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Swagger UI page pointed at `spec_url`
pub fn swagger_ui_page(spec_url: &str) -> String {
    // Escape for the single JS string literal the URL lands in
    let spec_url = spec_url.replace('\\', "\\\\").replace('"', "\\\"").replace('<', "\\u003c");

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Person API - Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
  <script>
    window.onload = function() {{
      window.ui = SwaggerUIBundle({{
        url: "{spec_url}",
        dom_id: "#swagger-ui",
        deepLinking: true,
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
        plugins: [SwaggerUIBundle.plugins.DownloadUrl],
        layout: "StandaloneLayout"
      }});
    }};
  </script>
</body>
</html>
"##
    )
}
