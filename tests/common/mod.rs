//! Shared helpers for HTTP integration tests

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use person_api::http_server::{HttpServer, ServerConfig};
use person_api::store::{InMemoryPersonStore, PersonStore};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

/// Router over the seeded store, docs served from `docs_dir`
pub fn seeded_app(docs_dir: &Path) -> Router {
    app_with_store(docs_dir, Arc::new(InMemoryPersonStore::seeded()))
}

/// Router over a caller-provided store
pub fn app_with_store(docs_dir: &Path, store: Arc<dyn PersonStore>) -> Router {
    let config = ServerConfig {
        docs_dir: docs_dir.to_path_buf(),
        ..Default::default()
    };
    HttpServer::with_store(config, store).router()
}

/// Send one request; returns status, content type and raw body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let body = match body {
        Some(b) => Body::from(b.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, bytes.to_vec())
}

/// Send a GET and return the status and `Location` header
pub async fn get_location(app: &Router, uri: &str) -> (StatusCode, Option<String>) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string());

    (response.status(), location)
}

/// Send one request and parse the body as JSON
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let (status, _, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
