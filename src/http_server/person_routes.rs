//! Person HTTP Routes
//!
//! CRUD endpoints over the record store.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, put},
    Router,
};
use tracing::info;

use crate::store::{
    decode_mutation_request, GetPersonsResponse, Operation, PersonMutationRequest,
    PersonMutationResponse, PersonStore,
};

use super::errors::{ApiError, ApiResult};
use super::response::write_json;

// ==================
// Shared State
// ==================

/// Person state shared across handlers
pub struct PersonState {
    pub store: Arc<dyn PersonStore>,
}

impl PersonState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }
}

// ==================
// Person Routes
// ==================

/// Create person routes
pub fn person_routes(state: Arc<PersonState>) -> Router {
    Router::new()
        .route("/persons", get(list_persons_handler).post(add_person_handler))
        .route(
            "/persons/id/:id",
            put(edit_person_handler).delete(delete_person_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode a mutation body; any JSON error is the client's fault
fn decode_body(body: &[u8]) -> ApiResult<PersonMutationRequest> {
    decode_mutation_request(body).map_err(|e| ApiError::BadRequest(format!("invalid body: {}", e)))
}

/// Parse the `{id}` path segment as a base-10 i64
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|e| ApiError::BadRequest(format!("invalid id '{}': {}", raw, e)))
}

// ==================
// Handlers
// ==================

async fn list_persons_handler(State(state): State<Arc<PersonState>>) -> Response {
    let response = GetPersonsResponse::new(state.store.list());
    // 201 is what clients of this API have always received here
    write_json(StatusCode::CREATED, &response)
}

async fn add_person_handler(
    State(state): State<Arc<PersonState>>,
    body: Bytes,
) -> ApiResult<Response> {
    let request = decode_body(&body)?;
    let person = state.store.insert(request);
    info!(id = person.id, "person added");

    Ok(write_json(
        StatusCode::OK,
        &PersonMutationResponse::success(Operation::Add, person),
    ))
}

async fn edit_person_handler(
    State(state): State<Arc<PersonState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    let request = decode_body(&body)?;
    let id = parse_id(&raw_id)?;
    let person = state.store.update(id, request)?;
    info!(id, "person edited");

    Ok(write_json(
        StatusCode::OK,
        &PersonMutationResponse::success(Operation::Edit, person),
    ))
}

async fn delete_person_handler(
    State(state): State<Arc<PersonState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&raw_id)?;
    let person = state.store.delete(id)?;
    info!(id, "person deleted");

    Ok(write_json(
        StatusCode::OK,
        &PersonMutationResponse::success(Operation::Delete, person),
    ))
}
