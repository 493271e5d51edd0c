//! # Person API HTTP Server Module
//!
//! Combines the person and documentation routers into one Axum server.
//!
//! # Endpoints
//!
//! - `GET /persons` - List all persons
//! - `POST /persons` - Add a person
//! - `PUT /persons/id/{id}` - Edit a person
//! - `DELETE /persons/id/{id}` - Delete a person
//! - `/docs/swagger.{json,yaml}` - Generated API spec
//! - `/swagger/*` - Swagger UI

pub mod config;
pub mod docs_routes;
pub mod errors;
pub mod person_routes;
pub mod response;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{write_json, INTERNAL_ERROR_BODY};
pub use server::HttpServer;
