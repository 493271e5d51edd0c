//! person-api - CRUD over an in-memory person collection, with Swagger docs

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod openapi;
pub mod store;
