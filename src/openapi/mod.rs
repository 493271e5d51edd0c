//! # API Documentation
//!
//! Builds the Swagger 2.0 document describing the person endpoints and
//! writes it to disk as `swagger.json` and `swagger.yaml`, the two files the
//! `/docs` routes serve.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// File name of the JSON document
pub const SWAGGER_JSON: &str = "swagger.json";

/// File name of the YAML document
pub const SWAGGER_YAML: &str = "swagger.yaml";

/// Errors while writing the documents
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for docs generation
pub type DocsResult<T> = Result<T, DocsError>;

/// The full Swagger 2.0 document for the API
pub fn api_spec() -> Value {
    json!({
        "swagger": "2.0",
        "info": {
            "title": "Person API",
            "description": "This is an OpenAPI specification of Person API.",
            "contact": {
                "name": "API Support",
                "url": "https://github.com/kucinghitam13",
                "email": "dika.adhitama@gmail.com"
            },
            "version": env!("CARGO_PKG_VERSION")
        },
        "host": "localhost:8080",
        "basePath": "/",
        "schemes": ["http"],
        "paths": paths(),
        "definitions": definitions()
    })
}

fn id_param() -> Value {
    json!({
        "type": "string",
        "description": "Person ID.",
        "name": "id",
        "in": "path",
        "required": true
    })
}

fn body_param(schema: &str) -> Value {
    json!({
        "description": "Request payload.",
        "name": "body",
        "in": "body",
        "required": true,
        "schema": { "$ref": format!("#/definitions/{}", schema) }
    })
}

fn success(schema: &str) -> Value {
    json!({
        "description": "Success",
        "schema": { "$ref": format!("#/definitions/{}", schema) }
    })
}

fn paths() -> Value {
    let server_error = json!({ "description": "Something went wrong" });
    let bad_request = json!({ "description": "Bad request" });
    let not_found = json!({ "description": "Person not found" });

    json!({
        "/persons": {
            "get": {
                "description": "Get list of persons saved in db.",
                "produces": ["application/json"],
                "tags": ["persons"],
                "summary": "Get list of persons.",
                "responses": {
                    "201": success("model.GetPersonsResponse"),
                    "500": server_error
                }
            },
            "post": {
                "description": "Add person to db.",
                "consumes": ["application/json"],
                "produces": ["application/json"],
                "tags": ["persons"],
                "summary": "Add person.",
                "parameters": [body_param("model.AddPersonRequest")],
                "responses": {
                    "200": success("model.AddPersonResponse"),
                    "400": bad_request,
                    "500": server_error
                }
            }
        },
        "/persons/id/{id}": {
            "put": {
                "description": "Edit existing person in db.",
                "consumes": ["application/json"],
                "produces": ["application/json"],
                "tags": ["persons"],
                "summary": "Edit person.",
                "parameters": [id_param(), body_param("model.EditPersonRequest")],
                "responses": {
                    "200": success("model.EditPersonResponse"),
                    "400": bad_request,
                    "404": not_found,
                    "500": server_error
                }
            },
            "delete": {
                "description": "Delete existing person in db.",
                "produces": ["application/json"],
                "tags": ["persons"],
                "summary": "Delete person.",
                "parameters": [id_param()],
                "responses": {
                    "200": success("model.DeletePersonResponse"),
                    "400": bad_request,
                    "404": not_found,
                    "500": server_error
                }
            }
        }
    })
}

fn definitions() -> Value {
    let request = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "example": "dika" },
            "age": { "type": "integer", "example": 24 },
            "address": { "type": "string", "example": "Depok" }
        }
    });
    let envelope = json!({
        "type": "object",
        "properties": {
            "operation": { "type": "string" },
            "success": { "type": "boolean" },
            "person": { "$ref": "#/definitions/model.Person" }
        }
    });

    json!({
        "model.Person": {
            "type": "object",
            "properties": {
                "id": { "type": "integer", "example": 2 },
                "name": { "type": "string", "example": "dika" },
                "age": { "type": "integer", "example": 24 },
                "address": { "type": "string", "example": "Depok" }
            }
        },
        "model.GetPersonsResponse": {
            "type": "object",
            "properties": {
                "total": { "type": "integer", "example": 2 },
                "persons": {
                    "type": "array",
                    "items": { "$ref": "#/definitions/model.Person" }
                }
            }
        },
        "model.AddPersonRequest": request.clone(),
        "model.EditPersonRequest": request,
        "model.AddPersonResponse": envelope.clone(),
        "model.EditPersonResponse": envelope.clone(),
        "model.DeletePersonResponse": envelope
    })
}

/// Render the document as pretty-printed JSON
pub fn to_json(spec: &Value) -> DocsResult<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// Render the document as YAML
pub fn to_yaml(spec: &Value) -> DocsResult<String> {
    Ok(serde_yaml::to_string(spec)?)
}

/// Write `swagger.json` and `swagger.yaml` into `dir`, creating it if needed.
///
/// Returns the paths written.
pub fn write_docs(dir: &Path) -> DocsResult<Vec<PathBuf>> {
    let spec = api_spec();

    fs::create_dir_all(dir).map_err(|source| DocsError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let outputs = [
        (dir.join(SWAGGER_JSON), to_json(&spec)?),
        (dir.join(SWAGGER_YAML), to_yaml(&spec)?),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (path, content) in outputs {
        fs::write(&path, content).map_err(|source| DocsError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "docs file written");
        written.push(path);
    }

    Ok(written)
}
