//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` logs them and exits non-zero.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::openapi::DocsError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing or invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Spec files could not be written
    #[error("Docs error: {0}")]
    Docs(#[from] DocsError),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Runtime or server I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Config file could not be read
    pub fn config_unreadable(path: &Path, e: io::Error) -> Self {
        Self::Config(format!("Failed to read config {}: {}", path.display(), e))
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => "PERSON_API_CLI_CONFIG_ERROR",
            Self::Docs(_) => "PERSON_API_CLI_DOCS_ERROR",
            Self::Bind { .. } => "PERSON_API_CLI_BIND_FAILED",
            Self::Io(_) => "PERSON_API_CLI_IO_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
