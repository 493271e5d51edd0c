//! HTTP Server Configuration
//!
//! Host, port, and where the API docs live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding swagger.json / swagger.yaml (default: "/tmp/docs")
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// URL the Swagger UI fetches the JSON spec from.
    /// Derived from the port when unset.
    #[serde(default)]
    pub docs_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("/tmp/docs")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            docs_dir: default_docs_dir(),
            docs_url: None,
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL of the JSON spec as seen by a browser on this machine
    pub fn spec_url(&self) -> String {
        self.docs_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}/docs/swagger.json", self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.docs_dir, PathBuf::from("/tmp/docs"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(9090);
        assert_eq!(config.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_spec_url() {
        assert_eq!(
            ServerConfig::default().spec_url(),
            "http://localhost:8080/docs/swagger.json"
        );

        let config = ServerConfig {
            docs_url: Some("http://example.test/spec.json".to_string()),
            ..Default::default()
        };
        assert_eq!(config.spec_url(), "http://example.test/spec.json");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 3000}"#).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.docs_url, None);
    }
}
