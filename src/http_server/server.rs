//! # HTTP Server
//!
//! Main HTTP server combining the person and documentation routers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::observability::Event;
use crate::store::{InMemoryPersonStore, PersonStore};

use super::config::ServerConfig;
use super::docs_routes::{docs_routes, swagger_routes, DocsState};
use super::person_routes::{person_routes, PersonState};

/// HTTP server for the person API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and seed data
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server over the seeded in-memory store
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryPersonStore::seeded()))
    }

    /// Create a new HTTP server over an existing store
    pub fn with_store(config: ServerConfig, store: Arc<dyn PersonStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, store: Arc<dyn PersonStore>) -> Router {
        let person_state = Arc::new(PersonState::new(store));
        let docs_state = Arc::new(DocsState::new(config.docs_dir.clone(), config.spec_url()));

        Router::new()
            .merge(person_routes(person_state))
            .merge(docs_routes(docs_state.clone()))
            .merge(swagger_routes(docs_state))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener. Separate from [`serve`](Self::serve) so bind
    /// failures surface before anything else happens.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(event = Event::Serving.as_str(), %addr);
        info!("Swagger UI: http://{}/swagger/index.html", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }

    /// Bind and serve until `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
