//! CLI command implementations
//!
//! `serve` resolves config, writes the docs, binds, and runs until Ctrl-C.
//! `docs` only writes the docs.

use std::fs;
use std::path::Path;

use tokio::signal;
use tracing::{error, info, warn};

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::{log_event, Event};
use crate::openapi;

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Docs { out } => docs(&out),
    }
}

/// Load a JSON config file; missing keys take their defaults
pub fn load_config_file(path: &Path) -> CliResult<ServerConfig> {
    let content =
        fs::read_to_string(path).map_err(|e| CliError::config_unreadable(path, e))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Config file (if any) with command-line flags applied on top
pub fn resolve_config(args: &ServeArgs) -> CliResult<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(docs_dir) = &args.docs_dir {
        config.docs_dir = docs_dir.clone();
    }

    Ok(config)
}

/// Write swagger.json and swagger.yaml into `out`
pub fn docs(out: &Path) -> CliResult<()> {
    openapi::write_docs(out)?;
    info!(event = Event::DocsWritten.as_str(), dir = %out.display());
    Ok(())
}

/// Start the HTTP server
pub fn serve(args: ServeArgs) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = resolve_config(&args)?;
    let addr = config.socket_addr();
    info!(
        event = Event::ConfigLoaded.as_str(),
        %addr,
        docs_dir = %config.docs_dir.display()
    );

    // The API still works without docs, so a failed write is not fatal
    if let Err(e) = docs(&config.docs_dir) {
        warn!(event = Event::DocsFailed.as_str(), error = %e);
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let listener = server.bind().await.map_err(|source| {
            error!(event = Event::BindFailed.as_str(), %addr, error = %source);
            CliError::Bind {
                addr: addr.clone(),
                source,
            }
        })?;

        server.serve(listener, shutdown_signal()).await?;
        Ok::<_, CliError>(())
    })?;

    log_event(Event::ShutdownComplete);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C, serving until killed");
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
