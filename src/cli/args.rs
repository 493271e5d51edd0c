//! CLI argument definitions using clap
//!
//! Commands:
//! - person-api serve [--config <path>] [--host <h>] [--port <p>] [--docs-dir <dir>]
//! - person-api docs [--out <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Person API - CRUD over an in-memory person collection
#[derive(Parser, Debug)]
#[command(name = "person-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write the API docs and start the HTTP server
    Serve(ServeArgs),

    /// Write swagger.json and swagger.yaml, then exit
    Docs {
        /// Output directory
        #[arg(long, default_value = "/tmp/docs")]
        out: PathBuf,
    },
}

/// Flags for `serve`; each one overrides the config file
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory the spec files are written to and served from
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The requested command, `serve` with defaults if none was given
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["person-api"]).unwrap();
        assert_eq!(cli.into_command(), Command::Serve(ServeArgs::default()));
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "person-api",
            "serve",
            "--port",
            "9000",
            "--docs-dir",
            "/srv/docs",
        ])
        .unwrap();

        match cli.into_command() {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.docs_dir, Some(PathBuf::from("/srv/docs")));
                assert_eq!(args.host, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_docs_default_out() {
        let cli = Cli::try_parse_from(["person-api", "docs"]).unwrap();
        assert_eq!(
            cli.into_command(),
            Command::Docs {
                out: PathBuf::from("/tmp/docs")
            }
        );
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["person-api", "serve", "--port", "http"]).is_err());
    }
}
