//! CLI module for the person API
//!
//! Provides command-line interface for:
//! - serve: Write docs and run the HTTP server (default)
//! - docs: Write the API docs and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{docs, load_config_file, resolve_config, run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse the process arguments and run the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.into_command())
}
