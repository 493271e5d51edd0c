//! person-api entry point
//!
//! Installs logging, hands off to the CLI, and exits non-zero on failure.

use person_api::{cli, observability};
use tracing::error;

fn main() {
    observability::init_logging();

    if let Err(e) = cli::run() {
        error!(code = e.code_str(), "{}", e);
        std::process::exit(1);
    }
}
