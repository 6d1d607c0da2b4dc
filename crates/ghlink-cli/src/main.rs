use ghlink_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::{error_message, CliCommand};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging as early as possible; stdout stays reserved for the URL.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}
