use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::{
    api::ApiError,
    args::Cli,
    commands::command_from_args,
    config::{Config, ConfigOverrides},
    error::CliError,
    logging::setup_logging,
};

mod api;
mod args;
mod commands;
mod config;
mod dependencies;
mod error;
mod formatting;
mod interaction;
mod logging;
mod models;
mod table;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit with clap's own code before anything else runs.
    let cli = Cli::parse();

    setup_logging(cli.global_args.debug);

    exit_code(run(cli).await, &mut std::io::stderr())
}

/// Map the outcome of a command to the process exit code, reporting failures on `stderr`.
fn exit_code(result: Result<()>, stderr: &mut dyn Write) -> ExitCode {
    let error = match result {
        Ok(()) => return ExitCode::SUCCESS,
        Err(error) => error,
    };

    // Interrupting a prompt is not a failure.
    if CliError::is_interrupted(&error) {
        debug!("interrupted by the user");
        return ExitCode::SUCCESS;
    }

    let api_error = error.downcast_ref::<ApiError>();
    if let Some(ApiError::Response { status, code, .. }) = api_error {
        debug!(%status, code = %code, "API request failed");
    }

    // Nothing left to report to if stderr is gone.
    let _ = writeln!(stderr, "Error: {error:#}");
    ExitCode::FAILURE
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.global_args.format();
    let config = Config::load(ConfigOverrides::from(&cli.global_args))?;
    debug!(path = %config.path.display(), api_url = %config.api_url, "loaded configuration");

    let mut command = command_from_args(cli.command, &config, format)?;
    command.execute().await
}
