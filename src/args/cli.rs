//! Root command for the CLI.
//!
//! The commands are defined in the [`PscaleArgs`](super::PscaleArgs) enum, the flags shared by every
//! command are defined in [`GlobalArgs`].
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::formatting::Format;

use super::PscaleArgs;

/// Manage databases, branches and schema snapshots.
#[derive(Parser)]
#[command(name = "pscale", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global_args: GlobalArgs,

    #[command(subcommand)]
    pub command: PscaleArgs,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Enable debug logging.
    ///
    /// Setting this flag will set the log level to debug and only show logs from this crate.
    /// The log level can also be set with the `PSCALE_LOG` environment variable.
    /// If the `PSCALE_LOG_ALL` environment variable is set, logs from all crates are shown.
    #[arg(global = true, hide = true, long, short = 'D', default_value = "false")]
    pub debug: bool,

    /// Show output as JSON. Shorthand for `--output json`.
    #[arg(global = true, long, conflicts_with = "format")]
    pub json: bool,

    /// Output format.
    #[arg(global = true, long = "output", short = 'o')]
    pub format: Option<Format>,

    /// The organization to use.
    #[arg(global = true, long, env = "PLANETSCALE_ORG")]
    pub org: Option<String>,

    /// Access token used to authenticate against the API.
    #[arg(
        global = true,
        hide = true,
        long,
        env = "PLANETSCALE_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// The ID of the service token to use for authenticating.
    #[arg(global = true, long, env = "PLANETSCALE_SERVICE_TOKEN_ID")]
    pub service_token_id: Option<String>,

    /// Service token to use for authenticating.
    #[arg(
        global = true,
        long,
        env = "PLANETSCALE_SERVICE_TOKEN",
        hide_env_values = true
    )]
    pub service_token: Option<String>,

    /// The base URL of the API.
    #[arg(global = true, long, env = "PLANETSCALE_API_URL")]
    pub api_url: Option<String>,

    /// Path of the configuration file.
    #[arg(global = true, long, env = "PSCALE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Output format selected by either `--json` or `--output`.
    pub fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            self.format.unwrap_or_default()
        }
    }
}
