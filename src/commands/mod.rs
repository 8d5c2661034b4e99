//! This module contains business logic for the commands for the application.
//!
//! The main entry point is the [`command_from_args`] function which converts CLI arguments into a command.
use anyhow::Result;

use crate::{args::PscaleArgs, config::Config, formatting::Format};

pub use self::core::{Command, CommandWithOutput, CommandWithOutputExt, TryFromArgs};

pub mod branch;
mod confirmation;
mod core;
pub mod database;
pub mod org;
pub mod snapshot;

/// Convert CLI arguments into a command.
///
/// The command's dependencies are built from `config`, so a missing organization or missing
/// credentials fail here, before anything is sent to the API.
///
/// The output of the command will be formatted using the provided format and printed to stdout.
pub fn command_from_args(
    args: PscaleArgs,
    config: &Config,
    format: Format,
) -> Result<Box<dyn Command>> {
    match args {
        PscaleArgs::Database(database_args) => {
            database::command_from_args(database_args, config, format)
        }
        PscaleArgs::Branch(branch_args) => branch::command_from_args(branch_args, config, format),
        PscaleArgs::Snapshot(snapshot_args) => {
            snapshot::command_from_args(snapshot_args, config, format)
        }
        PscaleArgs::Org(org_args) => org::command_from_args(org_args, config, format),
    }
}
