//! Commands operating on schema snapshots.
use anyhow::Result;

use crate::{
    args::snapshot::Snapshot,
    commands::{Command, CommandWithOutputExt, TryFromArgs},
    config::Config,
    formatting::Format,
};

pub mod create;
pub mod list;
pub mod show;

pub fn command_from_args(
    args: Snapshot,
    config: &Config,
    format: Format,
) -> Result<Box<dyn Command>> {
    match args {
        Snapshot::Create(create_args) => {
            create::Create::try_from_args(create_args, config)?.with_print_to_stdout(format)
        }
        Snapshot::List(list_args) => {
            list::List::try_from_args(list_args, config)?.with_print_to_stdout(format)
        }
        Snapshot::Show(show_args) => {
            show::Show::try_from_args(show_args, config)?.with_print_to_stdout(format)
        }
    }
}
