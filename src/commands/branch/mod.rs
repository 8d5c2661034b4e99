//! Commands operating on database branches.
use anyhow::Result;

use crate::{
    args::branch::Branch,
    commands::{Command, CommandWithOutputExt, TryFromArgs},
    config::Config,
    formatting::Format,
};

pub mod create;
pub mod delete;
pub mod list;

pub fn command_from_args(
    args: Branch,
    config: &Config,
    format: Format,
) -> Result<Box<dyn Command>> {
    match args {
        Branch::Create(create_args) => {
            create::Create::try_from_args(create_args, config)?.with_print_to_stdout(format)
        }
        Branch::List(list_args) => {
            list::List::try_from_args(list_args, config)?.with_print_to_stdout(format)
        }
        Branch::Delete(delete_args) => {
            delete::Delete::try_from_args(delete_args, config)?.with_print_to_stdout(format)
        }
    }
}
