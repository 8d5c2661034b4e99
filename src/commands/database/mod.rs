//! Commands operating on databases.
use anyhow::Result;

use crate::{
    args::database::Database,
    commands::{Command, CommandWithOutputExt, TryFromArgs},
    config::Config,
    formatting::Format,
};

pub mod create;
pub mod delete;
pub mod list;
pub mod show;

pub fn command_from_args(
    args: Database,
    config: &Config,
    format: Format,
) -> Result<Box<dyn Command>> {
    match args {
        Database::Create(create_args) => {
            create::Create::try_from_args(create_args, config)?.with_print_to_stdout(format)
        }
        Database::List(list_args) => {
            list::List::try_from_args(list_args, config)?.with_print_to_stdout(format)
        }
        Database::Show(show_args) => {
            show::Show::try_from_args(show_args, config)?.with_print_to_stdout(format)
        }
        Database::Delete(delete_args) => {
            delete::Delete::try_from_args(delete_args, config)?.with_print_to_stdout(format)
        }
    }
}
