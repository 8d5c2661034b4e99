//! Commands managing the active organization.
use anyhow::Result;

use crate::{
    args::org::Org,
    commands::{Command, CommandWithOutputExt, TryFromArgs},
    config::Config,
    formatting::Format,
};

pub mod show;
pub mod switch;

pub fn command_from_args(args: Org, config: &Config, format: Format) -> Result<Box<dyn Command>> {
    match args {
        Org::Show(show_args) => {
            show::Show::try_from_args(show_args, config)?.with_print_to_stdout(format)
        }
        Org::Switch(switch_args) => {
            switch::Switch::try_from_args(switch_args, config)?.with_print_to_stdout(format)
        }
    }
}
