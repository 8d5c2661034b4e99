use clap::{Args, Subcommand};

use super::name_parser;

#[derive(Subcommand)]
#[command(about = "Modify and manage organization options")]
pub enum Org {
    Show(Show),
    Switch(Switch),
}

/// Display the currently active organization.
#[derive(Args)]
pub struct Show;

/// Switch the currently active organization.
///
/// Without an organization name, the command lets you pick one of the organizations you have access to.
#[derive(Args)]
pub struct Switch {
    /// Name of the organization to switch to.
    #[arg(index = 1, value_name = "ORGANIZATION", value_parser = name_parser())]
    pub organization: Option<String>,
}
