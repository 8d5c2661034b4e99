use clap::{Args, Subcommand};

use super::name_parser;

#[derive(Subcommand)]
#[command(about = "Create, read, delete, and list databases")]
pub enum Database {
    Create(Create),
    #[command(alias = "ls")]
    List(List),
    #[command(alias = "get")]
    Show(Show),
    #[command(alias = "rm")]
    Delete(Delete),
}

/// Create a database.
#[derive(Args)]
pub struct Create {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,

    /// Notes for the database.
    #[arg(long)]
    pub notes: Option<String>,

    /// Region for the database.
    #[arg(long)]
    pub region: Option<String>,
}

/// List databases.
#[derive(Args)]
pub struct List;

/// Retrieve information about a database.
#[derive(Args)]
pub struct Show {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,
}

/// Delete a database.
///
/// The command asks you to type the name of the database to confirm the operation when you run the command without the --force option.
#[derive(Args)]
pub struct Delete {
    /// Name of the database to delete.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,

    /// Delete the database without confirmation.
    #[arg(long, short = 'f')]
    pub force: bool,
}
