use clap::{Args, Subcommand};

use super::name_parser;

#[derive(Subcommand)]
#[command(about = "Create, delete, and list branches")]
pub enum Branch {
    Create(Create),
    #[command(alias = "ls")]
    List(List),
    #[command(alias = "rm")]
    Delete(Delete),
}

/// Create a new branch from a database.
#[derive(Args)]
pub struct Create {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,

    /// Name of the branch to create.
    #[arg(index = 2, value_name = "BRANCH", value_parser = name_parser())]
    pub branch: String,

    /// Parent branch to create the branch from.
    #[arg(long, value_parser = name_parser())]
    pub from: Option<String>,

    /// Notes for the branch.
    #[arg(long)]
    pub notes: Option<String>,
}

/// List all branches of a database.
#[derive(Args)]
pub struct List {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,
}

/// Delete a branch from a database.
///
/// The command asks you to type the name of the branch to confirm the operation when you run the command without the --force option.
#[derive(Args)]
pub struct Delete {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,

    /// Name of the branch to delete.
    #[arg(index = 2, value_name = "BRANCH", value_parser = name_parser())]
    pub branch: String,

    /// Delete the branch without confirmation.
    #[arg(long, short = 'f')]
    pub force: bool,
}
