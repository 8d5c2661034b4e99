use clap::{Args, Subcommand};

use super::name_parser;

#[derive(Subcommand)]
#[command(about = "Create, get, and list schema snapshots")]
pub enum Snapshot {
    Create(Create),
    #[command(alias = "ls")]
    List(List),
    #[command(alias = "get")]
    Show(Show),
}

/// Create a new schema snapshot for a database branch.
#[derive(Args)]
pub struct Create {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,

    /// Name of the branch.
    #[arg(index = 2, value_name = "BRANCH", value_parser = name_parser())]
    pub branch: String,
}

/// List all schema snapshots for a database branch.
#[derive(Args)]
pub struct List {
    /// Name of the database.
    #[arg(index = 1, value_name = "DATABASE", value_parser = name_parser())]
    pub database: String,

    /// Name of the branch.
    #[arg(index = 2, value_name = "BRANCH", value_parser = name_parser())]
    pub branch: String,
}

/// Show a specific schema snapshot.
#[derive(Args)]
pub struct Show {
    /// ID of the schema snapshot.
    #[arg(index = 1, value_name = "SNAPSHOT_ID", value_parser = name_parser())]
    pub id: String,
}
