//! CLI argument parsing layer.
//!
//! This module provides the CLI interface using clap derive macros.
//! It handles parsing command-line arguments and converting them into structured data types.
//! Missing or empty positional arguments are rejected here, before any configuration is loaded
//! or any request is sent.
//!
//! The business logic layer is [`crate::commands`], which receives these parsed arguments.

use clap::Subcommand;

pub mod branch;
mod cli;
pub mod database;
pub mod org;
pub mod snapshot;

pub use cli::{Cli, GlobalArgs};

/// Root command enum.
#[derive(Subcommand)]
pub enum PscaleArgs {
    #[command(subcommand, alias = "db")]
    Database(database::Database),
    #[command(subcommand)]
    Branch(branch::Branch),
    #[command(subcommand)]
    Snapshot(snapshot::Snapshot),
    #[command(subcommand)]
    Org(org::Org),
}

/// Value parser shared by every resource name argument.
fn name_parser() -> clap::builder::NonEmptyStringValueParser {
    clap::builder::NonEmptyStringValueParser::new()
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser, error::ErrorKind};

    use super::*;
    use crate::formatting::Format;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pscale").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_database_delete() {
        let cli = parse(&["database", "delete", "foo", "--force"]).unwrap();
        match cli.command {
            PscaleArgs::Database(database::Database::Delete(args)) => {
                assert_eq!(args.database, "foo");
                assert!(args.force);
            }
            _ => panic!("expected database delete"),
        }
    }

    #[test]
    fn test_database_delete_alias_and_short_force() {
        let cli = parse(&["database", "rm", "foo", "-f"]).unwrap();
        match cli.command {
            PscaleArgs::Database(database::Database::Delete(args)) => {
                assert_eq!(args.database, "foo");
                assert!(args.force);
            }
            _ => panic!("expected database delete"),
        }
    }

    #[test]
    fn test_database_delete_requires_name() {
        let error = parse(&["database", "delete"]).err().unwrap();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_database_delete_rejects_empty_name() {
        let error = parse(&["database", "delete", ""]).err().unwrap();
        assert_eq!(error.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_snapshot_list_requires_two_arguments() {
        let error = parse(&["snapshot", "list"]).err().unwrap();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let error = parse(&["snapshot", "list", "foo"]).err().unwrap();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_snapshot_list_json() {
        let cli = parse(&["snapshot", "ls", "foo", "main", "--json"]).unwrap();
        assert_eq!(cli.global_args.format(), Format::Json);
        match cli.command {
            PscaleArgs::Snapshot(snapshot::Snapshot::List(args)) => {
                assert_eq!(args.database, "foo");
                assert_eq!(args.branch, "main");
            }
            _ => panic!("expected snapshot list"),
        }
    }

    #[test]
    fn test_output_flag() {
        let cli = parse(&["database", "list", "-o", "json"]).unwrap();
        assert_eq!(cli.global_args.format(), Format::Json);

        let cli = parse(&["database", "list"]).unwrap();
        assert_eq!(cli.global_args.format(), Format::Text);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        let error = parse(&["database", "list", "--json", "-o", "text"])
            .err()
            .unwrap();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_branch_create_from_parent() {
        let cli = parse(&["branch", "create", "foo", "dev", "--from", "main"]).unwrap();
        match cli.command {
            PscaleArgs::Branch(branch::Branch::Create(args)) => {
                assert_eq!(args.database, "foo");
                assert_eq!(args.branch, "dev");
                assert_eq!(args.from.as_deref(), Some("main"));
            }
            _ => panic!("expected branch create"),
        }
    }

    #[test]
    fn test_org_switch_without_argument() {
        let cli = parse(&["org", "switch"]).unwrap();
        assert!(matches!(
            cli.command,
            PscaleArgs::Org(org::Org::Switch(org::Switch { organization: None }))
        ));
    }

    #[test]
    fn test_global_org_flag() {
        let cli = parse(&["--org", "acme", "database", "list"]).unwrap();
        assert_eq!(cli.global_args.org.as_deref(), Some("acme"));
    }
}
