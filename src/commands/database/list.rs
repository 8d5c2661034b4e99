//! Command to list all databases of the organization.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::ListDatabasesRequest,
    args::database,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::DatabaseLister,
    interaction::{Interaction, SpinnerInteraction},
    models::{Database, display_timestamp},
    table::Table,
};

pub struct List {
    organization: String,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    database_lister: Box<dyn DatabaseLister + Send + Sync>,
}

impl TryFromArgs<database::List> for List {
    fn try_from_args(_: database::List, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),

            interaction: Box::new(Interaction::new()),
            database_lister: Box::new(config.new_client()?),
        })
    }
}

/// Result of the list command.
///
/// We're using a newtype pattern to wrap the vector of databases.
/// In JSON mode it's serialized as a plain array, even when it's empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListResult(Vec<Database>);

impl From<&ListResult> for Table {
    fn from(value: &ListResult) -> Self {
        Table::from_iter(
            &value.0,
            &[
                ("NAME", |d: &Database| d.name.clone()),
                ("NOTES", |d: &Database| d.notes.clone()),
                ("CREATED AT", |d: &Database| {
                    display_timestamp(&d.created_at)
                }),
                ("UPDATED AT", |d: &Database| {
                    display_timestamp(&d.updated_at)
                }),
            ],
        )
    }
}

impl Display for ListResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No databases have been created yet.");
        }

        Table::from(self).fmt(f)
    }
}

#[async_trait]
impl CommandWithOutput for List {
    type Output = ListResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self
            .interaction
            .start_spinner("Fetching databases...".to_string())?;

        let databases = self
            .database_lister
            .list_databases(ListDatabasesRequest {
                organization: self.organization.clone(),
            })
            .await?;

        Ok(ListResult(databases))
    }
}
