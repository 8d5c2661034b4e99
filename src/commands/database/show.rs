//! Command to show a single database.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::GetDatabaseRequest,
    args::database,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::DatabaseGetter,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::{Database, display_timestamp},
    table::Table,
};

pub struct Show {
    organization: String,
    database: String,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    database_getter: Box<dyn DatabaseGetter + Send + Sync>,
}

impl TryFromArgs<database::Show> for Show {
    fn try_from_args(args: database::Show, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,

            interaction: Box::new(Interaction::new()),
            database_getter: Box::new(config.new_client()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowResult(Database);

impl From<&ShowResult> for Table {
    fn from(value: &ShowResult) -> Self {
        Table::from_iter(
            [&value.0],
            &[
                ("NAME", |d: &Database| d.name.clone()),
                ("NOTES", |d: &Database| d.notes.clone()),
                ("REGION", region_slug),
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

fn region_slug(database: &Database) -> String {
    match &database.region {
        Some(region) => region.slug.clone(),
        None => String::new(),
    }
}

impl Display for ShowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Table::from(self).fmt(f)
    }
}

#[async_trait]
impl CommandWithOutput for Show {
    type Output = ShowResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Fetching database {}...",
            bold_blue(&self.database)
        ))?;

        let database = self
            .database_getter
            .get_database(GetDatabaseRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
            })
            .await?;

        Ok(ShowResult(database))
    }
}
