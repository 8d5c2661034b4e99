//! Command to create a database.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::CreateDatabaseRequest,
    args::database,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::DatabaseCreator,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::Database,
};

pub struct Create {
    organization: String,
    database: String,
    notes: Option<String>,
    region: Option<String>,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    database_creator: Box<dyn DatabaseCreator + Send + Sync>,
}

impl TryFromArgs<database::Create> for Create {
    fn try_from_args(args: database::Create, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,
            notes: args.notes,
            region: args.region,

            interaction: Box::new(Interaction::new()),
            database_creator: Box::new(config.new_client()?),
        })
    }
}

/// The created database, serialized as is in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateResult(Database);

impl Display for CreateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Database {} was successfully created!",
            bold_blue(&self.0.name)
        )
    }
}

#[async_trait]
impl CommandWithOutput for Create {
    type Output = CreateResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Creating database {}...",
            bold_blue(&self.database)
        ))?;

        let database = self
            .database_creator
            .create_database(CreateDatabaseRequest {
                organization: self.organization.clone(),
                name: self.database.clone(),
                notes: self.notes.clone(),
                region: self.region.clone(),
            })
            .await?;

        Ok(CreateResult(database))
    }
}
