//! Command to delete a database.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::DeleteDatabaseRequest,
    args::database,
    commands::{CommandWithOutput, TryFromArgs, confirmation::require_typed_name},
    config::Config,
    dependencies::DatabaseDeleter,
    formatting::bold_blue,
    interaction::{InputPrompt, Interaction, SpinnerInteraction},
};

// Interaction dependencies for the delete command
pub trait DeleteInteraction: InputPrompt + SpinnerInteraction + Send + Sync {}
impl<T: InputPrompt + SpinnerInteraction + Send + Sync> DeleteInteraction for T {}

pub struct Delete {
    organization: String,
    database: String,
    force: bool,

    interaction: Box<dyn DeleteInteraction>,
    database_deleter: Box<dyn DatabaseDeleter + Send + Sync>,
}

impl TryFromArgs<database::Delete> for Delete {
    fn try_from_args(args: database::Delete, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,
            force: args.force,

            interaction: Box::new(Interaction::new()),
            database_deleter: Box::new(config.new_client()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    database: String,
}

impl Display for DeleteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Database {} was successfully deleted!",
            bold_blue(&self.database)
        )
    }
}

#[async_trait]
impl CommandWithOutput for Delete {
    type Output = DeleteResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        if !self.force {
            require_typed_name(self.interaction.as_ref(), "database", &self.database)?;
        }

        // When _spinner goes out of scope, the spinner will be stopped
        let _spinner = self.interaction.start_spinner(format!(
            "Deleting database {}...",
            bold_blue(&self.database)
        ))?;

        self.database_deleter
            .delete_database(DeleteDatabaseRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
            })
            .await?;

        Ok(DeleteResult {
            database: self.database.clone(),
        })
    }
}
