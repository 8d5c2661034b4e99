//! Command to delete a branch of a database.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::DeleteBranchRequest,
    args::branch,
    commands::{CommandWithOutput, TryFromArgs, confirmation::require_typed_name},
    config::Config,
    dependencies::BranchDeleter,
    formatting::bold_blue,
    interaction::{InputPrompt, Interaction, SpinnerInteraction},
};

// Interaction dependencies for the delete command
pub trait DeleteInteraction: InputPrompt + SpinnerInteraction + Send + Sync {}
impl<T: InputPrompt + SpinnerInteraction + Send + Sync> DeleteInteraction for T {}

pub struct Delete {
    organization: String,
    database: String,
    branch: String,
    force: bool,

    interaction: Box<dyn DeleteInteraction>,
    branch_deleter: Box<dyn BranchDeleter + Send + Sync>,
}

impl TryFromArgs<branch::Delete> for Delete {
    fn try_from_args(args: branch::Delete, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,
            branch: args.branch,
            force: args.force,

            interaction: Box::new(Interaction::new()),
            branch_deleter: Box::new(config.new_client()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    database: String,
    branch: String,
}

impl Display for DeleteResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Branch {} was successfully deleted!",
            bold_blue(&self.branch)
        )
    }
}

#[async_trait]
impl CommandWithOutput for Delete {
    type Output = DeleteResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        if !self.force {
            require_typed_name(self.interaction.as_ref(), "branch", &self.branch)?;
        }

        let _spinner = self.interaction.start_spinner(format!(
            "Deleting branch {} from {}...",
            bold_blue(&self.branch),
            bold_blue(&self.database)
        ))?;

        self.branch_deleter
            .delete_branch(DeleteBranchRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
                branch: self.branch.clone(),
            })
            .await?;

        Ok(DeleteResult {
            database: self.database.clone(),
            branch: self.branch.clone(),
        })
    }
}
