//! Command to create a branch of a database.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::CreateBranchRequest,
    args::branch,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::BranchCreator,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::Branch,
};

pub struct Create {
    organization: String,
    database: String,
    branch: String,
    parent_branch: Option<String>,
    notes: Option<String>,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    branch_creator: Box<dyn BranchCreator + Send + Sync>,
}

impl TryFromArgs<branch::Create> for Create {
    fn try_from_args(args: branch::Create, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,
            branch: args.branch,
            parent_branch: args.from,
            notes: args.notes,

            interaction: Box::new(Interaction::new()),
            branch_creator: Box::new(config.new_client()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateResult(Branch);

impl Display for CreateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Branch {} was successfully created!",
            bold_blue(&self.0.name)
        )
    }
}

#[async_trait]
impl CommandWithOutput for Create {
    type Output = CreateResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Creating branch {} on {}...",
            bold_blue(&self.branch),
            bold_blue(&self.database)
        ))?;

        let branch = self
            .branch_creator
            .create_branch(CreateBranchRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
                branch: self.branch.clone(),
                parent_branch: self.parent_branch.clone(),
                notes: self.notes.clone(),
            })
            .await?;

        Ok(CreateResult(branch))
    }
}
