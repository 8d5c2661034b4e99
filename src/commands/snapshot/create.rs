//! Command to capture a schema snapshot of a database branch.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::CreateSchemaSnapshotRequest,
    args::snapshot,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::SchemaSnapshotCreator,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::SchemaSnapshot,
};

pub struct Create {
    organization: String,
    database: String,
    branch: String,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    snapshot_creator: Box<dyn SchemaSnapshotCreator + Send + Sync>,
}

impl TryFromArgs<snapshot::Create> for Create {
    fn try_from_args(args: snapshot::Create, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,
            branch: args.branch,

            interaction: Box::new(Interaction::new()),
            snapshot_creator: Box::new(config.new_client()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateResult(SchemaSnapshot);

impl Display for CreateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schema snapshot {} was successfully created!",
            bold_blue(&self.0.id)
        )
    }
}

#[async_trait]
impl CommandWithOutput for Create {
    type Output = CreateResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Creating schema snapshot for {} in {}...",
            bold_blue(&self.branch),
            bold_blue(&self.database)
        ))?;

        let snapshot = self
            .snapshot_creator
            .create_schema_snapshot(CreateSchemaSnapshotRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
                branch: self.branch.clone(),
            })
            .await?;

        Ok(CreateResult(snapshot))
    }
}
