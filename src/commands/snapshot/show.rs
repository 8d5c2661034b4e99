//! Command to show a single schema snapshot.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::GetSchemaSnapshotRequest,
    args::snapshot,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::SchemaSnapshotGetter,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::{SchemaSnapshot, display_timestamp},
    table::Table,
};

pub struct Show {
    id: String,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    snapshot_getter: Box<dyn SchemaSnapshotGetter + Send + Sync>,
}

// Snapshot IDs are global, no organization needed.
impl TryFromArgs<snapshot::Show> for Show {
    fn try_from_args(args: snapshot::Show, config: &Config) -> Result<Self> {
        Ok(Self {
            id: args.id,

            interaction: Box::new(Interaction::new()),
            snapshot_getter: Box::new(config.new_client()?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowResult(SchemaSnapshot);

impl Display for ShowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Table::from_iter(
            [&self.0],
            &[
                ("ID", |s: &SchemaSnapshot| s.id.clone()),
                ("NAME", |s: &SchemaSnapshot| s.name.clone()),
                ("CREATED AT", |s: &SchemaSnapshot| {
                    display_timestamp(&s.created_at)
                }),
                ("UPDATED AT", |s: &SchemaSnapshot| {
                    display_timestamp(&s.updated_at)
                }),
            ],
        )
        .fmt(f)
    }
}

#[async_trait]
impl CommandWithOutput for Show {
    type Output = ShowResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Fetching schema snapshot {}...",
            bold_blue(&self.id)
        ))?;

        let snapshot = self
            .snapshot_getter
            .get_schema_snapshot(GetSchemaSnapshotRequest {
                id: self.id.clone(),
            })
            .await?;

        Ok(ShowResult(snapshot))
    }
}
