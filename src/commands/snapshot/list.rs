//! Command to list the schema snapshots of a database branch.

use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::{
    api::ListSchemaSnapshotsRequest,
    args::snapshot,
    commands::{CommandWithOutput, TryFromArgs},
    config::Config,
    dependencies::SchemaSnapshotLister,
    formatting::bold_blue,
    interaction::{Interaction, SpinnerInteraction},
    models::{SchemaSnapshot, display_timestamp},
    table::Table,
};

pub struct List {
    organization: String,
    database: String,
    branch: String,

    interaction: Box<dyn SpinnerInteraction + Send + Sync>,
    snapshot_lister: Box<dyn SchemaSnapshotLister + Send + Sync>,
}

impl TryFromArgs<snapshot::List> for List {
    fn try_from_args(args: snapshot::List, config: &Config) -> Result<Self> {
        Ok(Self {
            organization: config.organization()?.to_string(),
            database: args.database,
            branch: args.branch,

            interaction: Box::new(Interaction::new()),
            snapshot_lister: Box::new(config.new_client()?),
        })
    }
}

/// Result of the list command.
///
/// The database and branch are only used for the empty message, JSON output is the bare array.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ListResult {
    #[serde(skip)]
    database: String,
    #[serde(skip)]
    branch: String,
    snapshots: Vec<SchemaSnapshot>,
}

impl From<&ListResult> for Table {
    fn from(value: &ListResult) -> Self {
        Table::from_iter(
            &value.snapshots,
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
    }
}

impl Display for ListResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.snapshots.is_empty() {
            return write!(
                f,
                "No schema snapshots exist for {} in {}.",
                bold_blue(&self.branch),
                bold_blue(&self.database)
            );
        }

        Table::from(self).fmt(f)
    }
}

#[async_trait]
impl CommandWithOutput for List {
    type Output = ListResult;

    async fn execute(&mut self) -> Result<Self::Output> {
        let _spinner = self.interaction.start_spinner(format!(
            "Fetching schema snapshots for {} in {}...",
            bold_blue(&self.branch),
            bold_blue(&self.database)
        ))?;

        let snapshots = self
            .snapshot_lister
            .list_schema_snapshots(ListSchemaSnapshotsRequest {
                organization: self.organization.clone(),
                database: self.database.clone(),
                branch: self.branch.clone(),
            })
            .await?;

        Ok(ListResult {
            database: self.database.clone(),
            branch: self.branch.clone(),
            snapshots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::dependencies::mocks::MockApi;
    use crate::formatting::{Format, Formattable};
    use crate::interaction::SpinnerHandle;
    use crate::interaction::mocks::MockInteraction;
    use reqwest::StatusCode;

    fn create_command(snapshot_lister: MockApi) -> List {
        let mut interaction = MockInteraction::new();
        interaction
            .expect_start_spinner()
            .withf(|msg| {
                console::strip_ansi_codes(msg) == "Fetching schema snapshots for main in foo..."
            })
            .return_once(|_| Ok(SpinnerHandle::new(Box::new(|| {}))));

        List {
            organization: "acme".to_string(),
            database: "foo".to_string(),
            branch: "main".to_string(),
            interaction: Box::new(interaction),
            snapshot_lister: Box::new(snapshot_lister),
        }
    }

    fn snapshot(id: &str, name: &str) -> SchemaSnapshot {
        SchemaSnapshot {
            id: id.to_string(),
            name: name.to_string(),
            created_at: "2021-01-14T10:19:23Z".parse().unwrap(),
            updated_at: "2021-01-15T08:00:00Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_snapshots() {
        let mut snapshot_lister = MockApi::new();
        snapshot_lister
            .expect_list_schema_snapshots()
            .withf(|request| {
                request
                    == &ListSchemaSnapshotsRequest {
                        organization: "acme".to_string(),
                        database: "foo".to_string(),
                        branch: "main".to_string(),
                    }
            })
            .times(1)
            .return_once(|_| {
                Ok(vec![
                    snapshot("a1b2", "snapshot-1"),
                    snapshot("c3d4", "snapshot-2"),
                ])
            });

        let result = create_command(snapshot_lister)
            .execute()
            .await
            .expect("execute should succeed");

        let text = result.format(Format::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID      NAME          CREATED AT"));
        assert!(lines[1].starts_with("a1b2    snapshot-1    2021-01-14 10:19:23 UTC"));
        assert!(lines[2].starts_with("c3d4    snapshot-2"));
    }

    #[tokio::test]
    async fn test_list_snapshots_json() {
        let mut snapshot_lister = MockApi::new();
        snapshot_lister
            .expect_list_schema_snapshots()
            .return_once(|_| Ok(vec![snapshot("a1b2", "snapshot-1")]));

        let result = create_command(snapshot_lister)
            .execute()
            .await
            .expect("execute should succeed");

        let json: serde_json::Value =
            serde_json::from_str(&result.format(Format::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "a1b2",
                "name": "snapshot-1",
                "created_at": "2021-01-14T10:19:23Z",
                "updated_at": "2021-01-15T08:00:00Z",
            }])
        );
    }

    #[tokio::test]
    async fn test_list_no_snapshots() {
        let mut snapshot_lister = MockApi::new();
        snapshot_lister
            .expect_list_schema_snapshots()
            .return_once(|_| Ok(vec![]));

        let result = create_command(snapshot_lister)
            .execute()
            .await
            .expect("execute should succeed");

        assert_eq!(
            console::strip_ansi_codes(&result.format(Format::Text).unwrap()),
            "No schema snapshots exist for main in foo."
        );
        assert_eq!(result.format(Format::Json).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_list_snapshots_api_error() {
        let mut snapshot_lister = MockApi::new();
        snapshot_lister
            .expect_list_schema_snapshots()
            .return_once(|_| {
                Err(ApiError::Response {
                    status: StatusCode::NOT_FOUND,
                    code: "not_found".to_string(),
                    message: "Not Found".to_string(),
                })
            });

        let error = create_command(snapshot_lister).execute().await.unwrap_err();

        assert_eq!(error.to_string(), "Not Found");
    }
}
