use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::SchemaSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchemaSnapshotRequest {
    pub organization: String,
    pub database: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSchemaSnapshotsRequest {
    pub organization: String,
    pub database: String,
    pub branch: String,
}

/// Schema snapshot ids are globally unique, so no organization is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSchemaSnapshotRequest {
    pub id: String,
}

impl ApiClient {
    pub async fn create_schema_snapshot(
        &self,
        request: CreateSchemaSnapshotRequest,
    ) -> Result<SchemaSnapshot, ApiError> {
        self.send(self.request(
            Method::POST,
            &[
                "v1",
                "organizations",
                &request.organization,
                "databases",
                &request.database,
                "branches",
                &request.branch,
                "schema-snapshots",
            ],
        )?)
        .await
    }

    pub async fn list_schema_snapshots(
        &self,
        request: ListSchemaSnapshotsRequest,
    ) -> Result<Vec<SchemaSnapshot>, ApiError> {
        self.send_list(self.request(
            Method::GET,
            &[
                "v1",
                "organizations",
                &request.organization,
                "databases",
                &request.database,
                "branches",
                &request.branch,
                "schema-snapshots",
            ],
        )?)
        .await
    }

    pub async fn get_schema_snapshot(
        &self,
        request: GetSchemaSnapshotRequest,
    ) -> Result<SchemaSnapshot, ApiError> {
        self.send(self.request(Method::GET, &["v1", "schema-snapshots", &request.id])?)
            .await
    }
}
