use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::Database;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseRequest {
    pub organization: String,
    pub name: String,
    pub notes: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDatabasesRequest {
    pub organization: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDatabaseRequest {
    pub organization: String,
    pub database: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDatabaseRequest {
    pub organization: String,
    pub database: String,
}

#[derive(Serialize)]
struct CreateDatabaseBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
}

impl ApiClient {
    pub async fn create_database(
        &self,
        request: CreateDatabaseRequest,
    ) -> Result<Database, ApiError> {
        let body = CreateDatabaseBody {
            name: &request.name,
            notes: request.notes.as_deref(),
            region: request.region.as_deref(),
        };

        self.send(
            self.request(
                Method::POST,
                &["v1", "organizations", &request.organization, "databases"],
            )?
            .json(&body),
        )
        .await
    }

    pub async fn list_databases(
        &self,
        request: ListDatabasesRequest,
    ) -> Result<Vec<Database>, ApiError> {
        self.send_list(self.request(
            Method::GET,
            &["v1", "organizations", &request.organization, "databases"],
        )?)
        .await
    }

    pub async fn get_database(&self, request: GetDatabaseRequest) -> Result<Database, ApiError> {
        self.send(self.request(
            Method::GET,
            &[
                "v1",
                "organizations",
                &request.organization,
                "databases",
                &request.database,
            ],
        )?)
        .await
    }

    pub async fn delete_database(&self, request: DeleteDatabaseRequest) -> Result<(), ApiError> {
        self.send_without_body(self.request(
            Method::DELETE,
            &[
                "v1",
                "organizations",
                &request.organization,
                "databases",
                &request.database,
            ],
        )?)
        .await
    }
}
