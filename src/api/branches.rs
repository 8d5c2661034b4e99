use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::Branch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBranchRequest {
    pub organization: String,
    pub database: String,
    pub branch: String,
    pub parent_branch: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBranchesRequest {
    pub organization: String,
    pub database: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBranchRequest {
    pub organization: String,
    pub database: String,
    pub branch: String,
}

#[derive(Serialize)]
struct CreateBranchBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

impl ApiClient {
    pub async fn create_branch(&self, request: CreateBranchRequest) -> Result<Branch, ApiError> {
        let body = CreateBranchBody {
            name: &request.branch,
            parent_branch: request.parent_branch.as_deref(),
            notes: request.notes.as_deref(),
        };

        self.send(
            self.request(
                Method::POST,
                &[
                    "v1",
                    "organizations",
                    &request.organization,
                    "databases",
                    &request.database,
                    "branches",
                ],
            )?
            .json(&body),
        )
        .await
    }

    pub async fn list_branches(
        &self,
        request: ListBranchesRequest,
    ) -> Result<Vec<Branch>, ApiError> {
        self.send_list(self.request(
            Method::GET,
            &[
                "v1",
                "organizations",
                &request.organization,
                "databases",
                &request.database,
                "branches",
            ],
        )?)
        .await
    }

    pub async fn delete_branch(&self, request: DeleteBranchRequest) -> Result<(), ApiError> {
        self.send_without_body(self.request(
            Method::DELETE,
            &[
                "v1",
                "organizations",
                &request.organization,
                "databases",
                &request.database,
                "branches",
                &request.branch,
            ],
        )?)
        .await
    }
}
