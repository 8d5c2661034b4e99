use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::Organization;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrganizationRequest {
    pub organization: String,
}

impl ApiClient {
    pub async fn get_organization(
        &self,
        request: GetOrganizationRequest,
    ) -> Result<Organization, ApiError> {
        self.send(self.request(Method::GET, &["v1", "organizations", &request.organization])?)
            .await
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.send_list(self.request(Method::GET, &["v1", "organizations"])?)
            .await
    }
}
