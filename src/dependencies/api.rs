//! One trait per API operation.
//!
//! Commands only depend on the operations they actually call, which keeps the mocks in their tests
//! small. [`ApiClient`] implements all of them by forwarding to its endpoint methods.
use async_trait::async_trait;

use crate::{
    api::{
        ApiClient, ApiError, CreateBranchRequest, CreateDatabaseRequest,
        CreateSchemaSnapshotRequest, DeleteBranchRequest, DeleteDatabaseRequest,
        GetDatabaseRequest, GetOrganizationRequest, GetSchemaSnapshotRequest, ListBranchesRequest,
        ListDatabasesRequest, ListSchemaSnapshotsRequest,
    },
    models::{Branch, Database, Organization, SchemaSnapshot},
};

#[async_trait]
pub trait DatabaseCreator {
    async fn create_database(&self, request: CreateDatabaseRequest) -> Result<Database, ApiError>;
}

#[async_trait]
impl DatabaseCreator for ApiClient {
    async fn create_database(&self, request: CreateDatabaseRequest) -> Result<Database, ApiError> {
        self.create_database(request).await
    }
}

#[async_trait]
pub trait DatabaseLister {
    async fn list_databases(
        &self,
        request: ListDatabasesRequest,
    ) -> Result<Vec<Database>, ApiError>;
}

#[async_trait]
impl DatabaseLister for ApiClient {
    async fn list_databases(
        &self,
        request: ListDatabasesRequest,
    ) -> Result<Vec<Database>, ApiError> {
        self.list_databases(request).await
    }
}

#[async_trait]
pub trait DatabaseGetter {
    async fn get_database(&self, request: GetDatabaseRequest) -> Result<Database, ApiError>;
}

#[async_trait]
impl DatabaseGetter for ApiClient {
    async fn get_database(&self, request: GetDatabaseRequest) -> Result<Database, ApiError> {
        self.get_database(request).await
    }
}

#[async_trait]
pub trait DatabaseDeleter {
    async fn delete_database(&self, request: DeleteDatabaseRequest) -> Result<(), ApiError>;
}

#[async_trait]
impl DatabaseDeleter for ApiClient {
    async fn delete_database(&self, request: DeleteDatabaseRequest) -> Result<(), ApiError> {
        self.delete_database(request).await
    }
}

#[async_trait]
pub trait BranchCreator {
    async fn create_branch(&self, request: CreateBranchRequest) -> Result<Branch, ApiError>;
}

#[async_trait]
impl BranchCreator for ApiClient {
    async fn create_branch(&self, request: CreateBranchRequest) -> Result<Branch, ApiError> {
        self.create_branch(request).await
    }
}

#[async_trait]
pub trait BranchLister {
    async fn list_branches(&self, request: ListBranchesRequest) -> Result<Vec<Branch>, ApiError>;
}

#[async_trait]
impl BranchLister for ApiClient {
    async fn list_branches(&self, request: ListBranchesRequest) -> Result<Vec<Branch>, ApiError> {
        self.list_branches(request).await
    }
}

#[async_trait]
pub trait BranchDeleter {
    async fn delete_branch(&self, request: DeleteBranchRequest) -> Result<(), ApiError>;
}

#[async_trait]
impl BranchDeleter for ApiClient {
    async fn delete_branch(&self, request: DeleteBranchRequest) -> Result<(), ApiError> {
        self.delete_branch(request).await
    }
}

#[async_trait]
pub trait SchemaSnapshotCreator {
    async fn create_schema_snapshot(
        &self,
        request: CreateSchemaSnapshotRequest,
    ) -> Result<SchemaSnapshot, ApiError>;
}

#[async_trait]
impl SchemaSnapshotCreator for ApiClient {
    async fn create_schema_snapshot(
        &self,
        request: CreateSchemaSnapshotRequest,
    ) -> Result<SchemaSnapshot, ApiError> {
        self.create_schema_snapshot(request).await
    }
}

// Dependency to list the schema snapshots of a branch
#[async_trait]
pub trait SchemaSnapshotLister {
    async fn list_schema_snapshots(
        &self,
        request: ListSchemaSnapshotsRequest,
    ) -> Result<Vec<SchemaSnapshot>, ApiError>;
}

#[async_trait]
impl SchemaSnapshotLister for ApiClient {
    async fn list_schema_snapshots(
        &self,
        request: ListSchemaSnapshotsRequest,
    ) -> Result<Vec<SchemaSnapshot>, ApiError> {
        self.list_schema_snapshots(request).await
    }
}

#[async_trait]
pub trait SchemaSnapshotGetter {
    async fn get_schema_snapshot(
        &self,
        request: GetSchemaSnapshotRequest,
    ) -> Result<SchemaSnapshot, ApiError>;
}

#[async_trait]
impl SchemaSnapshotGetter for ApiClient {
    async fn get_schema_snapshot(
        &self,
        request: GetSchemaSnapshotRequest,
    ) -> Result<SchemaSnapshot, ApiError> {
        self.get_schema_snapshot(request).await
    }
}

#[async_trait]
pub trait OrganizationGetter {
    async fn get_organization(
        &self,
        request: GetOrganizationRequest,
    ) -> Result<Organization, ApiError>;
}

#[async_trait]
impl OrganizationGetter for ApiClient {
    async fn get_organization(
        &self,
        request: GetOrganizationRequest,
    ) -> Result<Organization, ApiError> {
        self.get_organization(request).await
    }
}

#[async_trait]
pub trait OrganizationLister {
    async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError>;
}

#[async_trait]
impl OrganizationLister for ApiClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.list_organizations().await
    }
}
