//! Thin typed client for the platform's HTTP API.
//!
//! The client only knows how to build requests, attach credentials, decode JSON responses and
//! translate error responses into [`ApiError`]. Each resource lives in its own submodule which adds
//! the endpoint methods to [`ApiClient`].
use std::time::Duration;

use reqwest::{
    Method, RequestBuilder, StatusCode,
    header::{self, HeaderMap, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

mod branches;
mod databases;
mod organizations;
mod snapshots;

pub use branches::{CreateBranchRequest, DeleteBranchRequest, ListBranchesRequest};
pub use databases::{
    CreateDatabaseRequest, DeleteDatabaseRequest, GetDatabaseRequest, ListDatabasesRequest,
};
pub use organizations::GetOrganizationRequest;
pub use snapshots::{
    CreateSchemaSnapshotRequest, GetSchemaSnapshotRequest, ListSchemaSnapshotsRequest,
};

/// Default base URL of the API.
pub const DEFAULT_BASE_URL: &str = "https://api.planetscale.com/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Credentials used to authenticate against the API.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth access token, sent as a bearer token.
    AccessToken(String),
    /// Service token, sent as `<id>:<token>`.
    ServiceToken { id: String, token: String },
}

impl Credentials {
    fn authorization_header(&self) -> String {
        match self {
            Self::AccessToken(token) => format!("Bearer {token}"),
            Self::ServiceToken { id, token } => format!("{id}:{token}"),
        }
    }
}

// Never print the secrets, not even in debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessToken(_) => write!(f, "AccessToken(***)"),
            Self::ServiceToken { id, .. } => write!(f, "ServiceToken {{ id: {id:?}, token: *** }}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    ///
    /// The message is the one returned by the API and is shown to the user as is.
    #[error("{message}")]
    Response {
        status: StatusCode,
        code: String,
        message: String,
    },
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    message: String,
}

/// Envelope used by every list endpoint.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let mut authorization = HeaderValue::from_str(&credentials.authorization_header())
            .map_err(|_| {
                ApiError::InvalidCredentials("token contains invalid characters".to_string())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("pscale-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Client)?;

        debug!(%base_url, ?credentials, "created API client");

        Ok(Self { http, base_url })
    }

    /// Build the URL for the given path segments. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(%method, path = url.path(), "sending API request");
        Ok(self.http.request(method, url))
    }

    /// Send the request and decode the JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send the request and ignore the body of a successful response.
    async fn send_without_body(&self, request: RequestBuilder) -> Result<(), ApiError> {
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    /// Send a request to a list endpoint and unwrap the `data` envelope.
    async fn send_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, ApiError> {
        Ok(self.send::<ListResponse<T>>(request).await?.data)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        trace!(%status, "received API response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        Err(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error) => ApiError::Response {
                status,
                code: error.code,
                message: error.message,
            },
            Err(_) => ApiError::Response {
                status,
                code: String::new(),
                message: format!("unexpected response from the API (status {status}): {body}"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;

    fn access_token() -> Credentials {
        Credentials::AccessToken("secret-token".to_string())
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ApiClient::new("https://api.example.com/", &access_token()).unwrap();
        let url = client
            .endpoint(&["v1", "organizations", "my org", "databases"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/organizations/my%20org/databases"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new("http://localhost:8080/api/", &access_token()).unwrap();
        let url = client.endpoint(&["v1", "organizations"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/organizations");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new("not a url", &access_token());
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_credentials_debug_hides_secrets() {
        let credentials = Credentials::ServiceToken {
            id: "token-id".to_string(),
            token: "very-secret".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("token-id"));
        assert!(!debug.contains("very-secret"));
    }

    #[tokio::test]
    async fn test_service_token_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/organizations/acme"))
            .and(header("authorization", "token-id:very-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "acme",
                "created_at": "2021-01-14T10:19:23.000Z",
                "updated_at": "2021-01-14T10:19:23.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(
            &server.uri(),
            &Credentials::ServiceToken {
                id: "token-id".to_string(),
                token: "very-secret".to_string(),
            },
        )
        .unwrap();

        let organization = client
            .get_organization(GetOrganizationRequest {
                organization: "acme".to_string(),
            })
            .await
            .expect("request should succeed");
        assert_eq!(organization.name, "acme");
    }

    #[tokio::test]
    async fn test_error_body_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/organizations/acme"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": "not_found",
                "message": "Not Found"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), &access_token()).unwrap();
        let error = client
            .get_organization(GetOrganizationRequest {
                organization: "acme".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Not Found");
        match error {
            ApiError::Response { status, code, .. } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(code, "not_found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), &access_token()).unwrap();
        let error = client
            .get_organization(GetOrganizationRequest {
                organization: "acme".to_string(),
            })
            .await
            .unwrap_err();

        assert!(error.to_string().contains("bad gateway"));
        match error {
            ApiError::Response { status, .. } => assert_eq!(status, StatusCode::BAD_GATEWAY),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
