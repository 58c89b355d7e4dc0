use reqwest::{Client as HttpClient, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::error::ApiError;

/// Header carrying the static API key on every request
pub const AUTH_HEADER: &str = "X-AUTH-TOKEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings supplied once at provider startup
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub protocol: String,
    pub server: String,
    pub port: String,
    pub api_version: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}/centreon/api/{}",
            self.protocol, self.server, self.port, self.api_version
        )
    }
}

/// Centreon API client
///
/// Immutable after construction; operations never retry, a failed call
/// surfaces immediately.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = ClientBuilder::new().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a GET request and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET request");

        let response = self.execute(self.http.get(&url)).await?;
        let text = response.text().await?;
        tracing::debug!(body = %text, "API response body");

        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("unexpected response body: {}", e)))
    }

    /// Execute a POST request with a JSON body, discarding the response body
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST request");

        self.execute(self.http.post(&url).json(body)).await?;
        Ok(())
    }

    /// Execute a body-less POST against an action endpoint
    pub async fn post_action(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST action request");

        self.execute(self.http.post(&url)).await?;
        Ok(())
    }

    /// Execute a PATCH request with a JSON body, discarding the response body
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "PATCH request");

        self.execute(self.http.patch(&url).json(body)).await?;
        Ok(())
    }

    /// Execute a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "DELETE request");

        self.execute(self.http.delete(&url)).await?;
        Ok(())
    }

    /// Send the request with authentication and map error statuses into the
    /// remote error taxonomy
    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.header(AUTH_HEADER, &self.api_key).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::error!(status = status.as_u16(), body = %text, "API request rejected");
        Err(ApiError::remote(status.as_u16(), &text))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::create_test_client;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct StatusBody {
        is_installed: bool,
    }

    #[tokio::test]
    async fn client_builds_base_url_from_config() {
        let config = ClientConfig {
            protocol: "https".to_string(),
            server: "centreon.example.com".to_string(),
            port: "443".to_string(),
            api_version: "latest".to_string(),
            api_key: "secret".to_string(),
        };

        let client = Client::new(config).unwrap();
        assert_eq!(
            client.base_url(),
            "https://centreon.example.com:443/centreon/api/latest"
        );
    }

    #[tokio::test]
    async fn client_sends_auth_header_and_decodes_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/centreon/api/latest/platform/installation/status")
            .match_header(AUTH_HEADER, "test-key")
            .with_body(r#"{"is_installed":true,"has_upgrade_available":false}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let body: StatusBody = client
            .get("/platform/installation/status")
            .await
            .unwrap();

        assert!(body.is_installed);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_maps_error_status_to_remote_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/centreon/api/latest/configuration/hosts")
            .with_status(401)
            .with_body(r#"{"code":401,"message":"invalid token"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result: Result<serde_json::Value, ApiError> =
            client.get("/configuration/hosts").await;

        match result {
            Err(ApiError::Remote { status, code, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(code, "UNAUTHORIZED");
            }
            other => panic!("expected Remote error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn client_surfaces_undecodable_body_as_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/centreon/api/latest/configuration/hosts")
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result: Result<serde_json::Value, ApiError> =
            client.get("/configuration/hosts").await;

        // serde_json::Value accepts nothing here either: the body is not JSON
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn client_surfaces_connection_failure_as_transport_error() {
        let client = create_test_client("http://127.0.0.1:1");

        let result: Result<serde_json::Value, ApiError> =
            client.get("/configuration/hosts").await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
