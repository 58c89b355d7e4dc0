//! Monitoring server collection and the configuration reload action

use serde::Deserialize;

use super::common::{ListParams, ListResponse};
use super::error::ApiError;
use super::Client;

pub const MONITORING_SERVERS_PATH: &str = "/configuration/monitoring-servers";

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringServer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_localhost: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub ssh_port: Option<i64>,
    #[serde(default)]
    pub last_restart: Option<String>,
    #[serde(default)]
    pub is_updated: bool,
    #[serde(default)]
    pub is_activate: bool,
}

impl Client {
    /// GET /configuration/monitoring-servers
    pub async fn list_monitoring_servers(
        &self,
        params: &ListParams,
    ) -> Result<Vec<MonitoringServer>, ApiError> {
        let path = format!("{}{}", MONITORING_SERVERS_PATH, params.query_string());
        let response: ListResponse<MonitoringServer> = self.get(&path).await?;
        Ok(response.result)
    }

    /// POST /configuration/monitoring-servers/{id}/generate-and-reload
    ///
    /// Regenerates and reloads the monitoring configuration. Fired after
    /// successful mutations when auto-reload is enabled; at-least-once, the
    /// caller never rolls the primary mutation back.
    pub async fn reload_monitoring_server(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(monitoring_server_id = id, "Reloading monitoring configuration");
        self.post_action(&format!(
            "{}/{}/generate-and-reload",
            MONITORING_SERVERS_PATH, id
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::create_test_client;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_monitoring_servers_decodes_details() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "GET",
                "/centreon/api/latest/configuration/monitoring-servers",
            )
            .match_query(mockito::Matcher::Any)
            .with_body(
                json!({
                    "result": [{
                        "id": 1,
                        "name": "Central",
                        "address": "127.0.0.1",
                        "is_localhost": true,
                        "is_default": true,
                        "ssh_port": 22,
                        "last_restart": "2024-03-01T10:00:00+00:00",
                        "is_updated": false,
                        "is_activate": true
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let servers = client
            .list_monitoring_servers(&ListParams::new(10, 1))
            .await
            .unwrap();

        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].name, "Central");
        assert!(servers[0].is_localhost);
        assert_eq!(servers[0].ssh_port, Some(22));
    }

    #[tokio::test]
    async fn reload_posts_to_action_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/centreon/api/latest/configuration/monitoring-servers/1/generate-and-reload",
            )
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        client.reload_monitoring_server(1).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn reload_failure_surfaces_remote_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/centreon/api/latest/configuration/monitoring-servers/1/generate-and-reload",
            )
            .with_status(409)
            .with_body(r#"{"code":409,"message":"generation already in progress"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result = client.reload_monitoring_server(1).await;

        match result {
            Err(ApiError::Remote { status, message, .. }) => {
                assert_eq!(status, 409);
                assert!(message.contains("generation already in progress"));
            }
            other => panic!("expected Remote error, got {:?}", other.err()),
        }
    }
}
