//! Host template collection

use serde::Deserialize;

use super::common::{ListParams, ListResponse};
use super::error::ApiError;
use super::Client;

pub const HOST_TEMPLATES_PATH: &str = "/configuration/hosts/templates";

/// Host template detail; scalars the platform leaves unset stay None, and
/// the 0/1/2 flag fields are surfaced raw without interpretation
#[derive(Debug, Clone, Deserialize)]
pub struct HostTemplate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub snmp_version: Option<String>,
    #[serde(default)]
    pub timezone_id: Option<i64>,
    #[serde(default)]
    pub severity_id: Option<i64>,
    #[serde(default)]
    pub check_command_id: Option<i64>,
    #[serde(default)]
    pub check_command_args: Vec<String>,
    #[serde(default)]
    pub check_timeperiod_id: Option<i64>,
    #[serde(default)]
    pub max_check_attempts: Option<i64>,
    #[serde(default)]
    pub normal_check_interval: Option<i64>,
    #[serde(default)]
    pub retry_check_interval: Option<i64>,
    #[serde(default)]
    pub active_check_enabled: Option<i64>,
    #[serde(default)]
    pub passive_check_enabled: Option<i64>,
    #[serde(default)]
    pub notification_enabled: Option<i64>,
    #[serde(default)]
    pub notification_options: Option<i64>,
    #[serde(default)]
    pub notification_interval: Option<i64>,
    #[serde(default)]
    pub notification_timeperiod_id: Option<i64>,
    #[serde(default)]
    pub add_inherited_contact_group: bool,
    #[serde(default)]
    pub add_inherited_contact: bool,
    #[serde(default)]
    pub first_notification_delay: Option<i64>,
    #[serde(default)]
    pub recovery_notification_delay: Option<i64>,
    #[serde(default)]
    pub acknowledgement_timeout: Option<i64>,
    #[serde(default)]
    pub freshness_checked: Option<i64>,
    #[serde(default)]
    pub freshness_threshold: Option<i64>,
    #[serde(default)]
    pub flap_detection_enabled: Option<i64>,
    #[serde(default)]
    pub low_flap_threshold: Option<i64>,
    #[serde(default)]
    pub high_flap_threshold: Option<i64>,
    #[serde(default)]
    pub event_handler_enabled: Option<i64>,
    #[serde(default)]
    pub event_handler_command_id: Option<i64>,
    #[serde(default)]
    pub event_handler_command_args: Vec<String>,
    #[serde(default)]
    pub note_url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub icon_id: Option<i64>,
    #[serde(default)]
    pub icon_alternative: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
}

impl Client {
    /// GET /configuration/hosts/templates
    pub async fn list_host_templates(
        &self,
        params: &ListParams,
    ) -> Result<Vec<HostTemplate>, ApiError> {
        let path = format!("{}{}", HOST_TEMPLATES_PATH, params.query_string());
        let response: ListResponse<HostTemplate> = self.get(&path).await?;
        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::create_test_client;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_host_templates_preserves_null_and_raw_flag_values() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/centreon/api/latest/configuration/hosts/templates")
            .match_query(mockito::Matcher::Any)
            .with_body(
                json!({
                    "result": [{
                        "id": 3,
                        "name": "generic-host",
                        "alias": "Generic",
                        "snmp_version": null,
                        "max_check_attempts": 3,
                        "normal_check_interval": null,
                        "active_check_enabled": 2,
                        "notification_enabled": 0,
                        "check_command_args": ["!80", "!90"],
                        "is_locked": true
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let templates = client
            .list_host_templates(&ListParams::new(10, 1))
            .await
            .unwrap();

        let tpl = &templates[0];
        assert_eq!(tpl.name, "generic-host");
        // Remote null stays None, it is never coerced to a zero value
        assert_eq!(tpl.snmp_version, None);
        assert_eq!(tpl.normal_check_interval, None);
        assert_eq!(tpl.max_check_attempts, Some(3));
        // Flag fields come through raw, including the platform's own 2
        assert_eq!(tpl.active_check_enabled, Some(2));
        assert_eq!(tpl.notification_enabled, Some(0));
        assert_eq!(tpl.check_command_args, vec!["!80", "!90"]);
        assert!(tpl.is_locked);
    }
}
