//! Host collection operations
//!
//! Hosts are addressed remotely by numeric ID but locally by unique name,
//! so every mutating operation resolves the name through a single-result
//! search first.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::common::{ListParams, ListResponse, NamedRef};
use super::error::ApiError;
use super::fields::{Payload, TriState};
use super::Client;

pub const HOSTS_PATH: &str = "/configuration/hosts";

/// Host as the platform returns it from the collection endpoint
///
/// Associations come back enriched as `{id, name}` pairs; fields the
/// endpoint does not return stay None rather than being fabricated.
#[derive(Debug, Clone, Deserialize)]
pub struct Host {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    pub address: String,
    #[serde(default)]
    pub monitoring_server: NamedRef,
    #[serde(default)]
    pub templates: Vec<NamedRef>,
    #[serde(default)]
    pub groups: Vec<NamedRef>,
    #[serde(default)]
    pub categories: Vec<NamedRef>,
    #[serde(default)]
    pub normal_check_interval: Option<i64>,
    #[serde(default)]
    pub retry_check_interval: Option<i64>,
    #[serde(default)]
    pub notification_timeperiod_id: Option<i64>,
    #[serde(default)]
    pub check_timeperiod_id: Option<i64>,
    #[serde(default)]
    pub severity_id: Option<i64>,
    #[serde(default)]
    pub is_activated: bool,
}

/// Macro attached to a host; the platform withholds `value` on read when
/// the macro is flagged as a password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostMacro {
    pub name: String,
    pub value: Option<String>,
    pub is_password: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Desired host configuration, the write-side model
///
/// Absent optional fields stay off the wire; tri-state flags follow the
/// TriState encoding; macros are a full-replace sub-resource.
#[derive(Debug, Clone, Default)]
pub struct HostSettings {
    pub monitoring_server_id: i64,
    pub name: String,
    pub address: String,
    pub alias: Option<String>,
    pub snmp_community: Option<String>,
    pub snmp_version: Option<String>,
    pub geo_coords: Option<String>,
    pub timezone_id: Option<i64>,
    pub severity_id: Option<i64>,
    pub check_command_id: Option<i64>,
    pub check_command_args: Option<Vec<String>>,
    pub check_timeperiod_id: Option<i64>,
    pub max_check_attempts: Option<i64>,
    pub normal_check_interval: Option<i64>,
    pub retry_check_interval: Option<i64>,
    pub active_check_enabled: TriState,
    pub passive_check_enabled: TriState,
    pub notification_enabled: TriState,
    pub notification_options: Option<i64>,
    pub notification_interval: Option<i64>,
    pub notification_timeperiod_id: Option<i64>,
    pub add_inherited_contact_group: Option<bool>,
    pub add_inherited_contact: Option<bool>,
    pub first_notification_delay: Option<i64>,
    pub recovery_notification_delay: Option<i64>,
    pub acknowledgement_timeout: Option<i64>,
    pub freshness_checked: TriState,
    pub freshness_threshold: Option<i64>,
    pub flap_detection_enabled: TriState,
    pub low_flap_threshold: Option<i64>,
    pub high_flap_threshold: Option<i64>,
    pub event_handler_enabled: TriState,
    pub event_handler_command_id: Option<i64>,
    pub event_handler_command_args: Option<Vec<String>>,
    pub note_url: Option<String>,
    pub note: Option<String>,
    pub action_url: Option<String>,
    pub icon_id: Option<i64>,
    pub icon_alternative: Option<String>,
    pub comment: Option<String>,
    pub is_activated: Option<bool>,
    pub categories: Option<Vec<i64>>,
    pub groups: Option<Vec<i64>>,
    pub templates: Option<Vec<i64>>,
    pub macros: Vec<HostMacro>,
}

impl HostSettings {
    /// Encode the settings as a sparse request body; used verbatim for both
    /// create (POST) and partial update (PATCH)
    pub fn payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload
            .int("monitoring_server_id", self.monitoring_server_id)
            .str("name", &self.name)
            .str("address", &self.address)
            .str_opt("alias", &self.alias)
            .str_opt("snmp_community", &self.snmp_community)
            .str_opt("snmp_version", &self.snmp_version)
            .str_opt("geo_coords", &self.geo_coords)
            .int_opt("timezone_id", self.timezone_id)
            .int_opt("severity_id", self.severity_id)
            .int_opt("check_command_id", self.check_command_id)
            .str_list("check_command_args", &self.check_command_args)
            .int_opt("check_timeperiod_id", self.check_timeperiod_id)
            .int_opt("max_check_attempts", self.max_check_attempts)
            .int_opt("normal_check_interval", self.normal_check_interval)
            .int_opt("retry_check_interval", self.retry_check_interval)
            .tri_state("active_check_enabled", self.active_check_enabled)
            .tri_state("passive_check_enabled", self.passive_check_enabled)
            .tri_state("notification_enabled", self.notification_enabled)
            .int_opt("notification_options", self.notification_options)
            .int_opt("notification_interval", self.notification_interval)
            .int_opt(
                "notification_timeperiod_id",
                self.notification_timeperiod_id,
            )
            .bool_opt(
                "add_inherited_contact_group",
                self.add_inherited_contact_group,
            )
            .bool_opt("add_inherited_contact", self.add_inherited_contact)
            .int_opt("first_notification_delay", self.first_notification_delay)
            .int_opt(
                "recovery_notification_delay",
                self.recovery_notification_delay,
            )
            .int_opt("acknowledgement_timeout", self.acknowledgement_timeout)
            .tri_state("freshness_checked", self.freshness_checked)
            .int_opt("freshness_threshold", self.freshness_threshold)
            .tri_state("flap_detection_enabled", self.flap_detection_enabled)
            .int_opt("low_flap_threshold", self.low_flap_threshold)
            .int_opt("high_flap_threshold", self.high_flap_threshold)
            .tri_state("event_handler_enabled", self.event_handler_enabled)
            .int_opt("event_handler_command_id", self.event_handler_command_id)
            .str_list(
                "event_handler_command_args",
                &self.event_handler_command_args,
            )
            .str_opt("note_url", &self.note_url)
            .str_opt("note", &self.note)
            .str_opt("action_url", &self.action_url)
            .int_opt("icon_id", self.icon_id)
            .str_opt("icon_alternative", &self.icon_alternative)
            .str_opt("comment", &self.comment)
            .bool_opt("is_activated", self.is_activated)
            .int_list("categories", &self.categories)
            .int_list("groups", &self.groups)
            .int_list("templates", &self.templates);

        // Macros are replaced wholesale by the platform, never merged
        if !self.macros.is_empty() {
            let macros: Vec<Value> = self
                .macros
                .iter()
                .map(|m| {
                    json!({
                        "name": m.name,
                        "value": m.value,
                        "is_password": m.is_password,
                        "description": m.description,
                    })
                })
                .collect();
            payload.raw("macros", Value::Array(macros));
        }

        payload
    }
}

impl Client {
    /// GET /configuration/hosts
    pub async fn list_hosts(&self, params: &ListParams) -> Result<Vec<Host>, ApiError> {
        let path = format!("{}{}", HOSTS_PATH, params.query_string());
        let response: ListResponse<Host> = self.get(&path).await?;
        Ok(response.result)
    }

    /// Look up a host by exact name with page size 1; zero matches is a
    /// valid absence signal, not an error
    pub async fn find_host_by_name(&self, name: &str) -> Result<Option<Host>, ApiError> {
        let hosts = self.list_hosts(&ListParams::name_lookup(name)).await?;
        Ok(hosts.into_iter().find(|h| h.name == name))
    }

    /// Name lookup where absence is a failure
    pub async fn require_host_by_name(&self, name: &str) -> Result<Host, ApiError> {
        self.find_host_by_name(name)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("host '{}'", name),
            })
    }

    /// POST /configuration/hosts
    pub async fn create_host(&self, settings: &HostSettings) -> Result<(), ApiError> {
        tracing::info!(host = %settings.name, "Creating host");
        self.post(HOSTS_PATH, &settings.payload()).await
    }

    /// PATCH /configuration/hosts/{id}
    pub async fn update_host(&self, id: i64, settings: &HostSettings) -> Result<(), ApiError> {
        tracing::info!(host = %settings.name, id, "Updating host");
        self.patch(&format!("{}/{}", HOSTS_PATH, id), &settings.payload())
            .await
    }

    /// DELETE /configuration/hosts/{id}
    pub async fn delete_host(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "Deleting host");
        self.delete(&format!("{}/{}", HOSTS_PATH, id)).await
    }

    /// GET /configuration/hosts/{id}/macros
    pub async fn host_macros(&self, id: i64) -> Result<Vec<HostMacro>, ApiError> {
        let response: ListResponse<HostMacro> =
            self.get(&format!("{}/{}/macros", HOSTS_PATH, id)).await?;
        Ok(response.result)
    }
}
