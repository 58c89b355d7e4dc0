//! Host resource implementation
//!
//! The remote API addresses hosts by numeric ID while the configuration
//! addresses them by unique name, so read, update and delete all resolve
//! the name through a single-result lookup before acting.

use async_trait::async_trait;
use std::sync::Arc;
use tfcore::context::Context;
use tfcore::resource::{
    ConfigureResourceRequest, ConfigureResourceResponse, CreateResourceRequest,
    CreateResourceResponse, DeleteResourceRequest, DeleteResourceResponse, ReadResourceRequest,
    ReadResourceResponse, Resource, ResourceMetadataRequest, ResourceMetadataResponse,
    ResourceSchemaRequest, ResourceSchemaResponse, ResourceWithConfigure, UpdateResourceRequest,
    UpdateResourceResponse, ValidateResourceConfigRequest, ValidateResourceConfigResponse,
};
use tfcore::schema::{
    AttributeBuilder, AttributeType, NestedType, ObjectNestingMode, Schema, SchemaBuilder,
    ValidatorRequest,
};
use tfcore::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};

use crate::api::{HostMacro, HostSettings, NamedRef, TriState};
use crate::validation::{
    AddressValidator, GeoCoordsValidator, NotificationOptionsValidator, SnmpVersionValidator,
};
use crate::CentreonProviderData;

#[derive(Default)]
pub struct HostResource {
    provider_data: Option<CentreonProviderData>,
}

impl HostResource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn tri_state_attribute(name: &str, description: &str) -> tfcore::schema::Attribute {
    AttributeBuilder::new(name, AttributeType::Number)
        .description(description)
        .optional()
        .computed()
        .default_value(Dynamic::Number(TriState::SENTINEL as f64))
        .build()
}

fn host_schema() -> Schema {
    SchemaBuilder::new()
        .version(0)
        .description("Manages a Centreon host.")
        .attribute(
            AttributeBuilder::new("monitoring_server_id", AttributeType::Number)
                .description("ID of the host's monitoring server")
                .required()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("name", AttributeType::String)
                .description("Host name")
                .required()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("address", AttributeType::String)
                .description("IP or domain of the host")
                .required()
                .validator(Arc::new(AddressValidator))
                .build(),
        )
        .attribute(
            AttributeBuilder::new("alias", AttributeType::String)
                .description("Host alias")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("snmp_community", AttributeType::String)
                .description("Community of the SNMP agent")
                .optional()
                .sensitive()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("snmp_version", AttributeType::String)
                .description("Version of the SNMP agent (1, 2c, or 3)")
                .optional()
                .validator(Arc::new(SnmpVersionValidator))
                .build(),
        )
        .attribute(
            AttributeBuilder::new("geo_coords", AttributeType::String)
                .description("Geographic coordinates in format 'latitude,longitude'")
                .optional()
                .validator(Arc::new(GeoCoordsValidator))
                .build(),
        )
        .attribute(tri_state_attribute(
            "active_check_enabled",
            "Whether active checks are enabled (0=disabled, 1=enabled, 2=default)",
        ))
        .attribute(tri_state_attribute(
            "passive_check_enabled",
            "Whether passive checks are enabled (0=disabled, 1=enabled, 2=default)",
        ))
        .attribute(tri_state_attribute(
            "notification_enabled",
            "Whether notifications are enabled (0=disabled, 1=enabled, 2=default)",
        ))
        .attribute(tri_state_attribute(
            "event_handler_enabled",
            "Whether event handler is enabled (0=disabled, 1=enabled, 2=default)",
        ))
        .attribute(tri_state_attribute(
            "flap_detection_enabled",
            "Whether flap detection is enabled (0=disabled, 1=enabled, 2=default)",
        ))
        .attribute(tri_state_attribute(
            "freshness_checked",
            "Whether freshness is checked (0=disabled, 1=enabled, 2=default)",
        ))
        .attribute(
            AttributeBuilder::new("add_inherited_contact_group", AttributeType::Bool)
                .description("Whether to add inherited contact groups")
                .optional()
                .computed()
                .default_value(Dynamic::Bool(false))
                .build(),
        )
        .attribute(
            AttributeBuilder::new("add_inherited_contact", AttributeType::Bool)
                .description("Whether to add inherited contacts")
                .optional()
                .computed()
                .default_value(Dynamic::Bool(false))
                .build(),
        )
        .attribute(
            AttributeBuilder::new("is_activated", AttributeType::Bool)
                .description("Whether the host is activated")
                .optional()
                .computed()
                .default_value(Dynamic::Bool(true))
                .build(),
        )
        .attribute(
            AttributeBuilder::new("timezone_id", AttributeType::Number)
                .description("Timezone ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("severity_id", AttributeType::Number)
                .description("Severity ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("check_command_id", AttributeType::Number)
                .description("Check command ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new(
                "check_command_args",
                AttributeType::List(Box::new(AttributeType::String)),
            )
            .description("Check command arguments")
            .optional()
            .build(),
        )
        .attribute(
            AttributeBuilder::new("check_timeperiod_id", AttributeType::Number)
                .description("Check timeperiod ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("max_check_attempts", AttributeType::Number)
                .description("Number of retry attempts for host checks")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("normal_check_interval", AttributeType::Number)
                .description("Interval between normal checks")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("retry_check_interval", AttributeType::Number)
                .description("Interval between retry checks")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("notification_options", AttributeType::Number)
                .description(
                    "Notification options (sum of: 1=DOWN, 2=UNREACHABLE, 4=RECOVERY, 8=FLAPPING, 16=DOWNTIME_SCHEDULED)",
                )
                .optional()
                .validator(Arc::new(NotificationOptionsValidator))
                .build(),
        )
        .attribute(
            AttributeBuilder::new("notification_interval", AttributeType::Number)
                .description("Interval between notifications")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("notification_timeperiod_id", AttributeType::Number)
                .description("Notification timeperiod ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("first_notification_delay", AttributeType::Number)
                .description("Delay before first notification")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("recovery_notification_delay", AttributeType::Number)
                .description("Delay before recovery notification")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("acknowledgement_timeout", AttributeType::Number)
                .description("Acknowledgement timeout")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("freshness_threshold", AttributeType::Number)
                .description("Freshness threshold in seconds")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("low_flap_threshold", AttributeType::Number)
                .description("Low flap threshold")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("high_flap_threshold", AttributeType::Number)
                .description("High flap threshold")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("event_handler_command_id", AttributeType::Number)
                .description("Event handler command ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new(
                "event_handler_command_args",
                AttributeType::List(Box::new(AttributeType::String)),
            )
            .description("Event handler command arguments")
            .optional()
            .build(),
        )
        .attribute(
            AttributeBuilder::new("note_url", AttributeType::String)
                .description("URL with additional host information")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("note", AttributeType::String)
                .description("Additional notes about the host")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("action_url", AttributeType::String)
                .description("URL for additional host actions")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("icon_id", AttributeType::Number)
                .description("Icon ID")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("icon_alternative", AttributeType::String)
                .description("Alternative text for icon")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new("comment", AttributeType::String)
                .description("Comments about the host")
                .optional()
                .build(),
        )
        .attribute(
            AttributeBuilder::new(
                "categories",
                AttributeType::List(Box::new(AttributeType::Number)),
            )
            .description("List of category IDs")
            .optional()
            .build(),
        )
        .attribute(
            AttributeBuilder::new(
                "groups",
                AttributeType::List(Box::new(AttributeType::Number)),
            )
            .description("List of group IDs")
            .optional()
            .build(),
        )
        .attribute(
            AttributeBuilder::new(
                "templates",
                AttributeType::List(Box::new(AttributeType::Number)),
            )
            .description("List of template IDs")
            .optional()
            .build(),
        )
        .attribute(
            AttributeBuilder::new(
                "macros",
                AttributeType::List(Box::new(AttributeType::Map(Box::new(
                    AttributeType::String,
                )))),
            )
            .description("Host macros")
            .optional()
            .nested_type(NestedType {
                nesting: ObjectNestingMode::List,
                attributes: vec![
                    AttributeBuilder::new("name", AttributeType::String)
                        .description("Macro name")
                        .required()
                        .build(),
                    AttributeBuilder::new("value", AttributeType::String)
                        .description("Macro value")
                        .required()
                        .sensitive()
                        .build(),
                    AttributeBuilder::new("is_password", AttributeType::Bool)
                        .description("Whether the macro value is a password")
                        .required()
                        .build(),
                    AttributeBuilder::new("description", AttributeType::String)
                        .description("Macro description")
                        .optional()
                        .build(),
                ],
            })
            .build(),
        )
        .build()
}

#[async_trait]
impl Resource for HostResource {
    fn type_name(&self) -> &str {
        "centreon_host"
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: ResourceMetadataRequest,
    ) -> ResourceMetadataResponse {
        ResourceMetadataResponse {
            type_name: self.type_name().to_string(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: ResourceSchemaRequest,
    ) -> ResourceSchemaResponse {
        ResourceSchemaResponse {
            schema: host_schema(),
            diagnostics: vec![],
        }
    }

    async fn validate(
        &self,
        _ctx: Context,
        request: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse {
        let schema = host_schema();
        let mut diagnostics = vec![];

        for attribute in &schema.attributes {
            if attribute.validators.is_empty() {
                continue;
            }
            let path = AttributePath::new(&attribute.name);
            let value = match request.config.get_value(&path) {
                Ok(value) => value,
                Err(_) => continue,
            };
            if matches!(value, Dynamic::Null | Dynamic::Unknown) {
                continue;
            }
            for validator in &attribute.validators {
                let response = validator.validate(ValidatorRequest {
                    value: value.clone(),
                    path: path.clone(),
                });
                diagnostics.extend(response.diagnostics);
            }
        }

        ValidateResourceConfigResponse { diagnostics }
    }

    async fn create(
        &self,
        _ctx: Context,
        request: CreateResourceRequest,
    ) -> CreateResourceResponse {
        let mut diagnostics = vec![];

        let provider_data = match &self.provider_data {
            Some(data) => data,
            None => {
                diagnostics.push(Diagnostic::error(
                    "Provider not configured",
                    "Provider data was not properly configured",
                ));
                return CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                };
            }
        };

        let settings = match extract_host_settings(&request.config) {
            Ok(settings) => settings,
            Err(diag) => {
                diagnostics.push(diag);
                return CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                };
            }
        };

        match provider_data.client.create_host(&settings).await {
            Ok(()) => {
                if let Some(diag) = self
                    .reload_after(provider_data, settings.monitoring_server_id, "create")
                    .await
                {
                    diagnostics.push(diag);
                }
                CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Error creating host",
                    format!("Could not create host '{}': {}", settings.name, e),
                ));
                CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                }
            }
        }
    }

    async fn read(&self, _ctx: Context, request: ReadResourceRequest) -> ReadResourceResponse {
        let mut diagnostics = vec![];

        let name = match request.current_state.get_string(&AttributePath::new("name")) {
            Ok(name) => name,
            Err(_) => {
                // No addressing key in state, mark the resource for recreation
                return ReadResourceResponse {
                    new_state: None,
                    diagnostics,
                };
            }
        };

        let provider_data = match &self.provider_data {
            Some(data) => data,
            None => {
                diagnostics.push(Diagnostic::error(
                    "Provider not configured",
                    "Provider data was not properly configured",
                ));
                return ReadResourceResponse {
                    new_state: Some(request.current_state),
                    diagnostics,
                };
            }
        };

        match provider_data.client.find_host_by_name(&name).await {
            Ok(Some(host)) => {
                let mut new_state = request.current_state.clone();

                let _ = new_state.set_string(&AttributePath::new("name"), host.name);
                let _ = new_state.set_string(&AttributePath::new("address"), host.address);
                let _ = new_state.set_i64(
                    &AttributePath::new("monitoring_server_id"),
                    host.monitoring_server.id,
                );
                if let Some(alias) = host.alias {
                    let _ = new_state.set_string(&AttributePath::new("alias"), alias);
                }
                if !host.templates.is_empty() {
                    let _ = new_state
                        .set_list(&AttributePath::new("templates"), id_list(&host.templates));
                }
                if !host.groups.is_empty() {
                    let _ =
                        new_state.set_list(&AttributePath::new("groups"), id_list(&host.groups));
                }
                if !host.categories.is_empty() {
                    let _ = new_state
                        .set_list(&AttributePath::new("categories"), id_list(&host.categories));
                }
                let _ = new_state.set_bool(&AttributePath::new("is_activated"), host.is_activated);

                ReadResourceResponse {
                    new_state: Some(new_state),
                    diagnostics,
                }
            }
            Ok(None) => {
                // Gone remotely; absence, not an error
                tracing::debug!(host = %name, "Host no longer exists remotely");
                ReadResourceResponse {
                    new_state: None,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Failed to read host",
                    format!("Could not read host '{}': {}", name, e),
                ));
                ReadResourceResponse {
                    new_state: Some(request.current_state),
                    diagnostics,
                }
            }
        }
    }

    async fn update(
        &self,
        _ctx: Context,
        request: UpdateResourceRequest,
    ) -> UpdateResourceResponse {
        let mut diagnostics = vec![];

        let provider_data = match &self.provider_data {
            Some(data) => data,
            None => {
                diagnostics.push(Diagnostic::error(
                    "Provider not configured",
                    "Provider data was not properly configured",
                ));
                return UpdateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                };
            }
        };

        // Resolve through the name currently tracked in state; the payload
        // below may carry a new name
        let name = match request.prior_state.get_string(&AttributePath::new("name")) {
            Ok(name) => name,
            Err(_) => {
                diagnostics.push(Diagnostic::error(
                    "Missing host name",
                    "Prior state does not contain the host name",
                ));
                return UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                };
            }
        };

        let settings = match extract_host_settings(&request.config) {
            Ok(settings) => settings,
            Err(diag) => {
                diagnostics.push(diag);
                return UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                };
            }
        };

        let host = match provider_data.client.require_host_by_name(&name).await {
            Ok(host) => host,
            Err(e) => {
                let detail = if e.is_not_found() {
                    format!("Host '{}' no longer exists remotely; cannot update", name)
                } else {
                    format!("Could not look up host '{}': {}", name, e)
                };
                diagnostics.push(Diagnostic::error("Error updating host", detail));
                return UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                };
            }
        };

        match provider_data.client.update_host(host.id, &settings).await {
            Ok(()) => {
                if let Some(diag) = self
                    .reload_after(provider_data, settings.monitoring_server_id, "update")
                    .await
                {
                    diagnostics.push(diag);
                }
                UpdateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Error updating host",
                    format!("Could not update host '{}': {}", name, e),
                ));
                UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                }
            }
        }
    }

    async fn delete(
        &self,
        _ctx: Context,
        request: DeleteResourceRequest,
    ) -> DeleteResourceResponse {
        let mut diagnostics = vec![];

        let provider_data = match &self.provider_data {
            Some(data) => data,
            None => {
                return DeleteResourceResponse { diagnostics };
            }
        };

        let name = match request.prior_state.get_string(&AttributePath::new("name")) {
            Ok(name) => name,
            Err(_) => {
                // Nothing to address; consider it deleted
                return DeleteResourceResponse { diagnostics };
            }
        };

        let host = match provider_data.client.find_host_by_name(&name).await {
            Ok(Some(host)) => host,
            Ok(None) => {
                // Already gone; deletion is idempotent
                tracing::debug!(host = %name, "Host already absent, nothing to delete");
                return DeleteResourceResponse { diagnostics };
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Error deleting host",
                    format!("Could not look up host '{}': {}", name, e),
                ));
                return DeleteResourceResponse { diagnostics };
            }
        };

        match provider_data.client.delete_host(host.id).await {
            Ok(()) => {
                if let Some(diag) = self
                    .reload_after(provider_data, host.monitoring_server.id, "delete")
                    .await
                {
                    diagnostics.push(diag);
                }
                DeleteResourceResponse { diagnostics }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Error deleting host",
                    format!("Could not delete host '{}': {}", name, e),
                ));
                DeleteResourceResponse { diagnostics }
            }
        }
    }
}

impl HostResource {
    /// Post-mutation hook: fire the configuration reload when enabled. The
    /// primary mutation stands either way; a reload failure is attributed
    /// to the operation that triggered it.
    async fn reload_after(
        &self,
        provider_data: &CentreonProviderData,
        monitoring_server_id: i64,
        operation: &str,
    ) -> Option<Diagnostic> {
        if !provider_data.auto_reload {
            return None;
        }

        match provider_data
            .client
            .reload_monitoring_server(monitoring_server_id)
            .await
        {
            Ok(()) => None,
            Err(e) => Some(Diagnostic::error(
                format!("Host {} succeeded but configuration reload failed", operation),
                format!(
                    "The host change was applied; reloading monitoring server {} failed: {}",
                    monitoring_server_id, e
                ),
            )),
        }
    }
}

fn id_list(refs: &[NamedRef]) -> Vec<Dynamic> {
    refs.iter().map(|r| Dynamic::Number(r.id as f64)).collect()
}

/// Extract the desired host configuration from the Terraform config value
pub(crate) fn extract_host_settings(config: &DynamicValue) -> Result<HostSettings, Diagnostic> {
    let monitoring_server_id = config
        .get_i64(&AttributePath::new("monitoring_server_id"))
        .map_err(|_| {
            Diagnostic::error(
                "Missing monitoring_server_id",
                "The 'monitoring_server_id' attribute is required",
            )
        })?;
    let name = config
        .get_string(&AttributePath::new("name"))
        .map_err(|_| Diagnostic::error("Missing name", "The 'name' attribute is required"))?;
    let address = config
        .get_string(&AttributePath::new("address"))
        .map_err(|_| {
            Diagnostic::error("Missing address", "The 'address' attribute is required")
        })?;

    let mut macros = Vec::new();
    if let Ok(items) = config.get_list(&AttributePath::new("macros")) {
        for item in items {
            let entry = DynamicValue::new(item);
            let macro_name = entry
                .get_string(&AttributePath::new("name"))
                .map_err(|_| {
                    Diagnostic::error("Invalid macro", "Each macro requires a 'name' attribute")
                })?;
            macros.push(HostMacro {
                name: macro_name,
                value: entry.get_string(&AttributePath::new("value")).ok(),
                is_password: entry
                    .get_bool(&AttributePath::new("is_password"))
                    .unwrap_or(false),
                description: entry.get_string(&AttributePath::new("description")).ok(),
            });
        }
    }

    let get_str = |name: &str| config.get_string(&AttributePath::new(name)).ok();
    let get_int = |name: &str| config.get_i64(&AttributePath::new(name)).ok();
    let get_bool = |name: &str| config.get_bool(&AttributePath::new(name)).ok();
    let get_tri = |name: &str| TriState::from_config(get_int(name));

    Ok(HostSettings {
        monitoring_server_id,
        name,
        address,
        alias: get_str("alias"),
        snmp_community: get_str("snmp_community"),
        snmp_version: get_str("snmp_version"),
        geo_coords: get_str("geo_coords"),
        timezone_id: get_int("timezone_id"),
        severity_id: get_int("severity_id"),
        check_command_id: get_int("check_command_id"),
        check_command_args: config
            .get_string_list(&AttributePath::new("check_command_args"))
            .ok(),
        check_timeperiod_id: get_int("check_timeperiod_id"),
        max_check_attempts: get_int("max_check_attempts"),
        normal_check_interval: get_int("normal_check_interval"),
        retry_check_interval: get_int("retry_check_interval"),
        active_check_enabled: get_tri("active_check_enabled"),
        passive_check_enabled: get_tri("passive_check_enabled"),
        notification_enabled: get_tri("notification_enabled"),
        notification_options: get_int("notification_options"),
        notification_interval: get_int("notification_interval"),
        notification_timeperiod_id: get_int("notification_timeperiod_id"),
        add_inherited_contact_group: get_bool("add_inherited_contact_group"),
        add_inherited_contact: get_bool("add_inherited_contact"),
        first_notification_delay: get_int("first_notification_delay"),
        recovery_notification_delay: get_int("recovery_notification_delay"),
        acknowledgement_timeout: get_int("acknowledgement_timeout"),
        freshness_checked: get_tri("freshness_checked"),
        freshness_threshold: get_int("freshness_threshold"),
        flap_detection_enabled: get_tri("flap_detection_enabled"),
        low_flap_threshold: get_int("low_flap_threshold"),
        high_flap_threshold: get_int("high_flap_threshold"),
        event_handler_enabled: get_tri("event_handler_enabled"),
        event_handler_command_id: get_int("event_handler_command_id"),
        event_handler_command_args: config
            .get_string_list(&AttributePath::new("event_handler_command_args"))
            .ok(),
        note_url: get_str("note_url"),
        note: get_str("note"),
        action_url: get_str("action_url"),
        icon_id: get_int("icon_id"),
        icon_alternative: get_str("icon_alternative"),
        comment: get_str("comment"),
        is_activated: get_bool("is_activated"),
        categories: config.get_i64_list(&AttributePath::new("categories")).ok(),
        groups: config.get_i64_list(&AttributePath::new("groups")).ok(),
        templates: config.get_i64_list(&AttributePath::new("templates")).ok(),
        macros,
    })
}

#[async_trait]
impl ResourceWithConfigure for HostResource {
    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureResourceRequest,
    ) -> ConfigureResourceResponse {
        let mut diagnostics = vec![];

        if let Some(data) = request.provider_data {
            if let Some(provider_data) = data.downcast_ref::<CentreonProviderData>() {
                self.provider_data = Some(provider_data.clone());
            } else {
                diagnostics.push(Diagnostic::error(
                    "Invalid provider data",
                    "Failed to extract CentreonProviderData from provider data",
                ));
            }
        } else {
            diagnostics.push(Diagnostic::error(
                "No provider data",
                "No provider data was provided to the resource",
            ));
        }

        ConfigureResourceResponse { diagnostics }
    }
}
