//! Host templates data source implementation

use async_trait::async_trait;
use std::collections::HashMap;
use tfcore::context::Context;
use tfcore::data_source::{
    ConfigureDataSourceRequest, ConfigureDataSourceResponse, DataSource, DataSourceMetadataRequest,
    DataSourceMetadataResponse, DataSourceSchemaRequest, DataSourceSchemaResponse,
    DataSourceWithConfigure, ReadDataSourceRequest, ReadDataSourceResponse,
    ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse,
};
use tfcore::schema::{AttributeBuilder, AttributeType, SchemaBuilder};
use tfcore::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};

use super::{list_params_from_config, search_attribute};
use crate::api::HostTemplate;
use crate::CentreonProviderData;

#[derive(Default)]
pub struct HostTemplatesDataSource {
    provider_data: Option<CentreonProviderData>,
}

impl HostTemplatesDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn template_entry(template: &HostTemplate) -> Dynamic {
    let mut entry = HashMap::from([
        ("id".to_string(), Dynamic::Number(template.id as f64)),
        ("name".to_string(), Dynamic::String(template.name.clone())),
        ("is_locked".to_string(), Dynamic::Bool(template.is_locked)),
        (
            "add_inherited_contact_group".to_string(),
            Dynamic::Bool(template.add_inherited_contact_group),
        ),
        (
            "add_inherited_contact".to_string(),
            Dynamic::Bool(template.add_inherited_contact),
        ),
        (
            "check_command_args".to_string(),
            Dynamic::List(
                template
                    .check_command_args
                    .iter()
                    .map(|a| Dynamic::String(a.clone()))
                    .collect(),
            ),
        ),
        (
            "event_handler_command_args".to_string(),
            Dynamic::List(
                template
                    .event_handler_command_args
                    .iter()
                    .map(|a| Dynamic::String(a.clone()))
                    .collect(),
            ),
        ),
    ]);

    let strings = [
        ("alias", &template.alias),
        ("snmp_version", &template.snmp_version),
        ("note_url", &template.note_url),
        ("note", &template.note),
        ("action_url", &template.action_url),
        ("icon_alternative", &template.icon_alternative),
        ("comment", &template.comment),
    ];
    for (key, value) in strings {
        if let Some(v) = value {
            entry.insert(key.to_string(), Dynamic::String(v.clone()));
        }
    }

    let numbers = [
        ("timezone_id", template.timezone_id),
        ("severity_id", template.severity_id),
        ("check_command_id", template.check_command_id),
        ("check_timeperiod_id", template.check_timeperiod_id),
        ("max_check_attempts", template.max_check_attempts),
        ("normal_check_interval", template.normal_check_interval),
        ("retry_check_interval", template.retry_check_interval),
        ("active_check_enabled", template.active_check_enabled),
        ("passive_check_enabled", template.passive_check_enabled),
        ("notification_enabled", template.notification_enabled),
        ("notification_options", template.notification_options),
        ("notification_interval", template.notification_interval),
        (
            "notification_timeperiod_id",
            template.notification_timeperiod_id,
        ),
        (
            "first_notification_delay",
            template.first_notification_delay,
        ),
        (
            "recovery_notification_delay",
            template.recovery_notification_delay,
        ),
        ("acknowledgement_timeout", template.acknowledgement_timeout),
        ("freshness_checked", template.freshness_checked),
        ("freshness_threshold", template.freshness_threshold),
        ("flap_detection_enabled", template.flap_detection_enabled),
        ("low_flap_threshold", template.low_flap_threshold),
        ("high_flap_threshold", template.high_flap_threshold),
        ("event_handler_enabled", template.event_handler_enabled),
        ("event_handler_command_id", template.event_handler_command_id),
        ("icon_id", template.icon_id),
    ];
    for (key, value) in numbers {
        if let Some(v) = value {
            entry.insert(key.to_string(), Dynamic::Number(v as f64));
        }
    }

    Dynamic::Map(entry)
}

#[async_trait]
impl DataSource for HostTemplatesDataSource {
    fn type_name(&self) -> &str {
        "centreon_host_templates"
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: DataSourceMetadataRequest,
    ) -> DataSourceMetadataResponse {
        DataSourceMetadataResponse {
            type_name: self.type_name().to_string(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: DataSourceSchemaRequest,
    ) -> DataSourceSchemaResponse {
        let template_object = AttributeType::Object(HashMap::from([
            ("id".to_string(), AttributeType::Number),
            ("name".to_string(), AttributeType::String),
            ("alias".to_string(), AttributeType::String),
            ("snmp_version".to_string(), AttributeType::String),
            ("timezone_id".to_string(), AttributeType::Number),
            ("severity_id".to_string(), AttributeType::Number),
            ("check_command_id".to_string(), AttributeType::Number),
            (
                "check_command_args".to_string(),
                AttributeType::List(Box::new(AttributeType::String)),
            ),
            ("check_timeperiod_id".to_string(), AttributeType::Number),
            ("max_check_attempts".to_string(), AttributeType::Number),
            ("normal_check_interval".to_string(), AttributeType::Number),
            ("retry_check_interval".to_string(), AttributeType::Number),
            ("active_check_enabled".to_string(), AttributeType::Number),
            ("passive_check_enabled".to_string(), AttributeType::Number),
            ("notification_enabled".to_string(), AttributeType::Number),
            ("notification_options".to_string(), AttributeType::Number),
            ("notification_interval".to_string(), AttributeType::Number),
            (
                "notification_timeperiod_id".to_string(),
                AttributeType::Number,
            ),
            (
                "add_inherited_contact_group".to_string(),
                AttributeType::Bool,
            ),
            ("add_inherited_contact".to_string(), AttributeType::Bool),
            (
                "first_notification_delay".to_string(),
                AttributeType::Number,
            ),
            (
                "recovery_notification_delay".to_string(),
                AttributeType::Number,
            ),
            (
                "acknowledgement_timeout".to_string(),
                AttributeType::Number,
            ),
            ("freshness_checked".to_string(), AttributeType::Number),
            ("freshness_threshold".to_string(), AttributeType::Number),
            ("flap_detection_enabled".to_string(), AttributeType::Number),
            ("low_flap_threshold".to_string(), AttributeType::Number),
            ("high_flap_threshold".to_string(), AttributeType::Number),
            ("event_handler_enabled".to_string(), AttributeType::Number),
            (
                "event_handler_command_id".to_string(),
                AttributeType::Number,
            ),
            (
                "event_handler_command_args".to_string(),
                AttributeType::List(Box::new(AttributeType::String)),
            ),
            ("note_url".to_string(), AttributeType::String),
            ("note".to_string(), AttributeType::String),
            ("action_url".to_string(), AttributeType::String),
            ("icon_id".to_string(), AttributeType::Number),
            ("icon_alternative".to_string(), AttributeType::String),
            ("comment".to_string(), AttributeType::String),
            ("is_locked".to_string(), AttributeType::Bool),
        ]));

        let schema = SchemaBuilder::new()
            .version(0)
            .description("Fetches the list of host templates.")
            .attribute(
                AttributeBuilder::new("limit", AttributeType::Number)
                    .description("Number of results to return")
                    .required()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("page", AttributeType::Number)
                    .description("Page number")
                    .required()
                    .build(),
            )
            .attribute(search_attribute())
            .attribute(
                AttributeBuilder::new(
                    "templates",
                    AttributeType::List(Box::new(template_object)),
                )
                .description("List of host templates")
                .computed()
                .build(),
            )
            .attribute(
                AttributeBuilder::new("id", AttributeType::String)
                    .description("Placeholder identifier")
                    .computed()
                    .build(),
            )
            .build();

        DataSourceSchemaResponse {
            schema,
            diagnostics: vec![],
        }
    }

    async fn validate(
        &self,
        _ctx: Context,
        _request: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse {
        ValidateDataSourceConfigResponse {
            diagnostics: vec![],
        }
    }

    async fn read(&self, _ctx: Context, request: ReadDataSourceRequest) -> ReadDataSourceResponse {
        let mut diagnostics = vec![];

        let provider_data = match &self.provider_data {
            Some(data) => data,
            None => {
                diagnostics.push(Diagnostic::error(
                    "Provider not configured",
                    "Provider data was not properly configured",
                ));
                return ReadDataSourceResponse {
                    state: DynamicValue::null(),
                    diagnostics,
                };
            }
        };

        let params = match list_params_from_config(&request.config) {
            Ok(params) => params,
            Err(diag) => {
                diagnostics.push(diag);
                return ReadDataSourceResponse {
                    state: DynamicValue::null(),
                    diagnostics,
                };
            }
        };

        match provider_data.client.list_host_templates(&params).await {
            Ok(templates) => {
                let entries: Vec<Dynamic> = templates.iter().map(template_entry).collect();

                let mut state = request.config.clone();
                let _ = state.set_list(&AttributePath::new("templates"), entries);
                let _ = state.set_string(&AttributePath::new("id"), "host_templates".to_string());

                ReadDataSourceResponse {
                    state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Unable to Read Host Templates",
                    e.to_string(),
                ));
                ReadDataSourceResponse {
                    state: DynamicValue::null(),
                    diagnostics,
                }
            }
        }
    }
}

#[async_trait]
impl DataSourceWithConfigure for HostTemplatesDataSource {
    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureDataSourceRequest,
    ) -> ConfigureDataSourceResponse {
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
                "No provider data was provided to the data source",
            ));
        }

        ConfigureDataSourceResponse { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_helpers::create_test_client;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn read_keeps_unset_template_fields_absent() {
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
                        "max_check_attempts": 3,
                        "active_check_enabled": 2,
                        "is_locked": false
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let mut data_source = HostTemplatesDataSource::new();
        let data = CentreonProviderData {
            client: Arc::new(create_test_client(&server.url())),
            auto_reload: false,
        };
        data_source
            .configure(
                Context::new(),
                ConfigureDataSourceRequest {
                    provider_data: Some(Arc::new(data)),
                },
            )
            .await;

        let mut obj = HashMap::new();
        obj.insert("limit".to_string(), Dynamic::Number(10.0));
        obj.insert("page".to_string(), Dynamic::Number(1.0));

        let response = data_source
            .read(
                Context::new(),
                ReadDataSourceRequest {
                    type_name: "centreon_host_templates".to_string(),
                    config: DynamicValue::new(Dynamic::Map(obj)),
                },
            )
            .await;

        assert!(response.diagnostics.is_empty());
        let templates = response
            .state
            .get_list(&AttributePath::new("templates"))
            .unwrap();
        assert_eq!(templates.len(), 1);

        let tpl = DynamicValue::new(templates[0].clone());
        assert_eq!(
            tpl.get_string(&AttributePath::new("alias")).unwrap(),
            "Generic"
        );
        assert_eq!(
            tpl.get_i64(&AttributePath::new("max_check_attempts"))
                .unwrap(),
            3
        );
        // The raw platform flag value is surfaced untouched
        assert_eq!(
            tpl.get_i64(&AttributePath::new("active_check_enabled"))
                .unwrap(),
            2
        );
        // Unset scalars stay absent instead of becoming zero values
        assert!(tpl.get_i64(&AttributePath::new("timezone_id")).is_err());
        assert!(tpl.get_string(&AttributePath::new("snmp_version")).is_err());
    }
}
