//! Hosts data source implementation

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
use crate::api::{Host, NamedRef};
use crate::CentreonProviderData;

#[derive(Default)]
pub struct HostsDataSource {
    provider_data: Option<CentreonProviderData>,
}

impl HostsDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn named_ref_entry(reference: &NamedRef) -> Dynamic {
    Dynamic::Map(HashMap::from([
        ("id".to_string(), Dynamic::Number(reference.id as f64)),
        ("name".to_string(), Dynamic::String(reference.name.clone())),
    ]))
}

fn host_entry(host: &Host) -> Dynamic {
    let mut entry = HashMap::from([
        ("id".to_string(), Dynamic::Number(host.id as f64)),
        ("name".to_string(), Dynamic::String(host.name.clone())),
        ("address".to_string(), Dynamic::String(host.address.clone())),
        (
            "monitoring_server".to_string(),
            named_ref_entry(&host.monitoring_server),
        ),
        (
            "templates".to_string(),
            Dynamic::List(host.templates.iter().map(named_ref_entry).collect()),
        ),
        (
            "groups".to_string(),
            Dynamic::List(host.groups.iter().map(named_ref_entry).collect()),
        ),
        (
            "categories".to_string(),
            Dynamic::List(
                host.categories
                    .iter()
                    .map(|c| Dynamic::String(c.name.clone()))
                    .collect(),
            ),
        ),
        ("is_activated".to_string(), Dynamic::Bool(host.is_activated)),
    ]);

    if let Some(alias) = &host.alias {
        entry.insert("alias".to_string(), Dynamic::String(alias.clone()));
    }

    // Numeric settings are surfaced as strings in this data source
    let string_fields = [
        ("normal_check_interval", host.normal_check_interval),
        ("retry_check_interval", host.retry_check_interval),
        ("notification_timeperiod", host.notification_timeperiod_id),
        ("check_timeperiod", host.check_timeperiod_id),
        ("severity", host.severity_id),
    ];
    for (key, value) in string_fields {
        if let Some(v) = value {
            entry.insert(key.to_string(), Dynamic::String(v.to_string()));
        }
    }

    Dynamic::Map(entry)
}

#[async_trait]
impl DataSource for HostsDataSource {
    fn type_name(&self) -> &str {
        "centreon_hosts"
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
        let named_ref_object = AttributeType::Object(HashMap::from([
            ("id".to_string(), AttributeType::Number),
            ("name".to_string(), AttributeType::String),
        ]));

        let host_object = AttributeType::Object(HashMap::from([
            ("id".to_string(), AttributeType::Number),
            ("name".to_string(), AttributeType::String),
            ("alias".to_string(), AttributeType::String),
            ("address".to_string(), AttributeType::String),
            ("monitoring_server".to_string(), named_ref_object.clone()),
            (
                "templates".to_string(),
                AttributeType::List(Box::new(named_ref_object.clone())),
            ),
            (
                "groups".to_string(),
                AttributeType::List(Box::new(named_ref_object)),
            ),
            (
                "categories".to_string(),
                AttributeType::List(Box::new(AttributeType::String)),
            ),
            ("normal_check_interval".to_string(), AttributeType::String),
            ("retry_check_interval".to_string(), AttributeType::String),
            (
                "notification_timeperiod".to_string(),
                AttributeType::String,
            ),
            ("check_timeperiod".to_string(), AttributeType::String),
            ("severity".to_string(), AttributeType::String),
            ("is_activated".to_string(), AttributeType::Bool),
        ]));

        let schema = SchemaBuilder::new()
            .version(0)
            .description("Searches for Centreon hosts.")
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
                AttributeBuilder::new("hosts", AttributeType::List(Box::new(host_object)))
                    .description("List of hosts matching the search criteria")
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

        tracing::info!(
            limit = params.limit,
            page = params.page,
            "Fetching hosts"
        );

        match provider_data.client.list_hosts(&params).await {
            Ok(hosts) => {
                tracing::debug!(count = hosts.len(), "Retrieved hosts");

                let entries: Vec<Dynamic> = hosts.iter().map(host_entry).collect();

                let mut state = request.config.clone();
                let _ = state.set_list(&AttributePath::new("hosts"), entries);
                let _ = state.set_string(&AttributePath::new("id"), "hosts".to_string());

                ReadDataSourceResponse {
                    state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error("Unable to Read Hosts", e.to_string()));
                ReadDataSourceResponse {
                    state: DynamicValue::null(),
                    diagnostics,
                }
            }
        }
    }
}

#[async_trait]
impl DataSourceWithConfigure for HostsDataSource {
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
