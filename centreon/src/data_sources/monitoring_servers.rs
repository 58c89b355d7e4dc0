//! Monitoring servers data source implementation

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
use crate::api::MonitoringServer;
use crate::CentreonProviderData;

#[derive(Default)]
pub struct MonitoringServersDataSource {
    provider_data: Option<CentreonProviderData>,
}

impl MonitoringServersDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn server_entry(server: &MonitoringServer) -> Dynamic {
    let mut entry = HashMap::from([
        ("id".to_string(), Dynamic::Number(server.id as f64)),
        ("name".to_string(), Dynamic::String(server.name.clone())),
        ("is_localhost".to_string(), Dynamic::Bool(server.is_localhost)),
        ("is_default".to_string(), Dynamic::Bool(server.is_default)),
        ("is_updated".to_string(), Dynamic::Bool(server.is_updated)),
        ("is_activate".to_string(), Dynamic::Bool(server.is_activate)),
    ]);
    if let Some(address) = &server.address {
        entry.insert("address".to_string(), Dynamic::String(address.clone()));
    }
    if let Some(ssh_port) = server.ssh_port {
        entry.insert("ssh_port".to_string(), Dynamic::Number(ssh_port as f64));
    }
    if let Some(last_restart) = &server.last_restart {
        entry.insert(
            "last_restart".to_string(),
            Dynamic::String(last_restart.clone()),
        );
    }
    Dynamic::Map(entry)
}

#[async_trait]
impl DataSource for MonitoringServersDataSource {
    fn type_name(&self) -> &str {
        "centreon_monitoring_servers"
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
        let server_object = AttributeType::Object(HashMap::from([
            ("id".to_string(), AttributeType::Number),
            ("name".to_string(), AttributeType::String),
            ("address".to_string(), AttributeType::String),
            ("is_localhost".to_string(), AttributeType::Bool),
            ("is_default".to_string(), AttributeType::Bool),
            ("ssh_port".to_string(), AttributeType::Number),
            ("last_restart".to_string(), AttributeType::String),
            ("is_updated".to_string(), AttributeType::Bool),
            ("is_activate".to_string(), AttributeType::Bool),
        ]));

        let schema = SchemaBuilder::new()
            .version(0)
            .description("Fetches the list of monitoring servers.")
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
                AttributeBuilder::new("servers", AttributeType::List(Box::new(server_object)))
                    .description("List of monitoring servers")
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

        match provider_data.client.list_monitoring_servers(&params).await {
            Ok(servers) => {
                let entries: Vec<Dynamic> = servers.iter().map(server_entry).collect();

                let mut state = request.config.clone();
                let _ = state.set_list(&AttributePath::new("servers"), entries);
                let _ = state.set_string(
                    &AttributePath::new("id"),
                    "monitoring_servers".to_string(),
                );

                ReadDataSourceResponse {
                    state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Unable to Read Monitoring Servers",
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
impl DataSourceWithConfigure for MonitoringServersDataSource {
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
