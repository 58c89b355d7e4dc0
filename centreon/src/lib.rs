//! Terraform provider for the Centreon monitoring platform
//!
//! Exposes the `centreon_host` resource plus read-only data sources over the
//! platform's v2 REST API. The provider is configured once with connection
//! settings; everything downstream shares one immutable API client.

pub mod api;
pub mod data_sources;
pub mod provider_data;
pub mod resources;
pub mod validation;

pub use provider_data::CentreonProviderData;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tfcore::context::Context;
use tfcore::provider::{
    ConfigureProviderRequest, ConfigureProviderResponse, DataSourceFactory,
    Provider, ProviderMetadataRequest, ProviderMetadataResponse, ProviderSchemaRequest,
    ProviderSchemaResponse, ResourceFactory,
};
use tfcore::schema::{AttributeBuilder, AttributeType, SchemaBuilder};
use tfcore::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};

use api::{Client, ClientConfig};
use data_sources::{
    HostGroupsDataSource, HostTemplatesDataSource, HostsDataSource, MonitoringServersDataSource,
    PlatformInfoDataSource,
};
use resources::HostResource;

pub struct CentreonProvider {
    version: String,
    provider_data: Option<CentreonProviderData>,
}

impl Default for CentreonProvider {
    fn default() -> Self {
        Self::new("dev")
    }
}

impl CentreonProvider {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            provider_data: None,
        }
    }
}

fn config_or_env(config: &DynamicValue, name: &str, env: &str) -> Option<String> {
    config
        .get_string(&AttributePath::new(name))
        .ok()
        .or_else(|| std::env::var(env).ok())
}

#[async_trait]
impl Provider for CentreonProvider {
    fn type_name(&self) -> &str {
        "centreon"
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: ProviderMetadataRequest,
    ) -> ProviderMetadataResponse {
        ProviderMetadataResponse {
            type_name: self.type_name().to_string(),
            version: self.version.clone(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: ProviderSchemaRequest,
    ) -> ProviderSchemaResponse {
        let schema = SchemaBuilder::new()
            .version(0)
            .attribute(
                AttributeBuilder::new("protocol", AttributeType::String)
                    .description("Protocol to use for API calls (http or https)")
                    .required()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("server", AttributeType::String)
                    .description("Centreon server hostname")
                    .required()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("port", AttributeType::String)
                    .description("Centreon server port")
                    .required()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("api_version", AttributeType::String)
                    .description("API version to use (e.g., 'latest')")
                    .required()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("api_key", AttributeType::String)
                    .description("API key for authentication")
                    .required()
                    .sensitive()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("auto_reload", AttributeType::Bool)
                    .description(
                        "Regenerate and reload the monitoring configuration after each successful host change",
                    )
                    .optional()
                    .default_value(Dynamic::Bool(false))
                    .build(),
            )
            .build();

        ProviderSchemaResponse {
            schema,
            diagnostics: vec![],
        }
    }

    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse {
        let mut diagnostics = vec![];

        let fields = [
            ("protocol", "CENTREON_PROTOCOL"),
            ("server", "CENTREON_SERVER"),
            ("port", "CENTREON_PORT"),
            ("api_version", "CENTREON_API_VERSION"),
            ("api_key", "CENTREON_API_KEY"),
        ];

        let mut values = HashMap::new();
        for (name, env) in fields {
            match config_or_env(&request.config, name, env) {
                Some(value) => {
                    values.insert(name, value);
                }
                None => {
                    diagnostics.push(Diagnostic::error(
                        "Missing Configuration",
                        format!(
                            "{} is required (set in provider config or {} env var)",
                            name, env
                        ),
                    ));
                }
            }
        }

        if !diagnostics.is_empty() {
            return ConfigureProviderResponse {
                provider_data: None,
                diagnostics,
            };
        }

        let auto_reload = request
            .config
            .get_bool(&AttributePath::new("auto_reload"))
            .ok()
            .or_else(|| {
                std::env::var("CENTREON_AUTO_RELOAD")
                    .ok()
                    .and_then(|v| v.parse::<bool>().ok())
            })
            .unwrap_or(false);

        let config = ClientConfig {
            protocol: values["protocol"].clone(),
            server: values["server"].clone(),
            port: values["port"].clone(),
            api_version: values["api_version"].clone(),
            api_key: values["api_key"].clone(),
        };

        match Client::new(config) {
            Ok(client) => {
                tracing::debug!(base_url = client.base_url(), "Centreon client configured");
                let data = CentreonProviderData::new(client, auto_reload);
                self.provider_data = Some(data.clone());
                ConfigureProviderResponse {
                    provider_data: Some(Arc::new(data)),
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Failed to create API client",
                    e.to_string(),
                ));
                ConfigureProviderResponse {
                    provider_data: None,
                    diagnostics,
                }
            }
        }
    }

    fn resources(&self) -> HashMap<String, ResourceFactory> {
        let mut resources: HashMap<String, ResourceFactory> = HashMap::new();
        resources.insert("centreon_host".to_string(), || {
            Box::new(HostResource::new())
        });
        resources
    }

    fn data_sources(&self) -> HashMap<String, DataSourceFactory> {
        let mut data_sources: HashMap<String, DataSourceFactory> = HashMap::new();
        data_sources.insert("centreon_hosts".to_string(), || {
            Box::new(HostsDataSource::new())
        });
        data_sources.insert("centreon_host_groups".to_string(), || {
            Box::new(HostGroupsDataSource::new())
        });
        data_sources.insert("centreon_host_templates".to_string(), || {
            Box::new(HostTemplatesDataSource::new())
        });
        data_sources.insert("centreon_monitoring_servers".to_string(), || {
            Box::new(MonitoringServersDataSource::new())
        });
        data_sources.insert("centreon_platform_info".to_string(), || {
            Box::new(PlatformInfoDataSource::new())
        });
        data_sources
    }
}
