//! Platform info data source implementation

use async_trait::async_trait;
use tfcore::context::Context;
use tfcore::data_source::{
    ConfigureDataSourceRequest, ConfigureDataSourceResponse, DataSource, DataSourceMetadataRequest,
    DataSourceMetadataResponse, DataSourceSchemaRequest, DataSourceSchemaResponse,
    DataSourceWithConfigure, ReadDataSourceRequest, ReadDataSourceResponse,
    ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse,
};
use tfcore::schema::{AttributeBuilder, AttributeType, SchemaBuilder};
use tfcore::types::{AttributePath, Diagnostic, DynamicValue};

use crate::CentreonProviderData;

#[derive(Default)]
pub struct PlatformInfoDataSource {
    provider_data: Option<CentreonProviderData>,
}

impl PlatformInfoDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataSource for PlatformInfoDataSource {
    fn type_name(&self) -> &str {
        "centreon_platform_info"
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
        let schema = SchemaBuilder::new()
            .version(0)
            .description("Fetches Centreon platform installation status information.")
            .attribute(
                AttributeBuilder::new("is_installed", AttributeType::Bool)
                    .description("Indicates if Centreon is installed")
                    .computed()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("has_upgrade_available", AttributeType::Bool)
                    .description("Indicates if an upgrade is available")
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

    async fn read(&self, _ctx: Context, _request: ReadDataSourceRequest) -> ReadDataSourceResponse {
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

        match provider_data.client.get_platform_info().await {
            Ok(info) => {
                let mut state = DynamicValue::empty_object();
                let _ = state.set_bool(&AttributePath::new("is_installed"), info.is_installed);
                let _ = state.set_bool(
                    &AttributePath::new("has_upgrade_available"),
                    info.has_upgrade_available,
                );
                let _ = state.set_string(&AttributePath::new("id"), "platform_info".to_string());

                ReadDataSourceResponse {
                    state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Unable to Read Platform Info",
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
impl DataSourceWithConfigure for PlatformInfoDataSource {
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
    use std::sync::Arc;

    async fn configured(url: &str) -> PlatformInfoDataSource {
        let mut data_source = PlatformInfoDataSource::new();
        let data = CentreonProviderData {
            client: Arc::new(create_test_client(url)),
            auto_reload: false,
        };
        let response = data_source
            .configure(
                Context::new(),
                ConfigureDataSourceRequest {
                    provider_data: Some(Arc::new(data)),
                },
            )
            .await;
        assert!(response.diagnostics.is_empty());
        data_source
    }

    #[tokio::test]
    async fn read_populates_platform_state() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/centreon/api/latest/platform/installation/status")
            .with_body(r#"{"is_installed":true,"has_upgrade_available":true}"#)
            .create_async()
            .await;

        let data_source = configured(&server.url()).await;
        let response = data_source
            .read(
                Context::new(),
                ReadDataSourceRequest {
                    type_name: "centreon_platform_info".to_string(),
                    config: DynamicValue::empty_object(),
                },
            )
            .await;

        assert!(response.diagnostics.is_empty());
        assert!(response
            .state
            .get_bool(&AttributePath::new("is_installed"))
            .unwrap());
        assert_eq!(
            response.state.get_string(&AttributePath::new("id")).unwrap(),
            "platform_info"
        );
    }

    #[tokio::test]
    async fn read_without_provider_data_fails() {
        let data_source = PlatformInfoDataSource::new();
        let response = data_source
            .read(
                Context::new(),
                ReadDataSourceRequest {
                    type_name: "centreon_platform_info".to_string(),
                    config: DynamicValue::empty_object(),
                },
            )
            .await;

        assert_eq!(response.diagnostics.len(), 1);
        assert_eq!(response.diagnostics[0].summary, "Provider not configured");
    }
}
