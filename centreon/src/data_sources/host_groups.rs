//! Host groups data source implementation

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
use crate::CentreonProviderData;

#[derive(Default)]
pub struct HostGroupsDataSource {
    provider_data: Option<CentreonProviderData>,
}

impl HostGroupsDataSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataSource for HostGroupsDataSource {
    fn type_name(&self) -> &str {
        "centreon_host_groups"
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
        let group_object = AttributeType::Object(HashMap::from([
            ("id".to_string(), AttributeType::Number),
            ("name".to_string(), AttributeType::String),
        ]));

        let schema = SchemaBuilder::new()
            .version(0)
            .description("Fetches the list of host groups.")
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
                AttributeBuilder::new("groups", AttributeType::List(Box::new(group_object)))
                    .description("List of host groups")
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

        match provider_data.client.list_host_groups(&params).await {
            Ok(groups) => {
                let entries: Vec<Dynamic> = groups
                    .iter()
                    .map(|g| {
                        Dynamic::Map(HashMap::from([
                            ("id".to_string(), Dynamic::Number(g.id as f64)),
                            ("name".to_string(), Dynamic::String(g.name.clone())),
                        ]))
                    })
                    .collect();

                let mut state = request.config.clone();
                let _ = state.set_list(&AttributePath::new("groups"), entries);
                let _ = state.set_string(&AttributePath::new("id"), "host_groups".to_string());

                ReadDataSourceResponse {
                    state,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(Diagnostic::error(
                    "Unable to Read Host Groups",
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
impl DataSourceWithConfigure for HostGroupsDataSource {
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

    fn list_config() -> DynamicValue {
        let mut obj = HashMap::new();
        obj.insert("limit".to_string(), Dynamic::Number(10.0));
        obj.insert("page".to_string(), Dynamic::Number(1.0));
        DynamicValue::new(Dynamic::Map(obj))
    }

    #[tokio::test]
    async fn read_maps_groups_into_state() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/centreon/api/latest/configuration/hosts/groups")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"result":[{"id":7,"name":"web"},{"id":9,"name":"db"}]}"#)
            .create_async()
            .await;

        let mut data_source = HostGroupsDataSource::new();
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

        let response = data_source
            .read(
                Context::new(),
                ReadDataSourceRequest {
                    type_name: "centreon_host_groups".to_string(),
                    config: list_config(),
                },
            )
            .await;

        assert!(response.diagnostics.is_empty());
        let groups = response
            .state
            .get_list(&AttributePath::new("groups"))
            .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            response
                .state
                .get_string(&AttributePath::new("search").attribute("name"))
                .ok(),
            None
        );
        // Config arguments are echoed back into state
        assert_eq!(
            response.state.get_i64(&AttributePath::new("limit")).unwrap(),
            10
        );
    }
}
