use super::host::{extract_host_settings, HostResource};
use crate::api::test_helpers::create_test_client;
use crate::api::TriState;
use crate::CentreonProviderData;
use mockito::Matcher;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tfcore::context::Context;
use tfcore::resource::{
    ConfigureResourceRequest, CreateResourceRequest, DeleteResourceRequest, ReadResourceRequest,
    Resource, ResourceMetadataRequest, ResourceSchemaRequest, ResourceWithConfigure,
    UpdateResourceRequest, ValidateResourceConfigRequest,
};
use tfcore::types::{AttributePath, Dynamic, DynamicValue};

fn test_provider_data(url: &str, auto_reload: bool) -> CentreonProviderData {
    CentreonProviderData {
        client: Arc::new(create_test_client(url)),
        auto_reload,
    }
}

async fn configured_resource(url: &str, auto_reload: bool) -> HostResource {
    let mut resource = HostResource::new();
    let response = resource
        .configure(
            Context::new(),
            ConfigureResourceRequest {
                provider_data: Some(Arc::new(test_provider_data(url, auto_reload))),
            },
        )
        .await;
    assert!(response.diagnostics.is_empty());
    resource
}

fn base_config() -> DynamicValue {
    let mut obj = HashMap::new();
    obj.insert("monitoring_server_id".to_string(), Dynamic::Number(1.0));
    obj.insert("name".to_string(), Dynamic::String("web-01".to_string()));
    obj.insert("address".to_string(), Dynamic::String("10.0.0.1".to_string()));
    DynamicValue::new(Dynamic::Map(obj))
}

fn name_lookup_query(name: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("limit".into(), "1".into()),
        Matcher::UrlEncoded("page".into(), "1".into()),
        Matcher::UrlEncoded("search".into(), format!(r#"{{"name":"{}"}}"#, name)),
    ])
}

fn found_host_body() -> String {
    json!({
        "result": [{
            "id": 42,
            "name": "web-01",
            "alias": "frontend",
            "address": "10.0.0.1",
            "monitoring_server": {"id": 1, "name": "Central"},
            "templates": [{"id": 3, "name": "generic-host"}],
            "groups": [{"id": 7, "name": "web"}],
            "is_activated": true
        }]
    })
    .to_string()
}

#[test]
fn resource_type_name() {
    let resource = HostResource::new();
    assert_eq!(resource.type_name(), "centreon_host");
}

#[tokio::test]
async fn resource_metadata() {
    let resource = HostResource::new();
    let response = resource
        .metadata(Context::new(), ResourceMetadataRequest)
        .await;

    assert_eq!(response.type_name, "centreon_host");
}

#[tokio::test]
async fn resource_schema_covers_host_attributes() {
    let resource = HostResource::new();
    let response = resource.schema(Context::new(), ResourceSchemaRequest).await;

    assert!(response.diagnostics.is_empty());
    let schema = &response.schema;

    let name = schema.attribute("name").expect("name attribute");
    assert!(name.required);

    let snmp_community = schema.attribute("snmp_community").expect("snmp_community");
    assert!(snmp_community.sensitive);

    for flag in [
        "active_check_enabled",
        "passive_check_enabled",
        "notification_enabled",
        "event_handler_enabled",
        "flap_detection_enabled",
        "freshness_checked",
    ] {
        let attr = schema.attribute(flag).expect(flag);
        assert_eq!(attr.default, Some(Dynamic::Number(2.0)), "{}", flag);
        assert!(attr.optional && attr.computed, "{}", flag);
    }

    let is_activated = schema.attribute("is_activated").expect("is_activated");
    assert_eq!(is_activated.default, Some(Dynamic::Bool(true)));

    let macros = schema.attribute("macros").expect("macros");
    let nested = macros.nested_type.as_ref().expect("macros nested type");
    assert!(nested.attributes.iter().any(|a| a.name == "value" && a.sensitive));
}

#[tokio::test]
async fn validate_accepts_valid_config() {
    let resource = HostResource::new();
    let mut config = base_config();
    config
        .set_string(&AttributePath::new("snmp_version"), "2c".to_string())
        .unwrap();
    config
        .set_string(&AttributePath::new("geo_coords"), "45.5,-73.6".to_string())
        .unwrap();
    config
        .set_i64(&AttributePath::new("notification_options"), 5)
        .unwrap();

    let response = resource
        .validate(
            Context::new(),
            ValidateResourceConfigRequest {
                type_name: "centreon_host".to_string(),
                config,
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
}

#[tokio::test]
async fn validate_collects_all_field_failures() {
    let resource = HostResource::new();
    let mut config = base_config();
    config
        .set_string(&AttributePath::new("address"), "300.1.1.1".to_string())
        .unwrap();
    config
        .set_string(&AttributePath::new("snmp_version"), "4".to_string())
        .unwrap();
    config
        .set_string(&AttributePath::new("geo_coords"), "91,0".to_string())
        .unwrap();
    config
        .set_i64(&AttributePath::new("notification_options"), 32)
        .unwrap();

    let response = resource
        .validate(
            Context::new(),
            ValidateResourceConfigRequest {
                type_name: "centreon_host".to_string(),
                config,
            },
        )
        .await;

    assert_eq!(response.diagnostics.len(), 4);
}

#[test]
fn extract_settings_maps_tri_state_and_optionals() {
    let mut config = base_config();
    config
        .set_i64(&AttributePath::new("active_check_enabled"), 1)
        .unwrap();
    config
        .set_i64(&AttributePath::new("passive_check_enabled"), 2)
        .unwrap();
    config
        .set_string(&AttributePath::new("alias"), "frontend".to_string())
        .unwrap();
    config
        .set_list(
            &AttributePath::new("templates"),
            vec![Dynamic::Number(3.0), Dynamic::Number(5.0)],
        )
        .unwrap();

    let settings = extract_host_settings(&config).unwrap();

    assert_eq!(settings.monitoring_server_id, 1);
    assert_eq!(settings.name, "web-01");
    assert_eq!(settings.active_check_enabled, TriState::Explicit(1));
    assert_eq!(settings.passive_check_enabled, TriState::Default);
    assert_eq!(settings.notification_enabled, TriState::Unset);
    assert_eq!(settings.alias.as_deref(), Some("frontend"));
    assert_eq!(settings.snmp_community, None);
    assert_eq!(settings.templates, Some(vec![3, 5]));
    assert!(settings.macros.is_empty());
}

#[test]
fn extract_settings_reads_macros() {
    let mut config = base_config();
    let mut macro_entry = HashMap::new();
    macro_entry.insert("name".to_string(), Dynamic::String("COMMUNITY".to_string()));
    macro_entry.insert("value".to_string(), Dynamic::String("public".to_string()));
    macro_entry.insert("is_password".to_string(), Dynamic::Bool(true));
    config
        .set_list(
            &AttributePath::new("macros"),
            vec![Dynamic::Map(macro_entry)],
        )
        .unwrap();

    let settings = extract_host_settings(&config).unwrap();

    assert_eq!(settings.macros.len(), 1);
    assert_eq!(settings.macros[0].name, "COMMUNITY");
    assert_eq!(settings.macros[0].value.as_deref(), Some("public"));
    assert!(settings.macros[0].is_password);
    assert_eq!(settings.macros[0].description, None);
}

#[test]
fn extract_settings_requires_address() {
    let mut obj = HashMap::new();
    obj.insert("monitoring_server_id".to_string(), Dynamic::Number(1.0));
    obj.insert("name".to_string(), Dynamic::String("web-01".to_string()));
    let config = DynamicValue::new(Dynamic::Map(obj));

    let err = extract_host_settings(&config).unwrap_err();
    assert_eq!(err.summary, "Missing address");
}

#[tokio::test]
async fn create_without_provider_data_fails() {
    let resource = HostResource::new();
    let response = resource
        .create(
            Context::new(),
            CreateResourceRequest {
                type_name: "centreon_host".to_string(),
                planned_state: base_config(),
                config: base_config(),
            },
        )
        .await;

    assert_eq!(response.diagnostics.len(), 1);
    assert_eq!(response.diagnostics[0].summary, "Provider not configured");
}

#[tokio::test]
async fn create_with_auto_reload_disabled_triggers_no_reload() {
    let mut server = mockito::Server::new_async().await;
    let create_mock = server
        .mock("POST", "/centreon/api/latest/configuration/hosts")
        .with_status(201)
        .with_body(r#"{"id":42}"#)
        .create_async()
        .await;
    let reload_mock = server
        .mock(
            "POST",
            "/centreon/api/latest/configuration/monitoring-servers/1/generate-and-reload",
        )
        .expect(0)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let response = resource
        .create(
            Context::new(),
            CreateResourceRequest {
                type_name: "centreon_host".to_string(),
                planned_state: base_config(),
                config: base_config(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    create_mock.assert_async().await;
    reload_mock.assert_async().await;
}

#[tokio::test]
async fn create_with_auto_reload_enabled_triggers_one_reload() {
    let mut server = mockito::Server::new_async().await;
    let create_mock = server
        .mock("POST", "/centreon/api/latest/configuration/hosts")
        .with_status(201)
        .with_body(r#"{"id":42}"#)
        .create_async()
        .await;
    let reload_mock = server
        .mock(
            "POST",
            "/centreon/api/latest/configuration/monitoring-servers/1/generate-and-reload",
        )
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), true).await;
    let response = resource
        .create(
            Context::new(),
            CreateResourceRequest {
                type_name: "centreon_host".to_string(),
                planned_state: base_config(),
                config: base_config(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    create_mock.assert_async().await;
    reload_mock.assert_async().await;
}

#[tokio::test]
async fn create_reload_failure_is_attributed_to_create() {
    let mut server = mockito::Server::new_async().await;
    let create_mock = server
        .mock("POST", "/centreon/api/latest/configuration/hosts")
        .with_status(201)
        .with_body(r#"{"id":42}"#)
        .create_async()
        .await;
    let _reload_mock = server
        .mock(
            "POST",
            "/centreon/api/latest/configuration/monitoring-servers/1/generate-and-reload",
        )
        .with_status(500)
        .with_body("reload failed")
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), true).await;
    let response = resource
        .create(
            Context::new(),
            CreateResourceRequest {
                type_name: "centreon_host".to_string(),
                planned_state: base_config(),
                config: base_config(),
            },
        )
        .await;

    // The host was created; the surfaced error names the create operation
    create_mock.assert_async().await;
    assert_eq!(response.diagnostics.len(), 1);
    assert!(response.diagnostics[0].summary.contains("create"));
    assert!(response.diagnostics[0]
        .summary
        .contains("configuration reload failed"));
}

#[tokio::test]
async fn create_surfaces_remote_rejection() {
    let mut server = mockito::Server::new_async().await;
    let _create_mock = server
        .mock("POST", "/centreon/api/latest/configuration/hosts")
        .with_status(409)
        .with_body(r#"{"code":409,"message":"Host 'web-01' already exists"}"#)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let response = resource
        .create(
            Context::new(),
            CreateResourceRequest {
                type_name: "centreon_host".to_string(),
                planned_state: base_config(),
                config: base_config(),
            },
        )
        .await;

    assert_eq!(response.diagnostics.len(), 1);
    assert!(response.diagnostics[0]
        .detail
        .contains("Host 'web-01' already exists"));
}

#[tokio::test]
async fn read_overlays_remote_values_onto_state() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/centreon/api/latest/configuration/hosts")
        .match_query(name_lookup_query("web-01"))
        .with_body(found_host_body())
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let response = resource
        .read(
            Context::new(),
            ReadResourceRequest {
                type_name: "centreon_host".to_string(),
                current_state: base_config(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    let state = response.new_state.expect("state present");
    assert_eq!(
        state.get_string(&AttributePath::new("alias")).unwrap(),
        "frontend"
    );
    assert_eq!(
        state
            .get_i64(&AttributePath::new("monitoring_server_id"))
            .unwrap(),
        1
    );
    assert_eq!(
        state.get_i64_list(&AttributePath::new("templates")).unwrap(),
        vec![3]
    );
    assert_eq!(
        state.get_i64_list(&AttributePath::new("groups")).unwrap(),
        vec![7]
    );
    assert!(state.get_bool(&AttributePath::new("is_activated")).unwrap());
}

#[tokio::test]
async fn read_missing_host_signals_absence() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/centreon/api/latest/configuration/hosts")
        .match_query(name_lookup_query("web-01"))
        .with_body(r#"{"result":[]}"#)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let response = resource
        .read(
            Context::new(),
            ReadResourceRequest {
                type_name: "centreon_host".to_string(),
                current_state: base_config(),
            },
        )
        .await;

    // Absence is not an error
    assert!(response.diagnostics.is_empty());
    assert!(response.new_state.is_none());
}

#[tokio::test]
async fn update_resolves_name_then_patches() {
    let mut server = mockito::Server::new_async().await;
    let lookup_mock = server
        .mock("GET", "/centreon/api/latest/configuration/hosts")
        .match_query(name_lookup_query("web-01"))
        .with_body(found_host_body())
        .create_async()
        .await;
    let patch_mock = server
        .mock("PATCH", "/centreon/api/latest/configuration/hosts/42")
        .with_status(204)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let mut config = base_config();
    config
        .set_string(&AttributePath::new("alias"), "renamed".to_string())
        .unwrap();

    let response = resource
        .update(
            Context::new(),
            UpdateResourceRequest {
                type_name: "centreon_host".to_string(),
                prior_state: base_config(),
                planned_state: config.clone(),
                config,
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    lookup_mock.assert_async().await;
    patch_mock.assert_async().await;
}

#[tokio::test]
async fn update_fails_without_mutation_when_host_is_gone() {
    let mut server = mockito::Server::new_async().await;
    let _lookup_mock = server
        .mock("GET", "/centreon/api/latest/configuration/hosts")
        .match_query(name_lookup_query("web-01"))
        .with_body(r#"{"result":[]}"#)
        .create_async()
        .await;
    let patch_mock = server
        .mock(
            "PATCH",
            Matcher::Regex(r"^/centreon/api/latest/configuration/hosts/\d+$".to_string()),
        )
        .expect(0)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let response = resource
        .update(
            Context::new(),
            UpdateResourceRequest {
                type_name: "centreon_host".to_string(),
                prior_state: base_config(),
                planned_state: base_config(),
                config: base_config(),
            },
        )
        .await;

    assert_eq!(response.diagnostics.len(), 1);
    assert!(response.diagnostics[0]
        .detail
        .contains("no longer exists remotely"));
    patch_mock.assert_async().await;
}

#[tokio::test]
async fn delete_is_idempotent_when_host_is_gone() {
    let mut server = mockito::Server::new_async().await;
    let _lookup_mock = server
        .mock("GET", "/centreon/api/latest/configuration/hosts")
        .match_query(name_lookup_query("web-01"))
        .with_body(r#"{"result":[]}"#)
        .create_async()
        .await;
    let delete_mock = server
        .mock(
            "DELETE",
            Matcher::Regex(r"^/centreon/api/latest/configuration/hosts/\d+$".to_string()),
        )
        .expect(0)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), false).await;
    let response = resource
        .delete(
            Context::new(),
            DeleteResourceRequest {
                type_name: "centreon_host".to_string(),
                prior_state: base_config(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn delete_resolves_name_then_deletes_and_reloads() {
    let mut server = mockito::Server::new_async().await;
    let _lookup_mock = server
        .mock("GET", "/centreon/api/latest/configuration/hosts")
        .match_query(name_lookup_query("web-01"))
        .with_body(found_host_body())
        .create_async()
        .await;
    let delete_mock = server
        .mock("DELETE", "/centreon/api/latest/configuration/hosts/42")
        .with_status(204)
        .create_async()
        .await;
    let reload_mock = server
        .mock(
            "POST",
            "/centreon/api/latest/configuration/monitoring-servers/1/generate-and-reload",
        )
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let resource = configured_resource(&server.url(), true).await;
    let response = resource
        .delete(
            Context::new(),
            DeleteResourceRequest {
                type_name: "centreon_host".to_string(),
                prior_state: base_config(),
            },
        )
        .await;

    assert!(response.diagnostics.is_empty());
    delete_mock.assert_async().await;
    reload_mock.assert_async().await;
}

#[tokio::test]
async fn configure_rejects_foreign_provider_data() {
    let mut resource = HostResource::new();
    let response = resource
        .configure(
            Context::new(),
            ConfigureResourceRequest {
                provider_data: Some(Arc::new("not provider data".to_string())),
            },
        )
        .await;

    assert_eq!(response.diagnostics.len(), 1);
    assert_eq!(response.diagnostics[0].summary, "Invalid provider data");
}
