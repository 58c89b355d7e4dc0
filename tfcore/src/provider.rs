//! Provider trait and related types
//!
//! The host runtime drives a provider through this trait: configure once,
//! then instantiate resources and data sources through the factory maps and
//! hand each the provider data produced by configure.

use crate::context::Context;
use crate::data_source::DataSourceWithConfigure;
use crate::resource::ResourceWithConfigure;
use crate::schema::Schema;
use crate::types::{Diagnostic, DynamicValue};
use async_trait::async_trait;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Factory for resource instances; the host configures each instance with
/// the provider data immediately after creation
pub type ResourceFactory = fn() -> Box<dyn ResourceWithConfigure>;

/// Factory for data source instances
pub type DataSourceFactory = fn() -> Box<dyn DataSourceWithConfigure>;

/// Base trait for providers
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider type name, the prefix of every resource and data source
    /// type name (e.g., "centreon")
    fn type_name(&self) -> &str;

    /// Called to get provider metadata
    async fn metadata(
        &self,
        ctx: Context,
        request: ProviderMetadataRequest,
    ) -> ProviderMetadataResponse;

    /// Called to get the provider configuration schema
    async fn schema(&self, ctx: Context, request: ProviderSchemaRequest) -> ProviderSchemaResponse;

    /// Called once at startup with the provider configuration
    /// The returned provider_data is handed to every resource and data
    /// source configure call; it MUST NOT be mutated afterwards
    async fn configure(
        &mut self,
        ctx: Context,
        request: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse;

    /// Resource factories keyed by type name
    fn resources(&self) -> HashMap<String, ResourceFactory>;

    /// Data source factories keyed by type name
    fn data_sources(&self) -> HashMap<String, DataSourceFactory>;
}

pub struct ProviderMetadataRequest;

pub struct ProviderMetadataResponse {
    pub type_name: String,
    pub version: String,
}

pub struct ProviderSchemaRequest;

pub struct ProviderSchemaResponse {
    pub schema: Schema,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ConfigureProviderRequest {
    pub config: DynamicValue,
}

pub struct ConfigureProviderResponse {
    /// Opaque data handed to resources and data sources; typically an Arc
    /// around an API client plus immutable flags
    pub provider_data: Option<Arc<dyn Any + Send + Sync>>,
    pub diagnostics: Vec<Diagnostic>,
}
