//! tfcore - Terraform plugin scaffolding for Rust providers
//!
//! A trimmed framework seam for building Terraform providers in Rust: the
//! Dynamic value type, schemas, diagnostics, and the Provider / Resource /
//! DataSource traits the host runtime drives. The RPC wire layer of the
//! plugin protocol is intentionally out of scope; the traits in this crate
//! are the host boundary.

// Core modules
pub mod context;
pub mod error;
pub mod schema;
pub mod types;

// Provider API modules
pub mod data_source;
pub mod provider;
pub mod resource;

// Re-exports for convenience
pub use context::Context;
pub use data_source::{DataSource, DataSourceWithConfigure};
pub use error::{Result, TfcoreError};
pub use provider::{Provider, ProviderMetadataRequest, ProviderMetadataResponse};
pub use resource::{Resource, ResourceWithConfigure};
pub use schema::{AttributeBuilder, AttributeType, Schema, SchemaBuilder, Validator};
pub use types::{Diagnostic, Dynamic, DynamicValue};
