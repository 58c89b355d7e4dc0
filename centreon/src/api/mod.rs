//! Centreon REST API client
//!
//! A thin synchronous-per-call client over the platform's v2 JSON API:
//! authenticated transport, the optional-field encoding used by mutating
//! requests, and one module per collection endpoint.

pub mod client;
pub mod common;
pub mod error;
pub mod fields;
pub mod host_groups;
pub mod host_templates;
pub mod hosts;
pub mod monitoring_servers;
pub mod platform;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::{Client, ClientConfig, AUTH_HEADER};
pub use common::{ListParams, ListResponse, NamedRef, SearchFilter};
pub use error::ApiError;
pub use fields::{Payload, TriState};
pub use host_groups::HostGroup;
pub use host_templates::HostTemplate;
pub use hosts::{Host, HostMacro, HostSettings};
pub use monitoring_servers::MonitoringServer;
pub use platform::PlatformInfo;
