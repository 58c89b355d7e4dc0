pub mod host_groups;
pub mod host_templates;
pub mod hosts;
pub mod monitoring_servers;
pub mod platform_info;

pub use host_groups::HostGroupsDataSource;
pub use host_templates::HostTemplatesDataSource;
pub use hosts::HostsDataSource;
pub use monitoring_servers::MonitoringServersDataSource;
pub use platform_info::PlatformInfoDataSource;

use crate::api::{ListParams, SearchFilter};
use std::collections::HashMap;
use tfcore::schema::{Attribute, AttributeBuilder, AttributeType};
use tfcore::types::{AttributePath, Diagnostic, DynamicValue};

/// The `search {name, value}` argument shared by the collection data sources
pub(crate) fn search_attribute() -> Attribute {
    AttributeBuilder::new(
        "search",
        AttributeType::Object(HashMap::from([
            ("name".to_string(), AttributeType::String),
            ("value".to_string(), AttributeType::String),
        ])),
    )
    .description("Search criteria")
    .optional()
    .build()
}

/// Extract the shared limit/page/search arguments of the collection data
/// sources; a search block with both fields set becomes a filter, anything
/// else means unfiltered
pub(crate) fn list_params_from_config(
    config: &DynamicValue,
) -> Result<ListParams, Diagnostic> {
    let limit = config
        .get_i64(&AttributePath::new("limit"))
        .map_err(|_| Diagnostic::error("Missing limit", "The 'limit' attribute is required"))?;
    let page = config
        .get_i64(&AttributePath::new("page"))
        .map_err(|_| Diagnostic::error("Missing page", "The 'page' attribute is required"))?;

    let mut params = ListParams::new(limit.max(0) as u32, page.max(0) as u32);

    let search_name = config
        .get_string(&AttributePath::new("search").attribute("name"))
        .ok();
    let search_value = config
        .get_string(&AttributePath::new("search").attribute("value"))
        .ok();
    if let (Some(name), Some(value)) = (search_name, search_value) {
        params = params.with_search(SearchFilter::new(name, value));
    }

    Ok(params)
}
