//! Provider data handed to resources and data sources
//!
//! Constructed once during provider configure and never mutated afterwards.

use crate::api::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct CentreonProviderData {
    pub client: Arc<Client>,
    /// When set, every successful host mutation triggers a configuration
    /// generate-and-reload on the host's monitoring server
    pub auto_reload: bool,
}

impl CentreonProviderData {
    pub fn new(client: Client, auto_reload: bool) -> Self {
        Self {
            client: Arc::new(client),
            auto_reload,
        }
    }
}
