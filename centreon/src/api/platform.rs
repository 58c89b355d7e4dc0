//! Platform installation status

use serde::Deserialize;

use super::error::ApiError;
use super::Client;

pub const PLATFORM_STATUS_PATH: &str = "/platform/installation/status";

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformInfo {
    pub is_installed: bool,
    pub has_upgrade_available: bool,
}

impl Client {
    /// GET /platform/installation/status
    pub async fn get_platform_info(&self) -> Result<PlatformInfo, ApiError> {
        self.get(PLATFORM_STATUS_PATH).await
    }
}
