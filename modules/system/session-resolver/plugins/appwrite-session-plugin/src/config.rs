//! Configuration for the Appwrite session plugin.

use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppwriteSessionPluginConfig {
    /// Appwrite API endpoint, including the `/v1` suffix.
    pub endpoint: String,

    /// Appwrite project id sent as `X-Appwrite-Project`.
    pub project_id: String,

    /// Request timeout for account lookups.
    pub timeout_ms: u64,
}

impl Default for AppwriteSessionPluginConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://cloud.appwrite.io/v1".to_owned(),
            project_id: String::new(),
            timeout_ms: 5_000,
        }
    }
}
