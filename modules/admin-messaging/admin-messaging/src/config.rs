//! Configuration for admin messaging.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminMessagingConfig {
    /// Where messages are delivered.
    pub backend: BackendKind,

    /// Where broadcast recipients come from.
    pub directory: DirectoryKind,

    /// Appwrite server credentials, used by the `appwrite` backend and
    /// directory.
    pub appwrite: AppwriteServerConfig,

    /// User ids returned by the `static` directory.
    pub static_users: Vec<String>,

    /// Recipient cap applied when a request does not set its own.
    pub max_recipients: Option<usize>,
}

impl Default for AdminMessagingConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Log,
            directory: DirectoryKind::Static,
            appwrite: AppwriteServerConfig::default(),
            static_users: Vec::new(),
            max_recipients: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Appwrite,
    /// Record messages in the log only.
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryKind {
    Appwrite,
    Static,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppwriteServerConfig {
    /// Appwrite API endpoint, including the `/v1` suffix.
    pub endpoint: String,
    pub project_id: String,
    /// Server API key sent as `X-Appwrite-Key`.
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,
    pub timeout_ms: u64,
}

impl Default for AppwriteServerConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://cloud.appwrite.io/v1".to_owned(),
            project_id: String::new(),
            api_key: None,
            timeout_ms: 10_000,
        }
    }
}
