//! Layered server configuration.
//!
//! Sources, later ones winning: built-in defaults, the YAML file passed with
//! `--config`, then `NOTEHUB__`-prefixed environment variables where `__`
//! separates nesting levels (`NOTEHUB__MODULES__API_GATEWAY__BIND_ADDR`).

use std::path::Path;

use admin_messaging::config::AdminMessagingConfig;
use anyhow::Context;
use api_gateway::ApiGatewayConfig;
use appwrite_session_plugin::config::AppwriteSessionPluginConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};
use session_resolver::config::SessionResolverConfig;
use static_session_plugin::config::StaticSessionPluginConfig;

pub const ENV_PREFIX: &str = "NOTEHUB__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Per-module configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModulesConfig {
    pub api_gateway: ApiGatewayConfig,
    pub session_resolver: SessionResolverConfig,
    pub static_session_plugin: StaticSessionPluginConfig,
    pub appwrite_session_plugin: AppwriteSessionPluginConfig,
    pub admin_messaging: AdminMessagingConfig,
}

impl AppConfig {
    /// Load defaults, then `path` if given, then the environment.
    ///
    /// # Errors
    /// Returns an error if the file is missing or any source fails to
    /// deserialize.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(
                path.is_file(),
                "config file not found: {}",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .with_context(|| match path {
                Some(path) => format!("invalid configuration in {}", path.display()),
                None => "invalid configuration".to_owned(),
            })
    }
}
