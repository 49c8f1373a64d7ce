//! Appwrite session resolver plugin module.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use session_resolver_sdk::SessionResolverPluginClient;
use tracing::info;

use crate::config::AppwriteSessionPluginConfig;
use crate::domain::Service;
use crate::infra::AccountApi;

/// Name the plugin is registered under in the resolver chain.
pub const PLUGIN_NAME: &str = "appwrite";

#[derive(Default)]
pub struct AppwriteSessionPlugin {
    service: OnceLock<Arc<Service>>,
}

impl AppwriteSessionPlugin {
    /// Build the plugin client from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the project id is not a valid header value, the HTTP client
    /// cannot be built, or when called twice.
    #[tracing::instrument(skip_all, fields(endpoint = %cfg.endpoint))]
    pub fn init(
        &self,
        cfg: &AppwriteSessionPluginConfig,
    ) -> anyhow::Result<Arc<dyn SessionResolverPluginClient>> {
        if cfg.project_id.is_empty() {
            tracing::warn!("Appwrite project_id is empty; account lookups will be rejected");
        }

        let api = AccountApi::new(
            &cfg.endpoint,
            &cfg.project_id,
            Duration::from_millis(cfg.timeout_ms),
        )?;
        let service = Arc::new(Service::new(api));

        self.service
            .set(service.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        info!(project_id = %cfg.project_id, "Appwrite session plugin initialized");
        Ok(service)
    }
}
