//! Static session resolver plugin module.

use std::sync::{Arc, OnceLock};

use session_resolver_sdk::SessionResolverPluginClient;
use tracing::info;

use crate::config::{SessionMode, StaticSessionPluginConfig};
use crate::domain::Service;

/// Name the plugin is registered under in the resolver chain.
pub const PLUGIN_NAME: &str = "static";

/// Static session resolver plugin module.
///
/// Provides token-to-principal mapping from configuration.
#[derive(Default)]
pub struct StaticSessionPlugin {
    service: OnceLock<Arc<Service>>,
}

impl StaticSessionPlugin {
    /// Build the plugin client from configuration.
    ///
    /// # Errors
    ///
    /// Fails when called twice.
    pub fn init(
        &self,
        cfg: &StaticSessionPluginConfig,
    ) -> anyhow::Result<Arc<dyn SessionResolverPluginClient>> {
        info!("Initializing static_session_plugin");

        if cfg.mode == SessionMode::AcceptAll {
            tracing::warn!(
                principal = %cfg.default_principal.id,
                "Static session plugin is running in `accept_all` mode. \
                 Every non-empty token resolves to the default principal. \
                 Do NOT use this mode in production."
            );
        }

        let service = Arc::new(Service::from_config(cfg));
        info!(
            mode = ?cfg.mode,
            token_count = service.token_count(),
            "Loaded plugin configuration"
        );

        self.service
            .set(service.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(service)
    }
}
