//! Session resolver module.

use std::sync::{Arc, OnceLock};

use session_resolver_sdk::SessionResolverClient;
use tracing::info;

use crate::config::SessionResolverConfig;
use crate::domain::{NamedPlugin, Service, SessionResolverLocalClient};

/// Session resolver module.
///
/// Takes the plugins built by the application, orders them according to
/// configuration and exposes the chain as a `SessionResolverClient`.
#[derive(Default)]
pub struct SessionResolver {
    service: OnceLock<Arc<Service>>,
}

impl SessionResolver {
    /// Initialise the module and return the client handed to consumers.
    ///
    /// # Errors
    ///
    /// Fails when the configured order names an unregistered plugin or when
    /// called twice.
    #[tracing::instrument(skip_all, fields(plugins))]
    pub fn init(
        &self,
        cfg: &SessionResolverConfig,
        plugins: Vec<NamedPlugin>,
    ) -> anyhow::Result<Arc<dyn SessionResolverClient>> {
        let svc = Arc::new(Service::new(plugins, &cfg.plugins)?);
        let names = svc.plugin_names().join(",");
        tracing::Span::current().record("plugins", names.as_str());
        if names.is_empty() {
            tracing::warn!("No session plugins configured; every request will be unauthenticated");
        }
        info!(plugins = %names, "Initializing session_resolver");

        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(SessionResolverLocalClient::new(svc)))
    }
}
