//! Admin messaging module.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use admin_messaging_sdk::MessagingClient;
use anyhow::Context;
use tracing::info;

use crate::config::{AdminMessagingConfig, BackendKind, DirectoryKind};
use crate::domain::{MessagingBackend, MessagingLocalClient, Service, UserDirectory};
use crate::infra::{AppwriteServerApi, LogBackend, StaticDirectory};

#[derive(Default)]
pub struct AdminMessaging {
    service: OnceLock<Arc<Service>>,
}

impl AdminMessaging {
    /// Build the backend and directory selected by `cfg` and return the
    /// messaging client.
    ///
    /// # Errors
    ///
    /// Fails when an Appwrite backend or directory is selected without
    /// server credentials, or when called twice.
    #[tracing::instrument(skip_all, fields(backend = ?cfg.backend, directory = ?cfg.directory))]
    pub fn init(&self, cfg: &AdminMessagingConfig) -> anyhow::Result<Arc<dyn MessagingClient>> {
        let needs_appwrite =
            cfg.backend == BackendKind::Appwrite || cfg.directory == DirectoryKind::Appwrite;
        let appwrite = if needs_appwrite {
            let api = AppwriteServerApi::new(
                &cfg.appwrite.endpoint,
                &cfg.appwrite.project_id,
                cfg.appwrite.api_key.as_ref(),
                Duration::from_millis(cfg.appwrite.timeout_ms),
            )
            .context("admin messaging requires Appwrite server credentials")?;
            Some(Arc::new(api))
        } else {
            None
        };

        let backend: Arc<dyn MessagingBackend> = match (cfg.backend, &appwrite) {
            (BackendKind::Appwrite, Some(api)) => api.clone(),
            _ => Arc::new(LogBackend),
        };
        let directory: Arc<dyn UserDirectory> = match (cfg.directory, &appwrite) {
            (DirectoryKind::Appwrite, Some(api)) => api.clone(),
            _ => Arc::new(StaticDirectory::new(cfg.static_users.clone())),
        };

        if cfg.backend == BackendKind::Log {
            tracing::warn!("Admin messages are only logged; configure the appwrite backend to deliver them");
        }
        info!(max_recipients = ?cfg.max_recipients, "Initializing admin_messaging");

        let svc = Arc::new(Service::new(backend, directory, cfg.max_recipients));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(MessagingLocalClient::new(svc)))
    }
}
