//! Module wiring.
//!
//! Builds every module from its configuration, leaves first: session
//! plugins, session resolver, admin gate, admin messaging, then the API
//! gateway that exposes them.

use std::sync::Arc;

use admin_gate::AdminGate;
use admin_messaging::AdminMessaging;
use anyhow::Context;
use api_gateway::ApiGateway;
use appwrite_session_plugin::AppwriteSessionPlugin;
use axum::Router;
use session_resolver::SessionResolver;
use session_resolver::domain::NamedPlugin;
use static_session_plugin::StaticSessionPlugin;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;

/// The wired server.
pub struct App {
    gateway: Arc<ApiGateway>,
}

impl App {
    /// Initialize all modules.
    ///
    /// # Errors
    /// Returns the first module initialization failure.
    pub fn build(cfg: &AppConfig) -> anyhow::Result<Self> {
        let modules = &cfg.modules;

        let plugins = vec![
            NamedPlugin::new(
                static_session_plugin::module::PLUGIN_NAME,
                StaticSessionPlugin::default()
                    .init(&modules.static_session_plugin)
                    .context("static session plugin")?,
            ),
            NamedPlugin::new(
                appwrite_session_plugin::module::PLUGIN_NAME,
                AppwriteSessionPlugin::default()
                    .init(&modules.appwrite_session_plugin)
                    .context("appwrite session plugin")?,
            ),
        ];

        let sessions = SessionResolver::default()
            .init(&modules.session_resolver, plugins)
            .context("session resolver")?;
        let gate = AdminGate::default()
            .init(sessions)
            .context("admin gate")?;
        let messaging = AdminMessaging::default()
            .init(&modules.admin_messaging)
            .context("admin messaging")?;

        let gateway = ApiGateway::new(modules.api_gateway.clone(), gate, messaging);
        info!("All modules initialized");

        Ok(Self {
            gateway: Arc::new(gateway),
        })
    }

    /// The complete HTTP router, middleware included.
    #[must_use]
    pub fn router(&self) -> Router {
        self.gateway.build_router()
    }

    /// Bind the configured address.
    ///
    /// # Errors
    /// Returns an error for an invalid address or a failed bind.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        self.gateway.bind().await
    }

    /// Serve until `shutdown` resolves.
    ///
    /// # Errors
    /// Returns an error if the server fails.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.gateway.serve(listener, shutdown).await
    }
}
