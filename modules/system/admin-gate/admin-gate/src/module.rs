//! Admin gate module.

use std::sync::{Arc, OnceLock};

use admin_gate_sdk::AdminGateClient;
use session_resolver_sdk::SessionResolverClient;
use tracing::info;

use crate::domain::{AdminGateLocalClient, Service};

#[derive(Default)]
pub struct AdminGate {
    service: OnceLock<Arc<Service>>,
}

impl AdminGate {
    /// Initialise the gate over the given session resolver.
    ///
    /// # Errors
    ///
    /// Fails when called twice.
    pub fn init(
        &self,
        sessions: Arc<dyn SessionResolverClient>,
    ) -> anyhow::Result<Arc<dyn AdminGateClient>> {
        info!("Initializing admin_gate");

        let svc = Arc::new(Service::new(sessions));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(AdminGateLocalClient::new(svc)))
    }
}
