//! Local (in-process) client for the admin gate.

use std::sync::Arc;

use admin_gate_sdk::{AdminGateClient, AuthorizationDecision};
use async_trait::async_trait;

use super::Service;

pub struct AdminGateLocalClient {
    svc: Arc<Service>,
}

impl AdminGateLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl AdminGateClient for AdminGateLocalClient {
    async fn authorize(&self, credential: Option<&str>) -> AuthorizationDecision {
        self.svc.authorize(credential).await
    }
}
