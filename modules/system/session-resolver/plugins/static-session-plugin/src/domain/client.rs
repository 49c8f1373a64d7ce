//! Client implementation for the static session plugin.
//!
//! Implements `SessionResolverPluginClient` using the domain service.

use async_trait::async_trait;
use notehub_security::Principal;
use session_resolver_sdk::{SessionResolverError, SessionResolverPluginClient};

use super::service::Service;

#[async_trait]
impl SessionResolverPluginClient for Service {
    async fn resolve(&self, credential: &str) -> Result<Principal, SessionResolverError> {
        self.resolve(credential)
            .ok_or_else(|| SessionResolverError::Unauthorized("invalid token".to_owned()))
    }
}
