//! Plugin API trait for session resolver implementations.

use async_trait::async_trait;
use notehub_security::Principal;

use crate::error::SessionResolverError;

/// Plugin API trait for session resolver implementations.
///
/// The resolver consults its plugins in configured order and delegates to
/// each in turn until one yields a principal.
#[async_trait]
pub trait SessionResolverPluginClient: Send + Sync {
    /// Resolve the principal behind a session credential.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if this plugin does not recognise the credential
    /// - `ServiceUnavailable` / `Internal` for backend failures
    async fn resolve(&self, credential: &str) -> Result<Principal, SessionResolverError>;
}
