//! Public API trait for the session resolver.
//!
//! The admin gate receives an implementation of this trait explicitly and
//! never looks sessions up through ambient state.

use async_trait::async_trait;
use notehub_security::Principal;

use crate::error::SessionResolverError;

/// Public API trait for the session resolver.
///
/// ```ignore
/// let principal = resolver.resolve(token).await?;
/// if principal.is_admin() { /* ... */ }
/// ```
#[async_trait]
pub trait SessionResolverClient: Send + Sync {
    /// Resolve the principal behind a session credential.
    ///
    /// # Arguments
    ///
    /// * `credential` - The raw credential (without the "Bearer " prefix)
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if no plugin recognises the credential
    /// - `NoPluginAvailable` if no plugin is configured
    /// - `ServiceUnavailable` if the auth backend cannot be reached
    /// - `Internal` for unexpected errors
    async fn resolve(&self, credential: &str) -> Result<Principal, SessionResolverError>;
}
