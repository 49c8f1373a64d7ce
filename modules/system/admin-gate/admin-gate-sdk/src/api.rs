use async_trait::async_trait;

use crate::models::AuthorizationDecision;

/// Server-side admin authorization gate.
///
/// Infallible: every failure is folded into the returned decision.
#[async_trait]
pub trait AdminGateClient: Send + Sync {
    /// Decide whether the holder of `credential` may perform admin actions.
    ///
    /// `None` means the request carried no credential at all.
    async fn authorize(&self, credential: Option<&str>) -> AuthorizationDecision;
}
