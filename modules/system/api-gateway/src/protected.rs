//! Protected route wrapper.
//!
//! Runs the admin gate in front of an action and maps its decision onto
//! HTTP: unauthenticated is `401`, forbidden and resolution errors are `403`.
//! Routes with generic denials answer `403` for all three.
//! Action failures become `400` carrying the action's own message.

use std::fmt;

use admin_gate_sdk::{AdminGateClient, AuthorizationDecision, DenyReason};
use notehub_security::SecurityContext;

use crate::api::rest::error::ApiError;

/// How much of the gate's reason a denial response reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialDetail {
    /// Report the decision reason verbatim (`unauthenticated`, `forbidden`,
    /// `error:<detail>`).
    Reason,
    /// Report every denial as `403 Forbidden`.
    Generic,
}

/// Translate a denied decision into the response error.
#[must_use]
pub fn denial(decision: &AuthorizationDecision, detail: DenialDetail) -> ApiError {
    let reason = decision
        .reason
        .clone()
        .unwrap_or(DenyReason::Forbidden);
    match detail {
        DenialDetail::Reason if reason == DenyReason::Unauthenticated => {
            ApiError::Unauthorized(reason.to_string())
        }
        DenialDetail::Reason => ApiError::Forbidden(reason.to_string()),
        DenialDetail::Generic => ApiError::Forbidden("Forbidden".to_owned()),
    }
}

/// Gate `action` behind the admin check.
///
/// The action only runs when the gate allows the request; it receives a
/// [`SecurityContext`] for the admitted principal.
///
/// # Errors
///
/// `Unauthorized` / `Forbidden` when the gate denies, `BadRequest` with the
/// action's message when the action fails.
pub async fn protected<T, E, F, Fut>(
    gate: &dyn AdminGateClient,
    credential: Option<&str>,
    detail: DenialDetail,
    action: F,
) -> Result<T, ApiError>
where
    F: FnOnce(SecurityContext) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let decision = gate.authorize(credential).await;
    let principal = match (&decision.principal, decision.allowed) {
        (Some(principal), true) => principal.clone(),
        _ => return Err(denial(&decision, detail)),
    };

    let ctx = SecurityContext::builder().principal(principal).build();

    action(ctx).await.map_err(|e| {
        tracing::debug!(error = %e, "admin action failed");
        ApiError::BadRequest(e.to_string())
    })
}
