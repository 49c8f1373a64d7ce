//! Admin gate service.

use std::sync::Arc;

use admin_gate_sdk::AuthorizationDecision;
use notehub_security::Principal;
use session_resolver_sdk::{SessionResolverClient, SessionResolverError};
use tracing::{debug, info, warn};

/// Evaluate an already-resolved principal.
///
/// A principal without an id counts as no principal at all.
#[must_use]
pub fn evaluate(principal: Principal) -> AuthorizationDecision {
    if !principal.is_identified() {
        return AuthorizationDecision::unauthenticated();
    }
    if principal.is_admin() {
        return AuthorizationDecision::allow(principal);
    }
    let pref_value = principal.prefs.admin().cloned();
    AuthorizationDecision::forbidden(principal, pref_value)
}

pub struct Service {
    sessions: Arc<dyn SessionResolverClient>,
}

impl Service {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionResolverClient>) -> Self {
        Self { sessions }
    }

    /// Resolve the session behind `credential` and decide.
    ///
    /// Never fails: resolution errors other than a missing session become
    /// `error:<message>` decisions.
    #[tracing::instrument(skip_all)]
    pub async fn authorize(&self, credential: Option<&str>) -> AuthorizationDecision {
        let decision = match credential.filter(|c| !c.trim().is_empty()) {
            None => AuthorizationDecision::unauthenticated(),
            Some(credential) => match self.sessions.resolve(credential).await {
                Ok(principal) => evaluate(principal),
                Err(SessionResolverError::Unauthorized(_)) => {
                    AuthorizationDecision::unauthenticated()
                }
                Err(e) => AuthorizationDecision::error(e.to_string()),
            },
        };
        log_decision(&decision);
        decision
    }
}

fn log_decision(decision: &AuthorizationDecision) {
    let subject_id = decision.subject_id().unwrap_or("");
    match &decision.reason {
        None => debug!(subject_id, "admin gate allowed"),
        Some(reason @ admin_gate_sdk::DenyReason::Error(_)) => {
            warn!(reason = %reason, "admin gate failed to resolve session");
        }
        Some(reason) => info!(subject_id, reason = %reason, "admin gate denied"),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use admin_gate_sdk::DenyReason;
    use async_trait::async_trait;
    use notehub_security::{PreferenceValue, Preferences};
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;

    /// Resolves every credential to the same answer.
    struct FixedSessions(Result<Principal, SessionResolverError>);

    #[async_trait]
    impl SessionResolverClient for FixedSessions {
        async fn resolve(&self, _credential: &str) -> Result<Principal, SessionResolverError> {
            self.0.clone()
        }
    }

    fn gate(answer: Result<Principal, SessionResolverError>) -> Service {
        Service::new(Arc::new(FixedSessions(answer)))
    }

    fn with_admin(value: serde_json::Value) -> Principal {
        Principal::new("u1").with_prefs(Preferences::new().with("admin", value))
    }

    #[tokio::test]
    async fn admin_true_and_string_true_are_allowed() {
        for value in [json!(true), json!("true")] {
            let decision = gate(Ok(with_admin(value))).authorize(Some("tok")).await;
            assert!(decision.allowed);
            assert_eq!(decision.reason, None);
            assert_eq!(decision.subject_id(), Some("u1"));
        }
    }

    #[tokio::test]
    async fn other_admin_values_are_forbidden() {
        for value in [json!(false), json!("false"), json!(1), json!("1"), json!("TRUE")] {
            let decision = gate(Ok(with_admin(value.clone()))).authorize(Some("tok")).await;
            assert!(!decision.allowed, "{value} must be forbidden");
            assert_eq!(decision.reason, Some(DenyReason::Forbidden));
            assert_eq!(decision.pref_value, Some(PreferenceValue::from(value)));
        }
    }

    #[tokio::test]
    async fn empty_prefs_are_forbidden_without_pref_value() {
        let decision = gate(Ok(Principal::new("u2"))).authorize(Some("tok")).await;

        assert_eq!(decision.reason, Some(DenyReason::Forbidden));
        assert_eq!(decision.subject_id(), Some("u2"));
        assert_eq!(decision.pref_value, None);
    }

    #[tokio::test]
    async fn no_session_is_unauthenticated_regardless_of_prefs() {
        let decision = gate(Err(SessionResolverError::Unauthorized("expired".to_owned())))
            .authorize(Some("tok"))
            .await;
        assert_eq!(decision, AuthorizationDecision::unauthenticated());

        let decision = gate(Ok(with_admin(json!(true)))).authorize(None).await;
        assert_eq!(decision, AuthorizationDecision::unauthenticated());
    }

    #[tokio::test]
    async fn principal_without_id_is_unauthenticated() {
        let principal = Principal {
            id: String::new(),
            ..with_admin(json!(true))
        };

        let decision = gate(Ok(principal)).authorize(Some("tok")).await;

        assert_eq!(decision.reason, Some(DenyReason::Unauthenticated));
    }

    #[tokio::test]
    #[traced_test]
    async fn resolver_failure_becomes_error_decision() {
        let decision = gate(Err(SessionResolverError::ServiceUnavailable(
            "connection refused".to_owned(),
        )))
        .authorize(Some("tok"))
        .await;

        assert!(!decision.allowed);
        assert_eq!(
            decision.reason.map(|r| r.to_string()),
            Some("error:service unavailable: connection refused".to_owned())
        );
        assert!(logs_contain("admin gate failed to resolve session"));
    }

    #[tokio::test]
    #[traced_test]
    async fn denial_is_logged_without_credential() {
        gate(Ok(Principal::new("u2")))
            .authorize(Some("super-secret-jwt"))
            .await;

        assert!(logs_contain("admin gate denied"));
        assert!(logs_contain("u2"));
        assert!(!logs_contain("super-secret-jwt"));
    }
}
