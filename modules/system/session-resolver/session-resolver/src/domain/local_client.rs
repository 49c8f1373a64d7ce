//! Local (in-process) client for the session resolver.

use std::sync::Arc;

use async_trait::async_trait;
use notehub_security::Principal;
use session_resolver_sdk::{SessionResolverClient, SessionResolverError};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct SessionResolverLocalClient {
    svc: Arc<Service>,
}

impl SessionResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> SessionResolverError {
    if let DomainError::Unauthorized(reason) = &e {
        tracing::debug!(operation = op, reason = %reason, "no session");
    } else {
        tracing::error!(operation = op, error = ?e, "session_resolver call failed");
    }
    e.into()
}

#[async_trait]
impl SessionResolverClient for SessionResolverLocalClient {
    async fn resolve(&self, credential: &str) -> Result<Principal, SessionResolverError> {
        self.svc
            .resolve(credential)
            .await
            .map_err(|e| log_and_convert("resolve", e))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use session_resolver_sdk::SessionResolverPluginClient;
    use tracing_test::traced_test;

    use super::*;
    use crate::domain::NamedPlugin;

    struct DownPlugin;

    #[async_trait]
    impl SessionResolverPluginClient for DownPlugin {
        async fn resolve(&self, _credential: &str) -> Result<Principal, SessionResolverError> {
            Err(SessionResolverError::ServiceUnavailable(
                "backend down".to_owned(),
            ))
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn backend_failure_is_logged_and_surfaced() {
        let svc = Service::new(vec![NamedPlugin::new("appwrite", Arc::new(DownPlugin))], &[])
            .unwrap();
        let client = SessionResolverLocalClient::new(Arc::new(svc));

        let err = client.resolve("jwt").await.unwrap_err();

        assert_eq!(
            err,
            SessionResolverError::ServiceUnavailable("backend down".to_owned())
        );
        assert!(logs_contain("session_resolver call failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_session_is_not_an_error_log() {
        let svc = Service::new(vec![NamedPlugin::new("appwrite", Arc::new(DownPlugin))], &[])
            .unwrap();
        let client = SessionResolverLocalClient::new(Arc::new(svc));

        let err = client.resolve("").await.unwrap_err();

        assert!(matches!(err, SessionResolverError::Unauthorized(_)));
        assert!(!logs_contain("session_resolver call failed"));
    }
}
