//! Domain service for the session resolver.
//!
//! Consults the session plugins in configured order. A plugin answering
//! `Unauthorized` passes the credential on to the next one; any other
//! failure stops the chain.

use std::sync::Arc;

use notehub_security::Principal;
use session_resolver_sdk::{SessionResolverError, SessionResolverPluginClient};
use tracing::{debug, trace};

use super::DomainError;

/// A session plugin together with the name it is configured under.
#[derive(Clone)]
pub struct NamedPlugin {
    pub name: String,
    pub client: Arc<dyn SessionResolverPluginClient>,
}

impl NamedPlugin {
    pub fn new(name: impl Into<String>, client: Arc<dyn SessionResolverPluginClient>) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }
}

/// Session resolver service.
pub struct Service {
    plugins: Vec<NamedPlugin>,
}

impl Service {
    /// Build the plugin chain.
    ///
    /// `order` lists plugin names in consultation order; empty keeps the
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns `PluginNotFound` if `order` names an unregistered plugin.
    pub fn new(registered: Vec<NamedPlugin>, order: &[String]) -> Result<Self, DomainError> {
        if order.is_empty() {
            return Ok(Self {
                plugins: registered,
            });
        }

        let plugins = order
            .iter()
            .map(|name| {
                registered
                    .iter()
                    .find(|p| &p.name == name)
                    .cloned()
                    .ok_or_else(|| DomainError::PluginNotFound { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { plugins })
    }

    /// Names of the plugins in consultation order.
    #[must_use]
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }

    /// Resolve a credential into a principal.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` for a blank credential or when no plugin accepts it
    /// - `NoPlugins` when the chain is empty
    /// - the first non-`Unauthorized` plugin failure, attributed to its plugin
    #[tracing::instrument(skip_all)]
    pub async fn resolve(&self, credential: &str) -> Result<Principal, DomainError> {
        if credential.trim().is_empty() {
            return Err(DomainError::Unauthorized("missing credential".to_owned()));
        }
        if self.plugins.is_empty() {
            return Err(DomainError::NoPlugins);
        }

        let mut last_reason = String::new();
        for plugin in &self.plugins {
            match plugin.client.resolve(credential).await {
                Ok(principal) => {
                    debug!(plugin = %plugin.name, subject_id = %principal.id, "session resolved");
                    return Ok(principal);
                }
                Err(SessionResolverError::Unauthorized(reason)) => {
                    trace!(plugin = %plugin.name, reason = %reason, "plugin declined credential");
                    last_reason = reason;
                }
                Err(e) => return Err(DomainError::from_plugin(&plugin.name, e)),
            }
        }

        Err(DomainError::Unauthorized(last_reason))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct FixedPlugin {
        answer: Result<Principal, SessionResolverError>,
        calls: AtomicUsize,
    }

    impl FixedPlugin {
        fn new(answer: Result<Principal, SessionResolverError>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SessionResolverPluginClient for FixedPlugin {
        async fn resolve(&self, _credential: &str) -> Result<Principal, SessionResolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }

    fn declining() -> Arc<FixedPlugin> {
        FixedPlugin::new(Err(SessionResolverError::Unauthorized(
            "unknown token".to_owned(),
        )))
    }

    #[tokio::test]
    async fn first_plugin_with_principal_wins() {
        let first = FixedPlugin::new(Ok(Principal::new("u1")));
        let second = FixedPlugin::new(Ok(Principal::new("u2")));
        let svc = Service::new(
            vec![
                NamedPlugin::new("a", first.clone()),
                NamedPlugin::new("b", second.clone()),
            ],
            &[],
        )
        .unwrap();

        let principal = svc.resolve("tok").await.unwrap();

        assert_eq!(principal.id, "u1");
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn declined_credential_falls_through_to_next_plugin() {
        let svc = Service::new(
            vec![
                NamedPlugin::new("static", declining()),
                NamedPlugin::new("appwrite", FixedPlugin::new(Ok(Principal::new("u9")))),
            ],
            &[],
        )
        .unwrap();

        assert_eq!(svc.resolve("tok").await.unwrap().id, "u9");
    }

    #[tokio::test]
    async fn all_declined_is_unauthorized() {
        let svc = Service::new(vec![NamedPlugin::new("static", declining())], &[]).unwrap();

        let err = svc.resolve("tok").await.unwrap_err();

        assert!(matches!(err, DomainError::Unauthorized(reason) if reason == "unknown token"));
    }

    #[tokio::test]
    async fn backend_failure_stops_the_chain() {
        let next = FixedPlugin::new(Ok(Principal::new("u1")));
        let svc = Service::new(
            vec![
                NamedPlugin::new(
                    "appwrite",
                    FixedPlugin::new(Err(SessionResolverError::ServiceUnavailable(
                        "timeout".to_owned(),
                    ))),
                ),
                NamedPlugin::new("static", next.clone()),
            ],
            &[],
        )
        .unwrap();

        let err = svc.resolve("tok").await.unwrap_err();

        assert!(matches!(err, DomainError::PluginUnavailable { plugin, .. } if plugin == "appwrite"));
        assert_eq!(next.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_credential_never_reaches_plugins() {
        let plugin = FixedPlugin::new(Ok(Principal::new("u1")));
        let svc = Service::new(vec![NamedPlugin::new("static", plugin.clone())], &[]).unwrap();

        assert!(matches!(
            svc.resolve("  ").await,
            Err(DomainError::Unauthorized(_))
        ));
        assert_eq!(plugin.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_chain_reports_no_plugins() {
        let svc = Service::new(Vec::new(), &[]).unwrap();

        assert!(matches!(svc.resolve("tok").await, Err(DomainError::NoPlugins)));
    }

    #[test]
    fn configured_order_overrides_registration_order() {
        let svc = Service::new(
            vec![
                NamedPlugin::new("appwrite", declining()),
                NamedPlugin::new("static", declining()),
            ],
            &["static".to_owned(), "appwrite".to_owned()],
        )
        .unwrap();

        assert_eq!(svc.plugin_names(), vec!["static", "appwrite"]);
    }

    #[test]
    fn unknown_plugin_in_order_is_rejected() {
        let result = Service::new(
            vec![NamedPlugin::new("static", declining())],
            &["ldap".to_owned()],
        );

        assert!(matches!(result, Err(DomainError::PluginNotFound { name }) if name == "ldap"));
    }
}
