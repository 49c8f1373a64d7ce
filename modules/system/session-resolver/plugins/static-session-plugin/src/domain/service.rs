//! Service implementation for the static session plugin.

use std::collections::HashMap;

use notehub_security::Principal;
use secrecy::ExposeSecret;

use crate::config::{SessionMode, StaticSessionPluginConfig};

/// Static session resolver service.
///
/// Provides token-to-principal mapping based on configuration mode:
/// - `static_tokens`: Specific tokens map to specific principals
/// - `accept_all`: Any non-empty token maps to the default principal
pub struct Service {
    mode: SessionMode,
    default_principal: Principal,
    token_map: HashMap<String, Principal>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticSessionPluginConfig) -> Self {
        let token_map: HashMap<String, Principal> = cfg
            .tokens
            .iter()
            .map(|m| (m.token.expose_secret().to_owned(), m.principal.clone()))
            .collect();

        Self {
            mode: cfg.mode,
            default_principal: cfg.default_principal.clone(),
            token_map,
        }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.token_map.len()
    }

    /// Resolve a credential into a principal.
    ///
    /// Returns `None` if the token is not recognized (in `static_tokens` mode)
    /// or empty.
    #[must_use]
    pub fn resolve(&self, credential: &str) -> Option<Principal> {
        if credential.is_empty() {
            return None;
        }

        let principal = match self.mode {
            SessionMode::AcceptAll => &self.default_principal,
            SessionMode::StaticTokens => self.token_map.get(credential)?,
        };

        Some(principal.clone())
    }
}
