//! Configuration for the static session plugin.

use notehub_security::Principal;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticSessionPluginConfig {
    /// Resolution mode.
    pub mode: SessionMode,

    /// Principal returned in `accept_all` mode.
    pub default_principal: Principal,

    /// Static token-to-principal mappings for `static_tokens` mode.
    #[serde(skip_serializing)]
    pub tokens: Vec<TokenMapping>,
}

impl Default for StaticSessionPluginConfig {
    fn default() -> Self {
        Self {
            mode: SessionMode::StaticTokens,
            default_principal: Principal::new("dev-user"),
            tokens: Vec::new(),
        }
    }
}

/// Resolution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Accept any non-empty token and return the default principal.
    AcceptAll,
    /// Map specific tokens to specific principals.
    #[default]
    StaticTokens,
}

/// Maps a static token to a specific principal.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    /// The credential value to match.
    pub token: SecretString,
    /// The principal to return when this token is presented.
    pub principal: Principal,
}
