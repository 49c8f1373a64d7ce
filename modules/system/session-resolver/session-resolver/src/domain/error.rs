//! Domain errors for the session resolver.

use session_resolver_sdk::SessionResolverError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("no session plugins configured")]
    NoPlugins,

    #[error("session plugin '{name}' is not registered")]
    PluginNotFound { name: String },

    #[error("session plugin '{plugin}' not available: {reason}")]
    PluginUnavailable { plugin: String, reason: String },

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Attribute a plugin failure to the plugin that produced it.
    pub(crate) fn from_plugin(plugin: &str, e: SessionResolverError) -> Self {
        match e {
            SessionResolverError::Unauthorized(msg) => Self::Unauthorized(msg),
            SessionResolverError::NoPluginAvailable => Self::NoPlugins,
            SessionResolverError::ServiceUnavailable(reason) => Self::PluginUnavailable {
                plugin: plugin.to_owned(),
                reason,
            },
            SessionResolverError::Internal(msg) => Self::Internal(format!("{plugin}: {msg}")),
        }
    }
}

impl From<DomainError> for SessionResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NoPlugins => Self::NoPluginAvailable,
            DomainError::PluginNotFound { name } => {
                Self::Internal(format!("session plugin '{name}' is not registered"))
            }
            DomainError::PluginUnavailable { reason, .. } => Self::ServiceUnavailable(reason),
            DomainError::Unauthorized(msg) => Self::Unauthorized(msg),
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}
