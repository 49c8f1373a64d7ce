//! Error types for the session resolver module.

use thiserror::Error;

/// Errors that can occur when resolving a session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionResolverError {
    /// No session: the credential is missing, invalid, or expired.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// No session plugin is configured.
    #[error("no plugin available")]
    NoPluginAvailable,

    /// The auth backend could not be reached or answered unexpectedly.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
