use thiserror::Error;

/// Failures of a client gate check. The display text is what the gate
/// retains as its error message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateClientError {
    /// No credential could be obtained.
    #[error("No token")]
    NoToken,

    /// The credential source failed.
    #[error("{0}")]
    Credential(String),

    /// The server refused the check; carries its `error` field or
    /// `Forbidden`.
    #[error("{0}")]
    Denied(String),

    #[error("{0}")]
    Transport(String),

    /// The check was dropped before it finished.
    #[error("Check cancelled")]
    Cancelled,
}
