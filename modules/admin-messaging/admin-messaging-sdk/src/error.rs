use thiserror::Error;

/// Errors of the messaging action. The display text is shown to the caller
/// as is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessagingError {
    /// The request is incomplete or exceeds its limits.
    #[error("{0}")]
    Validation(String),

    /// Broadcast recipients could not be enumerated.
    #[error("{0}")]
    Directory(String),

    /// The messaging backend refused or failed the delivery.
    #[error("{0}")]
    Delivery(String),

    #[error("{0}")]
    Internal(String),
}
