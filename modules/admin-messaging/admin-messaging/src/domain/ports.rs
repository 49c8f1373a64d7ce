//! Outbound ports of the messaging service.

use async_trait::async_trait;
use thiserror::Error;

use super::model::OutgoingMessage;

/// Failure reported by a backend or directory. The message may be empty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct BackendError(pub String);

/// Delivers messages.
#[async_trait]
pub trait MessagingBackend: Send + Sync {
    /// Deliver `message` and return the backend's message id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the backend refuses or fails the send.
    async fn deliver(&self, message: &OutgoingMessage) -> Result<Option<String>, BackendError>;
}

/// Enumerates users for broadcasts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// # Errors
    ///
    /// Returns [`BackendError`] when the directory cannot be listed.
    async fn list_user_ids(&self) -> Result<Vec<String>, BackendError>;
}
