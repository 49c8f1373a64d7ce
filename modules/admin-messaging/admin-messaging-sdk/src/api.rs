use async_trait::async_trait;
use notehub_security::SecurityContext;

use crate::error::MessagingError;
use crate::models::{SendMessageRequest, SendOutcome};

#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Validate `request`, assemble its recipients and deliver one message,
    /// or only count the recipients when `dry_run` is set.
    ///
    /// `ctx` identifies the admin sending the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError`] for invalid requests, directory failures
    /// and delivery failures.
    async fn send(
        &self,
        ctx: &SecurityContext,
        request: SendMessageRequest,
    ) -> Result<SendOutcome, MessagingError>;
}
