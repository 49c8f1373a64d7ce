use admin_messaging_sdk::Recipient;
use async_trait::async_trait;

use crate::domain::{BackendError, MessagingBackend, OutgoingMessage};

/// Backend that only records messages in the log. Useful for local runs.
#[derive(Debug, Default)]
pub struct LogBackend;

#[async_trait]
impl MessagingBackend for LogBackend {
    async fn deliver(&self, message: &OutgoingMessage) -> Result<Option<String>, BackendError> {
        let id = nanoid::nanoid!();
        let bcc = message
            .recipients
            .iter()
            .filter(|r| matches!(r, Recipient::Bcc(_)))
            .count();
        tracing::info!(
            message_id = %id,
            subject = %message.subject,
            html = message.html,
            recipients = message.recipients.len(),
            bcc,
            topic = message.topic.as_deref().unwrap_or(""),
            "admin message recorded by log backend"
        );
        Ok(Some(id))
    }
}
