//! Local (in-process) client for admin messaging.

use std::sync::Arc;

use admin_messaging_sdk::{MessagingClient, MessagingError, SendMessageRequest, SendOutcome};
use async_trait::async_trait;
use notehub_security::SecurityContext;

use super::{DomainError, Service};

pub struct MessagingLocalClient {
    svc: Arc<Service>,
}

impl MessagingLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> MessagingError {
    match &e {
        DomainError::DirectoryUnavailable(_) | DomainError::Delivery(_) => {
            tracing::error!(operation = op, error = ?e, "admin_messaging call failed");
        }
        _ => tracing::debug!(operation = op, error = %e, "admin message rejected"),
    }
    e.into()
}

#[async_trait]
impl MessagingClient for MessagingLocalClient {
    async fn send(
        &self,
        ctx: &SecurityContext,
        request: SendMessageRequest,
    ) -> Result<SendOutcome, MessagingError> {
        self.svc
            .send(ctx, request)
            .await
            .map_err(|e| log_and_convert("send", e))
    }
}
