//! Admin messaging service.
//!
//! Validation runs in a fixed order and stops at the first failure:
//! subject, body, broadcast enumeration, recipient presence, recipient cap.

use std::sync::Arc;

use admin_messaging_sdk::{Recipient, SendMessageRequest, SendOutcome};
use notehub_security::SecurityContext;
use tracing::info;

use super::error::DomainError;
use super::model::OutgoingMessage;
use super::ports::{MessagingBackend, UserDirectory};

fn present(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

pub struct Service {
    backend: Arc<dyn MessagingBackend>,
    directory: Arc<dyn UserDirectory>,
    default_max_recipients: Option<usize>,
}

impl Service {
    #[must_use]
    pub fn new(
        backend: Arc<dyn MessagingBackend>,
        directory: Arc<dyn UserDirectory>,
        default_max_recipients: Option<usize>,
    ) -> Self {
        Self {
            backend,
            directory,
            default_max_recipients,
        }
    }

    /// # Errors
    ///
    /// Returns the first failing [`DomainError`] in validation order, or
    /// `Delivery` when the backend fails.
    #[tracing::instrument(skip_all, fields(sender = %ctx.subject_id()))]
    pub async fn send(
        &self,
        ctx: &SecurityContext,
        req: SendMessageRequest,
    ) -> Result<SendOutcome, DomainError> {
        let dry_run = req.dry_run;
        let max = req.max_recipients.or(self.default_max_recipients);

        let message = self.prepare(req).await?;
        let count = message.recipients.len();

        if let Some(max) = max
            && count > max
        {
            return Err(DomainError::TooManyRecipients { count, max });
        }

        if dry_run {
            info!(recipients = count, "admin message dry run");
            return Ok(SendOutcome::dry_run(count));
        }

        let id = self.backend.deliver(&message).await.map_err(|e| {
            if e.0.is_empty() {
                DomainError::Delivery("Failed to send".to_owned())
            } else {
                DomainError::Delivery(e.0)
            }
        })?;

        info!(
            recipients = count,
            message_id = id.as_deref().unwrap_or(""),
            topic = message.topic.as_deref().unwrap_or(""),
            "admin message sent"
        );
        Ok(SendOutcome::sent(id, count))
    }

    /// Validate the request and assemble its recipients.
    async fn prepare(&self, req: SendMessageRequest) -> Result<OutgoingMessage, DomainError> {
        if req.subject.is_empty() {
            return Err(DomainError::SubjectRequired);
        }
        let (content, html) = match (present(req.body_html), present(req.body_text)) {
            (Some(html), _) => (html, true),
            (None, Some(text)) => (text, false),
            (None, None) => return Err(DomainError::BodyRequired),
        };

        let user_ids = if req.all_users {
            self.directory
                .list_user_ids()
                .await
                .map_err(|e| DomainError::DirectoryUnavailable(e.0))?
        } else {
            req.user_ids
        };

        if user_ids.is_empty() && req.emails.is_empty() {
            return Err(DomainError::NoRecipients);
        }

        let recipients = user_ids
            .into_iter()
            .map(Recipient::User)
            .chain(req.emails.into_iter().map(Recipient::Email))
            .chain(req.bcc.into_iter().map(Recipient::Bcc))
            .collect();

        Ok(OutgoingMessage {
            subject: req.subject,
            content,
            html,
            recipients,
            topic: req.topic,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use notehub_security::Principal;
    use parking_lot::Mutex;

    use super::*;
    use crate::domain::BackendError;

    #[derive(Default)]
    struct RecordingBackend {
        sent: Mutex<Vec<OutgoingMessage>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl MessagingBackend for RecordingBackend {
        async fn deliver(&self, message: &OutgoingMessage) -> Result<Option<String>, BackendError> {
            if let Some(msg) = &self.fail_with {
                return Err(BackendError(msg.clone()));
            }
            self.sent.lock().push(message.clone());
            Ok(Some("msg-1".to_owned()))
        }
    }

    struct Directory {
        users: Result<Vec<String>, BackendError>,
        calls: AtomicUsize,
    }

    impl Directory {
        fn with(users: Result<Vec<String>, BackendError>) -> Arc<Self> {
            Arc::new(Self {
                users,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl UserDirectory for Directory {
        async fn list_user_ids(&self) -> Result<Vec<String>, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.users.clone()
        }
    }

    fn ctx() -> SecurityContext {
        SecurityContext::builder()
            .principal(Principal::new("founder"))
            .build()
    }

    fn request() -> SendMessageRequest {
        SendMessageRequest {
            subject: "Hello".to_owned(),
            body_text: Some("Body".to_owned()),
            user_ids: vec!["u1".to_owned(), "u2".to_owned()],
            ..SendMessageRequest::default()
        }
    }

    fn service(backend: Arc<RecordingBackend>, directory: Arc<Directory>) -> Service {
        Service::new(backend, directory, None)
    }

    fn empty_directory() -> Arc<Directory> {
        Directory::with(Ok(Vec::new()))
    }

    #[tokio::test]
    async fn sends_to_users_emails_and_bcc() {
        let backend = Arc::new(RecordingBackend::default());
        let svc = service(backend.clone(), empty_directory());
        let req = SendMessageRequest {
            emails: vec!["a@example.com".to_owned()],
            bcc: vec!["audit@example.com".to_owned()],
            topic: Some("release".to_owned()),
            ..request()
        };

        let outcome = svc.send(&ctx(), req).await.unwrap();

        assert_eq!(outcome, SendOutcome::sent(Some("msg-1".to_owned()), 4));
        let sent = backend.sent.lock();
        assert_eq!(
            sent[0].recipients,
            vec![
                Recipient::User("u1".to_owned()),
                Recipient::User("u2".to_owned()),
                Recipient::Email("a@example.com".to_owned()),
                Recipient::Bcc("audit@example.com".to_owned()),
            ]
        );
        assert_eq!(sent[0].topic.as_deref(), Some("release"));
        assert!(!sent[0].html);
    }

    #[tokio::test]
    async fn html_body_wins_over_text() {
        let backend = Arc::new(RecordingBackend::default());
        let svc = service(backend.clone(), empty_directory());
        let req = SendMessageRequest {
            body_html: Some("<p>Hi</p>".to_owned()),
            ..request()
        };

        svc.send(&ctx(), req).await.unwrap();

        let sent = backend.sent.lock();
        assert_eq!(sent[0].content, "<p>Hi</p>");
        assert!(sent[0].html);
    }

    #[tokio::test]
    async fn validation_order() {
        let svc = service(
            Arc::new(RecordingBackend::default()),
            Directory::with(Err(BackendError("down".to_owned()))),
        );

        let no_subject = SendMessageRequest {
            subject: String::new(),
            body_text: None,
            all_users: true,
            ..request()
        };
        assert_eq!(
            svc.send(&ctx(), no_subject).await,
            Err(DomainError::SubjectRequired)
        );

        let empty_bodies = SendMessageRequest {
            body_html: Some(String::new()),
            body_text: Some(String::new()),
            all_users: true,
            ..request()
        };
        assert_eq!(
            svc.send(&ctx(), empty_bodies).await,
            Err(DomainError::BodyRequired)
        );

        let broadcast = SendMessageRequest {
            all_users: true,
            ..request()
        };
        let err = svc.send(&ctx(), broadcast).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to enumerate users for broadcast");
    }

    #[tokio::test]
    async fn bcc_alone_is_not_a_recipient_list() {
        let svc = service(Arc::new(RecordingBackend::default()), empty_directory());
        let req = SendMessageRequest {
            user_ids: Vec::new(),
            bcc: vec!["audit@example.com".to_owned()],
            ..request()
        };

        assert_eq!(svc.send(&ctx(), req).await, Err(DomainError::NoRecipients));
    }

    #[tokio::test]
    async fn broadcast_replaces_user_ids_and_keeps_emails() {
        let backend = Arc::new(RecordingBackend::default());
        let directory = Directory::with(Ok(vec!["d1".to_owned(), "d2".to_owned(), "d3".to_owned()]));
        let svc = service(backend.clone(), directory.clone());
        let req = SendMessageRequest {
            all_users: true,
            emails: vec!["x@example.com".to_owned()],
            ..request()
        };

        let outcome = svc.send(&ctx(), req).await.unwrap();

        assert_eq!(outcome.recipients, 4);
        assert_eq!(directory.calls.load(Ordering::SeqCst), 1);
        let sent = backend.sent.lock();
        assert!(!sent[0].recipients.contains(&Recipient::User("u1".to_owned())));
    }

    #[tokio::test]
    async fn recipient_cap_counts_bcc() {
        let svc = service(Arc::new(RecordingBackend::default()), empty_directory());
        let req = SendMessageRequest {
            bcc: vec!["audit@example.com".to_owned()],
            max_recipients: Some(2),
            ..request()
        };

        let err = svc.send(&ctx(), req).await.unwrap_err();

        assert_eq!(err.to_string(), "Too many recipients (3 > 2)");
    }

    #[tokio::test]
    async fn configured_cap_applies_when_request_has_none() {
        let svc = Service::new(
            Arc::new(RecordingBackend::default()),
            empty_directory(),
            Some(1),
        );

        let err = svc.send(&ctx(), request()).await.unwrap_err();
        assert_eq!(err, DomainError::TooManyRecipients { count: 2, max: 1 });

        let req = SendMessageRequest {
            max_recipients: Some(5),
            ..request()
        };
        assert!(svc.send(&ctx(), req).await.is_ok());
    }

    #[tokio::test]
    async fn dry_run_counts_without_delivering() {
        let backend = Arc::new(RecordingBackend::default());
        let svc = service(backend.clone(), empty_directory());
        let req = SendMessageRequest {
            dry_run: true,
            ..request()
        };

        let outcome = svc.send(&ctx(), req).await.unwrap();

        assert_eq!(outcome, SendOutcome::dry_run(2));
        assert!(backend.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn backend_failure_message_is_kept_or_defaulted() {
        let failing = |msg: &str| {
            Arc::new(RecordingBackend {
                fail_with: Some(msg.to_owned()),
                ..RecordingBackend::default()
            })
        };

        let svc = service(failing("Invalid target"), empty_directory());
        assert_eq!(
            svc.send(&ctx(), request()).await,
            Err(DomainError::Delivery("Invalid target".to_owned()))
        );

        let svc = service(failing(""), empty_directory());
        assert_eq!(
            svc.send(&ctx(), request()).await,
            Err(DomainError::Delivery("Failed to send".to_owned()))
        );
    }
}
