//! Domain errors for admin messaging.

use admin_messaging_sdk::MessagingError;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Subject required")]
    SubjectRequired,

    #[error("Body required")]
    BodyRequired,

    #[error("No recipients specified")]
    NoRecipients,

    #[error("Too many recipients ({count} > {max})")]
    TooManyRecipients { count: usize, max: usize },

    #[error("Failed to enumerate users for broadcast")]
    DirectoryUnavailable(String),

    #[error("{0}")]
    Delivery(String),
}

impl From<DomainError> for MessagingError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::SubjectRequired
            | DomainError::BodyRequired
            | DomainError::NoRecipients
            | DomainError::TooManyRecipients { .. } => Self::Validation(message),
            DomainError::DirectoryUnavailable(_) => Self::Directory(message),
            DomainError::Delivery(_) => Self::Delivery(message),
        }
    }
}
