//! Domain layer for admin messaging.

pub mod error;
pub mod local_client;
pub mod model;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use local_client::MessagingLocalClient;
pub use model::OutgoingMessage;
pub use ports::{BackendError, MessagingBackend, UserDirectory};
pub use service::Service;
