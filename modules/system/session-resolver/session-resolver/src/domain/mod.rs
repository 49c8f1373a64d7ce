//! Domain layer for the session resolver.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::SessionResolverLocalClient;
pub use service::{NamedPlugin, Service};
