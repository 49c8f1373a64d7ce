//! Admin Messaging SDK
//!
//! Public surface of the admin broadcast-messaging action:
//!
//! - [`MessagingClient`] - send one admin message
//! - [`SendMessageRequest`] / [`SendOutcome`] - request and result
//! - [`Recipient`] - one resolved address
//! - [`MessagingError`] - failures, each carrying a user-facing message

pub mod api;
pub mod error;
pub mod models;

pub use api::MessagingClient;
pub use error::MessagingError;
pub use models::{Recipient, SendMessageRequest, SendOutcome};
