//! Admin Gate SDK
//!
//! - [`AdminGateClient`] - decides whether a request may run an admin action
//! - [`AuthorizationDecision`] / [`DenyReason`] - the outcome of one decision

pub mod api;
pub mod models;

pub use api::AdminGateClient;
pub use models::{AuthorizationDecision, DenyReason};
