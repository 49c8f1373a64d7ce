//! Domain layer for the admin gate.

pub mod local_client;
pub mod service;

pub use local_client::AdminGateLocalClient;
pub use service::{Service, evaluate};
