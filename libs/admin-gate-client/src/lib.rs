//! Admin Gate Client
//!
//! Client-side cache of the admin gate. A [`ClientGate`] acquires a
//! short-lived credential, asks the server once whether it belongs to an
//! admin, and keeps the outcome until explicitly refreshed.
//!
//! Transports are pluggable:
//! - [`CredentialSource`] - where the credential comes from
//!   ([`AppwriteJwtSource`], [`StaticToken`])
//! - [`AdminCheck`] - how the server is asked ([`HttpAdminCheck`])
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod gate;
pub mod http;
pub mod transport;

pub use error::GateClientError;
pub use gate::{ClientGate, GatePhase, GateState, RefreshOutcome};
pub use http::{AppwriteJwtSource, HttpAdminCheck};
pub use transport::{AdminCheck, AdminIdentity, CredentialSource, StaticToken};
