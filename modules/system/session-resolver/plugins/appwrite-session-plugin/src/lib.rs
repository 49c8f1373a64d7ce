#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Appwrite Session Resolver Plugin
//!
//! Resolves an Appwrite JWT into a principal by calling
//! `GET {endpoint}/account` on behalf of the JWT holder. The account's
//! `prefs` become the principal's preferences, which is where the `admin`
//! flag lives.
//!
//! ## Configuration
//!
//! ```yaml
//! session:
//!   appwrite_plugin:
//!     endpoint: "https://cloud.appwrite.io/v1"
//!     project_id: "notehub"
//!     timeout_ms: 5000
//! ```

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use module::AppwriteSessionPlugin;
