#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Session Resolver Plugin
//!
//! This plugin provides static token-to-principal mapping for development and testing.
//!
//! ## Modes
//!
//! - **`static_tokens`** (default): Maps specific tokens to specific principals. Useful for
//!   E2E tests with distinct users (an admin, a regular user).
//!
//! - **`accept_all`**: Accepts any non-empty token and returns the configured default
//!   principal.
//!
//! ## Configuration
//!
//! ```yaml
//! session:
//!   static_plugin:
//!     mode: static_tokens
//!     tokens:
//!       - token: "dev-admin-token"
//!         principal:
//!           id: "u1"
//!           email: "founder@example.com"
//!           prefs: { admin: "true" }
//!       - token: "dev-user-token"
//!         principal:
//!           id: "u2"
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticSessionPlugin;
