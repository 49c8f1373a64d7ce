//! Session Resolver SDK
//!
//! This crate provides the public API for the `session_resolver` module:
//!
//! - [`SessionResolverClient`] - Public API trait for consumers
//! - [`SessionResolverPluginClient`] - Plugin API trait for implementations
//! - [`SessionResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use session_resolver_sdk::SessionResolverClient;
//!
//! let principal = resolver.resolve("eyJhbGciOi...").await?;
//! println!("{}", principal.id);
//! ```

pub mod api;
pub mod error;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::SessionResolverClient;
pub use error::SessionResolverError;
pub use notehub_security::Principal;
pub use plugin_api::SessionResolverPluginClient;
