//! Session Resolver Module
//!
//! Routes session credentials through the configured session plugins, in
//! order, and returns the first principal one of them yields.
//!
//! Provides the `SessionResolverClient` trait consumed by the admin gate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use module::SessionResolver;
