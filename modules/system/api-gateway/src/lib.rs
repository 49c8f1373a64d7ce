//! API Gateway
//!
//! Owns the HTTP surface of the admin server: the admin routes, the
//! protected-route wrapper that runs the admin gate in front of each
//! action, the middleware stack, and the server loop.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod auth;
pub mod config;
pub mod cors;
pub mod middleware;
pub mod module;
pub mod protected;
pub mod web;

pub use config::ApiGatewayConfig;
pub use module::ApiGateway;
