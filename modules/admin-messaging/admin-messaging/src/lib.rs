//! Admin Messaging Module
//!
//! Implements the admin "send message" action: validates the request,
//! assembles recipients (optionally the whole user directory), enforces the
//! recipient cap, and delivers a single message through the configured
//! backend.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use module::AdminMessaging;
