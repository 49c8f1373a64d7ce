//! Admin Gate Module
//!
//! Decides whether the principal behind a request may perform
//! admin-restricted actions. The decision rests on a single preference,
//! `admin`, which must be boolean `true` or the string `"true"`.
//!
//! The session lookup is injected as a `SessionResolverClient`; the gate
//! keeps no state between calls.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;
pub mod module;

pub use module::AdminGate;
