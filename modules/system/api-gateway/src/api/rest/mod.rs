//! REST surface of the admin API.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
