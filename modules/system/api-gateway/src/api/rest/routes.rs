use axum::Router;
use axum::routing::{get, post};

use super::handlers::{self, AdminApiState};

pub const CHECK_PATH: &str = "/api/admin/check";
pub const MESSAGES_PATH: &str = "/api/admin/messages";

/// Admin API routes.
pub fn router(state: AdminApiState) -> Router {
    Router::new()
        .route(CHECK_PATH, get(handlers::check))
        .route(MESSAGES_PATH, post(handlers::send_message))
        .with_state(state)
}
