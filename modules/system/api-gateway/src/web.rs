use axum::Json;

use crate::api::rest::dto::HealthResponse;

/// Liveness probe with a JSON body.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
