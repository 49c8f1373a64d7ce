use std::convert::Infallible;
use std::sync::Arc;

use admin_gate_sdk::AdminGateClient;
use admin_messaging_sdk::{MessagingClient, SendMessageRequest, SendOutcome};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use super::dto::CheckResponse;
use super::error::ApiError;
use crate::auth::extract_credential;
use crate::protected::{DenialDetail, protected};

/// Shared state of the admin routes.
#[derive(Clone)]
pub struct AdminApiState {
    pub gate: Arc<dyn AdminGateClient>,
    pub messaging: Arc<dyn MessagingClient>,
    /// Cookie consulted when no bearer token is present.
    pub session_cookie: Option<Arc<str>>,
}

impl AdminApiState {
    fn credential<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        extract_credential(headers, self.session_cookie.as_deref())
    }
}

/// `GET /api/admin/check`
#[tracing::instrument(skip_all)]
pub async fn check(
    State(state): State<AdminApiState>,
    headers: HeaderMap,
) -> Result<Json<CheckResponse>, ApiError> {
    let credential = state.credential(&headers);
    protected(
        state.gate.as_ref(),
        credential,
        DenialDetail::Reason,
        |ctx| async move {
            Ok::<_, Infallible>(CheckResponse {
                ok: true,
                user_id: ctx.subject_id().to_owned(),
                admin: true,
            })
        },
    )
    .await
    .map(Json)
}

/// `POST /api/admin/messages`
///
/// The body is parsed only after the gate admits the request, so denied
/// callers never learn anything about payload validation.
#[tracing::instrument(skip_all)]
pub async fn send_message(
    State(state): State<AdminApiState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SendOutcome>, ApiError> {
    let credential = state.credential(&headers);
    let messaging = Arc::clone(&state.messaging);
    protected(
        state.gate.as_ref(),
        credential,
        DenialDetail::Generic,
        |ctx| async move {
            // `null` reads as an empty request and fails validation.
            let request = serde_json::from_slice::<Option<SendMessageRequest>>(&body)
                .map_err(|e| format!("Invalid JSON body: {e}"))?
                .unwrap_or_default();
            messaging
                .send(&ctx, request)
                .await
                .map_err(|e| e.to_string())
        },
    )
    .await
    .map(Json)
}
