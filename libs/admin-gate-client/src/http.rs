//! HTTP transports: Appwrite JWT issuance and the server admin check.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::GateClientError;
use crate::transport::{AdminCheck, AdminIdentity, CredentialSource};

pub const CHECK_PATH: &str = "/api/admin/check";

fn build_client(timeout: Duration, headers: HeaderMap) -> Result<Client, GateClientError> {
    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| GateClientError::Transport(e.to_string()))
}

/// Body of the admin check response, success or failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CheckBody {
    user_id: String,
    error: Option<String>,
}

/// Calls `GET /api/admin/check` on the NoteHub server.
pub struct HttpAdminCheck {
    url: String,
    client: Client,
}

impl HttpAdminCheck {
    /// # Errors
    ///
    /// Returns `Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GateClientError> {
        Ok(Self {
            url: format!("{}{CHECK_PATH}", base_url.trim_end_matches('/')),
            client: build_client(timeout, HeaderMap::new())?,
        })
    }
}

#[async_trait]
impl AdminCheck for HttpAdminCheck {
    async fn check(&self, token: &SecretString) -> Result<AdminIdentity, GateClientError> {
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| GateClientError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GateClientError::Transport(e.to_string()))?;
        let body: CheckBody = serde_json::from_str(&text).unwrap_or_default();

        if status.is_success() {
            return Ok(AdminIdentity {
                user_id: body.user_id,
            });
        }

        let message = body
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "Forbidden".to_owned());
        Err(GateClientError::Denied(message))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JwtBody {
    jwt: String,
    message: Option<String>,
}

/// Issues short-lived Appwrite JWTs for an existing Appwrite session via
/// `POST {endpoint}/account/jwts`.
pub struct AppwriteJwtSource {
    url: String,
    client: Client,
}

impl AppwriteJwtSource {
    /// `session` is the Appwrite session secret sent as `X-Appwrite-Session`.
    ///
    /// # Errors
    ///
    /// Returns `Credential` when the project id or session is not a valid
    /// header value, `Transport` if the HTTP client cannot be built.
    pub fn new(
        endpoint: &str,
        project_id: &str,
        session: &SecretString,
        timeout: Duration,
    ) -> Result<Self, GateClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-appwrite-project",
            HeaderValue::from_str(project_id)
                .map_err(|_| GateClientError::Credential("invalid Appwrite project id".to_owned()))?,
        );
        let mut session = HeaderValue::from_str(session.expose_secret())
            .map_err(|_| GateClientError::Credential("invalid Appwrite session".to_owned()))?;
        session.set_sensitive(true);
        headers.insert("x-appwrite-session", session);

        Ok(Self {
            url: format!("{}/account/jwts", endpoint.trim_end_matches('/')),
            client: build_client(timeout, headers)?,
        })
    }
}

#[async_trait]
impl CredentialSource for AppwriteJwtSource {
    async fn acquire(&self) -> Result<SecretString, GateClientError> {
        let response = self
            .client
            .post(&self.url)
            .send()
            .await
            .map_err(|e| GateClientError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GateClientError::Transport(e.to_string()))?;
        let body: JwtBody = serde_json::from_str(&text).unwrap_or_default();

        if !status.is_success() {
            return Err(GateClientError::Credential(body.message.unwrap_or_else(
                || format!("appwrite jwt request failed: status {status}"),
            )));
        }
        if body.jwt.is_empty() {
            return Err(GateClientError::NoToken);
        }
        Ok(SecretString::from(body.jwt))
    }
}
