//! HTTP access to the Appwrite account API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Account document returned by `GET /account`.
///
/// Optional fields accept both absence and `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    #[serde(rename = "$id", default)]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prefs: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    /// Appwrite rejected the JWT.
    #[error("appwrite rejected the session (status {0})")]
    Rejected(StatusCode),
    /// Appwrite answered with an unexpected status.
    #[error("appwrite account lookup failed: status {0}")]
    Status(StatusCode),
    #[error("appwrite unreachable: {0}")]
    Transport(String),
    #[error("invalid appwrite account payload: {0}")]
    Payload(String),
    #[error("invalid header value: {0}")]
    Header(String),
}

/// Thin client for the Appwrite account endpoint.
///
/// Base URL is normalized without a trailing slash.
pub struct AccountApi {
    base_url: String,
    project_id: HeaderValue,
    client: Client,
}

impl AccountApi {
    /// # Errors
    ///
    /// Returns [`AccountApiError`] when the project id is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        project_id: &str,
        timeout: Duration,
    ) -> Result<Self, AccountApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AccountApiError::Transport(e.to_string()))?;
        let project_id = HeaderValue::from_str(project_id)
            .map_err(|_| AccountApiError::Header("X-Appwrite-Project".to_owned()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            project_id,
            client,
        })
    }

    /// Fetch the account owning `jwt`.
    ///
    /// # Errors
    ///
    /// `Rejected` for 401, `Status` for any other non-success status,
    /// `Transport` / `Payload` for network and decoding failures.
    pub async fn get_account(&self, jwt: &str) -> Result<AccountDto, AccountApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-appwrite-project", self.project_id.clone());
        headers.insert(
            "x-appwrite-jwt",
            HeaderValue::from_str(jwt)
                .map_err(|_| AccountApiError::Header("X-Appwrite-JWT".to_owned()))?,
        );

        let response = self
            .client
            .get(format!("{}/account", self.base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| AccountApiError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<AccountDto>()
                .await
                .map_err(|e| AccountApiError::Payload(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(AccountApiError::Rejected(StatusCode::UNAUTHORIZED)),
            status => Err(AccountApiError::Status(status)),
        }
    }
}
