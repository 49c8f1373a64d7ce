//! Appwrite server API: email messaging and user listing.
//!
//! Authenticates with the project's server API key.

use std::time::Duration;

use admin_messaging_sdk::Recipient;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{BackendError, MessagingBackend, OutgoingMessage, UserDirectory};

#[derive(Debug, thiserror::Error)]
pub enum AppwriteSetupError {
    #[error("Missing Appwrite server credentials")]
    MissingCredentials,
    #[error("invalid Appwrite credential header")]
    InvalidHeader,
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressDto<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

impl<'a> From<&'a Recipient> for AddressDto<'a> {
    fn from(r: &'a Recipient) -> Self {
        match r {
            Recipient::User(id) => Self {
                user_id: Some(id.as_str()),
                email: None,
                kind: None,
            },
            Recipient::Email(email) => Self {
                user_id: None,
                email: Some(email.as_str()),
                kind: None,
            },
            Recipient::Bcc(email) => Self {
                user_id: None,
                email: Some(email.as_str()),
                kind: Some("bcc"),
            },
        }
    }
}

#[derive(Deserialize)]
struct CreatedDto {
    #[serde(rename = "$id")]
    id: Option<String>,
}

#[derive(Deserialize)]
struct UserDto {
    #[serde(rename = "$id")]
    id: String,
}

#[derive(Deserialize)]
struct UserListDto {
    #[serde(default)]
    users: Vec<UserDto>,
}

#[derive(Deserialize, Default)]
struct ErrorDto {
    #[serde(default)]
    message: String,
}

/// Appwrite server client. Base URL has no trailing slash.
pub struct AppwriteServerApi {
    base_url: String,
    client: Client,
}

impl AppwriteServerApi {
    /// # Errors
    ///
    /// `MissingCredentials` when the project id or API key is missing.
    pub fn new(
        endpoint: &str,
        project_id: &str,
        api_key: Option<&SecretString>,
        timeout: Duration,
    ) -> Result<Self, AppwriteSetupError> {
        let api_key = api_key
            .map(ExposeSecret::expose_secret)
            .filter(|k| !k.is_empty())
            .ok_or(AppwriteSetupError::MissingCredentials)?;
        if project_id.is_empty() || endpoint.is_empty() {
            return Err(AppwriteSetupError::MissingCredentials);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-appwrite-project",
            HeaderValue::from_str(project_id).map_err(|_| AppwriteSetupError::InvalidHeader)?,
        );
        let mut key =
            HeaderValue::from_str(api_key).map_err(|_| AppwriteSetupError::InvalidHeader)?;
        key.set_sensitive(true);
        headers.insert("x-appwrite-key", key);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| AppwriteSetupError::Client(e.to_string()))?;

        Ok(Self {
            base_url: endpoint.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Extract Appwrite's error message from a failed response.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.json::<ErrorDto>().await.unwrap_or_default();
        tracing::debug!(%status, message = %body.message, "appwrite request failed");
        body.message
    }
}

#[async_trait]
impl MessagingBackend for AppwriteServerApi {
    async fn deliver(&self, message: &OutgoingMessage) -> Result<Option<String>, BackendError> {
        let addresses: Vec<AddressDto<'_>> =
            message.recipients.iter().map(AddressDto::from).collect();
        let payload = json!({
            "messageId": "unique()",
            "subject": message.subject,
            "content": message.content,
            "html": message.html,
            "addresses": addresses,
            "data": { "topic": message.topic },
        });

        let response = self
            .client
            .post(format!("{}/messaging/messages/email", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError(Self::error_message(response).await));
        }

        let created = response
            .json::<CreatedDto>()
            .await
            .map_err(|e| BackendError(e.to_string()))?;
        Ok(created.id)
    }
}

#[async_trait]
impl UserDirectory for AppwriteServerApi {
    async fn list_user_ids(&self) -> Result<Vec<String>, BackendError> {
        let response = self
            .client
            .get(format!("{}/users", self.base_url))
            .send()
            .await
            .map_err(|e| BackendError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError(Self::error_message(response).await));
        }

        let list = response
            .json::<UserListDto>()
            .await
            .map_err(|e| BackendError(e.to_string()))?;
        Ok(list.users.into_iter().map(|u| u.id).collect())
    }
}
