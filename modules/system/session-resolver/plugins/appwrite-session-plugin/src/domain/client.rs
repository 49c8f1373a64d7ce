//! `SessionResolverPluginClient` implementation for the Appwrite plugin.

use async_trait::async_trait;
use notehub_security::Principal;
use session_resolver_sdk::{SessionResolverError, SessionResolverPluginClient};

use super::service::Service;
use crate::infra::AccountApiError;

impl From<AccountApiError> for SessionResolverError {
    fn from(e: AccountApiError) -> Self {
        match e {
            AccountApiError::Rejected(_) | AccountApiError::Header(_) => {
                Self::Unauthorized(e.to_string())
            }
            AccountApiError::Status(_) | AccountApiError::Transport(_) => {
                Self::ServiceUnavailable(e.to_string())
            }
            AccountApiError::Payload(_) => Self::Internal(e.to_string()),
        }
    }
}

#[async_trait]
impl SessionResolverPluginClient for Service {
    async fn resolve(&self, credential: &str) -> Result<Principal, SessionResolverError> {
        if credential.is_empty() {
            return Err(SessionResolverError::Unauthorized(
                "missing credential".to_owned(),
            ));
        }
        Service::resolve(self, credential).await.map_err(Into::into)
    }
}
