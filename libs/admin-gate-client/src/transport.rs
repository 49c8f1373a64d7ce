//! Transport seams of the client gate.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::error::GateClientError;

/// Identity confirmed by a successful admin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub user_id: String,
}

/// Produces the credential presented to the server.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// # Errors
    ///
    /// `NoToken` when no credential is available, `Credential` when the
    /// source itself fails.
    async fn acquire(&self) -> Result<SecretString, GateClientError>;
}

/// Asks the server whether a credential belongs to an admin.
#[async_trait]
pub trait AdminCheck: Send + Sync {
    /// # Errors
    ///
    /// `Denied` when the server refuses, `Transport` when it cannot be
    /// reached.
    async fn check(&self, token: &SecretString) -> Result<AdminIdentity, GateClientError>;
}

/// A fixed credential, e.g. a token handed over by the embedding app.
pub struct StaticToken(SecretString);

impl StaticToken {
    pub fn new(token: impl Into<SecretString>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl CredentialSource for StaticToken {
    async fn acquire(&self) -> Result<SecretString, GateClientError> {
        if self.0.expose_secret().is_empty() {
            return Err(GateClientError::NoToken);
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_token_is_handed_out() {
        let token = StaticToken::new("jwt-1").acquire().await.unwrap();
        assert_eq!(token.expose_secret(), "jwt-1");
    }

    #[tokio::test]
    async fn empty_static_token_is_no_token() {
        let err = StaticToken::new("").acquire().await.unwrap_err();
        assert_eq!(err, GateClientError::NoToken);
        assert_eq!(err.to_string(), "No token");
    }
}
