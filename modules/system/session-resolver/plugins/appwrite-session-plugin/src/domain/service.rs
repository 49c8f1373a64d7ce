//! Maps Appwrite accounts onto principals.

use notehub_security::{Preferences, Principal};

use crate::infra::{AccountApi, AccountApiError, AccountDto};

pub struct Service {
    api: AccountApi,
}

impl Service {
    #[must_use]
    pub fn new(api: AccountApi) -> Self {
        Self { api }
    }

    /// Resolve a JWT into a principal.
    ///
    /// # Errors
    ///
    /// Propagates [`AccountApiError`] from the account lookup.
    pub async fn resolve(&self, jwt: &str) -> Result<Principal, AccountApiError> {
        let account = self.api.get_account(jwt).await?;
        Ok(principal_from_account(account))
    }
}

/// Appwrite reports unset email/name as empty strings.
fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

pub(crate) fn principal_from_account(account: AccountDto) -> Principal {
    Principal {
        id: account.id,
        email: non_empty(account.email),
        name: non_empty(account.name),
        prefs: account.prefs.map(Preferences::from).unwrap_or_default(),
    }
}
