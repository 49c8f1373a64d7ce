use async_trait::async_trait;

use crate::domain::{BackendError, UserDirectory};

/// Directory backed by a configured list of user ids.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    user_ids: Vec<String>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new(user_ids: Vec<String>) -> Self {
        Self { user_ids }
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn list_user_ids(&self) -> Result<Vec<String>, BackendError> {
        Ok(self.user_ids.clone())
    }
}
