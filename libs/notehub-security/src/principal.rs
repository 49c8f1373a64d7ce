use serde::{Deserialize, Serialize};

use crate::preference::{Preferences, is_admin_value};

/// An authenticated user as resolved from the auth backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub prefs: Preferences,
}

impl Principal {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            name: None,
            prefs: Preferences::default(),
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_prefs(mut self, prefs: Preferences) -> Self {
        self.prefs = prefs;
        self
    }

    /// A principal without an id cannot be identified and is treated as
    /// anonymous.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        !self.id.trim().is_empty()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        is_admin_value(self.prefs.admin())
    }
}
