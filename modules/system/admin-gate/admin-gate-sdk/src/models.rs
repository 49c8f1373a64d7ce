//! Authorization decision model.

use std::fmt;

use notehub_security::{PreferenceValue, Principal};
use serde::{Serialize, Serializer};

/// Why the gate denied a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// No identifiable principal behind the credential.
    Unauthenticated,
    /// The principal is known but lacks the admin preference.
    Forbidden,
    /// Session resolution failed unexpectedly; carries the failure message.
    Error(String),
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => f.write_str("unauthenticated"),
            Self::Forbidden => f.write_str("forbidden"),
            Self::Error(detail) => write!(f, "error:{detail}"),
        }
    }
}

impl Serialize for DenyReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of one gate invocation. Created fresh per call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    /// Observed `admin` preference, reported on forbidden decisions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pref_value: Option<PreferenceValue>,
}

impl AuthorizationDecision {
    #[must_use]
    pub fn allow(principal: Principal) -> Self {
        Self {
            allowed: true,
            reason: None,
            principal: Some(principal),
            pref_value: None,
        }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::deny(DenyReason::Unauthenticated)
    }

    #[must_use]
    pub fn forbidden(principal: Principal, pref_value: Option<PreferenceValue>) -> Self {
        Self {
            allowed: false,
            reason: Some(DenyReason::Forbidden),
            principal: Some(principal),
            pref_value,
        }
    }

    #[must_use]
    pub fn error(detail: impl Into<String>) -> Self {
        Self::deny(DenyReason::Error(detail.into()))
    }

    fn deny(reason: DenyReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            principal: None,
            pref_value: None,
        }
    }

    /// Id of the principal the decision was made for, if any.
    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.principal.as_ref().map(|p| p.id.as_str())
    }
}
