use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Preference key carrying the admin flag.
pub const ADMIN_PREF_KEY: &str = "admin";

/// A single user preference value as stored by the auth backend.
///
/// The backend stores free-form JSON. Booleans and strings are kept as their
/// own variants so the admin check can normalise them explicitly; anything
/// else (numbers, objects, arrays, null) lands in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

impl From<serde_json::Value> for PreferenceValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Returns `true` only for boolean `true` or the exact string `"true"`.
///
/// Everything else is not admin: absent, `false`, `"false"`, `"TRUE"`,
/// `1`, `"1"`.
#[must_use]
pub fn is_admin_value(value: Option<&PreferenceValue>) -> bool {
    matches!(value, Some(PreferenceValue::Bool(true)))
        || matches!(value, Some(PreferenceValue::Text(s)) if s == "true")
}

/// Free-form preference map attached to a principal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(BTreeMap<String, PreferenceValue>);

impl Preferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PreferenceValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PreferenceValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PreferenceValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw value of the `admin` key, if any.
    #[must_use]
    pub fn admin(&self) -> Option<&PreferenceValue> {
        self.get(ADMIN_PREF_KEY)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Preferences {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(
            map.into_iter()
                .map(|(k, v)| (k, PreferenceValue::from(v)))
                .collect(),
        )
    }
}
