//! Configuration for the session resolver.

use serde::{Deserialize, Serialize};

/// Configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionResolverConfig {
    /// Plugin names in the order they are consulted.
    ///
    /// Empty means registration order. Every listed name must match a
    /// registered plugin.
    pub plugins: Vec<String>,
}

impl Default for SessionResolverConfig {
    fn default() -> Self {
        Self {
            plugins: vec!["appwrite".to_owned()],
        }
    }
}
