#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod context;
pub mod preference;
pub mod principal;

pub use context::SecurityContext;
pub use preference::{ADMIN_PREF_KEY, PreferenceValue, Preferences, is_admin_value};
pub use principal::Principal;
