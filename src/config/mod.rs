//! Configuration for the i18n system.
//!
//! [`ModuleOptions`] is the setup-time surface (usually read from `i18n.yml`),
//! [`RuntimeConfig`] the read-only configuration shared with request handling
//! and UI code after setup.

/// Reading YAML/TOML/JSON files.
mod parsing;
/// Configuration file discovery.
mod paths;
/// Configuration type definitions.
mod types;
/// Invariant restoration and unsupported-option reporting.
mod validate;

pub use parsing::{FileFormat, load_options, parse_tree, read_tree_file};
pub use paths::{config_dir, find_config_file, find_with_stem};
pub use types::{
    DEFAULT_COOKIE_KEY, DEFAULT_LOCALE, DetectBrowserLanguage, MessagesFactory, MessagesSource,
    ModuleOptions, RedirectOn, RuntimeConfig, Strategy,
};

use serde_json::Value;

use crate::i18n::merge::deep_merge;

/// What: Compose a runtime configuration from user overrides.
///
/// Inputs:
/// - `user_config`: Partial configuration tree (camelCase keys)
///
/// Output:
/// - [`RuntimeConfig::default`] deep-merged with `user_config`
///
/// Details:
/// - Arrays (such as `locales`) replace the defaults, objects merge key by key
/// - If the merged tree does not fit the schema, a warning is logged and the
///   defaults are returned
#[must_use]
pub fn create_i18n_config(user_config: &Value) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let base = match serde_json::to_value(&defaults) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to serialize default i18n config: {e}");
            return defaults;
        }
    };
    let merged = deep_merge(base, user_config.clone());
    serde_json::from_value(merged).unwrap_or_else(|e| {
        tracing::warn!("Invalid i18n config, using defaults: {e}");
        defaults
    })
}

/// What: Build the effective runtime configuration from a raw tree.
///
/// Output:
/// - [`create_i18n_config`] followed by [`RuntimeConfig::normalized`]
#[must_use]
pub fn use_i18n_config(raw: &Value) -> RuntimeConfig {
    create_i18n_config(raw).normalized()
}
