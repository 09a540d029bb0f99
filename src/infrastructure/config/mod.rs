//! Tool settings management
//!
//! Hierarchical settings using figment:
//! - YAML file loading
//! - Environment variable overrides (`WEBCONFIG_*`)
//! - Settings validation

pub mod loader;

pub use crate::domain::error::SettingsError;
pub use loader::SettingsLoader;
