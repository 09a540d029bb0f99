use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;

use crate::domain::error::SettingsError;
use crate::domain::models::Settings;

/// Project settings file, relative to the working directory.
pub const PROJECT_SETTINGS: &str = ".webconfig/config.yaml";

/// Optional local overrides, relative to the working directory.
pub const LOCAL_SETTINGS: &str = ".webconfig/local.yaml";

/// Prefix for settings overrides in the environment.
pub const ENV_PREFIX: &str = "WEBCONFIG_";

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .webconfig/config.yaml
    /// 3. .webconfig/local.yaml (optional)
    /// 4. Environment variables (WEBCONFIG_* prefix, `__` separates nesting)
    pub fn load() -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(PROJECT_SETTINGS))
            .merge(Yaml::file(LOCAL_SETTINGS))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Settings> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }

        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path))
            .extract()
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let logging = &settings.logging;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&logging.format.as_str()) {
            return Err(SettingsError::InvalidLogFormat(logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&logging.rotation.as_str()) {
            return Err(SettingsError::InvalidLogRotation(logging.rotation.clone()));
        }

        if logging.file_name.trim().is_empty() {
            return Err(SettingsError::EmptyLogFileName);
        }

        Ok(())
    }
}
