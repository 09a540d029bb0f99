use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::SettingsError;
use crate::domain::models::LoggingSettings;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format for stderr (json, pretty)
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// File name prefix inside `log_dir`
    pub file_name: String,

    /// Log rotation policy
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl LogConfig {
    /// Convert validated string settings into a typed logging configuration
    pub fn from_settings(settings: &LoggingSettings) -> Result<Self, SettingsError> {
        let format = match settings.format.as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            other => return Err(SettingsError::InvalidLogFormat(other.to_string())),
        };

        let rotation = match settings.rotation.as_str() {
            "daily" => RotationPolicy::Daily,
            "hourly" => RotationPolicy::Hourly,
            "never" => RotationPolicy::Never,
            other => return Err(SettingsError::InvalidLogRotation(other.to_string())),
        };

        if settings.file_name.trim().is_empty() {
            return Err(SettingsError::EmptyLogFileName);
        }

        Ok(Self {
            level: settings.level.clone(),
            format,
            log_dir: settings.log_dir.clone(),
            file_name: settings.file_name.clone(),
            rotation,
        })
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        // Defaults of LoggingSettings are always convertible
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            log_dir: None,
            file_name: "webconfig.log".to_string(),
            rotation: RotationPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_convert_to_default_config() {
        let config = LogConfig::from_settings(&LoggingSettings::default()).unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_from_settings_maps_enums() {
        let settings = LoggingSettings {
            format: "json".to_string(),
            rotation: "never".to_string(),
            log_dir: Some(PathBuf::from("/tmp/logs")),
            ..Default::default()
        };
        let config = LogConfig::from_settings(&settings).unwrap();

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.rotation, RotationPolicy::Never);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_from_settings_rejects_unknown_rotation() {
        let settings = LoggingSettings {
            rotation: "weekly".to_string(),
            ..Default::default()
        };
        assert_eq!(
            LogConfig::from_settings(&settings),
            Err(SettingsError::InvalidLogRotation("weekly".to_string()))
        );
    }
}
