use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the `webconfig` tool itself
///
/// These control how the tool behaves; they never influence the resolved
/// `AppConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files (optional, if None logs only to stderr)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File name prefix inside `log_dir`
    #[serde(default = "default_log_file_name")]
    pub file_name: String,

    /// Rotation policy for log files (daily, hourly, never)
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_file_name() -> String {
    "webconfig.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            file_name: default_log_file_name(),
            rotation: default_rotation(),
        }
    }
}
