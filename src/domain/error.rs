use thiserror::Error;

use super::models::ConfigKey;

/// Errors raised while validating the tool's own settings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Log file name cannot be empty")]
    EmptyLogFileName,
}

/// Raised by strict checks when direct configuration fields are unset.
///
/// Resolving an [`AppConfig`](super::models::AppConfig) never fails; this
/// error only exists for callers that opt into requiring every field.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{} configuration value(s) not set: {}", .0.len(), render_missing(.0))]
pub struct MissingFields(pub Vec<ConfigKey>);

fn render_missing(keys: &[ConfigKey]) -> String {
    keys.iter()
        .map(|key| key.env_var())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_env_vars() {
        let err = MissingFields(vec![ConfigKey::ClientId, ConfigKey::ApiUri]);
        assert_eq!(
            err.to_string(),
            "2 configuration value(s) not set: REACT_APP_CLIENT_ID, REACT_APP_API_URI"
        );
    }

    #[test]
    fn test_settings_error_messages() {
        assert_eq!(
            SettingsError::InvalidLogFormat("xml".to_string()).to_string(),
            "Invalid log format: xml. Must be one of: json, pretty"
        );
        assert_eq!(
            SettingsError::EmptyLogFileName.to_string(),
            "Log file name cannot be empty"
        );
    }
}
