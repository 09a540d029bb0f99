pub mod app_config;
pub mod report;
pub mod settings;

pub use app_config::{cognito_issuer, AppConfig, AppConfigBuilder, ConfigKey, DEFAULT_SCOPE};
pub use report::{ConfigReport, FieldReport, FieldSource};
pub use settings::{LoggingSettings, Settings};
