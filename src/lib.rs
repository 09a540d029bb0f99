//! Webconfig - deployment configuration for the web client
//!
//! Resolves the region, Cognito endpoints, client id, API base URI,
//! environment name, AWS account and OAuth scope from `REACT_APP_*`
//! environment variables into one immutable [`AppConfig`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record, provenance
//!   report and the `EnvSource` port
//! - **Infrastructure Layer** (`infrastructure`): environment sources, tool
//!   settings loading and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use webconfig::{AppConfig, MapEnv};
//!
//! let env = MapEnv::new()
//!     .with("REACT_APP_AWS_REGION", "us-east-1")
//!     .with("REACT_APP_COGNITO_USERPOOL", "pool123");
//! let config = AppConfig::from_env(&env);
//!
//! assert_eq!(config.issuer(), "https://cognito-idp.us-east-1.amazonaws.com/pool123");
//! assert_eq!(config.scope(), "openid profile email");
//! assert_eq!(config.client_id(), None);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    cognito_issuer, AppConfig, AppConfigBuilder, ConfigKey, ConfigReport, FieldReport,
    FieldSource, LoggingSettings, Settings, DEFAULT_SCOPE,
};
pub use domain::ports::EnvSource;
pub use domain::{MissingFields, SettingsError};
pub use infrastructure::config::SettingsLoader;
pub use infrastructure::env::{MapEnv, ProcessEnv};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
