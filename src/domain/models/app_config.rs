//! Deployment configuration record consumed by the web client.
//!
//! Seven fields are copied verbatim from `REACT_APP_*` variables and may be
//! absent. `issuer` and `scope` always resolve to a non-empty string: an
//! explicit override wins, otherwise a fallback is computed.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::domain::ports::{non_empty, EnvSource};

/// Scope requested when `REACT_APP_SCOPE` is unset or empty.
pub const DEFAULT_SCOPE: &str = "openid profile email";

/// Text substituted for an absent region or user pool in the derived issuer.
const UNDEFINED: &str = "undefined";

/// Build the Cognito token-issuer URL for a region and user pool.
///
/// Absent parts are substituted with the literal text `undefined`, so the
/// result is always a complete URL string even when nothing is configured.
///
/// # Examples
///
/// ```
/// use webconfig::domain::models::cognito_issuer;
///
/// assert_eq!(
///     cognito_issuer(Some("us-east-1"), Some("pool123")),
///     "https://cognito-idp.us-east-1.amazonaws.com/pool123"
/// );
/// assert_eq!(
///     cognito_issuer(None, None),
///     "https://cognito-idp.undefined.amazonaws.com/undefined"
/// );
/// ```
pub fn cognito_issuer(region: Option<&str>, user_pool: Option<&str>) -> String {
    format!(
        "https://cognito-idp.{}.amazonaws.com/{}",
        region.unwrap_or(UNDEFINED),
        user_pool.unwrap_or(UNDEFINED)
    )
}

/// Keys of the configuration record, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigKey {
    Region,
    UserPool,
    UserPoolBaseUri,
    ClientId,
    ApiUri,
    Environment,
    AwsAccount,
    Issuer,
    Scope,
}

impl ConfigKey {
    /// Every key, in table order.
    pub const ALL: [Self; 9] = [
        Self::Region,
        Self::UserPool,
        Self::UserPoolBaseUri,
        Self::ClientId,
        Self::ApiUri,
        Self::Environment,
        Self::AwsAccount,
        Self::Issuer,
        Self::Scope,
    ];

    /// Keys copied verbatim from the environment with no fallback.
    pub const DIRECT: [Self; 7] = [
        Self::Region,
        Self::UserPool,
        Self::UserPoolBaseUri,
        Self::ClientId,
        Self::ApiUri,
        Self::Environment,
        Self::AwsAccount,
    ];

    /// The camelCase name the web client uses for this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::UserPool => "userPool",
            Self::UserPoolBaseUri => "userPoolBaseUri",
            Self::ClientId => "clientId",
            Self::ApiUri => "apiUri",
            Self::Environment => "environment",
            Self::AwsAccount => "awsAccount",
            Self::Issuer => "issuer",
            Self::Scope => "scope",
        }
    }

    /// The environment variable this key is read from.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Region => "REACT_APP_AWS_REGION",
            Self::UserPool => "REACT_APP_COGNITO_USERPOOL",
            Self::UserPoolBaseUri => "REACT_APP_COGNITO_USERPOOL_BASE_URI",
            Self::ClientId => "REACT_APP_CLIENT_ID",
            Self::ApiUri => "REACT_APP_API_URI",
            Self::Environment => "REACT_APP_ENVIRONMENT",
            Self::AwsAccount => "REACT_APP_AWS_ACCOUNT",
            Self::Issuer => "REACT_APP_ISSUER",
            Self::Scope => "REACT_APP_SCOPE",
        }
    }

    /// Whether the key falls back to a computed value when unset.
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Issuer | Self::Scope)
    }

}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable deployment configuration for the web client.
///
/// Built once at start-up and handed to consumers explicitly. Fields are
/// private and only exposed through read accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    region: Option<String>,
    user_pool: Option<String>,
    user_pool_base_uri: Option<String>,
    client_id: Option<String>,
    api_uri: Option<String>,
    environment: Option<String>,
    aws_account: Option<String>,
    issuer: String,
    scope: String,
}

impl AppConfig {
    /// Start building a configuration by hand.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve the configuration from an environment source.
    ///
    /// Never fails: unset variables become absent fields, and `issuer` and
    /// `scope` fall back to their computed defaults.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        let builder = ConfigKey::ALL
            .into_iter()
            .fold(AppConfigBuilder::default(), |builder, key| {
                builder.with(key, env.var(key.env_var()))
            });
        builder.build()
    }

    /// AWS region, e.g. `us-east-1`.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Cognito user pool id.
    pub fn user_pool(&self) -> Option<&str> {
        self.user_pool.as_deref()
    }

    /// Base URI of the Cognito hosted domain.
    pub fn user_pool_base_uri(&self) -> Option<&str> {
        self.user_pool_base_uri.as_deref()
    }

    /// OAuth client id of the web client.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Base URI of the backend API.
    pub fn api_uri(&self) -> Option<&str> {
        self.api_uri.as_deref()
    }

    /// Deployment environment name.
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// AWS account id.
    pub fn aws_account(&self) -> Option<&str> {
        self.aws_account.as_deref()
    }

    /// OIDC token issuer. Never empty.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Requested OAuth scope. Never empty.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Value of a single key.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::Region => self.region(),
            ConfigKey::UserPool => self.user_pool(),
            ConfigKey::UserPoolBaseUri => self.user_pool_base_uri(),
            ConfigKey::ClientId => self.client_id(),
            ConfigKey::ApiUri => self.api_uri(),
            ConfigKey::Environment => self.environment(),
            ConfigKey::AwsAccount => self.aws_account(),
            ConfigKey::Issuer => Some(self.issuer()),
            ConfigKey::Scope => Some(self.scope()),
        }
    }

    /// All keys with their values, in table order.
    pub fn entries(&self) -> Vec<(ConfigKey, Option<&str>)> {
        ConfigKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .collect()
    }

    /// Render set fields as dotenv-style `REACT_APP_*=value` lines.
    ///
    /// `issuer` and `scope` are emitted with their resolved values. Values
    /// containing whitespace, quotes, `#`, `$`, backslashes or line breaks
    /// are double-quoted and escaped, so every field stays on one line.
    pub fn to_env_lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|v| format!("{}={}", key.env_var(), quote_env_value(v)))
            })
            .collect()
    }
}

/// Quote a value for a dotenv line when it would otherwise be misread.
fn quote_env_value(value: &str) -> String {
    let needs_quotes = value.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '#' | '"' | '\'' | '\\' | '$' | '`')
    });
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

/// Builder for [`AppConfig`].
///
/// `build` applies the same fallback rules as [`AppConfig::from_env`]: an
/// empty or missing issuer is derived from region and user pool, an empty
/// or missing scope becomes [`DEFAULT_SCOPE`].
#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    region: Option<String>,
    user_pool: Option<String>,
    user_pool_base_uri: Option<String>,
    client_id: Option<String>,
    api_uri: Option<String>,
    environment: Option<String>,
    aws_account: Option<String>,
    issuer: Option<String>,
    scope: Option<String>,
}

impl AppConfigBuilder {
    /// Set or clear the value for `key`.
    pub fn with(mut self, key: ConfigKey, value: Option<String>) -> Self {
        let slot = match key {
            ConfigKey::Region => &mut self.region,
            ConfigKey::UserPool => &mut self.user_pool,
            ConfigKey::UserPoolBaseUri => &mut self.user_pool_base_uri,
            ConfigKey::ClientId => &mut self.client_id,
            ConfigKey::ApiUri => &mut self.api_uri,
            ConfigKey::Environment => &mut self.environment,
            ConfigKey::AwsAccount => &mut self.aws_account,
            ConfigKey::Issuer => &mut self.issuer,
            ConfigKey::Scope => &mut self.scope,
        };
        *slot = value;
        self
    }

    /// Set the AWS region.
    pub fn region(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::Region, Some(value.into()))
    }

    /// Set the Cognito user pool id.
    pub fn user_pool(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::UserPool, Some(value.into()))
    }

    /// Set the Cognito hosted domain base URI.
    pub fn user_pool_base_uri(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::UserPoolBaseUri, Some(value.into()))
    }

    /// Set the OAuth client id.
    pub fn client_id(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::ClientId, Some(value.into()))
    }

    /// Set the backend API base URI.
    pub fn api_uri(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::ApiUri, Some(value.into()))
    }

    /// Set the deployment environment name.
    pub fn environment(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::Environment, Some(value.into()))
    }

    /// Set the AWS account id.
    pub fn aws_account(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::AwsAccount, Some(value.into()))
    }

    /// Override the token issuer.
    pub fn issuer(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::Issuer, Some(value.into()))
    }

    /// Override the OAuth scope.
    pub fn scope(self, value: impl Into<String>) -> Self {
        self.with(ConfigKey::Scope, Some(value.into()))
    }

    /// Finish the record.
    pub fn build(self) -> AppConfig {
        for key in ConfigKey::DIRECT {
            if self.peek(key).is_none() {
                debug!(key = %key, env_var = key.env_var(), "configuration value not set");
            }
        }

        let issuer = match non_empty(self.issuer) {
            Some(issuer) => issuer,
            None => {
                debug!("issuer not set, deriving from region and user pool");
                cognito_issuer(self.region.as_deref(), self.user_pool.as_deref())
            }
        };

        let scope = non_empty(self.scope).unwrap_or_else(|| {
            debug!(scope = DEFAULT_SCOPE, "scope not set, using default");
            DEFAULT_SCOPE.to_string()
        });

        AppConfig {
            region: self.region,
            user_pool: self.user_pool,
            user_pool_base_uri: self.user_pool_base_uri,
            client_id: self.client_id,
            api_uri: self.api_uri,
            environment: self.environment,
            aws_account: self.aws_account,
            issuer,
            scope,
        }
    }

    fn peek(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::Region => self.region.as_deref(),
            ConfigKey::UserPool => self.user_pool.as_deref(),
            ConfigKey::UserPoolBaseUri => self.user_pool_base_uri.as_deref(),
            ConfigKey::ClientId => self.client_id.as_deref(),
            ConfigKey::ApiUri => self.api_uri.as_deref(),
            ConfigKey::Environment => self.environment.as_deref(),
            ConfigKey::AwsAccount => self.aws_account.as_deref(),
            ConfigKey::Issuer => self.issuer.as_deref(),
            ConfigKey::Scope => self.scope.as_deref(),
        }
    }
}
