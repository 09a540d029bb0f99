//! Provenance report: where each configuration value came from.

use serde::Serialize;

use super::app_config::{AppConfig, ConfigKey};
use crate::domain::error::MissingFields;
use crate::domain::ports::EnvSource;

/// Origin of a resolved configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Read from the environment variable.
    Environment,
    /// Computed fallback (only `issuer` and `scope`).
    Default,
    /// Not set, and no fallback exists.
    Absent,
}

impl FieldSource {
    /// Lowercase label used in CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Default => "default",
            Self::Absent => "absent",
        }
    }
}

/// One row of a [`ConfigReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub key: ConfigKey,
    pub env_var: &'static str,
    pub source: FieldSource,
    /// Resolved value; for `issuer` and `scope` this includes fallbacks.
    pub value: Option<String>,
}

/// Resolved configuration together with per-field provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    config: AppConfig,
    fields: Vec<FieldReport>,
}

impl ConfigReport {
    /// Resolve the configuration from `env` and record where every value
    /// came from.
    pub fn inspect<E: EnvSource + ?Sized>(env: &E) -> Self {
        let config = AppConfig::from_env(env);

        let fields = ConfigKey::ALL
            .into_iter()
            .map(|key| {
                let source = if key.is_derived() {
                    match env.non_empty_var(key.env_var()) {
                        Some(_) => FieldSource::Environment,
                        None => FieldSource::Default,
                    }
                } else {
                    match env.var(key.env_var()) {
                        Some(_) => FieldSource::Environment,
                        None => FieldSource::Absent,
                    }
                };
                FieldReport {
                    key,
                    env_var: key.env_var(),
                    source,
                    value: config.get(key).map(str::to_string),
                }
            })
            .collect();

        Self { config, fields }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consume the report, keeping only the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Per-field provenance, in table order.
    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    /// Provenance of a single key.
    pub fn source(&self, key: ConfigKey) -> FieldSource {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map_or(FieldSource::Absent, |field| field.source)
    }

    /// Direct fields that are not set.
    pub fn absent(&self) -> Vec<ConfigKey> {
        self.fields
            .iter()
            .filter(|field| field.source == FieldSource::Absent)
            .map(|field| field.key)
            .collect()
    }

    /// Whether every direct field is set.
    pub fn is_complete(&self) -> bool {
        self.absent().is_empty()
    }

    /// Fail with [`MissingFields`] unless every direct field is set.
    pub fn require_complete(&self) -> Result<(), MissingFields> {
        let absent = self.absent();
        if absent.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(absent))
        }
    }
}
