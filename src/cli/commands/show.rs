//! Implementation of the `webconfig show` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{list_table, output, CommandOutput, ABSENT};
use crate::cli::types::{ShowArgs, ShowFormat};
use crate::domain::models::AppConfig;
use crate::domain::ports::EnvSource;

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    #[serde(flatten)]
    pub config: AppConfig,
    #[serde(skip)]
    pub format: ShowFormat,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        match self.format {
            ShowFormat::Table => {
                let mut table = list_table(&["key", "value"]);
                for (key, value) in self.config.entries() {
                    table.add_row(vec![key.as_str(), value.unwrap_or(ABSENT)]);
                }
                table.to_string()
            }
            ShowFormat::Json => {
                serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
            }
            ShowFormat::Env => self.config.to_env_lines().join("\n"),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }
}

/// Resolve the configuration from `env` and wrap it for display.
pub fn build<E: EnvSource + ?Sized>(args: &ShowArgs, env: &E) -> ShowOutput {
    ShowOutput {
        config: AppConfig::from_env(env),
        format: args.format,
    }
}

pub fn execute<E: EnvSource + ?Sized>(args: &ShowArgs, json_mode: bool, env: &E) -> Result<()> {
    let result = build(args, env);
    tracing::info!(issuer = result.config.issuer(), "configuration resolved");
    output(&result, json_mode);
    Ok(())
}
