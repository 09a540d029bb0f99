//! Implementation of the `webconfig check` command.

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::cli::output::{
    action_success, action_warning, list_table, output, CommandOutput, ABSENT,
};
use crate::cli::types::CheckArgs;
use crate::domain::models::{ConfigKey, ConfigReport, FieldReport, FieldSource};
use crate::domain::ports::EnvSource;

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub complete: bool,
    pub strict: bool,
    pub fields: Vec<FieldReport>,
    pub absent: Vec<ConfigKey>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["key", "variable", "source", "value"]);
        for field in &self.fields {
            let source = match field.source {
                FieldSource::Environment => style(field.source.as_str()).green(),
                FieldSource::Default => style(field.source.as_str()).cyan(),
                FieldSource::Absent => style(field.source.as_str()).yellow(),
            };
            table.add_row(vec![
                field.key.as_str().to_string(),
                field.env_var.to_string(),
                source.to_string(),
                field.value.clone().unwrap_or_else(|| ABSENT.to_string()),
            ]);
        }

        let summary = if self.complete {
            action_success("All configuration values are set")
        } else {
            action_warning(&format!(
                "{} value(s) not set: {}",
                self.absent.len(),
                self.absent
                    .iter()
                    .map(|key| key.env_var())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        };

        format!("{table}\n\n{summary}")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Inspect `env` and summarise provenance.
pub fn build<E: EnvSource + ?Sized>(args: &CheckArgs, env: &E) -> (CheckOutput, ConfigReport) {
    let report = ConfigReport::inspect(env);
    let absent = report.absent();
    let result = CheckOutput {
        complete: absent.is_empty(),
        strict: args.strict,
        fields: report.fields().to_vec(),
        absent,
    };
    (result, report)
}

pub fn execute<E: EnvSource + ?Sized>(args: &CheckArgs, json_mode: bool, env: &E) -> Result<()> {
    let (result, report) = build(args, env);

    for key in &result.absent {
        tracing::debug!(key = %key, env_var = key.env_var(), "configuration value not set");
    }

    output(&result, json_mode);

    if args.strict {
        report.require_complete()?;
    }
    Ok(())
}
