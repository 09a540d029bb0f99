//! Command-line interface for resolving and inspecting the configuration.

use std::process::ExitCode;

pub mod commands;
pub mod output;
pub mod types;

pub use types::{CheckArgs, Cli, Commands, ShowArgs, ShowFormat};

/// Render an error for stderr in the selected output mode.
///
/// In JSON mode the result is a single JSON document so stderr stays
/// machine-readable.
pub fn render_error(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        output::action_failure(&format!("{err:#}"))
    }
}

/// Print an error once to stderr and return the failure exit code.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    eprintln!("{}", render_error(err, json_mode));
    ExitCode::FAILURE
}
