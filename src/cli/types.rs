//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "webconfig")]
#[command(about = "Resolve the web client deployment configuration from REACT_APP_* variables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file for the tool (defaults to .webconfig/config.yaml)
    #[arg(long, global = true, env = "WEBCONFIG_SETTINGS")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration
    Show(ShowArgs),

    /// Report where each value came from and which are unset
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Output format (--json overrides this)
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Table)]
    pub format: ShowFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowFormat {
    /// Two-column key/value table
    #[default]
    Table,
    /// JSON object with the web client's key names
    Json,
    /// REACT_APP_*=value lines
    Env,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Fail when any directly-read value is unset
    #[arg(long)]
    pub strict: bool,
}
