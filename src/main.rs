//! Webconfig CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use webconfig::cli::{handle_error, Cli, Commands};
use webconfig::{LogConfig, LoggerImpl, ProcessEnv, Settings, SettingsLoader};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The logger (and its file guard) lives until main returns, after any
    // error has been reported.
    let _logger = match init_logging(&cli) {
        Ok(logger) => logger,
        Err(err) => return handle_error(&err, cli.json),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => handle_error(&err, cli.json),
    }
}

fn init_logging(cli: &Cli) -> Result<LoggerImpl> {
    let settings = load_settings(cli)?;
    let log_config =
        LogConfig::from_settings(&settings.logging).context("Invalid logging settings")?;
    LoggerImpl::init(&log_config)
}

fn run(cli: &Cli) -> Result<()> {
    let env = ProcessEnv;
    match &cli.command {
        Commands::Show(args) => webconfig::cli::commands::show::execute(args, cli.json, &env),
        Commands::Check(args) => webconfig::cli::commands::check::execute(args, cli.json, &env),
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.settings {
        Some(path) => SettingsLoader::load_from_file(path),
        None => SettingsLoader::load(),
    }
}
