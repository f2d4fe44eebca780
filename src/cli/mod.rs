//! CLI module for atlas-worker
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Settings loading according to the dotenv flags
//! - Command handlers for check and show operations

pub mod executor;
pub mod handlers;
pub mod parser;

// Re-export public types for convenience
pub use executor::execute_command;
pub use parser::{Cli, Commands, OutputFormat};

use tracing::Level;

use crate::config::{ConfigError, ConfigLoader, Settings};
use crate::logger::LoggerConfig;

/// Configuration loader honouring `--env-file` and `--no-env-file`
pub fn config_loader(cli: &Cli) -> ConfigLoader {
    let loader = ConfigLoader::new();
    match (&cli.env_file, cli.no_env_file) {
        (_, true) => loader.without_env_file(),
        (Some(path), false) => loader.with_env_file(path.clone()),
        (None, false) => loader,
    }
}

/// Load settings for the given command line
///
/// # Errors
/// Returns the loader's error unchanged; callers are expected to abort startup.
pub fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    config_loader(cli).load()
}

/// Logger configuration from settings, with `--verbose`/`--quiet` applied
pub fn logger_config(cli: &Cli, settings: &Settings) -> LoggerConfig {
    let config = LoggerConfig::from_settings(settings);
    if cli.verbose {
        config.with_level(Level::DEBUG)
    } else if cli.quiet {
        config.with_level(Level::ERROR)
    } else {
        config
    }
}
