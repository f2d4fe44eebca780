//! Logger Module
//!
//! Installs a `tracing-subscriber` registry configured from the worker
//! settings:
//! - level from `LOG_LEVEL`, overridable with `RUST_LOG`
//! - JSON lines in production, human-readable output elsewhere

pub mod config;
pub mod error;

pub use config::{LogFormat, LoggerConfig, parse_level};
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Build the level filter: `RUST_LOG` if set, the configured level otherwise
pub fn build_filter(config: &LoggerConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy()
}

/// Initialize the logger with the given configuration
pub fn init_logger(config: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = build_filter(config);
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    match config.format {
        LogFormat::Full => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).json())
            .try_init()?,
    }

    if !config.level_recognised() {
        tracing::warn!(
            log_level = %config.requested_level,
            "Unknown log level, using {}",
            config.level
        );
    }

    Ok(())
}
