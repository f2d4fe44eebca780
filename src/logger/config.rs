//! Configuration types for the logger

use tracing::Level;

use crate::config::{Environment, Settings};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines
    #[default]
    Full,
    /// One JSON object per event
    Json,
}

/// Main logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level as requested, e.g. the raw `LOG_LEVEL` value
    pub requested_level: String,
    /// Level actually used
    pub level: Level,
    pub format: LogFormat,
    /// ANSI colors, only honoured when stdout is a terminal
    pub colored: bool,
}

impl LoggerConfig {
    /// Build the logger configuration from worker settings
    ///
    /// `LOG_LEVEL` picks the level (unknown values fall back to info) and
    /// `ENVIRONMENT` picks the format: JSON in production, full otherwise.
    pub fn from_settings(settings: &Settings) -> Self {
        let format = match settings.deployment() {
            Ok(Environment::Prod) => LogFormat::Json,
            Ok(Environment::Dev) | Err(_) => LogFormat::Full,
        };

        Self {
            requested_level: settings.log_level.clone(),
            level: parse_level(&settings.log_level).unwrap_or(Level::INFO),
            format,
            colored: format != LogFormat::Json,
        }
    }

    /// Override the level, e.g. from `--verbose` or `--quiet`
    pub fn with_level(mut self, level: Level) -> Self {
        self.requested_level = level.to_string();
        self.level = level;
        self
    }

    /// Whether the requested level was understood
    pub fn level_recognised(&self) -> bool {
        parse_level(&self.requested_level).is_some()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            requested_level: "info".to_string(),
            level: Level::INFO,
            format: LogFormat::Full,
            colored: true,
        }
    }
}

/// Parse a level name, case-insensitively
///
/// Accepts the usual tracing names plus `warning` and `critical`, which
/// operators coming from other stacks tend to use.
pub fn parse_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" | "critical" => Some(Level::ERROR),
        _ => None,
    }
}
