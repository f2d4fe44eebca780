//! Configuration loader for atlas-worker
//!
//! This module provides the `ConfigLoader` struct that merges defaults, the
//! dotenv file and the process environment into [`Settings`].

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};

use crate::config::error::ConfigError;
use crate::config::settings::{FIELDS, FieldDefault, FieldKind, Settings};
use crate::config::source::VariableSource;

/// Default dotenv file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Configuration loader that handles layered configuration loading
///
/// Sources, in order of priority (lowest to highest):
/// 1. Compiled-in defaults
/// 2. The dotenv file (optional, `.env` by default)
/// 3. Process environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    /// Dotenv file to read; `None` skips it
    env_file: Option<PathBuf>,
    /// Replacement for the process environment
    vars: Option<VariableSource>,
}

impl ConfigLoader {
    /// Loader reading `.env` from the working directory and the process environment
    pub fn new() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            vars: None,
        }
    }

    /// Read a different dotenv file
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Do not read any dotenv file
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Use the given variables instead of the process environment
    ///
    /// This only replaces the highest-priority layer. `${VAR}` references
    /// inside the dotenv file are still expanded by `dotenvy` against the
    /// real process environment, so combine with [`Self::without_env_file`]
    /// when the result must not depend on the host.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.vars = Some(VariableSource::new("provided variables", vars));
        self
    }

    /// Get the dotenv file path, if one will be read
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an integer setting does not hold a decimal integer
    /// - the dotenv file exists but cannot be read
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;

        // Only the winning value of each integer field is checked, so a bad
        // dotenv entry shadowed by the environment is harmless.
        for field in FIELDS.iter().filter(|f| f.kind == FieldKind::Integer) {
            let raw = config.get_string(&field.key())?;
            if raw.parse::<i64>().is_err() {
                return Err(ConfigError::invalid_integer(field.name.to_string(), raw));
            }
        }

        let settings: Settings = config.try_deserialize()?;
        tracing::debug!(settings = ?settings, "Settings loaded");
        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Self::add_defaults(Config::builder())?;

        if let Some(ref path) = self.env_file {
            match VariableSource::from_env_file(path)? {
                Some(source) => {
                    tracing::debug!(
                        path = %path.display(),
                        recognised = ?source.recognised(),
                        "Using env file"
                    );
                    builder = builder.add_source(source);
                }
                None => tracing::debug!(path = %path.display(), "No env file found"),
            }
        }

        // Environment variables are always highest priority
        let env = match self.vars {
            Some(ref vars) => vars.clone(),
            None => VariableSource::from_process_env(),
        };
        tracing::debug!(recognised = ?env.recognised(), "Using {}", env.origin());
        builder = builder.add_source(env);

        builder.build().map_err(ConfigError::from)
    }

    /// Register the compiled-in default of every field that has one
    fn add_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        FIELDS.iter().try_fold(builder, |builder, field| {
            let builder = match field.default {
                FieldDefault::Text(text) => builder.set_default(field.key(), text)?,
                FieldDefault::Integer(n) => builder.set_default(field.key(), n.to_string())?,
                FieldDefault::Absent => builder,
            };
            Ok(builder)
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load settings from `.env` in the working directory and the process environment
pub fn load() -> Result<Settings, ConfigError> {
    ConfigLoader::new().load()
}
