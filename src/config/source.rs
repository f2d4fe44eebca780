//! Variable sources for the configuration builder
//!
//! A [`VariableSource`] is a flat set of `NAME=value` pairs (the process
//! environment or a dotenv file) exposed to the `config` crate. Only names
//! declared in [`FIELDS`] are exposed, matched case-sensitively, so unknown
//! variables never reach the merged configuration.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use config::{Map, Source, Value, ValueKind};

use crate::config::error::ConfigError;
use crate::config::settings::{FIELDS, Field, FieldKind};

/// Literal that marks an optional value as absent
pub const NONE_SENTINEL: &str = "None";

/// Name/value pairs from one origin
#[derive(Debug, Clone)]
pub struct VariableSource {
    origin: String,
    vars: HashMap<String, String>,
}

impl VariableSource {
    /// Create a source from arbitrary pairs
    ///
    /// `origin` is only used in diagnostics produced by the `config` crate.
    pub fn new<I, K, V>(origin: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            origin: origin.into(),
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshot of the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process_env() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::new("the environment", vars)
    }

    /// Parse a dotenv file without touching the process environment
    ///
    /// Returns `Ok(None)` when the file does not exist. Lines the dotenv
    /// parser rejects are skipped with a warning.
    pub fn from_env_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::EnvFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut vars = HashMap::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    vars.insert(key, value);
                }
                Err(err @ dotenvy::Error::LineParse(..)) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "Skipping malformed line in env file"
                    );
                }
                Err(source) => {
                    return Err(ConfigError::EnvFile {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        }

        Ok(Some(Self {
            origin: path.display().to_string(),
            vars,
        }))
    }

    /// Where the values came from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Raw value of a variable, exact name match
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Names in this source that correspond to a declared field
    pub fn recognised(&self) -> Vec<&'static str> {
        FIELDS
            .iter()
            .filter(|field| self.vars.contains_key(field.name))
            .map(|field| field.name)
            .collect()
    }

    fn value_for(&self, field: &Field) -> Option<Value> {
        let raw = self.get(field.name)?;
        let kind = match field.kind {
            FieldKind::Optional if raw == NONE_SENTINEL => ValueKind::Nil,
            _ => ValueKind::String(raw.to_string()),
        };
        Some(Value::new(Some(&self.origin), kind))
    }
}

impl Source for VariableSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let mut map = Map::new();
        for field in FIELDS {
            if let Some(value) = self.value_for(field) {
                map.insert(field.key(), value);
            }
        }
        Ok(map)
    }
}
