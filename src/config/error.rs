//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer setting received a value that is not a decimal integer
    #[error("Invalid integer for {field}: '{value}'")]
    InvalidInteger {
        /// Variable name, e.g. `HTTP_TIMEOUT`
        field: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A typed view was asked to interpret a value it does not know
    #[error("Unsupported value for {field}: '{value}' (expected one of: {expected})")]
    UnsupportedValue {
        field: String,
        value: String,
        expected: String,
    },

    /// The dotenv file exists but could not be read
    #[error("Failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// Generic configuration error from config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new invalid integer error
    pub fn invalid_integer<S: Into<String>>(field: S, value: S) -> Self {
        ConfigError::InvalidInteger {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new unsupported value error
    pub fn unsupported<S: Into<String>>(field: S, value: S, expected: S) -> Self {
        ConfigError::UnsupportedValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// The variable name this error is about, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidInteger { field, .. }
            | ConfigError::UnsupportedValue { field, .. } => Some(field.as_str()),
            ConfigError::EnvFile { .. } | ConfigError::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_integer_message_names_field_and_value() {
        let err = ConfigError::invalid_integer("HTTP_TIMEOUT", "thirty");
        let message = err.to_string();
        assert!(message.contains("HTTP_TIMEOUT"));
        assert!(message.contains("thirty"));
        assert_eq!(err.field(), Some("HTTP_TIMEOUT"));
    }

    #[test]
    fn test_unsupported_value_message() {
        let err = ConfigError::unsupported("PARQUET_COMPRESSION", "lz4", "snappy, gzip, brotli");
        assert_eq!(
            err.to_string(),
            "Unsupported value for PARQUET_COMPRESSION: 'lz4' (expected one of: snappy, gzip, brotli)"
        );
    }
}
