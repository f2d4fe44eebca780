//! Settings record for atlas-worker
//!
//! Every variable the worker understands is declared once in [`FIELDS`]. The
//! loader uses that table to pick values out of the environment and the
//! dotenv file, and [`Settings`] is what those values deserialize into.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::compression::ParquetCompression;
use crate::config::environment::Environment;
use crate::config::error::ConfigError;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_HTTP_BASE_URL: &str = "https://data-argo.ifremer.fr";
pub const DEFAULT_HTTP_TIMEOUT: i64 = 30;
pub const DEFAULT_ARGO_DAC: &str = "incois";
pub const DEFAULT_LOCAL_STAGE_PATH: &str = "/tmp/raw_staging";
pub const DEFAULT_PARQUET_STAGING_PATH: &str = "/tmp/parquet_staging";
pub const DEFAULT_ENVIRONMENT: &str = "prod";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_DB_TIMEOUT: i64 = 30;
pub const DEFAULT_S3_BUCKET_NAME: &str = "atlas";
pub const DEFAULT_S3_REGION: &str = "auto";
pub const DEFAULT_PARQUET_COMPRESSION: &str = "snappy";

/// Placeholder shown instead of secret values
pub const REDACTED: &str = "[REDACTED]";

// ============================================================================
// Field table
// ============================================================================

/// How a raw string value is turned into a typed field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Taken verbatim
    Text,
    /// Decimal integer, sign allowed
    Integer,
    /// Filesystem path, not checked for existence
    Path,
    /// Verbatim, except that the literal `None` means absent
    Optional,
}

/// Compiled-in default of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    Integer(i64),
    Absent,
}

/// A recognised environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Exact, case-sensitive variable name
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
    /// Whether the value must never be printed
    pub secret: bool,
}

impl Field {
    const fn new(name: &'static str, kind: FieldKind, default: FieldDefault) -> Self {
        Self {
            name,
            kind,
            default,
            secret: false,
        }
    }

    const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Key used inside the merged configuration tree (the serde field name)
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// All recognised variables, in display order
pub const FIELDS: &[Field] = &[
    Field::new("HTTP_BASE_URL", FieldKind::Text, FieldDefault::Text(DEFAULT_HTTP_BASE_URL)),
    Field::new("HTTP_TIMEOUT", FieldKind::Integer, FieldDefault::Integer(DEFAULT_HTTP_TIMEOUT)),
    Field::new("ARGO_DAC", FieldKind::Text, FieldDefault::Text(DEFAULT_ARGO_DAC)),
    Field::new("LOCAL_STAGE_PATH", FieldKind::Path, FieldDefault::Text(DEFAULT_LOCAL_STAGE_PATH)),
    Field::new(
        "PARQUET_STAGING_PATH",
        FieldKind::Path,
        FieldDefault::Text(DEFAULT_PARQUET_STAGING_PATH),
    ),
    Field::new("ENVIRONMENT", FieldKind::Text, FieldDefault::Text(DEFAULT_ENVIRONMENT)),
    Field::new("LOG_LEVEL", FieldKind::Text, FieldDefault::Text(DEFAULT_LOG_LEVEL)),
    Field::new("PG_WRITE_URL", FieldKind::Optional, FieldDefault::Absent).secret(),
    Field::new("DB_TIMEOUT", FieldKind::Integer, FieldDefault::Integer(DEFAULT_DB_TIMEOUT)),
    Field::new("S3_ACCESS_KEY", FieldKind::Optional, FieldDefault::Absent).secret(),
    Field::new("S3_SECRET_KEY", FieldKind::Optional, FieldDefault::Absent).secret(),
    Field::new("S3_BUCKET_NAME", FieldKind::Text, FieldDefault::Text(DEFAULT_S3_BUCKET_NAME)),
    Field::new("S3_ENDPOINT", FieldKind::Optional, FieldDefault::Absent),
    Field::new("S3_REGION", FieldKind::Text, FieldDefault::Text(DEFAULT_S3_REGION)),
    Field::new(
        "PARQUET_COMPRESSION",
        FieldKind::Text,
        FieldDefault::Text(DEFAULT_PARQUET_COMPRESSION),
    ),
];

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete worker settings
///
/// Built once at startup by [`crate::config::load`] and shared read-only
/// afterwards (see [`crate::AppState`]).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Upstream data source base URL
    pub http_base_url: String,
    /// Request timeout in seconds
    pub http_timeout: i64,
    /// Data Assembly Center (incois, aoml, coriolis, ...)
    pub argo_dac: String,
    /// Staging directory for raw downloads
    pub local_stage_path: PathBuf,
    /// Staging directory for converted Parquet output
    pub parquet_staging_path: PathBuf,
    /// Deployment environment tag (prod or dev)
    pub environment: String,
    pub log_level: String,
    /// Metadata database URL; `None` disables database writes
    pub pg_write_url: Option<String>,
    /// Database operation timeout in seconds
    pub db_timeout: i64,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    pub s3_bucket_name: String,
    /// Custom object-storage endpoint, e.g. an R2 account URL
    pub s3_endpoint: Option<String>,
    pub s3_region: String,
    /// Parquet codec (snappy, gzip, brotli)
    pub parquet_compression: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_base_url: DEFAULT_HTTP_BASE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            argo_dac: DEFAULT_ARGO_DAC.to_string(),
            local_stage_path: PathBuf::from(DEFAULT_LOCAL_STAGE_PATH),
            parquet_staging_path: PathBuf::from(DEFAULT_PARQUET_STAGING_PATH),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            pg_write_url: None,
            db_timeout: DEFAULT_DB_TIMEOUT,
            s3_access_key: None,
            s3_secret_key: None,
            s3_bucket_name: DEFAULT_S3_BUCKET_NAME.to_string(),
            s3_endpoint: None,
            s3_region: DEFAULT_S3_REGION.to_string(),
            parquet_compression: DEFAULT_PARQUET_COMPRESSION.to_string(),
        }
    }
}

impl Settings {
    /// HTTP request timeout; `None` when `HTTP_TIMEOUT` is negative
    pub fn http_timeout_duration(&self) -> Option<Duration> {
        seconds(self.http_timeout)
    }

    /// Database operation timeout; `None` when `DB_TIMEOUT` is negative
    pub fn db_timeout_duration(&self) -> Option<Duration> {
        seconds(self.db_timeout)
    }

    /// Whether metadata should be written to PostgreSQL
    pub fn database_enabled(&self) -> bool {
        self.pg_write_url.is_some()
    }

    /// Access and secret key, only when both are configured
    pub fn s3_credentials(&self) -> Option<(&str, &str)> {
        match (&self.s3_access_key, &self.s3_secret_key) {
            (Some(access), Some(secret)) => Some((access.as_str(), secret.as_str())),
            _ => None,
        }
    }

    /// Interpret `ENVIRONMENT`
    pub fn deployment(&self) -> Result<Environment, ConfigError> {
        self.environment.parse()
    }

    /// Interpret `PARQUET_COMPRESSION`
    pub fn compression(&self) -> Result<ParquetCompression, ConfigError> {
        self.parquet_compression.parse()
    }

    /// Copy of the settings with secret values replaced by [`REDACTED`]
    ///
    /// Absent secrets stay absent so the output still shows what is configured.
    pub fn redacted(&self) -> Settings {
        let hide = |value: &Option<String>| value.as_ref().map(|_| REDACTED.to_string());
        Settings {
            pg_write_url: hide(&self.pg_write_url),
            s3_access_key: hide(&self.s3_access_key),
            s3_secret_key: hide(&self.s3_secret_key),
            ..self.clone()
        }
    }

    /// `(variable name, value)` pairs in [`FIELDS`] order; `None` for absent values
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        let path = |p: &PathBuf| Some(p.display().to_string());
        FIELDS
            .iter()
            .map(|field| {
                let value = match field.name {
                    "HTTP_BASE_URL" => Some(self.http_base_url.clone()),
                    "HTTP_TIMEOUT" => Some(self.http_timeout.to_string()),
                    "ARGO_DAC" => Some(self.argo_dac.clone()),
                    "LOCAL_STAGE_PATH" => path(&self.local_stage_path),
                    "PARQUET_STAGING_PATH" => path(&self.parquet_staging_path),
                    "ENVIRONMENT" => Some(self.environment.clone()),
                    "LOG_LEVEL" => Some(self.log_level.clone()),
                    "PG_WRITE_URL" => self.pg_write_url.clone(),
                    "DB_TIMEOUT" => Some(self.db_timeout.to_string()),
                    "S3_ACCESS_KEY" => self.s3_access_key.clone(),
                    "S3_SECRET_KEY" => self.s3_secret_key.clone(),
                    "S3_BUCKET_NAME" => Some(self.s3_bucket_name.clone()),
                    "S3_ENDPOINT" => self.s3_endpoint.clone(),
                    "S3_REGION" => Some(self.s3_region.clone()),
                    "PARQUET_COMPRESSION" => Some(self.parquet_compression.clone()),
                    _ => None,
                };
                (field.name, value)
            })
            .collect()
    }
}

fn seconds(value: i64) -> Option<Duration> {
    u64::try_from(value).ok().map(Duration::from_secs)
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hide = |value: &Option<String>| value.as_ref().map(|_| REDACTED);
        f.debug_struct("Settings")
            .field("http_base_url", &self.http_base_url)
            .field("http_timeout", &self.http_timeout)
            .field("argo_dac", &self.argo_dac)
            .field("local_stage_path", &self.local_stage_path)
            .field("parquet_staging_path", &self.parquet_staging_path)
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("pg_write_url", &hide(&self.pg_write_url))
            .field("db_timeout", &self.db_timeout)
            .field("s3_access_key", &hide(&self.s3_access_key))
            .field("s3_secret_key", &hide(&self.s3_secret_key))
            .field("s3_bucket_name", &self.s3_bucket_name)
            .field("s3_endpoint", &self.s3_endpoint)
            .field("s3_region", &self.s3_region)
            .field("parquet_compression", &self.parquet_compression)
            .finish()
    }
}
