//! Configuration management module for atlas-worker
//!
//! Settings are loaded once at startup from, lowest to highest priority:
//! 1. compiled-in defaults
//! 2. a `.env` file in the working directory, if present
//! 3. process environment variables
//!
//! Variable names are matched case-sensitively and unknown names are ignored.
//! For optional settings the literal value `None` means "not set".

pub mod compression;
pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod source;

// Re-export public types
pub use compression::ParquetCompression;
pub use environment::Environment;
pub use error::ConfigError;
pub use loader::{ConfigLoader, load};
pub use settings::{FIELDS, Field, FieldKind, Settings};
pub use source::VariableSource;
