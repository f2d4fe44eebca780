//! Atlas Worker Library
//!
//! Settings loading and process bootstrap for the Argo float ingestion worker.

pub mod cli;
pub mod config;
pub mod logger;
pub mod state;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
