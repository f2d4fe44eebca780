//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::io::Write;

use super::handlers::{CheckCommandHandler, ShowCommandHandler};
use super::parser::{Cli, Commands};
use crate::AppState;

/// Execute a CLI command against the loaded state
///
/// Output meant for the operator goes to `out`; diagnostics go through
/// `tracing`.
pub fn execute_command(cli: &Cli, state: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Check) | None => CheckCommandHandler::new(state).execute(out),
        Some(Commands::Show { format }) => ShowCommandHandler::new(state).execute(*format, out),
    }
}
