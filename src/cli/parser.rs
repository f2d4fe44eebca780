//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Argo float ingestion worker
#[derive(Parser, Debug)]
#[command(name = "atlas-worker")]
#[command(about = "Argo float ingestion worker")]
#[command(long_about = "
atlas-worker reads its settings from the process environment and an optional
.env file in the working directory. Environment variables take precedence over
the file, and every setting has a default.

EXAMPLES:
    # Load settings and report the effective configuration
    atlas-worker check

    # Print the effective settings (secrets redacted)
    atlas-worker show

    # Same, as JSON
    atlas-worker show --format json

    # Read a different dotenv file
    atlas-worker --env-file /etc/atlas/worker.env check
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dotenv file to read instead of ./.env
    ///
    /// A missing file is not an error; the worker then uses the process
    /// environment and defaults only.
    #[arg(long, value_name = "FILE", conflicts_with = "no_env_file")]
    pub env_file: Option<PathBuf>,

    /// Do not read any dotenv file
    #[arg(long)]
    pub no_env_file: bool,

    /// Enable verbose logging
    ///
    /// Forces debug level regardless of LOG_LEVEL.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Forces error level regardless of LOG_LEVEL.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load the settings and report them (default)
    ///
    /// Exits non-zero when the settings cannot be loaded, e.g. when
    /// HTTP_TIMEOUT is not an integer.
    Check,
    /// Print the effective settings with secrets redacted
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `show`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// NAME=value lines
    #[default]
    #[value(name = "text")]
    Text,
    /// Pretty-printed JSON object
    #[value(name = "json")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["atlas-worker", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["atlas-worker", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["atlas-worker"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.env_file.is_none());
        assert!(!cli.no_env_file);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_show_command_formats() {
        let cli = Cli::try_parse_from(["atlas-worker", "show"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                format: OutputFormat::Text
            })
        );

        let cli = Cli::try_parse_from(["atlas-worker", "show", "--format", "json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                format: OutputFormat::Json
            })
        );
    }

    #[test]
    fn test_env_file_flag() {
        let cli =
            Cli::try_parse_from(["atlas-worker", "--env-file", "/etc/atlas.env", "check"]).unwrap();
        assert_eq!(cli.env_file, Some(PathBuf::from("/etc/atlas.env")));
        assert_eq!(cli.command, Some(Commands::Check));
    }

    #[test]
    fn test_conflicting_env_file_flags() {
        let result = Cli::try_parse_from(["atlas-worker", "--env-file", "x.env", "--no-env-file"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(["atlas-worker", "--verbose", "--quiet"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
