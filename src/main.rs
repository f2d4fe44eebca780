use anyhow::Context;
use clap::Parser;

use atlas_worker::AppState;
use atlas_worker::cli::{Cli, execute_command, load_settings, logger_config};
use atlas_worker::logger::init_logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A bad setting is an operator error: abort before doing any work
    let settings = load_settings(&cli).context("Failed to load settings")?;

    init_logger(&logger_config(&cli, &settings))?;
    tracing::info!(
        version = atlas_worker::pkg_version(),
        environment = %settings.environment,
        dac = %settings.argo_dac,
        "Starting atlas-worker"
    );

    let state = AppState::new(settings);
    let stdout = std::io::stdout();
    execute_command(&cli, &state, &mut stdout.lock())
}
