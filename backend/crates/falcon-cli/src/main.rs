//! falcon - FALCON Command Center CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in and show the dashboard
//! falcon sign-in --email ops@falcon.io --password '...'
//! falcon dashboard --ticks 10
//!
//! # Update the site on the operator profile
//! falcon profile update --site-name "North Gate" --latitude 37.7749 --longitude -122.4194
//! ```

use falcon_cli::{App, Cli, CliError, CliResult, ConsoleNotifier, logger};
use falcon_client::Backend;
use falcon_config::{Config, LogLevel};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Auth failures have already been shown as notifications.
            if !matches!(e, CliError::Auth(_)) {
                eprintln!("Error: {e}");
            }
            debug!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    if let Some(level) = cli.log_level.as_deref() {
        config.logging.level = LogLevel::parse_lenient(level);
    }
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| CliError::logger(format!("Failed to create {}: {e}", dir.display())))?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting falcon v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let backend = Backend::from_config(&config)?;
    let app = App::start(
        &config,
        backend.auth,
        backend.profiles,
        Arc::new(ConsoleNotifier),
    )
    .await?;

    let result = app.run(cli.command).await;
    app.shutdown().await;
    result
}
