//! falcon-cli library
//!
//! Wiring, logging and text rendering behind the `falcon` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod logger;
pub mod metrics_ticker;
pub mod toasts;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::{Commands, ProfileCommands};
pub use dashboard::Dashboard;
pub use error::{CliError, Result as CliResult};
pub use metrics_ticker::MetricsTicker;
pub use toasts::ConsoleNotifier;
