mod auth_config;
mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod panel_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use panel_config::PanelConfig;
pub use sync_config::SyncConfig;

const CONFIG_DIR_ENV: &str = "FALCON_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".falcon";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_EMAIL_REDIRECT_TO: &str = "http://127.0.0.1:8080/";

const DEFAULT_PERSIST_SESSION: bool = true;
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_REFRESH_MARGIN_SECS: u64 = 60;
const MAX_REFRESH_MARGIN_SECS: u64 = 3600;

const DEFAULT_SYNC_QUEUE_CAPACITY: usize = 64;
const MIN_SYNC_QUEUE_CAPACITY: usize = 1;
const MAX_SYNC_QUEUE_CAPACITY: usize = 4096;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_METRIC_INTERVAL_SECS: u64 = 5;
const MIN_METRIC_INTERVAL_SECS: u64 = 1;
const MAX_METRIC_INTERVAL_SECS: u64 = 3600;
const DEFAULT_METRIC_JITTER: f64 = 10.0;
const MAX_METRIC_JITTER: f64 = 50.0;
