use crate::{
    AuthConfig, BackendConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, PanelConfig, SyncConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub auth: AuthConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
    pub panels: PanelConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FALCON_CONFIG_DIR env var, else use ./.falcon/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FALCON_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FALCON_CONFIG_DIR env var > ./.falcon/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.auth.validate()?;
        self.sync.validate()?;
        self.panels.validate()?;

        Ok(())
    }

    /// Absolute path of the persisted session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.auth.session_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (anon key {}, timeout {})",
            self.backend.url,
            if self.backend.anon_key.is_empty() {
                "missing"
            } else {
                "set"
            },
            match self.backend.request_timeout_secs {
                Some(secs) => format!("{secs}s"),
                None => String::from("none"),
            }
        );
        info!(
            "  auth: persist={} file={} refresh_margin={}s",
            self.auth.persist_session, self.auth.session_file, self.auth.refresh_margin_secs
        );
        info!("  sync: queue_capacity={}", self.sync.queue_capacity);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  panels: metric_interval={}s jitter={}",
            self.panels.metric_interval_secs, self.panels.metric_jitter
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("FALCON_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_string("FALCON_ANON_KEY", &mut self.backend.anon_key);
        Self::apply_env_string(
            "FALCON_EMAIL_REDIRECT_TO",
            &mut self.backend.email_redirect_to,
        );
        Self::apply_env_option_parse(
            "FALCON_REQUEST_TIMEOUT_SECS",
            &mut self.backend.request_timeout_secs,
        );

        // Auth
        Self::apply_env_bool("FALCON_PERSIST_SESSION", &mut self.auth.persist_session);
        Self::apply_env_string("FALCON_SESSION_FILE", &mut self.auth.session_file);
        Self::apply_env_parse(
            "FALCON_REFRESH_MARGIN_SECS",
            &mut self.auth.refresh_margin_secs,
        );

        // Sync
        Self::apply_env_parse("FALCON_SYNC_QUEUE_CAPACITY", &mut self.sync.queue_capacity);

        // Logging
        Self::apply_env_parse("FALCON_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FALCON_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FALCON_LOG_FILE", &mut self.logging.file);

        // Panels
        Self::apply_env_parse(
            "FALCON_METRIC_INTERVAL_SECS",
            &mut self.panels.metric_interval_secs,
        );
        Self::apply_env_parse("FALCON_METRIC_JITTER", &mut self.panels.metric_jitter);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for optional parseable values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
