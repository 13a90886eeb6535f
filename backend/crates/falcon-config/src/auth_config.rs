use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PERSIST_SESSION, DEFAULT_REFRESH_MARGIN_SECS,
    DEFAULT_SESSION_FILE, MAX_REFRESH_MARGIN_SECS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Keep the session on disk between runs
    pub persist_session: bool,
    /// Session file, relative to the config directory
    pub session_file: String,
    /// Refresh the access token this many seconds before it expires
    pub refresh_margin_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            persist_session: DEFAULT_PERSIST_SESSION,
            session_file: String::from(DEFAULT_SESSION_FILE),
            refresh_margin_secs: DEFAULT_REFRESH_MARGIN_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(&self.session_file);
        if self.session_file.is_empty() || path.is_absolute() || self.session_file.contains("..")
        {
            return Err(ConfigError::auth(
                "auth.session_file must be a relative path and cannot contain '..'",
            ));
        }

        if self.refresh_margin_secs > MAX_REFRESH_MARGIN_SECS {
            return Err(ConfigError::auth(format!(
                "auth.refresh_margin_secs must be <= {}, got {}",
                MAX_REFRESH_MARGIN_SECS, self.refresh_margin_secs
            )));
        }

        Ok(())
    }
}
