use crate::{ConfigError, ConfigErrorResult, DEFAULT_BACKEND_URL, DEFAULT_EMAIL_REDIRECT_TO};

use serde::Deserialize;

/// Hosted backend (auth API + profiles table) connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL, e.g. "https://abc.supabase.co"
    pub url: String,
    /// Public anon key sent as `apikey` on every request
    pub anon_key: String,
    /// Where confirmation emails send the user after sign-up
    pub email_redirect_to: String,
    /// Per-request timeout; None waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_BACKEND_URL),
            anon_key: String::new(),
            email_redirect_to: String::from(DEFAULT_EMAIL_REDIRECT_TO),
            request_timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.url) {
            return Err(ConfigError::backend(format!(
                "backend.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::backend(
                "backend.anon_key is required (set FALCON_ANON_KEY or [backend] anon_key)",
            ));
        }

        if !is_http_url(&self.email_redirect_to) {
            return Err(ConfigError::backend(format!(
                "backend.email_redirect_to must be an absolute http(s) URL, got '{}'",
                self.email_redirect_to
            )));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::backend(
                "backend.request_timeout_secs must be > 0 when set",
            ));
        }

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}
