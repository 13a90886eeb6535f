use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_METRIC_INTERVAL_SECS, DEFAULT_METRIC_JITTER,
    MAX_METRIC_INTERVAL_SECS, MAX_METRIC_JITTER, MIN_METRIC_INTERVAL_SECS,
};

use serde::Deserialize;

/// Dashboard panel simulation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Seconds between simulated metric updates
    pub metric_interval_secs: u64,
    /// Full width of the random drift applied per update
    pub metric_jitter: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            metric_interval_secs: DEFAULT_METRIC_INTERVAL_SECS,
            metric_jitter: DEFAULT_METRIC_JITTER,
        }
    }
}

impl PanelConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_METRIC_INTERVAL_SECS..=MAX_METRIC_INTERVAL_SECS)
            .contains(&self.metric_interval_secs)
        {
            return Err(ConfigError::panels(format!(
                "panels.metric_interval_secs must be {}-{}, got {}",
                MIN_METRIC_INTERVAL_SECS, MAX_METRIC_INTERVAL_SECS, self.metric_interval_secs
            )));
        }

        if !self.metric_jitter.is_finite()
            || self.metric_jitter < 0.0
            || self.metric_jitter > MAX_METRIC_JITTER
        {
            return Err(ConfigError::panels(format!(
                "panels.metric_jitter must be 0-{}, got {}",
                MAX_METRIC_JITTER, self.metric_jitter
            )));
        }

        Ok(())
    }
}
