use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SYNC_QUEUE_CAPACITY, MAX_SYNC_QUEUE_CAPACITY,
    MIN_SYNC_QUEUE_CAPACITY,
};

use serde::Deserialize;

/// Profile sync worker settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Pending sync tasks buffered before new ones are dropped
    pub queue_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_SYNC_QUEUE_CAPACITY,
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_SYNC_QUEUE_CAPACITY..=MAX_SYNC_QUEUE_CAPACITY).contains(&self.queue_capacity) {
            return Err(ConfigError::sync(format!(
                "sync.queue_capacity must be {}-{}, got {}",
                MIN_SYNC_QUEUE_CAPACITY, MAX_SYNC_QUEUE_CAPACITY, self.queue_capacity
            )));
        }

        Ok(())
    }
}
