//! Sync scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default interval between daemon syncs, in minutes.
const fn default_interval_minutes() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Run forever, one sync per interval, instead of a single sync.
    #[serde(default)]
    pub daemon: bool,

    /// Minutes between cycle starts in daemon mode. The next tick is
    /// `cycle_start + interval`, so a long cycle shortens the wait rather
    /// than shifting the schedule.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            daemon: false,
            interval_minutes: default_interval_minutes(),
        }
    }
}

impl SyncConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.interval_minutes".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_shot() {
        let config = SyncConfig::default();
        assert!(!config.daemon);
        assert_eq!(config.interval_minutes, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = SyncConfig {
            daemon: true,
            interval_minutes: 0,
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field, .. } if field == "sync.interval_minutes")
        );
    }
}
