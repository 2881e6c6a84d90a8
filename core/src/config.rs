use crate::{
    alert::{AlertGate, AlertMode, DEFAULT_ALERT_INTERVAL_MS},
    error::{ClockError, ClockResult},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_UPDATE_INTERVAL_SECS: u64 = 1;
pub const MAX_UPDATE_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Seconds between polls. Clamped to 1-60 when used.
    pub update_interval_secs: u64,
    pub alert:                AlertMode,
    /// Minimum real milliseconds between two alert firings.
    pub alert_interval_ms:    i64,
    /// Stop after this many polls. None runs until interrupted.
    pub max_polls:            Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            update_interval_secs: 1,
            alert:                AlertMode::Off,
            alert_interval_ms:    DEFAULT_ALERT_INTERVAL_MS,
            max_polls:            None,
        }
    }
}

impl RunnerConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> ClockResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ClockError::Config {
            path:   path.to_string(),
            reason: e.to_string(),
        })?;
        let config: RunnerConfig = serde_json::from_str(&content)?;
        log::debug!("loaded runner config from {path}: {config:?}");
        Ok(config)
    }

    pub fn effective_interval_secs(&self) -> u64 {
        let clamped = self
            .update_interval_secs
            .clamp(MIN_UPDATE_INTERVAL_SECS, MAX_UPDATE_INTERVAL_SECS);
        if clamped != self.update_interval_secs {
            log::warn!(
                "update interval {}s out of range, using {clamped}s",
                self.update_interval_secs
            );
        }
        clamped
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.effective_interval_secs())
    }

    pub fn alert_gate(&self) -> AlertGate {
        AlertGate::new(self.alert, self.alert_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_clamped() {
        let mut config = RunnerConfig::default();
        assert_eq!(config.effective_interval_secs(), 1);
        config.update_interval_secs = 0;
        assert_eq!(config.effective_interval_secs(), 1);
        config.update_interval_secs = 600;
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: RunnerConfig =
            serde_json::from_str(r#"{"alert": "night", "update_interval_secs": 5}"#).unwrap();
        assert_eq!(config.alert, AlertMode::Night);
        assert_eq!(config.update_interval_secs, 5);
        assert_eq!(config.alert_interval_ms, DEFAULT_ALERT_INTERVAL_MS);
        assert_eq!(config.max_polls, None);
        assert_eq!(config.alert_gate().mode, AlertMode::Night);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = RunnerConfig::load("/nonexistent/tarkov-clock.json").unwrap_err();
        assert!(matches!(err, ClockError::Config { .. }));
    }
}
