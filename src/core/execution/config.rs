//! Configuration for a simulation run
//!
//! This module provides the parameters of the queueing model and the rules that
//! reject an unusable model before any simulated time elapses.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::ConfigError;
use crate::core::sampling::check_mean;

/// Parameters of one M/M/c run
///
/// All times share one unit (seconds in the defaults). Missing keys in a TOML file
/// fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of identical servers
    pub server_count: usize,
    /// End of the observation window
    pub horizon: f64,
    /// Mean of the exponential inter-arrival distribution
    pub mean_interarrival: f64,
    /// Mean of the exponential service-time distribution
    pub mean_service_time: f64,
    /// Seed for reproducible runs; `None` draws from OS entropy
    pub random_seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration with default values
    ///
    /// Defaults model a grading server: 10 machines over 5 hours, a task every
    /// 35 s on average, 42 s of work per task.
    pub fn new() -> Self {
        Self {
            server_count: 10,
            horizon: 18_000.0,
            mean_interarrival: 35.0,
            mean_service_time: 42.0,
            random_seed: None,
        }
    }

    pub fn with_server_count(mut self, count: usize) -> Self {
        self.server_count = count;
        self
    }

    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_mean_interarrival(mut self, mean: f64) -> Self {
        self.mean_interarrival = mean;
        self
    }

    pub fn with_mean_service_time(mut self, mean: f64) -> Self {
        self.mean_service_time = mean;
        self
    }

    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    /// Offered load per server, `mean_service_time / (server_count * mean_interarrival)`
    ///
    /// Values at or above 1 mean the queue has no steady state.
    pub fn utilization(&self) -> f64 {
        self.mean_service_time / (self.server_count as f64 * self.mean_interarrival)
    }

    /// Reject non-positive or non-finite parameters. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_count == 0 {
            return Err(ConfigError::InvalidServerCount(self.server_count));
        }

        if !(self.horizon.is_finite() && self.horizon > 0.0) {
            return Err(ConfigError::InvalidHorizon(self.horizon));
        }

        check_mean("mean_interarrival", self.mean_interarrival)?;
        check_mean("mean_service_time", self.mean_service_time)?;

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from a TOML file at the given path.
///
/// The result is not validated; callers merge overrides first and validate once.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read config file '{}': {}", path.display(), e);
        ConfigError::Io(e)
    })?;
    toml::from_str(&contents).map_err(|e| {
        log::error!("Failed to parse config TOML '{}': {}", path.display(), e);
        ConfigError::Toml(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.server_count, 10);
        assert_eq!(config.horizon, 18_000.0);
        assert_eq!(config.mean_interarrival, 35.0);
        assert_eq!(config.mean_service_time, 42.0);
        assert_eq!(config.random_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_server_count(2)
            .with_horizon(500.0)
            .with_mean_interarrival(3.0)
            .with_mean_service_time(4.5)
            .with_random_seed(Some(11));

        assert_eq!(config.server_count, 2);
        assert_eq!(config.horizon, 500.0);
        assert_eq!(config.mean_interarrival, 3.0);
        assert_eq!(config.mean_service_time, 4.5);
        assert_eq!(config.random_seed, Some(11));
    }

    #[test]
    fn test_utilization() {
        let config = SimulationConfig::new()
            .with_server_count(2)
            .with_mean_interarrival(5.0)
            .with_mean_service_time(8.0);
        assert!((config.utilization() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_validation() {
        let config = SimulationConfig::default().with_server_count(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidServerCount(0))
        ));

        let config = SimulationConfig::default().with_horizon(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHorizon(_))));

        let config = SimulationConfig::default().with_horizon(f64::INFINITY);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHorizon(_))));

        let config = SimulationConfig::default().with_mean_interarrival(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMean { name: "mean_interarrival", .. })
        ));

        let config = SimulationConfig::default().with_mean_service_time(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMean { name: "mean_service_time", .. })
        ));
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_count = 3\nrandom_seed = 7\nhorizon = 250.0").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server_count, 3);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.horizon, 250.0);
        assert_eq!(config.mean_interarrival, 35.0);
        assert_eq!(config.mean_service_time, 42.0);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_count = \"many\"").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(load_config(missing), Err(ConfigError::Io(_))));
    }
}
