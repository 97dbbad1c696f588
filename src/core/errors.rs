use thiserror::Error;

/// Errors raised while building or validating a [`SimulationConfig`](crate::core::execution::config::SimulationConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("server count must be at least 1, got {0}")]
    InvalidServerCount(usize),

    #[error("horizon must be a positive finite time, got {0}")]
    InvalidHorizon(f64),

    #[error("{name} must be a positive finite mean, got {value}")]
    InvalidMean { name: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level error type for simulation runs
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}
