pub mod core;

// Re-export commonly used types
pub use crate::core::errors::{ConfigError, SimulationError};
pub use crate::core::execution::{load_config, EventSimulator, SimulationConfig, SimulationObserver};
pub use crate::core::report::{MetricsReport, ReportFormat};
pub use crate::core::sampling::{ExponentialGenerator, ScriptedSource, StochasticSource, TaskSource};
pub use crate::core::types::{ServerId, SimTime, TaskRecord, WaitingTask};

/// Validate `config`, run one simulation and return its report
pub fn simulate(config: &SimulationConfig) -> Result<MetricsReport, SimulationError> {
    Ok(EventSimulator::new(config)?.run())
}
