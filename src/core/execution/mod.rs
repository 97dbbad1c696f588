pub mod config;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{load_config, SimulationConfig};
pub use simulation_engine::{EventSimulator, SimulationObserver};
