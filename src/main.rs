//! CLI entry point: builds a configuration from defaults, an optional TOML file
//! and flags, runs one simulation and prints the report.

use clap::Parser;
use std::path::PathBuf;

use mmc_sim::core::execution::{load_config, EventSimulator, SimulationConfig};
use mmc_sim::core::report::ReportFormat;

/// Multi-server queue simulator
#[derive(Parser, Debug)]
#[command(
    name = "mmc-sim",
    about = "Discrete-event simulation of an M/M/c queue over a fixed horizon."
)]
struct Cli {
    /// Path to a TOML config file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of servers
    #[arg(short = 'n', long)]
    servers: Option<usize>,

    /// Simulated duration
    #[arg(short = 't', long)]
    horizon: Option<f64>,

    /// Mean time between arrivals
    #[arg(long)]
    mean_interarrival: Option<f64>,

    /// Mean service time
    #[arg(long)]
    mean_service: Option<f64>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

impl Cli {
    fn apply_overrides(&self, mut config: SimulationConfig) -> SimulationConfig {
        if let Some(servers) = self.servers {
            config = config.with_server_count(servers);
        }
        if let Some(horizon) = self.horizon {
            config = config.with_horizon(horizon);
        }
        if let Some(mean) = self.mean_interarrival {
            config = config.with_mean_interarrival(mean);
        }
        if let Some(mean) = self.mean_service {
            config = config.with_mean_service_time(mean);
        }
        if self.seed.is_some() {
            config = config.with_random_seed(self.seed);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let base = match cli.config {
        Some(ref path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    let config = cli.apply_overrides(base);

    if let Err(e) = config.validate() {
        log::error!("Rejected configuration: {}", e);
        return Err(e.into());
    }
    if config.utilization() >= 1.0 {
        log::warn!(
            "Offered load per server is {:.2}; the queue has no steady state",
            config.utilization()
        );
    }
    log::info!("Configuration: {:?}", config);

    let report = EventSimulator::new(&config)?.run();
    println!("{}", report.render(cli.format)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "mmc-sim",
            "--servers",
            "2",
            "--horizon",
            "100",
            "--mean-interarrival",
            "4",
            "--mean-service",
            "6",
            "--seed",
            "12",
            "--format",
            "json",
        ]);
        let config = cli.apply_overrides(SimulationConfig::default());
        assert_eq!(config.server_count, 2);
        assert_eq!(config.horizon, 100.0);
        assert_eq!(config.mean_interarrival, 4.0);
        assert_eq!(config.mean_service_time, 6.0);
        assert_eq!(config.random_seed, Some(12));
        assert_eq!(cli.format, ReportFormat::Json);
    }

    #[test]
    fn test_no_flags_keeps_base() {
        let cli = Cli::parse_from(["mmc-sim"]);
        let base = SimulationConfig::default().with_random_seed(Some(3));
        assert_eq!(cli.apply_overrides(base.clone()), base);
        assert_eq!(cli.format, ReportFormat::Text);
    }
}
