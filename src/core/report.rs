//! Final metrics of a run and their human/JSON renderings.

use serde::Serialize;

use super::errors::SimulationError;
use super::metrics::MetricAccumulators;
use super::types::SimTime;

/// Output format for a [`MetricsReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Summary statistics of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub horizon: SimTime,
    pub tasks_arrived: u64,
    pub tasks_processed: u64,
    pub tasks_waiting_at_horizon: usize,
    pub max_queue_length: usize,
    pub total_delay: f64,
    pub total_time_in_system: f64,
    pub queue_area: f64,
    pub average_delay: f64,
    pub average_time_in_system: f64,
    pub average_queue_length: f64,
}

impl MetricsReport {
    /// Turn running sums into averages. Per-task averages are 0 when no task was processed.
    pub fn finalize(
        acc: &MetricAccumulators,
        horizon: SimTime,
        tasks_waiting_at_horizon: usize,
    ) -> Self {
        let (average_delay, average_time_in_system) = if acc.tasks_processed > 0 {
            let n = acc.tasks_processed as f64;
            (acc.total_delay / n, acc.total_time_in_system / n)
        } else {
            (0.0, 0.0)
        };

        Self {
            horizon,
            tasks_arrived: acc.tasks_arrived,
            tasks_processed: acc.tasks_processed,
            tasks_waiting_at_horizon,
            max_queue_length: acc.max_queue_length,
            total_delay: acc.total_delay,
            total_time_in_system: acc.total_time_in_system,
            queue_area: acc.queue_area,
            average_delay,
            average_time_in_system,
            average_queue_length: acc.queue_area / horizon,
        }
    }

    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, SimulationError> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => self.to_json(),
        }
    }
}

impl std::fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "Tasks Processed:       {}", self.tasks_processed)?;
        writeln!(
            f,
            "Average Delay Time:    {:.2} seconds  (queue wait)",
            self.average_delay
        )?;
        writeln!(
            f,
            "Average Waiting Time:  {:.2} seconds (delay + service)",
            self.average_time_in_system
        )?;
        write!(
            f,
            "Average Queue Length:  {:.2} tasks   (time-based)",
            self.average_queue_length
        )
    }
}
