use log::trace;

use super::types::{SimTime, TaskRecord};

/// Running sums collected during a run. Finalized into a
/// [`MetricsReport`](crate::core::report::MetricsReport) once the run ends.
#[derive(Debug, Clone, Default)]
pub struct MetricAccumulators {
    pub total_delay: f64,
    pub total_time_in_system: f64,
    /// Time-integral of the queue length
    pub queue_area: f64,
    pub tasks_processed: u64,
    pub tasks_arrived: u64,
    pub max_queue_length: usize,
    last_event_time: SimTime,
}

impl MetricAccumulators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time up to which the queue area has been integrated
    pub fn last_event_time(&self) -> SimTime {
        self.last_event_time
    }

    /// Add `queue_len * (now - last_event_time)` to the queue area.
    ///
    /// `queue_len` must be the length that held over the whole interval, i.e. the
    /// length before any change happening at `now`.
    pub fn integrate_queue(&mut self, queue_len: usize, now: SimTime) {
        if now <= self.last_event_time {
            return;
        }
        let dt = now - self.last_event_time;
        self.queue_area += queue_len as f64 * dt;
        trace!(
            "queue area += {} * {:.6} over [{:.6}, {:.6}]",
            queue_len,
            dt,
            self.last_event_time,
            now
        );
        self.last_event_time = now;
    }

    pub fn record_arrival(&mut self) {
        self.tasks_arrived += 1;
    }

    pub fn observe_queue_length(&mut self, queue_len: usize) {
        self.max_queue_length = self.max_queue_length.max(queue_len);
    }

    /// Account for a task that has just started service
    pub fn record_start(&mut self, record: &TaskRecord) {
        self.total_delay += record.delay();
        self.total_time_in_system += record.time_in_system();
        self.tasks_processed += 1;
    }
}
