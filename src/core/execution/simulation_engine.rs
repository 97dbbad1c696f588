use log::{debug, info};

use crate::core::errors::{ConfigError, SimulationError};
use crate::core::execution::config::SimulationConfig;
use crate::core::metrics::MetricAccumulators;
use crate::core::report::MetricsReport;
use crate::core::sampling::{ExponentialGenerator, StochasticSource, TaskSource};
use crate::core::server_pool::ServerPool;
use crate::core::task_queue::TaskQueue;
use crate::core::types::{ServerId, SimTime, TaskRecord, WaitingTask};

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called when the simulation clock jumps forward
    fn on_clock_advance(&mut self, _old_time: SimTime, _new_time: SimTime) {}

    /// Called after a task is appended to the wait queue
    fn on_task_queued(&mut self, _task: &WaitingTask, _queue_len: usize) {}

    /// Called when a task starts service on a server
    fn on_task_started(&mut self, _record: &TaskRecord) {}

    /// Called once with the final report
    fn on_run_complete(&mut self, _report: &MetricsReport) {}
}

/// Next-event simulator of an M/M/c queue over a fixed horizon.
///
/// The clock jumps from arrival to arrival. Each arrival is served immediately by
/// the lowest-indexed free server, or joins the FIFO queue; the queue is then
/// drained onto the soonest-free servers while any server is free at the
/// current instant. Once arrivals pass the horizon the remaining queue is
/// drained onto servers that free up before the horizon, and the queue-length
/// integral is closed at exactly the horizon.
///
/// A simulator is single-use: [`run`](EventSimulator::run) and
/// [`finish`](EventSimulator::finish) consume it.
pub struct EventSimulator<S = StochasticSource> {
    source: S,
    horizon: SimTime,
    clock: SimTime,
    servers: ServerPool,
    queue: TaskQueue,
    metrics: MetricAccumulators,
    arrivals_closed: bool,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl EventSimulator<StochasticSource> {
    /// Build a simulator with exponential arrivals and services from `config`
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let source = StochasticSource::new(
            ExponentialGenerator::new(config.random_seed),
            config.mean_interarrival,
            config.mean_service_time,
        )?;
        Self::with_source(config.server_count, config.horizon, source)
    }
}

impl<S: TaskSource> EventSimulator<S> {
    /// Build a simulator that draws its arrivals and services from `source`
    pub fn with_source(
        server_count: usize,
        horizon: SimTime,
        source: S,
    ) -> Result<Self, SimulationError> {
        if server_count == 0 {
            return Err(ConfigError::InvalidServerCount(server_count).into());
        }
        if !(horizon.is_finite() && horizon > 0.0) {
            return Err(ConfigError::InvalidHorizon(horizon).into());
        }

        Ok(Self {
            source,
            horizon,
            clock: 0.0,
            servers: ServerPool::new(server_count),
            queue: TaskQueue::new(),
            metrics: MetricAccumulators::new(),
            arrivals_closed: false,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    /// Run the complete simulation and return the final report
    pub fn run(mut self) -> MetricsReport {
        info!(
            "Starting simulation: {} servers, horizon {}",
            self.servers.len(),
            self.horizon
        );
        while self.step() {}
        self.finish()
    }

    /// Process the next arrival. Returns true while further arrivals may fall
    /// inside the horizon.
    pub fn step(&mut self) -> bool {
        if self.arrivals_closed || self.clock >= self.horizon {
            self.arrivals_closed = true;
            return false;
        }

        self.metrics.integrate_queue(self.queue.len(), self.clock);

        let interarrival_time = self.source.next_interarrival();
        let service_time = self.source.next_service();

        let arrival_time = self.clock + interarrival_time;
        if arrival_time > self.horizon {
            debug!(
                "Arrival at {:.3} falls after horizon {}, closing arrivals",
                arrival_time, self.horizon
            );
            self.arrivals_closed = true;
            return false;
        }

        self.advance_clock(arrival_time);
        // Queue length in force since the previous event, before this arrival
        self.metrics.integrate_queue(self.queue.len(), self.clock);
        self.metrics.record_arrival();

        let task = WaitingTask::new(self.clock, service_time);
        // An arrival never overtakes tasks that are already waiting
        let free_server = if self.queue.is_empty() {
            self.servers.first_free(self.clock)
        } else {
            None
        };

        match free_server {
            Some(server) => {
                debug!("t={:.3}: arrival served immediately by server {}", self.clock, server);
                self.start_service(server, task, self.clock);
            }
            None => {
                self.queue.push(task);
                let queue_len = self.queue.len();
                debug!("t={:.3}: arrival queued, queue length {}", self.clock, queue_len);
                self.notify_task_queued(&task, queue_len);
            }
        }

        self.drain_queue();
        self.metrics.observe_queue_length(self.queue.len());

        self.clock < self.horizon
    }

    /// Serve queued tasks while some server is free at the current instant
    fn drain_queue(&mut self) {
        while !self.queue.is_empty() && self.servers.any_free(self.clock) {
            // dt is zero here; keeps last_event_time at the draining instant
            self.metrics.integrate_queue(self.queue.len(), self.clock);

            let (Some(task), Some(server)) = (self.queue.pop(), self.servers.soonest_free()) else {
                break;
            };
            let start = self.clock.max(self.servers.next_free_time(server));
            self.start_service(server, task, start);
        }
    }

    /// Close the run: drain what the horizon still allows, integrate the queue
    /// up to the horizon and produce the report.
    pub fn finish(mut self) -> MetricsReport {
        self.arrivals_closed = true;

        loop {
            let Some(task) = self.queue.front().copied() else {
                break;
            };
            let Some(server) = self.servers.soonest_free() else {
                break;
            };
            let start = self.servers.next_free_time(server).max(task.arrival_time);
            if start > self.horizon {
                break;
            }
            self.metrics.integrate_queue(self.queue.len(), start);
            self.queue.pop();
            self.start_service(server, task, start);
        }

        self.metrics.integrate_queue(self.queue.len(), self.horizon);
        if self.clock < self.horizon {
            self.advance_clock(self.horizon);
        }

        let report = MetricsReport::finalize(&self.metrics, self.horizon, self.queue.len());
        info!(
            "Simulation complete: {} tasks processed, {} still waiting at horizon",
            report.tasks_processed, report.tasks_waiting_at_horizon
        );
        self.notify_run_complete(&report);
        report
    }

    fn start_service(&mut self, server: ServerId, task: WaitingTask, start: SimTime) {
        let record = TaskRecord {
            arrival_time: task.arrival_time,
            start_of_service: start,
            service_duration: task.service_duration,
            server,
        };
        self.servers.occupy(server, record.completion_time());
        self.metrics.record_start(&record);
        debug!("Started {}", record);
        self.notify_task_started(&record);
    }

    fn advance_clock(&mut self, new_time: SimTime) {
        let old_time = self.clock;
        self.clock = new_time;
        if old_time != new_time {
            self.notify_clock_advance(old_time, new_time);
        }
    }

    /// Notify all observers of a clock advance
    fn notify_clock_advance(&mut self, old_time: SimTime, new_time: SimTime) {
        for observer in &mut self.observers {
            observer.on_clock_advance(old_time, new_time);
        }
    }

    fn notify_task_queued(&mut self, task: &WaitingTask, queue_len: usize) {
        for observer in &mut self.observers {
            observer.on_task_queued(task, queue_len);
        }
    }

    fn notify_task_started(&mut self, record: &TaskRecord) {
        for observer in &mut self.observers {
            observer.on_task_started(record);
        }
    }

    fn notify_run_complete(&mut self, report: &MetricsReport) {
        for observer in &mut self.observers {
            observer.on_run_complete(report);
        }
    }

    /// Current simulation time
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    pub fn servers(&self) -> &ServerPool {
        &self.servers
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn metrics(&self) -> &MetricAccumulators {
        &self.metrics
    }
}
