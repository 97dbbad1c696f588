/// Simulated time, in the same units as the configured horizon and means.
pub type SimTime = f64;

/// Index of a server in the pool. Server identity is its position.
pub type ServerId = usize;

/// A task that arrived while it could not be served and is waiting in the queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitingTask {
    pub arrival_time: SimTime,
    pub service_duration: SimTime,
}

impl WaitingTask {
    pub fn new(arrival_time: SimTime, service_duration: SimTime) -> Self {
        Self {
            arrival_time,
            service_duration,
        }
    }
}

/// Record of a task at the moment it starts service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskRecord {
    pub arrival_time: SimTime,
    pub start_of_service: SimTime,
    pub service_duration: SimTime,
    pub server: ServerId,
}

impl TaskRecord {
    /// Time spent waiting in the queue before service started
    pub fn delay(&self) -> SimTime {
        self.start_of_service - self.arrival_time
    }

    /// Delay plus service duration
    pub fn time_in_system(&self) -> SimTime {
        self.delay() + self.service_duration
    }

    /// Time at which the assigned server becomes free again
    pub fn completion_time(&self) -> SimTime {
        self.start_of_service + self.service_duration
    }
}

impl std::fmt::Display for TaskRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "task(arrival={:.3}, start={:.3}, service={:.3}, server={})",
            self.arrival_time, self.start_of_service, self.service_duration, self.server
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_record_derived_times() {
        let record = TaskRecord {
            arrival_time: 10.0,
            start_of_service: 15.0,
            service_duration: 10.0,
            server: 0,
        };
        assert_eq!(record.delay(), 5.0);
        assert_eq!(record.time_in_system(), 15.0);
        assert_eq!(record.completion_time(), 25.0);
    }

    #[test]
    fn test_task_record_display() {
        let record = TaskRecord {
            arrival_time: 1.0,
            start_of_service: 1.0,
            service_duration: 2.5,
            server: 3,
        };
        assert_eq!(
            record.to_string(),
            "task(arrival=1.000, start=1.000, service=2.500, server=3)"
        );
    }
}
