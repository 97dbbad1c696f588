use std::collections::VecDeque;

use super::types::WaitingTask;

/// FIFO of tasks waiting for a server. Insertion order is arrival order.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    tasks: VecDeque<WaitingTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: WaitingTask) {
        debug_assert!(
            self.tasks
                .back()
                .map_or(true, |last| last.arrival_time <= task.arrival_time),
            "tasks must be enqueued in arrival order"
        );
        self.tasks.push_back(task);
    }

    /// Remove the oldest waiting task
    pub fn pop(&mut self) -> Option<WaitingTask> {
        self.tasks.pop_front()
    }

    pub fn front(&self) -> Option<&WaitingTask> {
        self.tasks.front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = TaskQueue::new();
        queue.push(WaitingTask::new(1.0, 4.0));
        queue.push(WaitingTask::new(2.0, 5.0));
        queue.push(WaitingTask::new(2.0, 6.0));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front().map(|t| t.arrival_time), Some(1.0));
        assert_eq!(queue.pop(), Some(WaitingTask::new(1.0, 4.0)));
        assert_eq!(queue.pop(), Some(WaitingTask::new(2.0, 5.0)));
        assert_eq!(queue.pop(), Some(WaitingTask::new(2.0, 6.0)));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
