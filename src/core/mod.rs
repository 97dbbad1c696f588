pub mod errors;
pub mod execution;
pub mod metrics;
pub mod report;
pub mod sampling;
pub mod server_pool;
pub mod task_queue;
pub mod types;
