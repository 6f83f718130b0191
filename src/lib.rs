//! Discrete-event simulation of classic single-CPU scheduling policies over
//! a caller-owned batch of synthetic processes.

pub mod core;
pub mod report;
pub mod scheduler;

pub use crate::core::process::{Interval, Process, ProcessId, ProcessSpec, Ticks, reset_all};
pub use crate::core::queue::{FifoQueue, OrderingQueue};
pub use crate::core::SimError;
pub use crate::report::{RunMetrics, Timeline};
pub use crate::scheduler::{Fcfs, Policy, PreemptivePriority, RoundRobin, RunStats, Sjf, Srtf};
