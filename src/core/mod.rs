pub mod error;
pub mod process;
pub mod queue;

pub use error::SimError;
pub use process::{Interval, ProcIdx, Process, ProcessId, ProcessSpec, Ticks};
pub use queue::{FifoQueue, OrderingQueue, QueueError};
