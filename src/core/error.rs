use std::error::Error;
use std::fmt;

use super::process::ProcessId;

/// Failure conditions of a simulation run. Each aborts only the run that
/// raised it; the batch stays valid for a reset-and-rerun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// The process collection has zero elements, or metrics were requested
    /// over zero elapsed time. All aggregates are undefined.
    EmptyBatch,
    /// Non-positive burst time or negative arrival time. Rejected up front,
    /// never normalized.
    DegenerateProcess {
        id: ProcessId,
        arrival_time: i64,
        burst_time: i64,
    },
    /// Two records in the batch share an id.
    DuplicateId { id: ProcessId },
    /// A bounded queue refused to grow while admitting the named process.
    QueueFull { id: ProcessId, capacity: usize },
    /// Metrics were requested for a process that never completed.
    IncompleteRun { id: ProcessId },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "empty process batch"),
            Self::DegenerateProcess {
                id,
                arrival_time,
                burst_time,
            } => write!(
                f,
                "degenerate process P{id}: arrival_time={arrival_time}, burst_time={burst_time}"
            ),
            Self::DuplicateId { id } => write!(f, "duplicate process id P{id}"),
            Self::QueueFull { id, capacity } => {
                write!(f, "queue at capacity {capacity} while admitting P{id}")
            }
            Self::IncompleteRun { id } => {
                write!(f, "P{id} has not completed; run a policy to completion first")
            }
        }
    }
}

impl Error for SimError {}
