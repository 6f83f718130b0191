use average::{Estimate, Mean};
use serde::Serialize;

use crate::core::process::Process;
use crate::core::SimError;
use crate::scheduler::RunStats;

/// Aggregate scheduling-performance metrics for one completed run.
///
/// All values are exact numbers; formatting is the reporting collaborator's
/// concern.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunMetrics {
    /// Mean of completion minus arrival.
    pub avg_turnaround: f64,
    /// Mean of turnaround minus the original burst time.
    pub avg_wait: f64,
    /// Mean of first-dispatch minus arrival.
    pub avg_response: f64,
    /// Percentage of elapsed simulated time the CPU was busy.
    pub utilization: f64,
}

impl RunMetrics {
    pub fn compute(procs: &[Process], stats: &RunStats) -> Result<Self, SimError> {
        if procs.is_empty() || stats.elapsed == 0 {
            return Err(SimError::EmptyBatch);
        }

        let mut turnaround = Mean::new();
        let mut wait = Mean::new();
        let mut response = Mean::new();

        for p in procs {
            let end = p.end_time.ok_or(SimError::IncompleteRun { id: p.id })?;
            let start = p.start_time.ok_or(SimError::IncompleteRun { id: p.id })?;
            let t = (end - p.arrival_time) as f64;
            turnaround.add(t);
            wait.add(t - p.burst_time as f64);
            response.add((start - p.arrival_time) as f64);
        }

        Ok(Self {
            avg_turnaround: turnaround.estimate(),
            avg_wait: wait.estimate(),
            avg_response: response.estimate(),
            utilization: 100.0 * (1.0 - stats.idle as f64 / stats.elapsed as f64),
        })
    }
}
