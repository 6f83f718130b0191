use log::debug;

use super::{grant, prologue, Clock, Policy, RunStats};
use crate::core::process::Process;
use crate::core::SimError;

/// First-Come-First-Served: non-preemptive, dispatch in arrival order, run
/// each process to completion. The arrival pool doubles as the ready pool.
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "First Come First Serve"
    }

    fn run(&self, procs: &mut [Process]) -> Result<RunStats, SimError> {
        let mut arrivals = prologue(procs)?;
        let mut clock = Clock::new();

        while let Some(idx) = arrivals.extract_min() {
            clock.idle_until(procs[idx].arrival_time);
            let start = clock.now;
            let burst = procs[idx].burst_time;
            clock.advance(burst);
            grant(&mut procs[idx], start, burst);
            debug!("fcfs: P{} ran [{start}, {})", procs[idx].id, clock.now);
        }

        Ok(clock.stats())
    }
}
