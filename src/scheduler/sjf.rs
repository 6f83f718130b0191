use log::debug;

use super::{grant, next_eligible, prologue, Clock, Policy, RunStats};
use crate::core::process::{self, Process};
use crate::core::queue::OrderingQueue;
use crate::core::SimError;

/// Shortest Job First: non-preemptive, the ready pool orders by the static
/// burst time, each dispatch runs to completion.
pub struct Sjf;

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn run(&self, procs: &mut [Process]) -> Result<RunStats, SimError> {
        let mut arrivals = prologue(procs)?;
        let mut ready = OrderingQueue::with_capacity(procs.len(), process::burst_key);
        let mut clock = Clock::new();

        while let Some(idx) = next_eligible(&mut arrivals, &mut ready, procs, &mut clock)? {
            let start = clock.now;
            let burst = procs[idx].burst_time;
            clock.advance(burst);
            grant(&mut procs[idx], start, burst);
            debug!("sjf: P{} ran [{start}, {})", procs[idx].id, clock.now);
        }

        Ok(clock.stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(id: u32, arrival: u64, burst: u64) -> Process {
        Process::new(id, arrival, burst, 0)
    }

    #[test]
    fn picks_the_shortest_eligible_job() {
        let mut batch = vec![proc(1, 0, 6), proc(2, 1, 8), proc(3, 2, 7), proc(4, 3, 3)];
        let stats = Sjf.run(&mut batch).unwrap();

        // P1 holds the CPU until 6; by then the rest have arrived and run
        // shortest-first.
        assert_eq!(batch[0].end_time, Some(6));
        assert_eq!(batch[3].end_time, Some(9));
        assert_eq!(batch[2].end_time, Some(16));
        assert_eq!(batch[1].end_time, Some(24));
        assert_eq!(stats, RunStats { elapsed: 24, idle: 0 });
    }

    #[test]
    fn does_not_preempt_a_running_job() {
        // P2 is much shorter but arrives while P1 runs; it must wait.
        let mut batch = vec![proc(1, 0, 10), proc(2, 1, 1)];
        Sjf.run(&mut batch).unwrap();

        assert_eq!(batch[0].end_time, Some(10));
        assert_eq!(batch[1].start_time, Some(10));
        assert_eq!(batch[1].end_time, Some(11));
        assert_eq!(batch[0].intervals.len(), 1);
    }

    #[test]
    fn equal_bursts_dispatch_by_arrival() {
        let mut batch = vec![proc(1, 2, 4), proc(2, 1, 4), proc(3, 0, 4)];
        Sjf.run(&mut batch).unwrap();

        assert_eq!(batch[2].start_time, Some(0));
        assert_eq!(batch[1].start_time, Some(4));
        assert_eq!(batch[0].start_time, Some(8));
    }

    #[test]
    fn idles_through_arrival_gaps() {
        let mut batch = vec![proc(1, 0, 2), proc(2, 7, 3)];
        let stats = Sjf.run(&mut batch).unwrap();

        assert_eq!(batch[1].start_time, Some(7));
        assert_eq!(stats, RunStats { elapsed: 10, idle: 5 });
    }
}
