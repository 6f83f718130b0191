use std::num::NonZeroU64;

use log::debug;

use super::{grant, prologue, queue_full, Clock, Policy, RunStats};
use crate::core::process::{ArrivalKey, ProcIdx, Process, Ticks};
use crate::core::queue::{FifoQueue, OrderingQueue};
use crate::core::SimError;

/// Round Robin: FIFO ready list, each dispatch runs for
/// `min(quantum, remaining)`. Processes arriving during a slice are
/// admitted before the interrupted process re-enters the queue, so they
/// line up ahead of it.
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum.get()
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn run(&self, procs: &mut [Process]) -> Result<RunStats, SimError> {
        let mut arrivals = prologue(procs)?;
        let mut ready = FifoQueue::with_capacity(procs.len());
        let mut clock = Clock::new();
        let quantum = self.quantum.get();

        while let Some(idx) = next_in_line(&mut arrivals, &mut ready, procs, &mut clock)? {
            let start = clock.now;
            let slice = quantum.min(procs[idx].remaining_time);
            clock.advance(slice);
            grant(&mut procs[idx], start, slice);
            debug!(
                "rr: P{} ran [{start}, {}), {} remaining",
                procs[idx].id, clock.now, procs[idx].remaining_time
            );

            // Mid-slice arrivals enter ahead of the interrupted process.
            admit_fifo(&mut arrivals, &mut ready, procs, clock.now)?;
            if procs[idx].remaining_time > 0 {
                ready.enqueue(idx).map_err(|e| queue_full(&procs[idx], e))?;
            }
        }

        Ok(clock.stats())
    }
}

fn admit_fifo(
    arrivals: &mut OrderingQueue<ArrivalKey>,
    ready: &mut FifoQueue,
    procs: &[Process],
    now: Ticks,
) -> Result<(), SimError> {
    while arrivals
        .peek_min()
        .is_some_and(|idx| procs[idx].arrival_time <= now)
    {
        if let Some(idx) = arrivals.extract_min() {
            ready.enqueue(idx).map_err(|e| queue_full(&procs[idx], e))?;
        }
    }
    Ok(())
}

fn next_in_line(
    arrivals: &mut OrderingQueue<ArrivalKey>,
    ready: &mut FifoQueue,
    procs: &[Process],
    clock: &mut Clock,
) -> Result<Option<ProcIdx>, SimError> {
    if ready.is_empty() {
        match arrivals.peek_min() {
            Some(idx) => clock.idle_until(procs[idx].arrival_time),
            None => return Ok(None),
        }
    }
    admit_fifo(arrivals, ready, procs, clock.now)?;
    Ok(ready.dequeue())
}
