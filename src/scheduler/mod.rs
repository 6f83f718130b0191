pub mod fcfs;
pub mod priority;
pub mod rr;
pub mod sjf;
pub mod srtf;

pub use fcfs::Fcfs;
pub use priority::PreemptivePriority;
pub use rr::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use log::trace;
use serde::Serialize;

use crate::core::process::{self, ArrivalKey, Interval, ProcIdx, Process, Ticks};
use crate::core::queue::{OrderingQueue, QueueError};
use crate::core::SimError;

/// Outcome of one policy run, fed to the metrics calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Clock value when the last process completed.
    pub elapsed: Ticks,
    /// Total time the CPU sat with no eligible process.
    pub idle: Ticks,
}

impl RunStats {
    /// CPU units actually granted during the run.
    pub fn busy(&self) -> Ticks {
        self.elapsed - self.idle
    }
}

/// One scheduling policy, run to completion over a reset batch. The run
/// mutates each record's timing fields in place; the caller resets the
/// batch before handing it to the next policy.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn run(&self, procs: &mut [Process]) -> Result<RunStats, SimError>;
}

/// Simulated clock with idle-gap accounting.
pub(crate) struct Clock {
    pub now: Ticks,
    pub idle: Ticks,
}

impl Clock {
    pub fn new() -> Self {
        Self { now: 0, idle: 0 }
    }

    /// Idle rule: jump forward to `t`, charging the gap to idle time.
    pub fn idle_until(&mut self, t: Ticks) {
        if t > self.now {
            self.idle += t - self.now;
            self.now = t;
        }
    }

    pub fn advance(&mut self, delta: Ticks) {
        self.now += delta;
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            elapsed: self.now,
            idle: self.idle,
        }
    }
}

pub(crate) fn queue_full(p: &Process, err: QueueError) -> SimError {
    SimError::QueueFull {
        id: p.id,
        capacity: err.capacity,
    }
}

/// Run prologue shared by every policy: validate the batch before any
/// mutation, then seed the not-yet-arrived pool.
pub(crate) fn prologue(procs: &[Process]) -> Result<OrderingQueue<ArrivalKey>, SimError> {
    process::validate_batch(procs)?;
    for p in procs {
        debug_assert!(
            p.start_time.is_none()
                && p.end_time.is_none()
                && p.intervals.is_empty()
                && p.remaining_time == p.burst_time,
            "P{} carries state from a previous run; reset the batch first",
            p.id
        );
    }

    let mut arrivals = OrderingQueue::with_capacity(procs.len(), process::arrival_key);
    for (idx, p) in procs.iter().enumerate() {
        arrivals.insert(idx, p).map_err(|e| queue_full(p, e))?;
    }
    Ok(arrivals)
}

/// Admission rule: move every process whose arrival time has passed into
/// the ready heap.
pub(crate) fn admit_arrived<K: Ord + Copy>(
    arrivals: &mut OrderingQueue<ArrivalKey>,
    ready: &mut OrderingQueue<K>,
    procs: &[Process],
    now: Ticks,
) -> Result<(), SimError> {
    while arrivals
        .peek_min()
        .is_some_and(|idx| procs[idx].arrival_time <= now)
    {
        if let Some(idx) = arrivals.extract_min() {
            ready
                .insert(idx, &procs[idx])
                .map_err(|e| queue_full(&procs[idx], e))?;
        }
    }
    Ok(())
}

/// Idle rule then admission rule, then extraction of the best-ordered
/// eligible process. `None` once both pools are drained.
pub(crate) fn next_eligible<K: Ord + Copy>(
    arrivals: &mut OrderingQueue<ArrivalKey>,
    ready: &mut OrderingQueue<K>,
    procs: &[Process],
    clock: &mut Clock,
) -> Result<Option<ProcIdx>, SimError> {
    if ready.is_empty() {
        match arrivals.peek_min() {
            Some(idx) => clock.idle_until(procs[idx].arrival_time),
            None => return Ok(None),
        }
    }
    admit_arrived(arrivals, ready, procs, clock.now)?;
    Ok(ready.extract_min())
}

/// Dispatch and completion rules for one contiguous grant of `len` units
/// starting at `start`.
pub(crate) fn grant(p: &mut Process, start: Ticks, len: Ticks) {
    debug_assert!(
        len > 0 && len <= p.remaining_time,
        "grant of {len} exceeds remaining time for P{}",
        p.id
    );

    if p.start_time.is_none() {
        p.start_time = Some(start);
    }
    p.intervals.push(Interval {
        start,
        end: start + len,
    });
    p.remaining_time -= len;
    if p.remaining_time == 0 {
        debug_assert!(p.end_time.is_none(), "P{} completed twice", p.id);
        p.end_time = Some(start + len);
    }
    trace!("granted {len} ticks to P{} at t={start}", p.id);
}

/// Unit-granularity preemptive loop shared by the priority and SRTF
/// policies: grant one tick, re-enter the ready pool, re-run admission so a
/// fresh arrival competes with the interrupted process before the next
/// grant.
pub(crate) fn run_unit_stepped<K: Ord + Copy>(
    procs: &mut [Process],
    key_of: fn(&Process) -> K,
) -> Result<RunStats, SimError> {
    let mut arrivals = prologue(procs)?;
    let mut ready = OrderingQueue::with_capacity(procs.len(), key_of);
    let mut clock = Clock::new();

    while let Some(idx) = next_eligible(&mut arrivals, &mut ready, procs, &mut clock)? {
        let start = clock.now;
        clock.advance(1);
        grant(&mut procs[idx], start, 1);
        if procs[idx].remaining_time > 0 {
            ready
                .insert(idx, &procs[idx])
                .map_err(|e| queue_full(&procs[idx], e))?;
        }
    }

    Ok(clock.stats())
}
