use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::SimError;

pub type Ticks = u64;

/// Caller-facing label carried by each record, unique within a batch.
pub type ProcessId = u32;

// Index into the caller's batch slice; this is what the queues carry.
pub type ProcIdx = usize;

/// Half-open span `[start, end)` during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: Ticks,
    pub end: Ticks,
}

impl Interval {
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }
}

/// Input descriptor for one synthetic process, as supplied by the workload
/// source. Signed fields so malformed input is representable and rejectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: ProcessId,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: i32,
}

/// One simulated job. Constructed once by the caller; the per-run fields are
/// mutated in place by a policy run and restored by [`Process::reset`].
#[derive(Debug, Clone)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    /// Immutable reference value; metrics always read this, never the
    /// working counter.
    pub burst_time: Ticks,
    /// Lower value wins. Read only by the priority policies.
    pub priority: i32,
    /// Working counter, `burst_time` after a reset, exactly 0 at completion.
    pub remaining_time: Ticks,
    /// First-dispatch instant, written once per run.
    pub start_time: Option<Ticks>,
    /// Completion instant, written once per run.
    pub end_time: Option<Ticks>,
    /// Raw dispatch spans, append-only and chronological during a run.
    pub intervals: Vec<Interval>,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks, priority: i32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            end_time: None,
            intervals: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.end_time.is_some()
    }

    /// Restores the per-run fields so the record can be fed to another
    /// policy run.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.end_time = None;
        self.intervals.clear();
    }
}

impl TryFrom<ProcessSpec> for Process {
    type Error = SimError;

    fn try_from(spec: ProcessSpec) -> Result<Self, Self::Error> {
        if spec.arrival_time < 0 || spec.burst_time <= 0 {
            return Err(SimError::DegenerateProcess {
                id: spec.id,
                arrival_time: spec.arrival_time,
                burst_time: spec.burst_time,
            });
        }
        Ok(Self::new(
            spec.id,
            spec.arrival_time as Ticks,
            spec.burst_time as Ticks,
            spec.priority,
        ))
    }
}

/// Resets every record in the batch between policy runs.
pub fn reset_all(procs: &mut [Process]) {
    for p in procs {
        p.reset();
    }
}

// Ordering keys for the four comparator roles. Every key ends with
// (arrival_time, id) so equal-compare extraction order is fully specified.

pub type ArrivalKey = (Ticks, ProcessId);
pub type BurstKey = (Ticks, Ticks, ProcessId);
pub type PriorityKey = (i32, Ticks, ProcessId);
pub type RemainingKey = (Ticks, Ticks, ProcessId);

pub fn arrival_key(p: &Process) -> ArrivalKey {
    (p.arrival_time, p.id)
}

pub fn burst_key(p: &Process) -> BurstKey {
    (p.burst_time, p.arrival_time, p.id)
}

pub fn priority_key(p: &Process) -> PriorityKey {
    (p.priority, p.arrival_time, p.id)
}

pub fn remaining_key(p: &Process) -> RemainingKey {
    (p.remaining_time, p.arrival_time, p.id)
}

/// Checks the batch before any record is mutated: a failed run must never
/// poison a later reset-and-rerun.
pub fn validate_batch(procs: &[Process]) -> Result<(), SimError> {
    if procs.is_empty() {
        return Err(SimError::EmptyBatch);
    }

    let mut seen = FxHashSet::default();
    for p in procs {
        if p.burst_time == 0 {
            return Err(SimError::DegenerateProcess {
                id: p.id,
                arrival_time: p.arrival_time as i64,
                burst_time: 0,
            });
        }
        if !seen.insert(p.id) {
            return Err(SimError::DuplicateId { id: p.id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_conversion_accepts_well_formed() {
        let spec = ProcessSpec {
            id: 1,
            arrival_time: 3,
            burst_time: 5,
            priority: 2,
        };
        let p = Process::try_from(spec).unwrap();
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.start_time, None);
        assert_eq!(p.end_time, None);
        assert!(p.intervals.is_empty());
    }

    #[test]
    fn spec_conversion_rejects_negative_arrival() {
        let spec = ProcessSpec {
            id: 7,
            arrival_time: -1,
            burst_time: 5,
            priority: 0,
        };
        assert_eq!(
            Process::try_from(spec).unwrap_err(),
            SimError::DegenerateProcess {
                id: 7,
                arrival_time: -1,
                burst_time: 5,
            }
        );
    }

    #[test]
    fn spec_conversion_rejects_zero_burst() {
        let spec = ProcessSpec {
            id: 2,
            arrival_time: 0,
            burst_time: 0,
            priority: 0,
        };
        assert!(matches!(
            Process::try_from(spec),
            Err(SimError::DegenerateProcess { id: 2, .. })
        ));
    }

    #[test]
    fn reset_restores_per_run_fields() {
        let mut p = Process::new(1, 0, 4, 0);
        p.remaining_time = 0;
        p.start_time = Some(2);
        p.end_time = Some(6);
        p.intervals.push(Interval { start: 2, end: 6 });

        p.reset();
        assert_eq!(p.remaining_time, 4);
        assert_eq!(p.start_time, None);
        assert_eq!(p.end_time, None);
        assert!(p.intervals.is_empty());
    }

    #[test]
    fn validate_rejects_empty_batch() {
        assert_eq!(validate_batch(&[]), Err(SimError::EmptyBatch));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let batch = vec![Process::new(1, 0, 2, 0), Process::new(1, 1, 3, 0)];
        assert_eq!(validate_batch(&batch), Err(SimError::DuplicateId { id: 1 }));
    }

    #[test]
    fn keys_break_ties_by_arrival_then_id() {
        let a = Process::new(2, 1, 5, 3);
        let b = Process::new(1, 1, 5, 3);
        assert!(burst_key(&b) < burst_key(&a));
        assert!(priority_key(&b) < priority_key(&a));

        let later = Process::new(1, 4, 5, 3);
        assert!(burst_key(&a) < burst_key(&later));
    }
}
