use std::fmt;
use std::mem;

use serde::Serialize;

use crate::core::process::{Interval, Process, ProcessId};

/// Marker separating one run's rows from the next when several runs are
/// concatenated into one stream.
pub const RUN_TERMINATOR: &str = "+";

/// Merged occupancy rows for one process, in ascending order. The pairing
/// of id to merged intervals is what a downstream Gantt renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: ProcessId,
    pub intervals: Vec<Interval>,
}

/// Per-run export payload, one entry per process in original collection
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
}

/// Folds a chronological raw interval list, combining every
/// `prev.end == next.start` chain into a single span.
pub fn merge_intervals(raw: Vec<Interval>) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::new();
    for it in raw {
        match merged.last_mut() {
            Some(prev) if prev.end == it.start => prev.end = it.end,
            _ => merged.push(it),
        }
    }
    merged
}

impl Timeline {
    /// Consumes each record's raw interval list and merges it for export.
    /// Runs at export time, after the simulation; the raw lists are left
    /// empty.
    pub fn drain(procs: &mut [Process]) -> Self {
        let entries = procs
            .iter_mut()
            .map(|p| TimelineEntry {
                id: p.id,
                intervals: merge_intervals(mem::take(&mut p.intervals)),
            })
            .collect();
        Self { entries }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "P{}", entry.id)?;
            for it in &entry.intervals {
                write!(f, ",{}:{}", it.start, it.end)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{RUN_TERMINATOR}")
    }
}
