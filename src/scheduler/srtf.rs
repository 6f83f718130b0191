use super::{run_unit_stepped, Policy, RunStats};
use crate::core::process::{self, Process};
use crate::core::SimError;

/// Preemptive Shortest Job First (shortest remaining time first): one-unit
/// grants keyed by the remaining time, re-keyed on every re-admission, so
/// an arrival with a shorter burst preempts the current process.
pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "Preemptive Shortest Job First"
    }

    fn run(&self, procs: &mut [Process]) -> Result<RunStats, SimError> {
        run_unit_stepped(procs, process::remaining_key)
    }
}
