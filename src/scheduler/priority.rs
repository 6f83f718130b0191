use super::{run_unit_stepped, Policy, RunStats};
use crate::core::process::{self, Process};
use crate::core::SimError;

/// Preemptive Priority: lower value wins, CPU granted one unit at a time
/// with re-admission after every unit, so a freshly arrived
/// higher-priority process takes over before the next unit.
pub struct PreemptivePriority;

impl Policy for PreemptivePriority {
    fn name(&self) -> &'static str {
        "Preemptive Priority"
    }

    fn run(&self, procs: &mut [Process]) -> Result<RunStats, SimError> {
        run_unit_stepped(procs, process::priority_key)
    }
}
