//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival time (ties keep input order).
//! 2. Run each to completion in that order:
//!    `t = max(t, arrival) + burst`.
//!
//! # Complexity
//! O(n log n).

use tracing::trace;

use super::{log_finish, log_start, Scheduler};
use crate::dispatching::{rules, sorted_candidates};
use crate::error::Result;
use crate::models::{ProcessSpec, ProcessState, SimulationOutcome};
use crate::validation::{validate_processes, ProcessChecks};

/// First-Come-First-Served scheduler.
///
/// Never preempts, so each process's response time equals its waiting time.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![ProcessSpec::new("P1", 2, 3), ProcessSpec::new("P2", 0, 2)];
/// let outcome = Fcfs::new().schedule(&processes).unwrap();
/// assert_eq!(outcome.completion_order(), vec!["P2", "P1"]);
/// assert_eq!(outcome.get("P1").unwrap().completion_time, Some(5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates a new FCFS scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome> {
        validate_processes(processes, ProcessChecks::basic())?;
        log_start(self.name(), processes);

        let mut states = ProcessState::from_specs(processes);
        let order = sorted_candidates(&rules::Fifo, &states, |_| true);

        let mut outcome = SimulationOutcome::new();
        let mut t = 0;

        for i in order {
            let p = &mut states[i];
            t = t.max(p.arrival_time);
            p.mark_dispatched(t);
            let start = t;
            let burst = p.burst_time;
            t += p.run_for(burst);
            p.finish(t);

            trace!(pid = %p.pid, start, end = t, "dispatched");
            outcome.timeline.record(&p.pid, start, t);
            outcome.completed.push(p.clone());
        }

        log_finish(self.name(), &outcome);
        Ok(outcome)
    }
}
