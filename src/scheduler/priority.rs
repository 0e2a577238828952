//! Priority scheduler.
//!
//! Candidates are unfinished processes that have arrived, ranked by
//! `(priority, arrival_time, input index)`; a lower priority number wins.
//!
//! - Non-preemptive: the top candidate runs to completion.
//! - Preemptive: the top candidate runs one tick, then the ranking is
//!   re-evaluated, so a newly arrived higher-priority process takes over.
//!
//! Preemptive mode does not record response times; the metrics
//! calculator substitutes waiting time for them.

use tracing::trace;

use super::{log_finish, log_start, IdlePolicy, Scheduler};
use crate::dispatching::{rules, select_next};
use crate::error::Result;
use crate::models::{ProcessSpec, ProcessState, SimulationOutcome};
use crate::validation::{validate_processes, ProcessChecks};

/// Priority scheduler (lower value = higher priority).
///
/// Every input process must carry a priority.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{PriorityScheduler, Scheduler};
///
/// let processes = vec![
///     ProcessSpec::new("low", 0, 4).with_priority(5),
///     ProcessSpec::new("high", 1, 2).with_priority(1),
/// ];
/// let outcome = PriorityScheduler::preemptive().schedule(&processes).unwrap();
/// assert_eq!(outcome.completion_order(), vec!["high", "low"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    preemptive: bool,
    idle_policy: IdlePolicy,
}

impl PriorityScheduler {
    /// Creates a scheduler; `preemptive` selects per-tick re-evaluation.
    pub fn new(preemptive: bool) -> Self {
        Self {
            preemptive,
            idle_policy: IdlePolicy::default(),
        }
    }

    /// Creates a preemptive scheduler.
    pub fn preemptive() -> Self {
        Self::new(true)
    }

    /// Creates a non-preemptive scheduler.
    pub fn non_preemptive() -> Self {
        Self::new(false)
    }

    /// Sets how the clock advances when nothing is ready.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }

    /// Whether this scheduler preempts.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "PRIORITY-P"
        } else {
            "PRIORITY"
        }
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome> {
        validate_processes(processes, ProcessChecks::basic().with_priority())?;
        log_start(self.name(), processes);

        let mut states = ProcessState::from_specs(processes);
        let mut outcome = SimulationOutcome::new();
        let mut t = 0;

        while outcome.len() < states.len() {
            let Some(i) = select_next(&rules::Priority, &states, |p| {
                !p.is_finished() && p.has_arrived(t)
            }) else {
                t = self.idle_policy.advance(t, &states);
                continue;
            };

            let p = &mut states[i];
            if self.preemptive {
                p.run_for(1);
                trace!(pid = %p.pid, t, remaining = p.remaining_time, "tick");
                outcome.timeline.record_tick(&p.pid, t);
                t += 1;
            } else {
                p.mark_dispatched(t);
                let start = t;
                let burst = p.burst_time;
                t += p.run_for(burst);
                trace!(pid = %p.pid, start, end = t, "dispatched");
                outcome.timeline.record(&p.pid, start, t);
            }

            if p.is_finished() {
                p.finish(t);
                trace!(pid = %p.pid, completion = t, "finished");
                outcome.completed.push(p.clone());
            }
        }

        log_finish(self.name(), &outcome);
        Ok(outcome)
    }
}
