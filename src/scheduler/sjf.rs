//! Shortest-Job-First schedulers.
//!
//! - [`SjfNonPreemptive`]: at each decision point, runs the ready process
//!   with the shortest burst to completion.
//! - [`SjfPreemptive`]: shortest-remaining-time-first, re-evaluated every
//!   tick, so a newly arrived shorter job preempts the running one.
//!
//! Ties go to the earlier arrival, then the earlier input position.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use tracing::trace;

use super::{log_finish, log_start, IdlePolicy, Scheduler};
use crate::dispatching::{rules, select_next};
use crate::error::Result;
use crate::models::{ProcessSpec, ProcessState, SimulationOutcome};
use crate::validation::{validate_processes, ProcessChecks};

/// Non-preemptive Shortest-Job-First scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfNonPreemptive {
    idle_policy: IdlePolicy,
}

impl SjfNonPreemptive {
    /// Creates a new scheduler with the default idle policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how the clock advances through gaps in arrivals.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }
}

impl Scheduler for SjfNonPreemptive {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome> {
        validate_processes(processes, ProcessChecks::basic())?;
        log_start(self.name(), processes);

        let mut states = ProcessState::from_specs(processes);
        let mut outcome = SimulationOutcome::new();
        let mut t = 0;

        while outcome.len() < states.len() {
            let Some(i) = select_next(&rules::Spt, &states, |p| {
                !p.is_finished() && p.has_arrived(t)
            }) else {
                t = self.idle_policy.advance(t, &states);
                continue;
            };

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

/// Preemptive Shortest-Job-First (shortest-remaining-time-first) scheduler.
///
/// Steps the clock one tick at a time. Response time is recorded at the
/// first tick a process runs, not at completion.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{Scheduler, SjfPreemptive};
///
/// let processes = vec![ProcessSpec::new("long", 0, 6), ProcessSpec::new("short", 1, 2)];
/// let outcome = SjfPreemptive::new().schedule(&processes).unwrap();
/// assert_eq!(outcome.completion_order(), vec!["short", "long"]);
/// assert_eq!(outcome.get("long").unwrap().completion_time, Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfPreemptive {
    idle_policy: IdlePolicy,
}

impl SjfPreemptive {
    /// Creates a new scheduler with the default idle policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how the clock advances when nothing is ready.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }
}

impl Scheduler for SjfPreemptive {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome> {
        validate_processes(processes, ProcessChecks::basic())?;
        log_start(self.name(), processes);

        let mut states = ProcessState::from_specs(processes);
        let mut outcome = SimulationOutcome::new();
        let mut t = 0;

        while outcome.len() < states.len() {
            let Some(i) = select_next(&rules::Srpt, &states, |p| {
                !p.is_finished() && p.has_arrived(t)
            }) else {
                t = self.idle_policy.advance(t, &states);
                continue;
            };

            let p = &mut states[i];
            p.mark_dispatched(t);
            p.run_for(1);
            trace!(pid = %p.pid, t, remaining = p.remaining_time, "tick");
            outcome.timeline.record_tick(&p.pid, t);
            t += 1;

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
