//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every pending process with `arrival <= t` to the ready queue.
//! 2. Dequeue the head and run it for `min(quantum, remaining)`.
//! 3. Admit processes that arrived during that slice.
//! 4. Re-enqueue the process behind them if it still has work.
//!
//! Newly arrived processes therefore go ahead of a just-preempted one.
//!
//! # Precondition
//! Input must be sorted by arrival time; unsorted input is rejected
//! instead of producing a wrong admission order.

use std::collections::VecDeque;

use tracing::trace;

use super::{log_finish, log_start, IdlePolicy, Scheduler};
use crate::error::{Result, SchedError};
use crate::models::{ProcessSpec, ProcessState, SimulationOutcome};
use crate::validation::{validate_processes, ProcessChecks};

/// Round Robin scheduler with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::{RoundRobin, Scheduler};
///
/// let processes = vec![ProcessSpec::new("A", 0, 5), ProcessSpec::new("B", 0, 2)];
/// let outcome = RoundRobin::new(2).schedule(&processes).unwrap();
/// assert_eq!(outcome.completion_order(), vec!["B", "A"]);
/// assert_eq!(outcome.get("A").unwrap().completion_time, Some(7));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    time_quantum: i64,
    idle_policy: IdlePolicy,
}

impl RoundRobin {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is checked when scheduling; a non-positive value fails
    /// with a configuration error.
    pub fn new(time_quantum: i64) -> Self {
        Self {
            time_quantum,
            idle_policy: IdlePolicy::default(),
        }
    }

    /// Sets how the clock advances while the ready queue is empty.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }

    /// The configured time quantum.
    pub fn time_quantum(&self) -> i64 {
        self.time_quantum
    }
}

/// Moves every pending process that has arrived by `t` to the ready queue.
fn admit(
    pending: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    states: &[ProcessState],
    t: i64,
) {
    while let Some(&next) = pending.front() {
        if !states[next].has_arrived(t) {
            break;
        }
        pending.pop_front();
        ready.push_back(next);
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome> {
        if self.time_quantum <= 0 {
            return Err(SchedError::Configuration(format!(
                "time quantum must be positive, got {}",
                self.time_quantum
            )));
        }
        validate_processes(processes, ProcessChecks::basic().with_sorted_arrivals())?;
        log_start(self.name(), processes);

        let mut states = ProcessState::from_specs(processes);
        let mut pending: VecDeque<usize> = (0..states.len()).collect();
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut outcome = SimulationOutcome::new();
        let mut t = 0;

        while !pending.is_empty() || !ready.is_empty() {
            admit(&mut pending, &mut ready, &states, t);

            let Some(i) = ready.pop_front() else {
                t = self.idle_policy.advance(t, &states);
                continue;
            };

            let p = &mut states[i];
            p.mark_dispatched(t);
            let start = t;
            t += p.run_for(self.time_quantum);
            trace!(pid = %p.pid, start, end = t, remaining = p.remaining_time, "dispatched");
            outcome.timeline.record(&p.pid, start, t);

            let finished = p.is_finished();
            if finished {
                p.finish(t);
                outcome.completed.push(p.clone());
            }

            admit(&mut pending, &mut ready, &states, t);
            if !finished {
                ready.push_back(i);
            }
        }

        log_finish(self.name(), &outcome);
        Ok(outcome)
    }
}
