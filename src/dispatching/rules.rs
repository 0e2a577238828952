//! Built-in dispatching rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | FIFO | arrival time | FCFS |
//! | SPT | burst time | SJF (non-preemptive) |
//! | SRPT | remaining time | SJF (preemptive) |
//! | PRIORITY | priority rank | Priority scheduling |

use super::{DispatchingRule, RuleKey};
use crate::models::ProcessState;

/// First In, First Out.
///
/// Prioritizes processes that arrived earliest.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn key(&self, process: &ProcessState) -> RuleKey {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with the shortest total burst.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn key(&self, process: &ProcessState) -> RuleKey {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Shortest Remaining Processing Time.
///
/// Prioritizes processes closest to completion. Re-evaluated every tick,
/// this is the preemptive form of SPT.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn key(&self, process: &ProcessState) -> RuleKey {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// Priority rank.
///
/// Lower rank runs first. Processes without a rank sort last.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &ProcessState) -> RuleKey {
        process.priority.map(RuleKey::from).unwrap_or(RuleKey::MAX)
    }

    fn description(&self) -> &'static str {
        "Priority Rank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSpec, ProcessState};

    fn state(arrival: i64, burst: i64, priority: Option<i32>) -> ProcessState {
        let mut spec = ProcessSpec::new("P", arrival, burst);
        spec.priority = priority;
        ProcessState::from_spec(&spec, 0)
    }

    #[test]
    fn test_fifo_key() {
        assert_eq!(Fifo.key(&state(7, 3, None)), 7);
    }

    #[test]
    fn test_spt_ignores_progress() {
        let mut p = state(0, 5, None);
        p.run_for(4);
        assert_eq!(Spt.key(&p), 5);
    }

    #[test]
    fn test_srpt_tracks_progress() {
        let mut p = state(0, 5, None);
        p.run_for(4);
        assert_eq!(Srpt.key(&p), 1);
    }

    #[test]
    fn test_priority_unranked_last() {
        assert_eq!(Priority.key(&state(0, 1, Some(-2))), -2);
        assert_eq!(Priority.key(&state(0, 1, None)), RuleKey::MAX);
    }

    #[test]
    fn test_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Srpt.description(), "Shortest Remaining Processing Time");
    }
}
