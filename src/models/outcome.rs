//! Simulation outcome (finished processes plus execution timeline).

use serde::{Deserialize, Serialize};

use super::{ProcessState, Timeline};
use crate::error::Result;
use crate::scheduler::Averages;

/// Result of one simulation run.
///
/// `completed` is in completion order, not input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Finished processes, in the order they completed.
    pub completed: Vec<ProcessState>,
    /// Execution slices in clock order.
    pub timeline: Timeline,
}

impl SimulationOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of finished processes.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no process was simulated.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Finds a finished process by pid.
    pub fn get(&self, pid: &str) -> Option<&ProcessState> {
        self.completed.iter().find(|p| p.pid == pid)
    }

    /// Pids in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.completed.iter().map(|p| p.pid.as_str()).collect()
    }

    /// Latest completion time (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.completed
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total idle ticks between the first dispatch and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.timeline.idle_time()
    }

    /// Average waiting, turnaround and response times.
    ///
    /// Fails with `EmptyInput` when nothing was simulated.
    pub fn averages(&self) -> Result<Averages> {
        Averages::calculate(&self.completed)
    }
}
