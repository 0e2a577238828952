//! CPU schedulers and metrics.
//!
//! Each scheduler is a discrete-time simulation over a fresh copy of the
//! input processes. Schedulers never call each other; they share the
//! process model, the dispatching rules, and the metrics calculator.
//!
//! # Algorithms
//!
//! | Scheduler | Selection | Preemption |
//! |-----------|-----------|------------|
//! | `Fcfs` | earliest arrival | none |
//! | `SjfNonPreemptive` | shortest burst | none |
//! | `SjfPreemptive` | shortest remaining time | every tick |
//! | `RoundRobin` | FIFO queue | after each quantum |
//! | `PriorityScheduler` | lowest priority rank | every tick (optional) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5: CPU Scheduling

mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sjf;

#[cfg(test)]
mod proptests;

pub use fcfs::Fcfs;
pub use metrics::Averages;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use sjf::{SjfNonPreemptive, SjfPreemptive};

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{ProcessSpec, ProcessState, SimulationOutcome};

/// A CPU scheduling discipline.
pub trait Scheduler: Send + Sync + Debug {
    /// Algorithm name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the given processes and returns them with timing fields.
    ///
    /// The input is validated first; nothing is simulated if it fails.
    /// An empty input yields an empty outcome.
    fn schedule(&self, processes: &[ProcessSpec]) -> Result<SimulationOutcome>;
}

/// How the clock advances when no process is ready.
///
/// Both policies produce identical outcomes; `UnitStep` only exists to
/// cross-check `Jump`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdlePolicy {
    /// Jump straight to the next pending arrival.
    #[default]
    Jump,
    /// Advance one tick at a time.
    UnitStep,
}

impl IdlePolicy {
    /// Next clock value after an idle step at `t`.
    pub(crate) fn advance(self, t: i64, processes: &[ProcessState]) -> i64 {
        match self {
            Self::UnitStep => t + 1,
            Self::Jump => processes
                .iter()
                .filter(|p| !p.is_finished() && p.arrival_time > t)
                .map(|p| p.arrival_time)
                .min()
                .unwrap_or(t + 1),
        }
    }
}

fn log_start(name: &str, processes: &[ProcessSpec]) {
    debug!(algorithm = name, processes = processes.len(), "simulation started");
}

fn log_finish(name: &str, outcome: &SimulationOutcome) {
    debug!(
        algorithm = name,
        completed = outcome.len(),
        makespan = outcome.makespan(),
        idle = outcome.idle_time(),
        "simulation finished"
    );
}
