//! Serializable simulation requests.
//!
//! A [`SimulationRequest`] bundles a process set with the algorithm to run
//! and its parameters, so a run can be described as plain data (e.g. a
//! JSON document) and executed in one call.
//!
//! ```json
//! {
//!   "processes": [{"pid": "P1", "arrival_time": 0, "burst_time": 8}],
//!   "algorithm": {"kind": "round_robin", "time_quantum": 3},
//!   "idle_policy": "jump"
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{ProcessSpec, SimulationOutcome};
use crate::scheduler::{
    Averages, Fcfs, IdlePolicy, PriorityScheduler, RoundRobin, Scheduler, SjfNonPreemptive,
    SjfPreemptive,
};

/// Scheduling algorithm and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, run to completion.
    SjfNonPreemptive,
    /// Shortest-remaining-time-first.
    SjfPreemptive,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Maximum ticks per dispatch (> 0).
        time_quantum: i64,
    },
    /// Priority scheduling.
    Priority {
        /// Re-evaluate priorities every tick.
        preemptive: bool,
    },
}

impl Algorithm {
    /// Builds the matching scheduler.
    pub fn scheduler(&self, idle_policy: IdlePolicy) -> Box<dyn Scheduler> {
        match *self {
            Self::Fcfs => Box::new(Fcfs::new()),
            Self::SjfNonPreemptive => {
                Box::new(SjfNonPreemptive::new().with_idle_policy(idle_policy))
            }
            Self::SjfPreemptive => Box::new(SjfPreemptive::new().with_idle_policy(idle_policy)),
            Self::RoundRobin { time_quantum } => {
                Box::new(RoundRobin::new(time_quantum).with_idle_policy(idle_policy))
            }
            Self::Priority { preemptive } => {
                Box::new(PriorityScheduler::new(preemptive).with_idle_policy(idle_policy))
            }
        }
    }
}

/// A process set plus the algorithm to simulate it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in caller order.
    pub processes: Vec<ProcessSpec>,
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Idle clock policy.
    #[serde(default)]
    pub idle_policy: IdlePolicy,
}

/// Result of running a [`SimulationRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Name of the scheduler that ran.
    pub algorithm: String,
    /// Finished processes and timeline.
    pub outcome: SimulationOutcome,
    /// Averages; `None` when no process was simulated.
    pub averages: Option<Averages>,
}

impl SimulationRequest {
    /// Creates a request with the default idle policy.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            idle_policy: IdlePolicy::default(),
        }
    }

    /// Sets the idle clock policy.
    pub fn with_idle_policy(mut self, idle_policy: IdlePolicy) -> Self {
        self.idle_policy = idle_policy;
        self
    }

    /// Runs the simulation.
    pub fn run(&self) -> Result<SimulationReport> {
        let scheduler = self.algorithm.scheduler(self.idle_policy);
        let outcome = scheduler.schedule(&self.processes)?;
        let averages = if outcome.is_empty() {
            None
        } else {
            Some(outcome.averages()?)
        };
        debug!(algorithm = scheduler.name(), ?averages, "report ready");

        Ok(SimulationReport {
            algorithm: scheduler.name().to_string(),
            outcome,
            averages,
        })
    }
}
