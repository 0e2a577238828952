//! Process models.
//!
//! A [`ProcessSpec`] is the immutable input a caller hands to a scheduler.
//! A [`ProcessState`] is the working copy a single simulation run owns and
//! annotates with timing results.
//!
//! # Time Representation
//! All times are integer ticks on a virtual clock starting at t=0.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Lower `priority` values mean higher priority. Priority is only consulted
/// by the priority scheduler, which rejects processes without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub pid: String,
    /// Instant the process becomes ready (ticks, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required (ticks, > 0).
    pub burst_time: i64,
    /// Priority rank (lower = more urgent). `None` = unranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl ProcessSpec {
    /// Creates a process with the given arrival and burst times.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the priority rank.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A process inside a simulation run.
///
/// Created from a [`ProcessSpec`] when a run starts, mutated only by the
/// owning scheduler, and frozen once `remaining_time` reaches zero.
///
/// The timing fields stay `None` until the process finishes, except
/// `response_time`, which is set at the first dispatch and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    /// Unique process identifier.
    pub pid: String,
    /// Position in the caller's input sequence (final tie-breaker).
    pub index: usize,
    /// Arrival time (ticks).
    pub arrival_time: i64,
    /// Burst time (ticks).
    pub burst_time: i64,
    /// Priority rank, copied from the spec.
    pub priority: Option<i32>,
    /// CPU time still owed to this process.
    pub remaining_time: i64,
    /// First dispatch instant minus arrival.
    pub response_time: Option<i64>,
    /// Instant the last unit of work finished.
    pub completion_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
}

impl ProcessState {
    /// Creates the working state for the `index`-th input process.
    pub fn from_spec(spec: &ProcessSpec, index: usize) -> Self {
        Self {
            pid: spec.pid.clone(),
            index,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            remaining_time: spec.burst_time,
            response_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
        }
    }

    /// Builds working states for a whole input sequence.
    pub fn from_specs(specs: &[ProcessSpec]) -> Vec<Self> {
        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Self::from_spec(spec, i))
            .collect()
    }

    /// Whether the process has arrived by time `t`.
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival_time <= t
    }

    /// Whether all burst time has been served.
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records the first dispatch at time `t`. Later calls are ignored.
    pub fn mark_dispatched(&mut self, t: i64) {
        if self.response_time.is_none() {
            self.response_time = Some(t - self.arrival_time);
        }
    }

    /// Serves up to `amount` ticks and returns the ticks actually served.
    pub fn run_for(&mut self, amount: i64) -> i64 {
        debug_assert!(!self.is_finished(), "{} already finished", self.pid);
        let served = amount.min(self.remaining_time);
        self.remaining_time -= served;
        served
    }

    /// Finalizes completion, turnaround, and waiting times.
    pub fn finish(&mut self, completion_time: i64) {
        debug_assert!(self.is_finished(), "{} still has work", self.pid);
        let turnaround = completion_time - self.arrival_time;
        let waiting = turnaround - self.burst_time;
        debug_assert!(waiting >= 0, "{} waited {waiting}", self.pid);

        self.completion_time = Some(completion_time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(waiting);
    }

    /// Response time used for averaging.
    ///
    /// Schedulers that never record a first dispatch (preemptive priority)
    /// leave `response_time` unset; for those processes the waiting time is
    /// substituted. Returns `None` if the process has not finished.
    pub fn effective_response_time(&self) -> Option<i64> {
        self.response_time.or(self.waiting_time)
    }
}
