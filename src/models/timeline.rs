//! Execution timeline (Gantt chart) of a simulation run.
//!
//! A timeline is the ordered list of intervals during which the CPU
//! served a process. Gaps between slices are idle time.

use serde::{Deserialize, Serialize};

/// A contiguous interval of CPU time given to one process.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process served during this slice.
    pub pid: String,
    /// Start instant (ticks).
    pub start: i64,
    /// End instant (ticks, exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered execution slices of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in clock order.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one dispatch: `pid` ran during `[start, end)`.
    pub fn record(&mut self, pid: &str, start: i64, end: i64) {
        debug_assert!(end > start, "empty slice for {pid}");
        debug_assert!(self.makespan() <= start, "overlapping slice for {pid}");
        self.slices.push(ExecutionSlice::new(pid, start, end));
    }

    /// Records one unit tick of `pid` starting at `t`.
    ///
    /// Extends the previous slice when the same process keeps the CPU
    /// without a gap, so tick-stepped schedulers produce one slice per
    /// stretch of uninterrupted execution.
    pub fn record_tick(&mut self, pid: &str, t: i64) {
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == t {
                last.end = t + 1;
                return;
            }
        }
        self.record(pid, t, t + 1);
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Instant the first slice started.
    pub fn start(&self) -> Option<i64> {
        self.slices.first().map(|s| s.start)
    }

    /// Makespan: instant the last slice ended (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total ticks the CPU was serving a process.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// Total ticks between the first and last slice with nothing running.
    pub fn idle_time(&self) -> i64 {
        self.slices
            .windows(2)
            .map(|w| w[1].start - w[0].end)
            .sum()
    }

    /// Busy fraction of the span from the first start to the makespan.
    ///
    /// Returns `None` for an empty timeline.
    pub fn utilization(&self) -> Option<f64> {
        let start = self.start()?;
        let span = self.makespan() - start;
        if span <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / span as f64)
    }

    /// Slices that served the given process.
    pub fn slices_for(&self, pid: &str) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }
}
