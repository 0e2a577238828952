//! Average timing metrics over a finished process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | Avg Response Time | mean(first dispatch - arrival) |
//!
//! Processes without a recorded response time contribute their waiting
//! time to the response average (see
//! [`ProcessState::effective_response_time`]).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::ProcessState;
use crate::validation::validate_finished;

/// Average waiting, turnaround, and response times (ticks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time (waiting time substituted where unrecorded).
    pub avg_response_time: f64,
}

impl Averages {
    /// Computes averages over finished processes.
    ///
    /// # Errors
    /// - `EmptyInput` if `processes` is empty.
    /// - `Validation` if any process has not finished.
    pub fn calculate(processes: &[ProcessState]) -> Result<Self> {
        if processes.is_empty() {
            return Err(SchedError::EmptyInput);
        }
        validate_finished(processes)?;

        // Summed in f64: per-process times fit the clock, their total may not.
        let mut total_waiting = 0.0;
        let mut total_turnaround = 0.0;
        let mut total_response = 0.0;

        for p in processes {
            total_waiting += p.waiting_time.unwrap_or_default() as f64;
            total_turnaround += p.turnaround_time.unwrap_or_default() as f64;
            total_response += p.effective_response_time().unwrap_or_default() as f64;
        }

        let n = processes.len() as f64;
        Ok(Self {
            avg_waiting_time: total_waiting / n,
            avg_turnaround_time: total_turnaround / n,
            avg_response_time: total_response / n,
        })
    }

    /// Returns `(waiting, turnaround, response)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (
            self.avg_waiting_time,
            self.avg_turnaround_time,
            self.avg_response_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;
    use crate::validation::ValidationErrorKind;

    fn finished(pid: &str, arrival: i64, burst: i64, completion: i64) -> ProcessState {
        let mut p = ProcessState::from_spec(&ProcessSpec::new(pid, arrival, burst), 0);
        p.run_for(burst);
        p.finish(completion);
        p
    }

    #[test]
    fn test_averages_basic() {
        let mut p1 = finished("P1", 0, 4, 4); // wait 0, tat 4
        p1.response_time = Some(0);
        let mut p2 = finished("P2", 1, 2, 8); // wait 5, tat 7
        p2.response_time = Some(3);

        let avg = Averages::calculate(&[p1, p2]).unwrap();
        assert!((avg.avg_waiting_time - 2.5).abs() < 1e-10);
        assert!((avg.avg_turnaround_time - 5.5).abs() < 1e-10);
        assert!((avg.avg_response_time - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_missing_response_uses_waiting() {
        let p = finished("P1", 0, 2, 5); // wait 3, no response recorded
        assert!(p.response_time.is_none());

        let avg = Averages::calculate(&[p]).unwrap();
        assert!((avg.avg_response_time - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Averages::calculate(&[]), Err(SchedError::EmptyInput));
    }

    #[test]
    fn test_unfinished_rejected() {
        let p = ProcessState::from_spec(&ProcessSpec::new("P1", 0, 2), 0);
        let err = Averages::calculate(&[p]).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::Unfinished
        );
    }

    #[test]
    fn test_as_tuple() {
        let mut p = finished("P1", 0, 2, 4);
        p.response_time = Some(1);
        let avg = Averages::calculate(&[p]).unwrap();
        assert_eq!(avg.as_tuple(), (2.0, 4.0, 1.0));
    }

    #[test]
    fn test_totals_beyond_clock_range() {
        let half = i64::MAX / 2;
        let p1 = finished("P1", 0, half, half);
        let p2 = finished("P2", 0, half, 2 * half);

        let avg = Averages::calculate(&[p1, p2]).unwrap();
        let expected = 1.5 * half as f64;
        assert!((avg.avg_turnaround_time - expected).abs() / expected < 1e-12);
        assert!(avg.avg_waiting_time.is_finite());
    }
}
