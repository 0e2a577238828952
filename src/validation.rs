//! Input validation for scheduling runs.
//!
//! Checks process sets before any simulation state is built. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//! - Missing priorities (priority scheduling only)
//! - Arrivals out of order (round robin only)
//! - Clock horizons that do not fit in `i64`
//! - Unfinished processes handed to the metrics calculator
//!
//! Every check runs and all problems are reported together, so a caller
//! can fix the whole input in one pass.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessSpec, ProcessState};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// Two processes share the same pid.
    DuplicateId,
    /// Priority scheduling received a process without a priority.
    MissingPriority,
    /// Round robin input is not sorted by arrival time.
    UnsortedArrivals,
    /// Latest arrival plus total burst overflows the clock.
    TimeOverflow,
    /// A process passed to the metrics calculator has not finished.
    Unfinished,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Which optional checks a scheduler needs on top of the basic ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessChecks {
    /// Every process must carry a priority.
    pub require_priority: bool,
    /// Arrival times must be non-decreasing in input order.
    pub require_sorted_arrivals: bool,
}

impl ProcessChecks {
    /// Basic checks only (burst, arrival, unique pid).
    pub fn basic() -> Self {
        Self::default()
    }

    /// Also require a priority on every process.
    pub fn with_priority(mut self) -> Self {
        self.require_priority = true;
        self
    }

    /// Also require input sorted by arrival time.
    pub fn with_sorted_arrivals(mut self) -> Self {
        self.require_sorted_arrivals = true;
        self
    }
}

/// Validates a process set for a scheduling run.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. Every arrival time is non-negative
/// 3. No duplicate pids
/// 4. Every process has a priority (if `checks.require_priority`)
/// 5. Arrivals are non-decreasing (if `checks.require_sorted_arrivals`)
/// 6. `max(arrival) + sum(burst)` fits in `i64`, so the clock cannot overflow
///
/// An empty slice is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec], checks: ProcessChecks) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if checks.require_priority && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.pid),
            ));
        }
    }

    if checks.require_sorted_arrivals {
        for pair in processes.windows(2) {
            if pair[1].arrival_time < pair[0].arrival_time {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnsortedArrivals,
                    format!(
                        "Process '{}' (arrival {}) is listed after '{}' (arrival {})",
                        pair[1].pid, pair[1].arrival_time, pair[0].pid, pair[0].arrival_time
                    ),
                ));
            }
        }
    }

    if clock_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the clock range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value a run can reach.
///
/// No process completes later than the latest arrival plus the total
/// burst. Out-of-range fields are clamped at zero; they are reported by
/// their own checks.
fn clock_horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Validates that every process has finished and carries its timing fields.
pub fn validate_finished(processes: &[ProcessState]) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .filter(|p| p.waiting_time.is_none() || p.turnaround_time.is_none())
        .map(|p| {
            ValidationError::new(
                ValidationErrorKind::Unfinished,
                format!("Process '{}' has not finished", p.pid),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 8).with_priority(2),
            ProcessSpec::new("P2", 1, 4).with_priority(1),
            ProcessSpec::new("P3", 2, 9).with_priority(3),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let checks = ProcessChecks::basic().with_priority().with_sorted_arrivals();
        assert!(validate_processes(&sample_processes(), checks).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[], ProcessChecks::basic()).is_ok());
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![ProcessSpec::new("P1", 0, 0), ProcessSpec::new("P2", 0, -3)];
        let errors = validate_processes(&processes, ProcessChecks::basic()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessSpec::new("P1", -1, 3)];
        let errors = validate_processes(&processes, ProcessChecks::basic()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![ProcessSpec::new("P1", 0, 3), ProcessSpec::new("P1", 2, 3)];
        let errors = validate_processes(&processes, ProcessChecks::basic()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_missing_priority_only_when_required() {
        let processes = vec![ProcessSpec::new("P1", 0, 3)];
        assert!(validate_processes(&processes, ProcessChecks::basic()).is_ok());

        let errors =
            validate_processes(&processes, ProcessChecks::basic().with_priority()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::MissingPriority));
    }

    #[test]
    fn test_unsorted_arrivals_only_when_required() {
        let processes = vec![ProcessSpec::new("P1", 5, 3), ProcessSpec::new("P2", 1, 3)];
        assert!(validate_processes(&processes, ProcessChecks::basic()).is_ok());

        let errors =
            validate_processes(&processes, ProcessChecks::basic().with_sorted_arrivals())
                .unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnsortedArrivals));
    }

    #[test]
    fn test_equal_arrivals_are_sorted() {
        let processes = vec![ProcessSpec::new("P1", 2, 3), ProcessSpec::new("P2", 2, 1)];
        assert!(
            validate_processes(&processes, ProcessChecks::basic().with_sorted_arrivals()).is_ok()
        );
    }

    #[test]
    fn test_multiple_errors() {
        // Bad burst + negative arrival + duplicate
        let processes = vec![ProcessSpec::new("P1", -2, 0), ProcessSpec::new("P1", 0, 1)];
        let errors = validate_processes(&processes, ProcessChecks::basic()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_clock_overflow() {
        let processes = vec![ProcessSpec::new("P1", i64::MAX - 1, 5)];
        let errors = validate_processes(&processes, ProcessChecks::basic()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_clock_overflow_from_summed_bursts() {
        let half = i64::MAX / 2 + 1;
        let processes = vec![ProcessSpec::new("P1", 0, half), ProcessSpec::new("P2", 0, half)];
        let errors = validate_processes(&processes, ProcessChecks::basic()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_clock_at_limit_is_valid() {
        let processes = vec![ProcessSpec::new("P1", i64::MAX - 5, 5)];
        assert!(validate_processes(&processes, ProcessChecks::basic()).is_ok());
    }

    #[test]
    fn test_unfinished_process() {
        let states = ProcessState::from_specs(&sample_processes());
        let errors = validate_finished(&states).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(has_kind(&errors, ValidationErrorKind::Unfinished));
    }
}
