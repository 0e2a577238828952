//! Error types for CPU scheduling simulations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for scheduling operations.
pub type Result<T> = std::result::Result<T, SchedError>;

/// Errors that can occur while simulating or evaluating a schedule.
///
/// Every error is detected at the call boundary before any simulation
/// state is built, so a failed call has no partial output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedError {
    /// One or more processes failed input validation.
    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Averages were requested over zero processes.
    #[error("empty input: at least one finished process is required")]
    EmptyInput,

    /// A scheduler or generator parameter is out of range.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SchedError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SchedError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = SchedError::from(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P1 has burst 0"),
            ValidationError::new(ValidationErrorKind::NegativeArrival, "P2 arrives at -1"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: P1 has burst 0; P2 arrives at -1"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_other_errors_have_no_validation_detail() {
        assert!(SchedError::EmptyInput.validation_errors().is_empty());
        let err = SchedError::Configuration("time quantum must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "configuration error: time quantum must be positive, got 0"
        );
    }
}
