//! Input validation for simulation runs.
//!
//! Checks process attributes before any scheduling happens. Detects:
//! - Empty, reserved or duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Priority text that is not an integer
//! - Process sets whose timeline would not fit in `i64`
//!
//! Invalid input is always reported, never coerced.

use crate::models::{Process, IDLE_ID};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty (or blank) ID.
    EmptyId,
    /// A process uses the ID reserved for idle intervals.
    ReservedId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Priority is present but not an integer.
    InvalidPriority,
    /// A numeric field could not be parsed.
    MalformedField,
    /// Latest arrival plus total burst exceeds the representable time range.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks the attributes of a single process.
///
/// Returns the first problem found.
pub fn validate_process(process: &Process) -> Result<(), ValidationError> {
    if process.id.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Process ID must not be empty",
        ));
    }
    if process.id == IDLE_ID {
        return Err(ValidationError::new(
            ValidationErrorKind::ReservedId,
            format!("Process ID '{IDLE_ID}' is reserved for idle intervals"),
        ));
    }
    if process.arrival_time < 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Process '{}' has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }
    if process.burst_time <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }
    Ok(())
}

/// Validates a whole process set.
///
/// Checks:
/// 1. Every process passes [`validate_process`]
/// 2. No duplicate process IDs (compared after trimming whitespace)
/// 3. The latest arrival plus every burst fits in `i64`, which bounds
///    every clock value any algorithm can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for process in processes {
        if let Err(e) = validate_process(process) {
            errors.push(e);
        }
        let id = process.id.trim();
        if !id.is_empty() && !ids.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {id}"),
            ));
        }
    }

    if timeline_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the supported time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock value: latest arrival plus the sum of bursts.
///
/// Negative attributes are counted as zero; they are reported separately.
fn timeline_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Parses a priority cell. Blank text means "no priority".
pub fn parse_priority(process_id: &str, raw: &str) -> Result<Option<i32>, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i32>().map(Some).map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidPriority,
            format!("Process '{process_id}' has non-integer priority '{text}'"),
        )
    })
}

/// Parses an integer time cell (arrival or burst).
///
/// Time is discrete, so fractional text such as `"2.5"` is malformed.
pub(crate) fn parse_time(
    field: &str,
    process_id: &str,
    raw: &str,
) -> Result<i64, ValidationError> {
    let text = raw.trim();
    text.parse::<i64>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::MalformedField,
            format!("Process '{process_id}' has malformed {field} '{text}'"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8).with_priority(3),
            Process::new("P2", 1, 4).with_priority(1),
            Process::new("P3", 2, 9),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut processes = sample_processes();
        processes.push(Process::new("P1", 5, 2));

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_empty_id() {
        let errors = validate_processes(&[Process::new("  ", 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
    }

    #[test]
    fn test_reserved_id() {
        let errors = validate_processes(&[Process::new("IDLE", 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ReservedId);
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("P1", -3, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[Process::new("P1", 0, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("P1", -1, 5),
            Process::new("P2", 0, -2),
            Process::new("P2", 0, 3),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_blank_ids_are_not_duplicates() {
        let errors =
            validate_processes(&[Process::new(" ", 0, 1), Process::new(" ", 1, 1)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_ids_differing_in_whitespace_are_duplicates() {
        let errors =
            validate_processes(&[Process::new("P1", 0, 1), Process::new("P1 ", 1, 1)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.ends_with("P1"));
    }

    #[test]
    fn test_time_overflow() {
        let late = [Process::new("A", i64::MAX - 1, 5)];
        let errors = validate_processes(&late).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let huge = [
            Process::new("A", 0, i64::MAX / 2 + 1),
            Process::new("B", 0, i64::MAX / 2 + 1),
        ];
        let errors = validate_processes(&huge).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // Exactly at the limit is still representable.
        let edge = [Process::new("A", i64::MAX - 5, 5)];
        assert!(validate_processes(&edge).is_ok());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("P1", "4").unwrap(), Some(4));
        assert_eq!(parse_priority("P1", " -2 ").unwrap(), Some(-2));
        assert_eq!(parse_priority("P1", "").unwrap(), None);

        let err = parse_priority("P1", "high").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidPriority);
        assert!(err.to_string().contains("P1"));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("burst time", "P1", " 12 ").unwrap(), 12);
        let err = parse_time("burst time", "P1", "1.5").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MalformedField);
        let err = parse_time("burst time", "P1", "2.5").unwrap_err();
        assert!(err.message.contains("'2.5'"));
    }
}
