//! Process model.
//!
//! A process is the unit of CPU work being scheduled: it becomes eligible
//! at its arrival time and needs `burst_time` units of CPU before it
//! completes.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//! The consumer decides what one unit means (a tick, a millisecond, ...).

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::validation::{self, ValidationError};

/// Priority assigned to processes that do not carry one.
///
/// Lower values are more urgent.
pub const DEFAULT_PRIORITY: i32 = 0;

/// A process to be scheduled.
///
/// Holds only the caller-supplied descriptors. Simulation bookkeeping
/// (remaining time, start/completion) lives in a per-run working copy,
/// so a `Process` is never mutated by the engine.
///
/// Two processes are equal when their IDs are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). `None` = [`DEFAULT_PRIORITY`].
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without validating it.
    ///
    /// Simulations validate their whole input set before running, so this
    /// constructor is fine for literals; use [`Process::try_new`] at input
    /// boundaries.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Creates a process and checks its own attributes.
    ///
    /// Duplicate IDs can only be detected across a set; see
    /// [`validate_processes`](crate::validation::validate_processes).
    pub fn try_new(
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        priority: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let process = Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority,
        };
        validation::validate_process(&process)?;
        Ok(process)
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for selection, falling back to [`DEFAULT_PRIORITY`].
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}

impl PartialEq for Process {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Process {}

impl Hash for Process {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Process {} (arrival: {}, burst: {}",
            self.id, self.arrival_time, self.burst_time
        )?;
        if let Some(priority) = self.priority {
            write!(f, ", priority: {priority}")?;
        }
        write!(f, ")")
    }
}

/// A process as entered in a table editor: every field is raw text.
///
/// [`ProcessRow::parse`] turns it into a validated [`Process`]. An empty
/// priority cell means "no priority".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRow {
    /// Process ID cell.
    pub id: String,
    /// Arrival time cell.
    pub arrival_time: String,
    /// Burst time cell.
    pub burst_time: String,
    /// Priority cell (may be blank).
    pub priority: String,
}

impl ProcessRow {
    /// Creates a row from its cells.
    pub fn new(
        id: impl Into<String>,
        arrival_time: impl Into<String>,
        burst_time: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_time: arrival_time.into(),
            burst_time: burst_time.into(),
            priority: priority.into(),
        }
    }

    /// Parses and validates the row.
    pub fn parse(&self) -> Result<Process, ValidationError> {
        let id = self.id.trim();
        let arrival_time = validation::parse_time("arrival time", id, &self.arrival_time)?;
        let burst_time = validation::parse_time("burst time", id, &self.burst_time)?;
        let priority = validation::parse_priority(id, &self.priority)?;
        Process::try_new(id, arrival_time, burst_time, priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 2, 8).with_priority(3);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 8);
        assert_eq!(p.priority, Some(3));
        assert_eq!(p.effective_priority(), 3);
    }

    #[test]
    fn test_default_priority() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, None);
        assert_eq!(p.effective_priority(), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_equality_by_id() {
        let a = Process::new("P1", 0, 5);
        let b = Process::new("P1", 9, 1).with_priority(7);
        let c = Process::new("P2", 0, 5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_try_new_rejects_bad_attributes() {
        let err = Process::try_new("P1", 0, 0, None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveBurst);

        let err = Process::try_new("P1", -1, 3, None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NegativeArrival);

        let err = Process::try_new("", 0, 3, None).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyId);

        assert!(Process::try_new("P1", 0, 3, Some(2)).is_ok());
    }

    #[test]
    fn test_display() {
        let p = Process::new("P1", 0, 8).with_priority(3);
        assert_eq!(p.to_string(), "Process P1 (arrival: 0, burst: 8, priority: 3)");
        let q = Process::new("P2", 1, 4);
        assert_eq!(q.to_string(), "Process P2 (arrival: 1, burst: 4)");
    }

    #[test]
    fn test_row_parse() {
        let p = ProcessRow::new(" P1 ", "0", " 8", "3").parse().unwrap();
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 0);
        assert_eq!(p.burst_time, 8);
        assert_eq!(p.priority, Some(3));

        let q = ProcessRow::new("P2", "1", "4", "  ").parse().unwrap();
        assert_eq!(q.priority, None);
    }

    #[test]
    fn test_row_parse_rejects_fractional_priority() {
        let err = ProcessRow::new("P1", "0", "8", "2.5").parse().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidPriority);
    }

    #[test]
    fn test_row_parse_rejects_malformed_time() {
        let err = ProcessRow::new("P1", "soon", "8", "").parse().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MalformedField);

        let err = ProcessRow::new("P1", "0", "2.5", "").parse().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MalformedField);
        assert!(err.message.contains("burst time"));

        let err = ProcessRow::new("P1", "0", "0", "").parse().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = Process::new("P1", 0, 8).with_priority(3);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "P1");
        assert_eq!(back.priority, Some(3));

        let no_priority: Process =
            serde_json::from_str(r#"{"id":"P2","arrival_time":1,"burst_time":4}"#).unwrap();
        assert_eq!(no_priority.priority, None);
    }
}
