//! Simulation errors.

use crate::validation::ValidationError;

/// Why a simulation could not produce a result.
///
/// Every variant is deterministic: re-running with the same input fails the
/// same way, so the only recovery is fixing the input.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// One or more processes are malformed.
    Validation(Vec<ValidationError>),
    /// The process set is empty.
    EmptyInput,
    /// Round Robin was given a non-positive time quantum.
    InvalidQuantum(i64),
    /// Metrics were requested for a process that never completed.
    ///
    /// Indicates a broken engine invariant rather than bad input.
    IncompleteSchedule {
        /// The process without a completion time.
        process_id: String,
    },
    /// An algorithm name could not be parsed.
    UnknownAlgorithm(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "invalid process input: ")?;
                for (n, e) in errors.iter().enumerate() {
                    if n > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::EmptyInput => write!(f, "no processes to schedule"),
            Self::InvalidQuantum(q) => write!(f, "time quantum must be positive, got {q}"),
            Self::IncompleteSchedule { process_id } => {
                write!(f, "process '{process_id}' has no completion time")
            }
            Self::UnknownAlgorithm(name) => write!(f, "unknown scheduling algorithm '{name}'"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<ValidationError> for SimulationError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }
}
