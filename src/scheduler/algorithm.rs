//! Scheduling algorithm selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SimulationError;

/// Quantum used when a Round Robin name is parsed without one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A scheduling discipline.
///
/// Round Robin carries its time quantum, which must be positive when the
/// algorithm is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, runs each job to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Priority, runs each job to completion.
    PriorityNonPreemptive,
    /// Priority, preempts on a more urgent arrival.
    PriorityPreemptive,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum CPU slice per turn.
        quantum: i64,
    },
}

impl Algorithm {
    /// Every algorithm, in declaration order, with the given Round Robin quantum.
    pub fn all(quantum: i64) -> Vec<Self> {
        vec![
            Self::Fcfs,
            Self::SjfNonPreemptive,
            Self::SjfPreemptive,
            Self::PriorityNonPreemptive,
            Self::PriorityPreemptive,
            Self::RoundRobin { quantum },
        ]
    }

    /// Short name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::SjfNonPreemptive => "sjf",
            Self::SjfPreemptive => "srtf",
            Self::PriorityNonPreemptive => "priority",
            Self::PriorityPreemptive => "priority-preemptive",
            Self::RoundRobin { .. } => "rr",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served (FCFS)",
            Self::SjfNonPreemptive => "Shortest Job First (Non-Preemptive)",
            Self::SjfPreemptive => "Shortest Job First (Preemptive)",
            Self::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::PriorityPreemptive | Self::RoundRobin { .. }
        )
    }

    /// Round Robin quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "rr:{quantum}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Parses `fcfs`, `sjf`, `srtf`, `priority`, `priority-preemptive`,
    /// `rr` or `rr:<quantum>` (case-insensitive, a few aliases accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let (name, arg) = match text.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (text.as_str(), None),
        };
        let unknown = || SimulationError::UnknownAlgorithm(s.trim().to_string());

        let algorithm = match name {
            "fcfs" | "fifo" => Self::Fcfs,
            "sjf" | "sjf-np" | "sjf-non-preemptive" => Self::SjfNonPreemptive,
            "srtf" | "sjf-p" | "sjf-preemptive" => Self::SjfPreemptive,
            "priority" | "priority-np" | "priority-non-preemptive" => Self::PriorityNonPreemptive,
            "priority-p" | "priority-preemptive" => Self::PriorityPreemptive,
            "rr" | "round-robin" => {
                let quantum = match arg {
                    Some(q) => q.parse::<i64>().map_err(|_| unknown())?,
                    None => DEFAULT_QUANTUM,
                };
                return Ok(Self::RoundRobin { quantum });
            }
            _ => return Err(unknown()),
        };

        if arg.is_some() {
            return Err(unknown());
        }
        Ok(algorithm)
    }
}
