//! Built-in selection rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | `ArrivalOrder` | arrival time | FCFS |
//! | `ShortestRemaining` | remaining CPU time | SJF, SRTF |
//! | `HighestPriority` | priority value | Priority (both modes) |
//!
//! # Score Convention
//! All rules return lower scores for jobs that should run first.

use super::{JobState, RuleScore, SelectionRule};

/// First come, first served.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, job: &JobState) -> RuleScore {
        job.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest remaining CPU time.
///
/// For a job that has not run yet this equals its burst time, so the same
/// rule drives both SJF and SRTF.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, job: &JobState) -> RuleScore {
        job.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Most urgent priority (smallest value) first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &JobState) -> RuleScore {
        RuleScore::from(job.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}
