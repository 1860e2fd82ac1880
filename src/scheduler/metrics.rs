//! Simulation performance metrics.
//!
//! Computes per-process and aggregate statistics from a finished
//! timeline and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | CPU utilization | (span - idle in span) / span × 100 |
//! | Total time (span) | last completion - earliest arrival |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SimulationError;
use crate::models::{Process, Schedule};

/// Start and completion time assigned to one process by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTiming {
    /// Process ID.
    pub process_id: String,
    /// First time the process received the CPU.
    pub start_time: Option<i64>,
    /// Time the process finished.
    pub completion_time: Option<i64>,
}

/// Per-process results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process ID.
    pub process_id: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// First time the process received the CPU.
    pub start_time: i64,
    /// Time the process finished.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first run.
    pub response_time: i64,
}

impl ProcessStats {
    /// Builds stats for every process, in input order.
    ///
    /// Fails with [`SimulationError::IncompleteSchedule`] if a process has
    /// no timing or no completion time.
    pub fn collect(
        processes: &[Process],
        timings: &[ProcessTiming],
    ) -> Result<Vec<Self>, SimulationError> {
        let by_id: HashMap<&str, &ProcessTiming> = timings
            .iter()
            .map(|t| (t.process_id.as_str(), t))
            .collect();

        processes
            .iter()
            .map(|p| {
                let incomplete = || SimulationError::IncompleteSchedule {
                    process_id: p.id.clone(),
                };
                let timing = by_id.get(p.id.as_str()).ok_or_else(incomplete)?;
                let completion = timing.completion_time.ok_or_else(incomplete)?;
                let start = timing.start_time.ok_or_else(incomplete)?;

                let turnaround = completion - p.arrival_time;
                Ok(Self {
                    process_id: p.id.clone(),
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    start_time: start,
                    completion_time: completion,
                    waiting_time: turnaround - p.burst_time,
                    turnaround_time: turnaround,
                    response_time: start - p.arrival_time,
                })
            })
            .collect()
    }
}

/// Aggregate performance of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Share of the span the CPU was busy (0..=100).
    pub cpu_utilization_percent: f64,
    /// Number of processes.
    pub total_processes: usize,
    /// Span: last completion minus earliest arrival.
    pub total_time: i64,
}

impl Metrics {
    /// Computes metrics from processes, their timeline and their timings.
    ///
    /// # Arguments
    /// * `processes` - The input processes (for arrival and burst times).
    /// * `schedule` - The finished timeline (for idle time).
    /// * `timings` - Start/completion per process.
    pub fn calculate(
        processes: &[Process],
        schedule: &Schedule,
        timings: &[ProcessTiming],
    ) -> Result<Self, SimulationError> {
        let stats = ProcessStats::collect(processes, timings)?;
        Ok(Self::from_stats(&stats, schedule))
    }

    /// Aggregates already collected per-process stats.
    pub fn from_stats(stats: &[ProcessStats], schedule: &Schedule) -> Self {
        if stats.is_empty() {
            return Self {
                average_waiting_time: 0.0,
                average_turnaround_time: 0.0,
                cpu_utilization_percent: 0.0,
                total_processes: 0,
                total_time: 0,
            };
        }

        let count = stats.len() as f64;
        // Summed in f64: per-process times fit in i64, their totals may not.
        let total_waiting: f64 = stats.iter().map(|s| s.waiting_time as f64).sum();
        let total_turnaround: f64 = stats.iter().map(|s| s.turnaround_time as f64).sum();

        let first_arrival = stats.iter().map(|s| s.arrival_time).min().unwrap_or(0);
        let last_completion = stats.iter().map(|s| s.completion_time).max().unwrap_or(0);
        let span = last_completion - first_arrival;

        // Idle time before the first arrival lies outside the span.
        let idle = schedule.idle_time_within(first_arrival, last_completion);
        let cpu_utilization_percent = if span > 0 {
            (span - idle) as f64 / span as f64 * 100.0
        } else {
            0.0
        };

        Self {
            average_waiting_time: total_waiting / count,
            average_turnaround_time: total_turnaround / count,
            cpu_utilization_percent,
            total_processes: stats.len(),
            total_time: span,
        }
    }
}
