//! Simulation entry point.
//!
//! # Pipeline
//!
//! 1. Reject empty input and non-positive Round Robin quanta.
//! 2. Validate every process (all problems reported together).
//! 3. Build a fresh per-run [`Workload`] and drive it with the algorithm.
//! 4. Derive per-process stats and aggregate metrics from the timeline.
//!
//! No state survives between runs, so one `Simulator` can be shared
//! freely across threads.

use log::debug;
use serde::{Deserialize, Serialize};

use super::metrics::{Metrics, ProcessStats, ProcessTiming};
use super::workload::Workload;
use super::{non_preemptive, preemptive, round_robin, Algorithm};
use crate::dispatching::rules::{ArrivalOrder, HighestPriority, ShortestRemaining};
use crate::error::SimulationError;
use crate::models::{Process, Schedule};
use crate::validation::validate_processes;

/// Input container for a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// CPU timeline.
    pub schedule: Schedule,
    /// Start/completion per process, in input order.
    pub timings: Vec<ProcessTiming>,
    /// Per-process statistics, in input order.
    pub stats: Vec<ProcessStats>,
    /// Aggregate statistics.
    pub metrics: Metrics,
}

impl SimulationResult {
    /// Stats for one process.
    pub fn stats_for(&self, process_id: &str) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.process_id == process_id)
    }

    /// Number of direct process-to-process switches in the timeline.
    pub fn context_switches(&self) -> usize {
        self.schedule.context_switches()
    }
}

/// Deterministic CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpu_sched::models::Process;
/// use u_cpu_sched::scheduler::{Algorithm, Simulator};
///
/// let processes = vec![
///     Process::new("A", 0, 5),
///     Process::new("B", 1, 3),
///     Process::new("C", 2, 8),
/// ];
///
/// let result = Simulator::new().run(&processes, Algorithm::Fcfs).unwrap();
/// assert_eq!(
///     result.schedule.as_tuples(),
///     vec![("A", 0, 5), ("B", 5, 8), ("C", 8, 16)]
/// );
/// assert_eq!(result.metrics.total_time, 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    leading_idle: bool,
}

impl Simulator {
    /// Creates a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timelines at t=0, recording `[0, first arrival)` as idle.
    ///
    /// Metrics are unaffected: idle time before the first arrival is
    /// outside the measured span.
    pub fn with_leading_idle(mut self, leading_idle: bool) -> Self {
        self.leading_idle = leading_idle;
        self
    }

    /// Runs one algorithm over a process set.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] if `processes` is empty.
    /// - [`SimulationError::InvalidQuantum`] for Round Robin with quantum ≤ 0.
    /// - [`SimulationError::Validation`] if any process is malformed.
    pub fn run(
        &self,
        processes: &[Process],
        algorithm: Algorithm,
    ) -> Result<SimulationResult, SimulationError> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyInput);
        }
        if let Some(quantum) = algorithm.quantum() {
            if quantum <= 0 {
                return Err(SimulationError::InvalidQuantum(quantum));
            }
        }
        validate_processes(processes)?;

        debug!("simulating {} over {} processes", algorithm, processes.len());

        let mut workload = Workload::new(processes, self.leading_idle);
        match algorithm {
            Algorithm::Fcfs => non_preemptive::run(&mut workload, ArrivalOrder),
            Algorithm::SjfNonPreemptive => non_preemptive::run(&mut workload, ShortestRemaining),
            Algorithm::SjfPreemptive => preemptive::run(&mut workload, ShortestRemaining),
            Algorithm::PriorityNonPreemptive => {
                non_preemptive::run(&mut workload, HighestPriority)
            }
            Algorithm::PriorityPreemptive => preemptive::run(&mut workload, HighestPriority),
            Algorithm::RoundRobin { quantum } => round_robin::run(&mut workload, quantum),
        }
        let (schedule, timings) = workload.finish();

        let stats = ProcessStats::collect(processes, &timings)?;
        let metrics = Metrics::from_stats(&stats, &schedule);

        debug!(
            "{} finished: {} intervals, span {}, avg wait {:.2}, utilization {:.2}%",
            algorithm,
            schedule.len(),
            metrics.total_time,
            metrics.average_waiting_time,
            metrics.cpu_utilization_percent
        );

        Ok(SimulationResult {
            algorithm,
            schedule,
            timings,
            stats,
            metrics,
        })
    }

    /// Runs a request.
    pub fn run_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        self.run(&request.processes, request.algorithm)
    }

    /// Runs several algorithms over the same processes.
    ///
    /// Results are returned in the order of `algorithms`; the first failure
    /// aborts the comparison.
    pub fn compare(
        &self,
        processes: &[Process],
        algorithms: &[Algorithm],
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        algorithms
            .iter()
            .map(|&algorithm| self.run(processes, algorithm))
            .collect()
    }
}
