//! Scheduling algorithms and metrics.
//!
//! Single CPU, single ready queue, integer time. Each algorithm turns a
//! process set into a contiguous timeline; idle time is explicit.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | arrival |
//! | SJF | no | burst |
//! | SRTF | on arrival | remaining time |
//! | Priority | no | priority value |
//! | Priority (preemptive) | on arrival | priority value |
//! | Round Robin | quantum expiry | FIFO |
//!
//! Ties always fall back to arrival time, then input order.
//!
//! # Metrics
//!
//! [`Metrics`] reports mean waiting and turnaround time, CPU utilization
//! over the span from first arrival to last completion, and the span itself.

mod algorithm;
mod metrics;
mod non_preemptive;
mod preemptive;
mod round_robin;
mod simulator;
mod workload;

pub use algorithm::{Algorithm, DEFAULT_QUANTUM};
pub use metrics::{Metrics, ProcessStats, ProcessTiming};
pub use simulator::{SimulationRequest, SimulationResult, Simulator};

use crate::error::SimulationError;
use crate::models::Process;

/// Runs `algorithm` over `processes` with default settings.
///
/// ```
/// use u_cpu_sched::models::Process;
/// use u_cpu_sched::scheduler::{simulate, Algorithm};
///
/// let processes = vec![Process::new("A", 0, 8), Process::new("B", 1, 4)];
/// let result = simulate(&processes, Algorithm::SjfPreemptive).unwrap();
/// assert_eq!(result.schedule.to_string(), "A:[0,1) B:[1,5) A:[5,12)");
/// ```
pub fn simulate(
    processes: &[Process],
    algorithm: Algorithm,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new().run(processes, algorithm)
}

/// First-Come, First-Served.
pub fn fcfs(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, Algorithm::Fcfs)
}

/// Shortest Job First (non-preemptive).
pub fn sjf_non_preemptive(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, Algorithm::SjfNonPreemptive)
}

/// Shortest Remaining Time First.
pub fn sjf_preemptive(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, Algorithm::SjfPreemptive)
}

/// Priority (non-preemptive).
pub fn priority_non_preemptive(
    processes: &[Process],
) -> Result<SimulationResult, SimulationError> {
    simulate(processes, Algorithm::PriorityNonPreemptive)
}

/// Priority (preemptive).
pub fn priority_preemptive(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    simulate(processes, Algorithm::PriorityPreemptive)
}

/// Round Robin with the given quantum.
///
/// ```
/// use u_cpu_sched::models::Process;
/// use u_cpu_sched::scheduler::round_robin;
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let result = round_robin(&processes, 2).unwrap();
/// assert_eq!(result.schedule.len(), 5);
/// assert!(round_robin(&processes, 0).is_err());
/// ```
pub fn round_robin(
    processes: &[Process],
    quantum: i64,
) -> Result<SimulationResult, SimulationError> {
    simulate(processes, Algorithm::RoundRobin { quantum })
}
