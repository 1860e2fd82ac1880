//! Deterministic CPU scheduling simulator.
//!
//! Given a set of processes (arrival time, burst time, optional priority),
//! computes the execution timeline and performance metrics of a classical
//! single-CPU scheduling discipline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessRow`, `ExecutionInterval`, `Schedule`
//! - **`validation`**: Input checks (empty/duplicate IDs, negative arrivals, bad bursts)
//! - **`dispatching`**: Selection rules and the min-ordered ready queue
//! - **`scheduler`**: FCFS, SJF, SRTF, Priority, Round Robin, and `Metrics`
//! - **`generator`**: Random process sets for demos and stress runs
//! - **`error`**: `SimulationError`
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::models::Process;
//! use u_cpu_sched::scheduler::{simulate, Algorithm};
//!
//! let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
//! let result = simulate(&processes, Algorithm::RoundRobin { quantum: 2 }).unwrap();
//!
//! assert_eq!(result.schedule.to_string(), "A:[0,2) B:[2,4) A:[4,6) B:[6,7) A:[7,8)");
//! assert_eq!(result.metrics.average_waiting_time, 3.0);
//! ```
//!
//! # Time
//!
//! Time is discrete: arrival and burst times are `i64` units, and text
//! input such as `"2.5"` is rejected as malformed. A process set whose
//! latest arrival plus total burst does not fit in `i64` fails validation.
//!
//! Timelines start at the earliest arrival. The classic presentation keeps
//! the CPU idle from time 0 until then; enable it with
//! [`Simulator::with_leading_idle`]. Metrics are the same in both modes.
//!
//! ```
//! use u_cpu_sched::{Algorithm, Process, Simulator};
//!
//! let processes = vec![Process::new("A", 3, 2)];
//! let result = Simulator::new()
//!     .with_leading_idle(true)
//!     .run(&processes, Algorithm::Fcfs)
//!     .unwrap();
//! assert_eq!(result.schedule.to_string(), "IDLE:[0,3) A:[3,5)");
//! assert_eq!(result.metrics.cpu_utilization_percent, 100.0);
//! ```
//!
//! # Logging
//!
//! Runs emit `debug` records through the `log` facade (and `trace` for
//! preemptions, idle jumps and re-queues). No logger is installed here.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
pub use models::{ExecutionInterval, Process, Schedule};
pub use scheduler::{simulate, Algorithm, Metrics, SimulationResult, Simulator};
