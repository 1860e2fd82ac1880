//! Selection rules and the ready queue.
//!
//! Every algorithm picks the next process to run from a ready set. The
//! choice is a total order over [`ReadyKey`]s:
//!
//! 1. the rule's score (lower runs first),
//! 2. arrival time (earlier runs first),
//! 3. input index (earlier in the caller's list runs first).
//!
//! Because the input index is unique, two ready processes never compare
//! equal and every run is deterministic.
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::dispatching::{JobState, ReadyQueue};
//! use u_cpu_sched::dispatching::rules::ShortestRemaining;
//! use u_cpu_sched::models::Process;
//!
//! let long = JobState::from_process(0, &Process::new("A", 0, 8));
//! let short = JobState::from_process(1, &Process::new("B", 1, 4));
//!
//! let mut ready = ReadyQueue::new(ShortestRemaining);
//! ready.push(&long);
//! ready.push(&short);
//! assert_eq!(ready.pop(), Some(1));
//! ```

mod job;
mod queue;
pub mod rules;

pub use job::JobState;
pub use queue::{ReadyKey, ReadyQueue};

use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// **Lower score = selected first.**
pub type RuleScore = i64;

/// A policy that scores ready processes.
///
/// Ties on the score are resolved by arrival time and then input index,
/// so rules only describe their primary criterion.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SRT").
    fn name(&self) -> &'static str;

    /// Scores a job in its current state.
    fn evaluate(&self, job: &JobState) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Full ordering key for a job.
    fn key(&self, job: &JobState) -> ReadyKey {
        ReadyKey {
            score: self.evaluate(job),
            arrival_time: job.arrival_time,
            index: job.index,
        }
    }
}
