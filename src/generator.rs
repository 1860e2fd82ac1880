//! Random workload generation.
//!
//! Produces process sets for demos and stress runs. Every generated set
//! passes [`validate_processes`](crate::validation::validate_processes):
//! IDs are unique, arrivals are non-negative and bursts are positive.
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::generator::ProcessGenerator;
//! use u_cpu_sched::validation::validate_processes;
//!
//! let processes = ProcessGenerator::new(50)
//!     .with_burst_range(1, 5)
//!     .generate_seeded(42);
//! assert_eq!(processes.len(), 50);
//! assert!(validate_processes(&processes).is_ok());
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Random process set generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time. `None` = half the process count.
    pub max_arrival: Option<i64>,
    /// Inclusive burst time range.
    pub burst_range: (i64, i64),
    /// Inclusive priority range. `None` = no priorities.
    pub priority_range: Option<(i32, i32)>,
    /// Prefix for generated IDs (`P1`, `P2`, ...).
    pub id_prefix: String,
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self {
            count: 10,
            max_arrival: None,
            burst_range: (1, 10),
            priority_range: Some((1, 10)),
            id_prefix: "P".to_string(),
        }
    }
}

impl ProcessGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = Some(max_arrival);
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = Some((min, max));
        self
    }

    /// Generates processes without priorities.
    pub fn without_priority(mut self) -> Self {
        self.priority_range = None;
        self
    }

    /// Sets the ID prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Generates a process set from `rng`.
    ///
    /// Out-of-range settings are clamped so the output is always valid:
    /// arrivals start at 0, bursts at 1, and reversed ranges are swapped.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self
            .max_arrival
            .unwrap_or((self.count / 2) as i64)
            .max(0);
        let (burst_min, burst_max) = ordered(self.burst_range.0.max(1), self.burst_range.1.max(1));
        let priority_range = self.priority_range.map(|(a, b)| ordered(a, b));
        let prefix = if self.id_prefix.is_empty() {
            "P"
        } else {
            self.id_prefix.as_str()
        };

        (1..=self.count)
            .map(|n| {
                let arrival = rng.random_range(0..=max_arrival);
                let burst = rng.random_range(burst_min..=burst_max);
                let mut process = Process::new(format!("{prefix}{n}"), arrival, burst);
                if let Some((lo, hi)) = priority_range {
                    process.priority = Some(rng.random_range(lo..=hi));
                }
                process
            })
            .collect()
    }

    /// Generates a reproducible process set from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
