//! Schedule (timeline) model.
//!
//! A schedule is the CPU timeline produced by one simulation run: an
//! ordered, contiguous sequence of execution intervals. Time the CPU
//! spends with nothing to run is recorded as explicit [`IDLE_ID`]
//! intervals, never as a gap.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Process ID used for CPU-idle intervals.
pub const IDLE_ID: &str = "IDLE";

/// One contiguous stretch of CPU time given to a process (or left idle).
///
/// Covers the half-open interval `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Running process ID, or [`IDLE_ID`].
    pub process_id: String,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl ExecutionInterval {
    /// Creates an interval for a process.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Creates an idle interval.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self::new(IDLE_ID, start_time, end_time)
    }

    /// Whether the CPU was idle during this interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id == IDLE_ID
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// The interval as a `(process_id, start, end)` tuple.
    pub fn as_tuple(&self) -> (&str, i64, i64) {
        (&self.process_id, self.start_time, self.end_time)
    }
}

impl std::fmt::Display for ExecutionInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:[{},{})", self.process_id, self.start_time, self.end_time)
    }
}

/// A complete CPU timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Execution intervals in time order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval, merging it into the previous one when the same
    /// process (or idle) continues without a break.
    ///
    /// Zero-length intervals are dropped.
    pub fn push(&mut self, interval: ExecutionInterval) {
        if interval.end_time <= interval.start_time {
            return;
        }
        if let Some(last) = self.intervals.last_mut() {
            if last.process_id == interval.process_id && last.end_time == interval.start_time {
                last.end_time = interval.end_time;
                return;
            }
        }
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the schedule has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates over the intervals in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Start of the timeline (0 when empty).
    pub fn start_time(&self) -> i64 {
        self.intervals.first().map(|i| i.start_time).unwrap_or(0)
    }

    /// End of the timeline (0 when empty).
    pub fn end_time(&self) -> i64 {
        self.intervals.last().map(|i| i.end_time).unwrap_or(0)
    }

    /// Intervals belonging to a process.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total CPU time given to a process.
    pub fn executed_time(&self, process_id: &str) -> i64 {
        self.intervals_for(process_id)
            .iter()
            .map(|i| i.duration())
            .sum()
    }

    /// Completion time of a process (end of its last interval).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .rev()
            .find(|i| i.process_id == process_id)
            .map(|i| i.end_time)
    }

    /// Total busy (non-idle) time.
    pub fn busy_time(&self) -> i64 {
        self.intervals
            .iter()
            .filter(|i| !i.is_idle())
            .map(|i| i.duration())
            .sum()
    }

    /// Idle time falling inside `[from, to)`.
    pub fn idle_time_within(&self, from: i64, to: i64) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.is_idle())
            .map(|i| (i.end_time.min(to) - i.start_time.max(from)).max(0))
            .sum()
    }

    /// CPU time per process (idle excluded).
    pub fn executed_by_process(&self) -> HashMap<String, i64> {
        let mut executed: HashMap<String, i64> = HashMap::new();
        for i in self.intervals.iter().filter(|i| !i.is_idle()) {
            *executed.entry(i.process_id.clone()).or_insert(0) += i.duration();
        }
        executed
    }

    /// Number of times the CPU switches directly from one process to another.
    ///
    /// Switches through an idle gap are not counted.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| !w[0].is_idle() && !w[1].is_idle())
            .count()
    }

    /// Whether consecutive intervals touch with no overlap and no gap.
    pub fn is_contiguous(&self) -> bool {
        self.intervals.iter().all(|i| i.end_time > i.start_time)
            && self
                .intervals
                .windows(2)
                .all(|w| w[0].end_time == w[1].start_time)
    }

    /// The timeline as `(process_id, start, end)` tuples.
    pub fn as_tuples(&self) -> Vec<(&str, i64, i64)> {
        self.intervals.iter().map(|i| i.as_tuple()).collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (n, interval) in self.intervals.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(ExecutionInterval::new("A", 0, 3));
        s.push(ExecutionInterval::idle(3, 5));
        s.push(ExecutionInterval::new("B", 5, 7));
        s.push(ExecutionInterval::new("A", 7, 9));
        s
    }

    #[test]
    fn test_push_coalesces_same_process() {
        let mut s = Schedule::new();
        s.push(ExecutionInterval::new("A", 0, 2));
        s.push(ExecutionInterval::new("A", 2, 4));
        s.push(ExecutionInterval::new("B", 4, 5));
        assert_eq!(s.len(), 2);
        assert_eq!(s.intervals[0], ExecutionInterval::new("A", 0, 4));
    }

    #[test]
    fn test_push_drops_empty_interval() {
        let mut s = Schedule::new();
        s.push(ExecutionInterval::idle(0, 0));
        assert!(s.is_empty());
    }

    #[test]
    fn test_bounds_and_busy_time() {
        let s = sample_schedule();
        assert_eq!(s.start_time(), 0);
        assert_eq!(s.end_time(), 9);
        assert_eq!(s.busy_time(), 7);
        assert!(s.is_contiguous());
    }

    #[test]
    fn test_per_process_queries() {
        let s = sample_schedule();
        assert_eq!(s.intervals_for("A").len(), 2);
        assert_eq!(s.executed_time("A"), 5);
        assert_eq!(s.completion_time("A"), Some(9));
        assert_eq!(s.completion_time("B"), Some(7));
        assert_eq!(s.completion_time("Z"), None);
        assert_eq!(s.executed_by_process()["B"], 2);
        assert!(!s.executed_by_process().contains_key(IDLE_ID));
    }

    #[test]
    fn test_idle_time_within() {
        let s = sample_schedule();
        assert_eq!(s.idle_time_within(0, 9), 2);
        assert_eq!(s.idle_time_within(4, 9), 1);
        assert_eq!(s.idle_time_within(5, 9), 0);
    }

    #[test]
    fn test_context_switches() {
        let s = sample_schedule();
        // A→idle and idle→B don't count; B→A does.
        assert_eq!(s.context_switches(), 1);
    }

    #[test]
    fn test_not_contiguous() {
        let s = Schedule {
            intervals: vec![
                ExecutionInterval::new("A", 0, 2),
                ExecutionInterval::new("B", 3, 4),
            ],
        };
        assert!(!s.is_contiguous());
    }

    #[test]
    fn test_tuples_and_display() {
        let s = sample_schedule();
        assert_eq!(s.as_tuples()[1], ("IDLE", 3, 5));
        assert_eq!(s.to_string(), "A:[0,3) IDLE:[3,5) B:[5,7) A:[7,9)");
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.end_time(), 0);
        assert_eq!(s.busy_time(), 0);
        assert!(s.is_contiguous());
        assert_eq!(s.context_switches(), 0);
    }
}
