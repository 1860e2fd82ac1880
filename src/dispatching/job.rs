//! Per-run job bookkeeping.

use crate::models::Process;

/// Working copy of one process during a simulation run.
///
/// Created fresh for every run, so the caller's [`Process`] values are
/// never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobState {
    /// Position of the process in the caller's input list.
    pub index: usize,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still needed. Always in `[0, burst_time]`.
    pub remaining_time: i64,
    /// Effective priority (lower = more urgent).
    pub priority: i32,
    /// First time the job received the CPU.
    pub start_time: Option<i64>,
    /// Time the job finished.
    pub completion_time: Option<i64>,
}

impl JobState {
    /// Creates the initial state for the process at `index`.
    pub fn from_process(index: usize, process: &Process) -> Self {
        Self {
            index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            remaining_time: process.burst_time,
            priority: process.effective_priority(),
            start_time: None,
            completion_time: None,
        }
    }

    /// Whether the job has received all of its CPU time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// CPU time received so far.
    #[inline]
    pub fn executed_time(&self) -> i64 {
        self.burst_time - self.remaining_time
    }

    /// Gives the job `duration` units of CPU starting at `now`.
    ///
    /// Returns `true` if the job finished.
    pub(crate) fn execute(&mut self, now: i64, duration: i64) -> bool {
        debug_assert!(duration > 0 && duration <= self.remaining_time);
        self.start_time.get_or_insert(now);
        self.remaining_time -= duration;
        if self.remaining_time == 0 {
            self.completion_time = Some(now + duration);
        }
        self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_process() {
        let job = JobState::from_process(2, &Process::new("P1", 3, 7).with_priority(4));
        assert_eq!(job.index, 2);
        assert_eq!(job.remaining_time, 7);
        assert_eq!(job.priority, 4);
        assert_eq!(job.start_time, None);
        assert!(!job.is_finished());
    }

    #[test]
    fn test_execute_records_start_once() {
        let mut job = JobState::from_process(0, &Process::new("P1", 0, 5));
        assert!(!job.execute(0, 2));
        assert!(!job.execute(6, 1));
        assert_eq!(job.start_time, Some(0));
        assert_eq!(job.executed_time(), 3);
        assert_eq!(job.completion_time, None);

        assert!(job.execute(9, 2));
        assert_eq!(job.completion_time, Some(11));
        assert_eq!(job.remaining_time, 0);
    }
}
