//! Per-run simulation state.
//!
//! A [`Workload`] owns the clock, the job table and the timeline being
//! built. Algorithms drive it through three moves: admit arrivals, run a
//! job for some time, or idle until the next arrival.

use log::trace;

use super::metrics::ProcessTiming;
use crate::dispatching::JobState;
use crate::models::{ExecutionInterval, Process, Schedule};

pub(crate) struct Workload<'a> {
    processes: &'a [Process],
    jobs: Vec<JobState>,
    /// Job indices sorted by (arrival, index).
    arrival_order: Vec<usize>,
    /// Position in `arrival_order` of the first job not yet admitted.
    next_arrival: usize,
    finished: usize,
    clock: i64,
    schedule: Schedule,
}

impl<'a> Workload<'a> {
    /// Creates fresh state for `processes`.
    ///
    /// The clock starts at the earliest arrival, or at 0 when
    /// `leading_idle` is set (the first idle jump then records `[0, first)`).
    pub(crate) fn new(processes: &'a [Process], leading_idle: bool) -> Self {
        let jobs: Vec<JobState> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| JobState::from_process(i, p))
            .collect();

        let mut arrival_order: Vec<usize> = (0..jobs.len()).collect();
        arrival_order.sort_by_key(|&i| (jobs[i].arrival_time, i));

        let first_arrival = arrival_order
            .first()
            .map(|&i| jobs[i].arrival_time)
            .unwrap_or(0);
        let clock = if leading_idle { 0 } else { first_arrival };

        Self {
            processes,
            jobs,
            arrival_order,
            next_arrival: 0,
            finished: 0,
            clock,
            schedule: Schedule::new(),
        }
    }

    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.clock
    }

    #[inline]
    pub(crate) fn job(&self, index: usize) -> &JobState {
        &self.jobs[index]
    }

    pub(crate) fn all_finished(&self) -> bool {
        self.finished == self.jobs.len()
    }

    /// Arrival time of the next job not yet admitted.
    pub(crate) fn next_arrival_time(&self) -> Option<i64> {
        self.arrival_order
            .get(self.next_arrival)
            .map(|&i| self.jobs[i].arrival_time)
    }

    /// Hands every job that has arrived by now to `admit`, in arrival order.
    pub(crate) fn admit(&mut self, mut admit: impl FnMut(&JobState)) {
        while let Some(&i) = self.arrival_order.get(self.next_arrival) {
            if self.jobs[i].arrival_time > self.clock {
                break;
            }
            admit(&self.jobs[i]);
            self.next_arrival += 1;
        }
    }

    /// Jumps the clock to the next arrival, recording the gap as idle.
    ///
    /// Returns `false` if no arrivals remain.
    pub(crate) fn idle_until_next_arrival(&mut self) -> bool {
        let Some(next) = self.next_arrival_time() else {
            return false;
        };
        if next > self.clock {
            trace!("cpu idle [{}, {})", self.clock, next);
            self.schedule.push(ExecutionInterval::idle(self.clock, next));
            self.clock = next;
        }
        true
    }

    /// Runs job `index` for `duration` units and advances the clock.
    ///
    /// Returns `true` if the job finished.
    pub(crate) fn run(&mut self, index: usize, duration: i64) -> bool {
        let start = self.clock;
        let done = self.jobs[index].execute(start, duration);
        self.clock += duration;
        self.schedule.push(ExecutionInterval::new(
            self.processes[index].id.as_str(),
            start,
            self.clock,
        ));
        if done {
            self.finished += 1;
        }
        done
    }

    /// Consumes the state, returning the timeline and per-process timings
    /// in input order.
    pub(crate) fn finish(self) -> (Schedule, Vec<ProcessTiming>) {
        let timings = self
            .processes
            .iter()
            .zip(&self.jobs)
            .map(|(p, job)| ProcessTiming {
                process_id: p.id.clone(),
                start_time: job.start_time,
                completion_time: job.completion_time,
            })
            .collect();
        (self.schedule, timings)
    }
}
