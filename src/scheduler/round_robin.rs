//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue. The front job runs for `min(remaining, quantum)`.
//! Jobs that arrived during the slice (or exactly at its end) are appended
//! first, in arrival order; then the sliced job is re-appended if it still
//! has work left. A job that finishes exactly on the quantum boundary is
//! not re-queued.

use log::trace;
use std::collections::VecDeque;

use super::workload::Workload;

pub(crate) fn run(workload: &mut Workload<'_>, quantum: i64) {
    let mut queue: VecDeque<usize> = VecDeque::new();
    workload.admit(|job| queue.push_back(job.index));

    while !workload.all_finished() {
        let Some(index) = queue.pop_front() else {
            if !workload.idle_until_next_arrival() {
                break;
            }
            workload.admit(|job| queue.push_back(job.index));
            continue;
        };

        let slice = workload.job(index).remaining_time.min(quantum);
        let finished = workload.run(index, slice);
        workload.admit(|job| queue.push_back(job.index));

        if !finished {
            trace!(
                "rr: job {} re-queued at {} with {} left",
                index,
                workload.now(),
                workload.job(index).remaining_time
            );
            queue.push_back(index);
        }
    }
}
