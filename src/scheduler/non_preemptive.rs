//! Run-to-completion scheduling (FCFS, SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Admit every job that has arrived by the current time.
//! 2. If none is ready, idle until the next arrival.
//! 3. Otherwise pop the best job by the rule's total order and run it
//!    for its whole burst.
//!
//! # Complexity
//! O(n log n) for n processes.

use log::trace;

use super::workload::Workload;
use crate::dispatching::{ReadyQueue, SelectionRule};

pub(crate) fn run<R: SelectionRule>(workload: &mut Workload<'_>, rule: R) {
    let mut ready = ReadyQueue::new(rule);

    while !workload.all_finished() {
        workload.admit(|job| ready.push(job));

        match ready.pop() {
            Some(index) => {
                let burst = workload.job(index).remaining_time;
                trace!(
                    "{}: dispatch job {} at {} for {}",
                    ready.rule().name(),
                    index,
                    workload.now(),
                    burst
                );
                workload.run(index, burst);
            }
            None => {
                if !workload.idle_until_next_arrival() {
                    break;
                }
            }
        }
    }
}
