//! Event-driven preemptive scheduling (SRTF, Preemptive Priority).
//!
//! # Algorithm
//!
//! The clock only stops at arrival and completion instants:
//!
//! 1. Admit arrivals and pop the best ready job.
//! 2. Run it until it finishes or the next arrival, whichever is first.
//! 3. If it did not finish, push it back with its reduced remaining time.
//!
//! A running job always ranks at least as high as the jobs that were
//! ready when it was picked, so it is only displaced by an arrival whose
//! score is strictly better; equal scores lose on arrival time. A job that
//! keeps the CPU across an arrival continues in the same interval.
//!
//! # Complexity
//! O(n log n): every step consumes an arrival or a completion.

use log::trace;

use super::workload::Workload;
use crate::dispatching::{ReadyQueue, SelectionRule};

pub(crate) fn run<R: SelectionRule>(workload: &mut Workload<'_>, rule: R) {
    let mut ready = ReadyQueue::new(rule);
    let mut previous: Option<usize> = None;

    while !workload.all_finished() {
        workload.admit(|job| ready.push(job));

        let Some(index) = ready.pop() else {
            if !workload.idle_until_next_arrival() {
                break;
            }
            continue;
        };

        if let Some(prev) = previous {
            if prev != index && !workload.job(prev).is_finished() {
                trace!(
                    "{}: job {} preempted by job {} at {}",
                    ready.rule().name(),
                    prev,
                    index,
                    workload.now()
                );
            }
        }

        let now = workload.now();
        let remaining = workload.job(index).remaining_time;
        let slice = match workload.next_arrival_time() {
            Some(arrival) if arrival < now + remaining => arrival - now,
            _ => remaining,
        };

        if !workload.run(index, slice) {
            ready.push(workload.job(index));
        }
        previous = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestPriority, ShortestRemaining};
    use crate::models::{Process, Schedule};

    fn schedule_with<R: SelectionRule>(processes: &[Process], rule: R) -> Schedule {
        let mut workload = Workload::new(processes, false);
        run(&mut workload, rule);
        assert!(workload.all_finished());
        workload.finish().0
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let ps = vec![Process::new("A", 0, 8), Process::new("B", 1, 4)];
        let s = schedule_with(&ps, ShortestRemaining);
        assert_eq!(s.as_tuples(), vec![("A", 0, 1), ("B", 1, 5), ("A", 5, 12)]);
    }

    #[test]
    fn test_srtf_textbook() {
        let ps = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ];
        let s = schedule_with(&ps, ShortestRemaining);
        assert_eq!(
            s.as_tuples(),
            vec![
                ("P1", 0, 1),
                ("P2", 1, 5),
                ("P4", 5, 10),
                ("P1", 10, 17),
                ("P3", 17, 26)
            ]
        );
    }

    #[test]
    fn test_srtf_equal_remaining_does_not_preempt() {
        let ps = vec![Process::new("A", 0, 4), Process::new("B", 2, 2)];
        let s = schedule_with(&ps, ShortestRemaining);
        assert_eq!(s.as_tuples(), vec![("A", 0, 4), ("B", 4, 6)]);
    }

    #[test]
    fn test_priority_preempts_on_more_urgent_arrival() {
        let ps = vec![
            Process::new("P1", 0, 8).with_priority(3),
            Process::new("P2", 2, 4).with_priority(1),
            Process::new("P3", 4, 6).with_priority(2),
        ];
        let s = schedule_with(&ps, HighestPriority);
        assert_eq!(
            s.as_tuples(),
            vec![("P1", 0, 2), ("P2", 2, 6), ("P3", 6, 12), ("P1", 12, 18)]
        );
    }

    #[test]
    fn test_priority_equal_does_not_preempt() {
        let ps = vec![
            Process::new("A", 0, 5).with_priority(1),
            Process::new("B", 1, 2).with_priority(1),
        ];
        let s = schedule_with(&ps, HighestPriority);
        assert_eq!(s.as_tuples(), vec![("A", 0, 5), ("B", 5, 7)]);
    }

    #[test]
    fn test_idle_between_arrivals() {
        let ps = vec![Process::new("A", 0, 2), Process::new("B", 6, 3)];
        let s = schedule_with(&ps, ShortestRemaining);
        assert_eq!(s.as_tuples(), vec![("A", 0, 2), ("IDLE", 2, 6), ("B", 6, 9)]);
    }

    #[test]
    fn test_many_processes_stay_event_driven() {
        let ps: Vec<Process> = (0..2000)
            .map(|i| Process::new(format!("P{i}"), i * 3, 1_000 - (i % 1_000)))
            .collect();
        let s = schedule_with(&ps, ShortestRemaining);
        assert!(s.is_contiguous());
        assert_eq!(s.busy_time(), ps.iter().map(|p| p.burst_time).sum::<i64>());
    }
}
