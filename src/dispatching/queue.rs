//! Min-ordered ready queue.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{JobState, RuleScore, SelectionRule};

/// Total ordering key of a ready job: score, then arrival, then input index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadyKey {
    /// Rule score (lower first).
    pub score: RuleScore,
    /// Arrival time (earlier first).
    pub arrival_time: i64,
    /// Input index (earlier first).
    pub index: usize,
}

/// Ready set ordered by a [`SelectionRule`].
///
/// Keys are computed on [`push`](ReadyQueue::push), so a job whose state
/// changed (e.g., less remaining time after a partial run) must be pushed
/// again to be re-ranked.
#[derive(Debug, Clone)]
pub struct ReadyQueue<R: SelectionRule> {
    rule: R,
    heap: BinaryHeap<Reverse<ReadyKey>>,
}

impl<R: SelectionRule> ReadyQueue<R> {
    /// Creates an empty queue for a rule.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// The rule ranking this queue.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Adds a job using its current state.
    pub fn push(&mut self, job: &JobState) {
        self.heap.push(Reverse(self.rule.key(job)));
    }

    /// Removes and returns the index of the best job.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(key)| key.index)
    }

    /// Key of the best job without removing it.
    pub fn peek(&self) -> Option<&ReadyKey> {
        self.heap.peek().map(|Reverse(key)| key)
    }

    /// Number of ready jobs.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no job is ready.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{ArrivalOrder, HighestPriority, ShortestRemaining};
    use crate::models::Process;

    fn job(index: usize, arrival: i64, burst: i64, priority: i32) -> JobState {
        JobState::from_process(
            index,
            &Process::new(format!("P{index}"), arrival, burst).with_priority(priority),
        )
    }

    #[test]
    fn test_key_ordering() {
        let a = ReadyKey {
            score: 1,
            arrival_time: 5,
            index: 9,
        };
        let b = ReadyKey {
            score: 2,
            arrival_time: 0,
            index: 0,
        };
        let c = ReadyKey {
            score: 1,
            arrival_time: 5,
            index: 3,
        };
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn test_pop_order_shortest_remaining() {
        let mut q = ReadyQueue::new(ShortestRemaining);
        q.push(&job(0, 0, 8, 0));
        q.push(&job(1, 1, 4, 0));
        q.push(&job(2, 2, 9, 0));
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(2));
        assert!(q.pop().is_none());
    }

    #[test]
    fn test_ties_fall_back_to_arrival_then_index() {
        let mut q = ReadyQueue::new(HighestPriority);
        q.push(&job(2, 0, 3, 1));
        q.push(&job(1, 1, 3, 1));
        q.push(&job(0, 0, 3, 1));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(1));
    }

    #[test]
    fn test_repush_reranks() {
        let mut q = ReadyQueue::new(ShortestRemaining);
        let mut long = job(0, 0, 8, 0);
        q.push(&job(1, 0, 4, 0));
        long.execute(0, 5);
        q.push(&long);
        assert_eq!(q.peek().map(|k| k.index), Some(0));
    }

    #[test]
    fn test_arrival_order_rule() {
        let mut q = ReadyQueue::new(ArrivalOrder);
        q.push(&job(0, 3, 1, 0));
        q.push(&job(1, 1, 9, 0));
        assert_eq!(q.rule().name(), "FCFS");
        assert_eq!(q.pop(), Some(1));
    }
}
