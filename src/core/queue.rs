use std::cmp::Reverse;
use std::collections::VecDeque;

use keyed_priority_queue::KeyedPriorityQueue;

use super::process::{ProcIdx, Process};

/// A bounded queue refused to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueError {
    pub capacity: usize,
}

/// Min-priority-queue over batch indices, ordered by an injected key
/// function. One heap type serves every comparator role; the key type
/// supplies a deterministic total order so extraction on ties is
/// reproducible.
///
/// Backed by a binary heap: O(log n) insert/extract, O(1) peek.
pub struct OrderingQueue<K: Ord + Copy> {
    // KeyedPriorityQueue is a max-heap; Reverse flips it into a min-heap.
    heap: KeyedPriorityQueue<ProcIdx, Reverse<K>>,
    key_of: fn(&Process) -> K,
    capacity: usize,
}

impl<K: Ord + Copy> OrderingQueue<K> {
    pub fn with_capacity(capacity: usize, key_of: fn(&Process) -> K) -> Self {
        Self {
            heap: KeyedPriorityQueue::new(),
            key_of,
            capacity,
        }
    }

    /// Keys the process at insertion time. Re-inserting after a partial
    /// grant therefore re-evaluates the comparator (remaining time moves).
    pub fn insert(&mut self, idx: ProcIdx, p: &Process) -> Result<(), QueueError> {
        if self.heap.len() >= self.capacity {
            return Err(QueueError {
                capacity: self.capacity,
            });
        }
        self.heap.push(idx, Reverse((self.key_of)(p)));
        Ok(())
    }

    pub fn peek_min(&self) -> Option<ProcIdx> {
        self.heap.peek().map(|(idx, _)| *idx)
    }

    pub fn extract_min(&mut self) -> Option<ProcIdx> {
        self.heap.pop().map(|(idx, _)| idx)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Plain first-in-first-out ready list, bounded like the heap.
pub struct FifoQueue {
    items: VecDeque<ProcIdx>,
    capacity: usize,
}

impl FifoQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn enqueue(&mut self, idx: ProcIdx) -> Result<(), QueueError> {
        if self.items.len() >= self.capacity {
            return Err(QueueError {
                capacity: self.capacity,
            });
        }
        self.items.push_back(idx);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<ProcIdx> {
        self.items.pop_front()
    }

    pub fn peek_front(&self) -> Option<ProcIdx> {
        self.items.front().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::process::{arrival_key, burst_key};

    fn batch() -> Vec<Process> {
        vec![
            Process::new(1, 4, 6, 0),
            Process::new(2, 0, 6, 0),
            Process::new(3, 2, 1, 0),
        ]
    }

    #[test]
    fn extracts_in_key_order() {
        let procs = batch();
        let mut q = OrderingQueue::with_capacity(procs.len(), arrival_key);
        for (idx, p) in procs.iter().enumerate() {
            q.insert(idx, p).unwrap();
        }

        assert_eq!(q.peek_min(), Some(1));
        assert_eq!(q.extract_min(), Some(1)); // arrival 0
        assert_eq!(q.extract_min(), Some(2)); // arrival 2
        assert_eq!(q.extract_min(), Some(0)); // arrival 4
        assert_eq!(q.extract_min(), None);
    }

    #[test]
    fn equal_primary_keys_fall_back_to_arrival_then_id() {
        // Same burst everywhere; extraction must follow arrival, then id.
        let procs = vec![
            Process::new(9, 5, 3, 0),
            Process::new(4, 5, 3, 0),
            Process::new(7, 1, 3, 0),
        ];
        let mut q = OrderingQueue::with_capacity(procs.len(), burst_key);
        for (idx, p) in procs.iter().enumerate() {
            q.insert(idx, p).unwrap();
        }

        assert_eq!(q.extract_min(), Some(2)); // arrival 1
        assert_eq!(q.extract_min(), Some(1)); // arrival 5, id 4
        assert_eq!(q.extract_min(), Some(0)); // arrival 5, id 9
    }

    #[test]
    fn heap_refuses_growth_past_capacity() {
        let procs = batch();
        let mut q = OrderingQueue::with_capacity(2, arrival_key);
        q.insert(0, &procs[0]).unwrap();
        q.insert(1, &procs[1]).unwrap();
        assert_eq!(q.insert(2, &procs[2]), Err(QueueError { capacity: 2 }));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn fifo_preserves_admission_order() {
        let mut q = FifoQueue::with_capacity(3);
        q.enqueue(2).unwrap();
        q.enqueue(0).unwrap();
        q.enqueue(1).unwrap();

        assert_eq!(q.peek_front(), Some(2));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(0));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn fifo_refuses_growth_past_capacity() {
        let mut q = FifoQueue::with_capacity(1);
        q.enqueue(0).unwrap();
        assert_eq!(q.enqueue(1), Err(QueueError { capacity: 1 }));
    }
}
