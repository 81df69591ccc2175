//! Binary min-heap priority queue over a contiguous buffer.
//!
//! Ordering comes from a [`Compare`] implementation: the value that compares
//! [`Less`](core::cmp::Ordering::Less) has higher priority and is dequeued
//! first. [`Natural`] uses the value's [`Ord`], [`Reverse`](crate::Reverse)
//! turns the queue into a max-heap.
//!
//! # Example
//!
//! ```
//! use nexus_classic::PriorityQueue;
//!
//! let mut pq: PriorityQueue<u32> = [5, 3, 8, 1].into_iter().collect();
//!
//! assert_eq!(pq.peek(), Ok(&1));
//! assert_eq!(pq.dequeue(), Ok(1));
//! assert_eq!(pq.dequeue(), Ok(3));
//! assert_eq!(pq.len(), 2);
//! ```

use core::fmt;

use crate::compare::{Compare, Natural};
use crate::{Error, Result};

/// Capacity reserved by [`PriorityQueue::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A min-heap priority queue.
///
/// `heap[0]` is always the highest-priority value. For every position `i`
/// with a child `c` in bounds, `heap[c]` never compares less than `heap[i]`.
pub struct PriorityQueue<T, C = Natural> {
    heap: Vec<T>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue ordered by [`Ord`] with
    /// [`DEFAULT_CAPACITY`] reserved.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue ordered by [`Ord`] with `capacity` reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }

    /// Builds a queue by enqueueing each value in turn.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`.
    #[inline]
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, cmp)
    }

    /// Creates an empty queue ordered by `cmp` with `capacity` reserved.
    #[inline]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of values the buffer holds before growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the highest-priority value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyCollection)
    }

    /// Adds a value. O(log n).
    pub fn enqueue(&mut self, value: T) {
        if self.heap.len() == self.heap.capacity() {
            tracing::trace!(
                len = self.heap.len(),
                capacity = self.heap.capacity(),
                "priority queue buffer full, growing"
            );
        }

        let pos = self.heap.len();
        self.heap.push(value);
        self.sift_up(pos);
    }

    /// Removes and returns the highest-priority value. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyCollection);
        }
        Ok(self.take_root())
    }

    /// Enqueues `value`, then dequeues the highest-priority value.
    ///
    /// Leaves the heap exactly as [`enqueue`](Self::enqueue) followed by
    /// [`dequeue`](Self::dequeue) would. Never fails, since the queue holds at
    /// least `value` when the root is taken.
    pub fn enqueue_dequeue(&mut self, value: T) -> T {
        self.enqueue(value);
        self.take_root()
    }

    /// Removes every value, keeping the buffer.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.heap.len(), "clearing priority queue");
        self.heap.clear();
    }

    /// Returns an iterator over the values in heap order.
    ///
    /// Only the first item is guaranteed to be the highest-priority value.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Consumes the queue, returning its values from highest to lowest
    /// priority.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(value) = self.dequeue() {
            sorted.push(value);
        }
        sorted
    }

    // ========================================================================
    // Internal
    // ========================================================================

    // Moves the last value into the root and sifts it down. The heap must be
    // non-empty.
    fn take_root(&mut self) -> T {
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        root
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.cmp.less(&self.heap[pos], &self.heap[parent]) {
                break;
            }
            self.heap.swap(pos, parent);
            pos = parent;
        }
    }

    // Left is checked first and right must be strictly smaller to displace
    // it, so the left child wins ties.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.cmp.less(&self.heap[left], &self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.cmp.less(&self.heap[right], &self.heap[smallest]) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }

            self.heap.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = Self::with_comparator(C::default());
        pq.extend(iter);
        pq
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Reverse;
    use core::cmp::Ordering;

    fn assert_heap<T, C: Compare<T>>(pq: &PriorityQueue<T, C>) {
        let heap = &pq.heap;
        for child in 1..heap.len() {
            let parent = (child - 1) / 2;
            assert!(
                !pq.cmp.less(&heap[child], &heap[parent]),
                "heap order violated at {child}"
            );
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Task {
        priority: u32,
        id: u32,
    }

    fn by_priority(a: &Task, b: &Task) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    #[test]
    fn new_is_empty() {
        let pq: PriorityQueue<u64> = PriorityQueue::new();
        assert!(pq.is_empty());
        assert_eq!(pq.len(), 0);
        assert_eq!(pq.capacity(), DEFAULT_CAPACITY);
        assert_eq!(pq.peek(), Err(Error::EmptyCollection));
    }

    #[test]
    fn enqueue_dequeue_single() {
        let mut pq = PriorityQueue::new();
        pq.enqueue(7u64);

        assert_eq!(pq.peek(), Ok(&7));
        assert_eq!(pq.dequeue(), Ok(7));
        assert_eq!(pq.dequeue(), Err(Error::EmptyCollection));
        assert!(pq.is_empty());
    }

    #[test]
    fn min_heap_order() {
        let mut pq = PriorityQueue::new();
        for value in [50u64, 10, 30, 20, 40] {
            pq.enqueue(value);
            assert_heap(&pq);
        }

        assert_eq!(pq.dequeue(), Ok(10));
        assert_eq!(pq.dequeue(), Ok(20));
        assert_eq!(pq.dequeue(), Ok(30));
        assert_eq!(pq.dequeue(), Ok(40));
        assert_eq!(pq.dequeue(), Ok(50));
        assert!(pq.is_empty());
    }

    #[test]
    fn sorted_extraction() {
        let pq = PriorityQueue::from_values([5u64, 3, 8, 1]);
        assert_eq!(pq.len(), 4);
        assert_eq!(pq.into_sorted_vec(), vec![1, 3, 5, 8]);
    }

    #[test]
    fn duplicates_are_kept() {
        let pq: PriorityQueue<u64> = [2, 1, 2, 1].into_iter().collect();
        assert_eq!(pq.into_sorted_vec(), vec![1, 1, 2, 2]);
    }

    #[test]
    fn reverse_is_max_heap() {
        let mut pq: PriorityQueue<u64, Reverse> = PriorityQueue::with_comparator(Reverse);
        pq.extend([4u64, 9, 1, 7]);

        assert_eq!(pq.peek(), Ok(&9));
        assert_eq!(pq.into_sorted_vec(), vec![9, 7, 4, 1]);
    }

    #[test]
    fn closure_comparator() {
        let mut pq = PriorityQueue::with_capacity_and_comparator(4, by_priority);
        pq.enqueue(Task { priority: 3, id: 0 });
        pq.enqueue(Task { priority: 1, id: 1 });
        pq.enqueue(Task { priority: 2, id: 2 });

        let ids: Vec<u32> = pq.into_sorted_vec().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn left_child_wins_ties() {
        let mut pq = PriorityQueue::with_comparator(by_priority);
        pq.enqueue(Task { priority: 0, id: 0 });
        pq.enqueue(Task { priority: 5, id: 1 });
        pq.enqueue(Task { priority: 5, id: 2 });

        assert_eq!(pq.dequeue().map(|t| t.id), Ok(0));
        // Last (id 2) moved to the root, left child id 1 ties and stays put.
        assert_eq!(pq.peek().map(|t| t.id), Ok(2));

        let mut pq = PriorityQueue::with_comparator(by_priority);
        pq.enqueue(Task { priority: 0, id: 0 });
        pq.enqueue(Task { priority: 5, id: 1 });
        pq.enqueue(Task { priority: 5, id: 2 });
        pq.enqueue(Task { priority: 9, id: 3 });

        // id 3 moves to the root, both children tie and the left is taken.
        assert_eq!(pq.dequeue().map(|t| t.id), Ok(0));
        assert_eq!(pq.peek().map(|t| t.id), Ok(1));
        assert_heap(&pq);
    }

    #[test]
    fn enqueue_dequeue_returns_highest_priority() {
        let mut pq: PriorityQueue<u64> = [3, 5].into_iter().collect();

        assert_eq!(pq.enqueue_dequeue(1), 1);
        assert_eq!(pq.len(), 2);

        assert_eq!(pq.enqueue_dequeue(4), 3);
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.into_sorted_vec(), vec![4, 5]);

        let mut empty: PriorityQueue<u64> = PriorityQueue::new();
        assert_eq!(empty.enqueue_dequeue(9), 9);
        assert!(empty.is_empty());
    }

    #[test]
    fn enqueue_dequeue_matches_enqueue_then_dequeue() {
        fn drain_ids(pq: PriorityQueue<Task, fn(&Task, &Task) -> Ordering>) -> Vec<u32> {
            pq.into_sorted_vec().iter().map(|t| t.id).collect()
        }

        let cmp: fn(&Task, &Task) -> Ordering = by_priority;
        let incoming = [0, 1, 2, 5];

        for len in 0..6u32 {
            for &priority in &incoming {
                let queued = (0..len).map(|id| Task {
                    priority: 1 + id % 2 * (len % 3),
                    id,
                });
                let value = Task { priority, id: 99 };

                let mut combined = PriorityQueue::with_comparator(cmp);
                combined.extend(queued.clone());
                let mut separate = PriorityQueue::with_comparator(cmp);
                separate.extend(queued);

                let got = combined.enqueue_dequeue(value);
                separate.enqueue(value);
                assert_eq!(Ok(got), separate.dequeue());
                assert_heap(&combined);
                assert_eq!(drain_ids(combined), drain_ids(separate));
            }
        }

        // Equal priorities: the drain order after the call is the one a plain
        // enqueue and dequeue leaves behind.
        let mut pq = PriorityQueue::with_comparator(cmp);
        for id in 0..3 {
            pq.enqueue(Task { priority: 1, id });
        }
        assert_eq!(pq.enqueue_dequeue(Task { priority: 0, id: 99 }).id, 99);
        assert_eq!(drain_ids(pq), vec![1, 2, 0]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut pq: PriorityQueue<u64> = (0..40).collect();
        let capacity = pq.capacity();
        assert!(capacity >= 40);

        pq.clear();
        assert!(pq.is_empty());
        assert_eq!(pq.capacity(), capacity);
        assert_eq!(pq.dequeue(), Err(Error::EmptyCollection));
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut pq = PriorityQueue::with_capacity(1);
        for value in (0..100u64).rev() {
            pq.enqueue(value);
        }
        assert_eq!(pq.len(), 100);
        assert!(pq.capacity() >= 100);
        assert_heap(&pq);
        assert_eq!(pq.peek(), Ok(&0));
    }

    #[test]
    fn stress_enqueue_dequeue() {
        let mut pq = PriorityQueue::with_capacity(1024);

        for i in 0..1000u32 {
            pq.enqueue((i * 7 + 13) % 1000);
        }
        assert_heap(&pq);

        let mut last = 0;
        while let Ok(priority) = pq.dequeue() {
            assert!(priority >= last, "heap order violated");
            last = priority;
        }
    }
}
