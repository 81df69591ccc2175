//! FIFO queue built on [`DoublyLinkedList`].
//!
//! Values enter at the tail and leave from the head.

use core::fmt;

use crate::doubly::{self, DoublyLinkedList, SlabDoublyStorage};
use crate::{Error, Result};

/// A first-in, first-out queue.
///
/// # Example
///
/// ```
/// use nexus_classic::Queue;
///
/// let mut queue = Queue::with_value("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.peek(), Ok(&"first"));
/// assert_eq!(queue.dequeue(), Ok("first"));
/// assert_eq!(queue.dequeue(), Ok("second"));
/// assert!(queue.dequeue().is_err());
/// ```
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Creates a queue holding `value`.
    #[inline]
    pub fn with_value(value: T) -> Self {
        let mut queue = Self::new();
        queue.enqueue(value);
        queue
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Appends a value at the tail.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.list.add_last(value);
    }

    /// Removes and returns the value at the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.list.remove_first()
    }

    /// Returns the value at the head without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.list.front().ok_or(Error::EmptyCollection)
    }

    /// Returns `true` if the queue holds `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.find(value).is_some()
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the values in dequeue order.
    #[inline]
    pub fn iter(&self) -> doubly::Iter<'_, T, SlabDoublyStorage<T>, usize> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders head to tail, in the same format as [`DoublyLinkedList`].
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_value_enqueues_it() {
        let queue = Queue::with_value(42);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Ok(&42));
    }

    #[test]
    fn dequeue_in_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Ok("c"));
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: Queue<u64> = Queue::new();
        assert_eq!(queue.dequeue(), Err(Error::EmptyCollection));
        assert_eq!(queue.peek(), Err(Error::EmptyCollection));
        assert!(queue.is_empty());
        assert_eq!(queue.to_string(), "[]");
    }

    #[test]
    fn contains_searches_all_values() {
        let queue: Queue<u64> = [3, 1, 4].into_iter().collect();
        assert!(queue.contains(&1));
        assert!(queue.contains(&4));
        assert!(!queue.contains(&5));
    }

    #[test]
    fn clear_and_render() {
        let mut queue: Queue<u64> = (1..=3).collect();
        assert_eq!(queue.to_string(), "1 <-> 2 <-> 3 <-> null");
        assert_eq!(format!("{queue:?}"), "[1, 2, 3]");

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.to_string(), "[]");
    }
}
