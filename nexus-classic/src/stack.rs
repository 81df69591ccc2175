//! LIFO stack built on [`DoublyLinkedList`].
//!
//! The top of the stack is the head of the list.

use core::fmt;

use crate::doubly::{self, DoublyLinkedList, SlabDoublyStorage};
use crate::{Error, Result};

/// A last-in, first-out stack.
///
/// # Example
///
/// ```
/// use nexus_classic::Stack;
///
/// let mut stack = Stack::with_value(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Ok(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Creates a stack holding `value`.
    #[inline]
    pub fn with_value(value: T) -> Self {
        let mut stack = Self::new();
        stack.push(value);
        stack
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes a value on top. O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.add_first(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_first()
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.list.front().ok_or(Error::EmptyCollection)
    }

    /// Returns `true` if the stack holds `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the values, top to bottom.
    #[inline]
    pub fn iter(&self) -> doubly::Iter<'_, T, SlabDoublyStorage<T>, usize> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders top to bottom, in the same format as [`DoublyLinkedList`].
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_value_pushes_it() {
        let stack = Stack::with_value("only");
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Ok(&"only"));
    }

    #[test]
    fn pop_in_lifo_order() {
        let mut stack = Stack::new();
        stack.push("first");
        stack.push("second");
        stack.push("third");

        assert_eq!(stack.peek(), Ok(&"third"));
        assert_eq!(stack.pop(), Ok("third"));
        assert_eq!(stack.pop(), Ok("second"));
        assert_eq!(stack.pop(), Ok("first"));
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_errors() {
        let mut stack: Stack<u64> = Stack::new();
        assert_eq!(stack.pop(), Err(Error::EmptyCollection));
        assert_eq!(stack.peek(), Err(Error::EmptyCollection));
        assert_eq!(stack.pop(), Err(Error::EmptyCollection));
        assert!(stack.is_empty());
    }

    #[test]
    fn collect_pushes_in_order() {
        let stack: Stack<u64> = (1..=3).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(stack.to_string(), "3 <-> 2 <-> 1 <-> null");
        assert!(stack.contains(&2));
    }

    #[test]
    fn clear_empties() {
        let mut stack: Stack<u64> = (1..=3).collect();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.to_string(), "[]");
        assert_eq!(format!("{stack:?}"), "[]");
    }
}
