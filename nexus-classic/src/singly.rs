//! Singly-linked list over slab-backed node storage.
//!
//! Nodes live in a [`Storage`] owned by the list and link forward by key.
//! The list tracks `head` and `tail`, so insertion at either end is O(1).
//! Without back links, removing the last node walks from the head to find
//! its predecessor, which is O(n).
//!
//! # Example
//!
//! ```
//! use nexus_classic::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u64> = SinglyLinkedList::new();
//!
//! list.add_last(2);
//! list.add_last(3);
//! list.add_first(1);
//!
//! assert_eq!(list.to_string(), "[ 1 ] -> [ 2 ] -> [ 3 ] -> NULL");
//!
//! assert_eq!(list.remove_first(), Ok(1));
//! assert_eq!(list.remove_last(), Ok(3));
//! assert!(list.remove(&2));
//! assert!(list.is_empty());
//! ```

use core::fmt;
use std::marker::PhantomData;

use crate::{Error, Key, Result, Storage};

/// Default node storage for [`SinglyLinkedList`].
pub type SlabSinglyStorage<T> = slab::Slab<SinglyNode<T, usize>>;

/// A node of a [`SinglyLinkedList`].
///
/// The value is fixed once the node is created. The forward link is managed
/// by the list only.
#[derive(Debug)]
pub struct SinglyNode<T, K: Key = usize> {
    value: T,
    next: K,
}

impl<T, K: Key> SinglyNode<T, K> {
    #[inline]
    fn new(value: T, next: K) -> Self {
        Self { value, next }
    }

    /// Returns the value stored in the node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the key of the following node, or `None` at the tail.
    #[inline]
    pub fn next(&self) -> Option<K> {
        self.next.to_option()
    }
}

/// A singly-linked list that owns its node storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Node storage (default [`SlabSinglyStorage<T>`])
/// - `K`: Key type handed out as node handles (default `usize`)
pub struct SinglyLinkedList<T, S = SlabSinglyStorage<T>, K: Key = usize>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    nodes: S,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list with room for `capacity` nodes before the
    /// storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(slab::Slab::with_capacity(capacity))
    }
}

impl<T, S, K: Key> SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::from_parts(S::default())
    }

    /// Creates an empty list over caller-provided node storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the storage already holds nodes.
    pub fn with_storage(nodes: S) -> Result<Self> {
        if !nodes.is_empty() {
            return Err(Error::InvalidArgument("storage must be empty"));
        }
        Ok(Self::from_parts(nodes))
    }

    #[inline]
    fn from_parts(nodes: S) -> Self {
        Self {
            nodes,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn first_key(&self) -> Option<K> {
        self.head.to_option()
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn last_key(&self) -> Option<K> {
        self.tail.to_option()
    }

    /// Returns the key of the node following `key`.
    #[inline]
    pub fn next_key(&self, key: K) -> Option<K> {
        self.nodes.get(key).and_then(SinglyNode::next)
    }

    /// Returns the node at `key`.
    #[inline]
    pub fn node(&self, key: K) -> Option<&SinglyNode<T, K>> {
        self.nodes.get(key)
    }

    /// Returns the value at `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail)
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Inserts a value at the front of the list. O(1).
    ///
    /// Returns the key of the new node.
    pub fn add_first(&mut self, value: T) -> K {
        let key = self.nodes.insert(SinglyNode::new(value, self.head));
        if self.tail.is_none() {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
        key
    }

    /// Appends a value at the back of the list. O(1).
    ///
    /// Returns the key of the new node.
    pub fn add_last(&mut self, value: T) -> K {
        let key = self.nodes.insert(SinglyNode::new(value, K::NONE));
        match self.nodes.get_mut(self.tail) {
            Some(tail) => tail.next = key,
            None => self.head = key,
        }
        self.tail = key;
        self.len += 1;
        key
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes the head node and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let node = self
            .nodes
            .remove(self.head)
            .ok_or(Error::EmptyCollection)?;

        self.head = node.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the tail node and returns its value.
    ///
    /// O(n): the predecessor of the tail is found by walking from the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        if self.tail.is_none() {
            return Err(Error::EmptyCollection);
        }
        if self.head == self.tail {
            return self.remove_first();
        }

        let mut prev = self.head;
        loop {
            let next = self.next_link(prev);
            if next == self.tail || next.is_none() {
                break;
            }
            prev = next;
        }

        let node = self
            .nodes
            .remove(self.tail)
            .ok_or(Error::EmptyCollection)?;
        if let Some(prev_node) = self.nodes.get_mut(prev) {
            prev_node.next = K::NONE;
        }
        self.tail = prev;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the first node whose value equals `value`.
    ///
    /// Returns `true` if a node was removed.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_by(|v| v == value).is_some()
    }

    /// Removes the first node whose value satisfies `pred` and returns it.
    pub fn remove_by<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = K::NONE;
        let mut current = self.head;

        while let Some(node) = self.nodes.get(current) {
            if pred(&node.value) {
                let next = node.next;
                match self.nodes.get_mut(prev) {
                    Some(prev_node) => prev_node.next = next,
                    None => self.head = next,
                }
                if current == self.tail {
                    self.tail = prev;
                }
                self.len -= 1;
                return self.nodes.remove(current).map(|node| node.value);
            }
            prev = current;
            current = node.next;
        }

        None
    }

    /// Removes every node.
    ///
    /// Each node is detached from its successor before it is dropped.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing singly linked list");

        let mut key = self.head;
        while let Some(node) = self.nodes.remove(key) {
            key = node.next;
        }

        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the key of the first node whose value equals `value`.
    #[inline]
    pub fn find(&self, value: &T) -> Option<K>
    where
        T: PartialEq,
    {
        self.find_by(|v| v == value)
    }

    /// Returns the key of the first node whose value satisfies `pred`.
    pub fn find_by<F>(&self, mut pred: F) -> Option<K>
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while let Some(node) = self.nodes.get(current) {
            if pred(&node.value) {
                return Some(current);
            }
            current = node.next;
        }
        None
    }

    /// Returns `true` if any node holds `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns an iterator over the values, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn next_link(&self, key: K) -> K {
        self.nodes.get(key).map_or(K::NONE, |node| node.next)
    }
}

impl<T, S, K: Key> Default for SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[ v1 ] -> [ v2 ] -> NULL`, or `[]` when empty.
impl<T: fmt::Display, S, K: Key> fmt::Display for SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        for value in self.iter() {
            write!(f, "[ {value} ] -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<T, S, K: Key> Extend<T> for SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T, S, K: Key> FromIterator<T> for SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a SinglyLinkedList<T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to list values, head to tail.
pub struct Iter<'a, T, S, K: Key> {
    nodes: &'a S,
    current: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<SinglyNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<SinglyNode<T, K>, Key = K>
{
}
