//! Doubly-linked list over slab-backed node storage.
//!
//! Nodes live in a [`Storage`] owned by the list. Each node holds the key of
//! its successor and of its predecessor. Neither link owns anything: the
//! storage owns every node, so the two-way chain forms no ownership cycle.
//!
//! Keys returned by insertion and by [`find`](DoublyLinkedList::find) are
//! stable node handles. They stay valid until that node is removed and allow
//! O(1) neighbor-relative insertion and removal.
//!
//! # Handle Discipline
//!
//! A handle is only meaningful for the list that returned it. Handles of
//! removed nodes are rejected with [`Error::InvalidArgument`], but once the
//! storage reuses the slot, a stale handle refers to the new node (same
//! discipline as the `slab` crate).
//!
//! # Example
//!
//! ```
//! use nexus_classic::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//!
//! list.add_last(1);
//! list.add_last(3);
//!
//! // O(n) search, O(1) insertion next to the found node
//! let three = list.find(&3).unwrap();
//! list.add_before(three, 2).unwrap();
//!
//! assert_eq!(list.to_string(), "1 <-> 2 <-> 3 <-> null");
//!
//! // Walk backwards
//! let reversed: Vec<_> = list.iter().rev().copied().collect();
//! assert_eq!(reversed, vec![3, 2, 1]);
//! ```

use core::fmt;
use std::marker::PhantomData;

use crate::{Error, Key, Result, Storage};

/// Default node storage for [`DoublyLinkedList`].
pub type SlabDoublyStorage<T> = slab::Slab<DoublyNode<T, usize>>;

/// A node of a [`DoublyLinkedList`].
///
/// Wraps the value with prev/next links. Links are managed by the list
/// only; callers get read access through [`DoublyLinkedList::node`].
#[derive(Debug)]
pub struct DoublyNode<T, K: Key = usize> {
    value: T,
    prev: K,
    next: K,
}

impl<T, K: Key> DoublyNode<T, K> {
    #[inline]
    fn new(value: T, prev: K, next: K) -> Self {
        Self { value, prev, next }
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

    /// Returns the key of the preceding node, or `None` at the head.
    #[inline]
    pub fn prev(&self) -> Option<K> {
        self.prev.to_option()
    }
}

/// A doubly-linked list that owns its node storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Node storage (default [`SlabDoublyStorage<T>`])
/// - `K`: Key type handed out as node handles (default `usize`)
pub struct DoublyLinkedList<T, S = SlabDoublyStorage<T>, K: Key = usize>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    nodes: S,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list with room for `capacity` nodes before the
    /// storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(slab::Slab::with_capacity(capacity))
    }
}

// =============================================================================
// Base impl
// =============================================================================

impl<T, S, K: Key> DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
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

    /// Returns `true` if `key` is the head.
    #[inline]
    pub fn is_head(&self, key: K) -> bool {
        self.head.is_some() && self.head == key
    }

    /// Returns `true` if `key` is the tail.
    #[inline]
    pub fn is_tail(&self, key: K) -> bool {
        self.tail.is_some() && self.tail == key
    }

    /// Returns `true` if `key` refers to a node of this list.
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.nodes.contains(key)
    }

    /// Returns the node at `key`.
    #[inline]
    pub fn node(&self, key: K) -> Option<&DoublyNode<T, K>> {
        self.nodes.get(key)
    }

    /// Returns the value at `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Returns the key of the node following `key`.
    #[inline]
    pub fn next_key(&self, key: K) -> Option<K> {
        self.nodes.get(key).and_then(DoublyNode::next)
    }

    /// Returns the key of the node preceding `key`.
    #[inline]
    pub fn prev_key(&self, key: K) -> Option<K> {
        self.nodes.get(key).and_then(DoublyNode::prev)
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
        let key = self
            .nodes
            .insert(DoublyNode::new(value, K::NONE, self.head));

        match self.nodes.get_mut(self.head) {
            Some(head) => head.prev = key,
            None => self.tail = key,
        }

        self.head = key;
        self.len += 1;
        key
    }

    /// Appends a value at the back of the list. O(1).
    ///
    /// Returns the key of the new node.
    pub fn add_last(&mut self, value: T) -> K {
        let key = self
            .nodes
            .insert(DoublyNode::new(value, self.tail, K::NONE));

        match self.nodes.get_mut(self.tail) {
            Some(tail) => tail.next = key,
            None => self.head = key,
        }

        self.tail = key;
        self.len += 1;
        key
    }

    /// Inserts a value immediately before the node at `before`. O(1).
    ///
    /// Returns the key of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `before` is not a node of this
    /// list. The list is left unchanged.
    pub fn add_before(&mut self, before: K, value: T) -> Result<K> {
        let prev = self.checked(before)?.prev;
        if self.is_head(before) {
            return Ok(self.add_first(value));
        }

        let key = self.nodes.insert(DoublyNode::new(value, prev, before));
        if let Some(prev_node) = self.nodes.get_mut(prev) {
            prev_node.next = key;
        }
        if let Some(before_node) = self.nodes.get_mut(before) {
            before_node.prev = key;
        }

        self.len += 1;
        Ok(key)
    }

    /// Inserts a value immediately after the node at `after`. O(1).
    ///
    /// Returns the key of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `after` is not a node of this
    /// list. The list is left unchanged.
    pub fn add_after(&mut self, after: K, value: T) -> Result<K> {
        let next = self.checked(after)?.next;
        if self.is_tail(after) {
            return Ok(self.add_last(value));
        }

        let key = self.nodes.insert(DoublyNode::new(value, after, next));
        if let Some(after_node) = self.nodes.get_mut(after) {
            after_node.next = key;
        }
        if let Some(next_node) = self.nodes.get_mut(next) {
            next_node.prev = key;
        }

        self.len += 1;
        Ok(key)
    }

    // ========================================================================
    // Remove operations (unlink + deallocate)
    // ========================================================================

    /// Removes the head node and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    #[inline]
    pub fn remove_first(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::EmptyCollection);
        }
        self.take(self.head).ok_or(Error::EmptyCollection)
    }

    /// Removes the tail node and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    #[inline]
    pub fn remove_last(&mut self) -> Result<T> {
        if self.tail.is_none() {
            return Err(Error::EmptyCollection);
        }
        self.take(self.tail).ok_or(Error::EmptyCollection)
    }

    /// Removes the node at `key` and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `key` is not a node of this list.
    pub fn remove_node(&mut self, key: K) -> Result<T> {
        self.checked(key)?;
        self.take(key).ok_or(Error::InvalidArgument("node"))
    }

    /// Removes the first node whose value equals `value`.
    ///
    /// O(n) to find, O(1) to splice. Returns `true` if a node was removed.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_by(|v| v == value).is_some()
    }

    /// Removes the first node whose value satisfies `pred` and returns it.
    pub fn remove_by<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let key = self.find_by(pred)?;
        self.take(key)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing doubly linked list");

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
    ///
    /// The key can be passed to [`add_before`](Self::add_before),
    /// [`add_after`](Self::add_after) or [`remove_node`](Self::remove_node).
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

    /// Returns the key of the last node whose value equals `value`.
    ///
    /// Scans from the tail backwards.
    pub fn find_last(&self, value: &T) -> Option<K>
    where
        T: PartialEq,
    {
        let mut current = self.tail;
        while let Some(node) = self.nodes.get(current) {
            if node.value == *value {
                return Some(current);
            }
            current = node.prev;
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
    ///
    /// The iterator is double-ended: `.rev()` walks tail to head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn checked(&self, key: K) -> Result<&DoublyNode<T, K>> {
        self.nodes.get(key).ok_or_else(|| {
            tracing::debug!(?key, "rejected handle that is not part of the list");
            Error::InvalidArgument("node")
        })
    }

    /// Splices the node out and releases it from storage.
    ///
    /// Both of the node's links are cleared before it is dropped.
    fn take(&mut self, key: K) -> Option<T> {
        let (prev, next) = {
            let node = self.nodes.get_mut(key)?;
            let links = (node.prev, node.next);
            node.prev = K::NONE;
            node.next = K::NONE;
            links
        };

        match self.nodes.get_mut(prev) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match self.nodes.get_mut(next) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
        self.nodes.remove(key).map(|node| node.value)
    }
}

impl<T, S, K: Key> Default for DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `v1 <-> v2 <-> null`, or `[]` when empty.
impl<T: fmt::Display, S, K: Key> fmt::Display for DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        for value in self.iter() {
            write!(f, "{value} <-> ")?;
        }
        f.write_str("null")
    }
}

impl<T, S, K: Key> Extend<T> for DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T, S, K: Key> FromIterator<T> for DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a DoublyLinkedList<T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over references to list values.
pub struct Iter<'a, T, S, K: Key> {
    nodes: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.nodes.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> DoubleEndedIterator for Iter<'a, T, S, K>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.nodes.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<DoublyNode<T, K>, Key = K>
{
}
