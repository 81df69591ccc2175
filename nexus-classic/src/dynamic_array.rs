//! Growable array over a boxed slot buffer.
//!
//! Occupied slots are `0..len`. When the buffer is full, [`DynamicArray::add`]
//! reallocates at twice the capacity (an empty buffer grows to one slot), so
//! appends are amortized O(1).

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::{Error, Result};

/// Capacity reserved by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// A contiguous, doubling array.
///
/// # Example
///
/// ```
/// use nexus_classic::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.add(10);
/// array.add(20);
/// array.add(30);
///
/// assert_eq!(array.get(1), Ok(&20));
/// assert_eq!(array.remove_at(0), Ok(10));
/// assert_eq!(array.to_string(), "[20, 30]");
/// ```
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Returns the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.slots[..len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the value at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Overwrites the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`. The array is
    /// left unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Appends a value, doubling the buffer when it is full.
    pub fn add(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes the value at `index`, shifting later values left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let value = self.slots[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        // The vacated slot rotates to the end of the occupied range.
        self.slots[index..len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Removes the first value equal to `value`. Returns `true` if one was
    /// found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Returns the first stored value equal to `value`.
    pub fn try_find(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|v| *v == value)
    }

    /// Returns the index of the first value equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if the array holds `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(value).is_some()
    }

    /// Removes every value, keeping the buffer.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing dynamic array");
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over the values in index order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    fn grow(&mut self) {
        let capacity = match self.slots.len() {
            0 => 1,
            n => n * 2,
        };
        tracing::trace!(
            from = self.slots.len(),
            to = capacity,
            "dynamic array full, growing"
        );

        let mut slots = empty_slots(capacity);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[v1, v2, ..., vn]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Iterator over the values of a [`DynamicArray`].
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
