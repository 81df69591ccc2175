//! Node arena with stable keys.
//!
//! Storage provides insert/remove/get operations where keys remain valid
//! until explicitly removed. The linked lists in this crate keep their nodes
//! in a storage and link them by key, so the forward and backward chains are
//! plain keys and the storage is the only owner of every node.

use crate::Key;

/// Slab-like node arena with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Growable**: insertion never fails
/// - **Sentinel**: `Key::NONE` is never handed out, and lookups or removals
///   with it return `None`
///
/// # Implementations
///
/// - `slab::Slab<T>` - growable, heap allocated, `usize` keys (the default
///   storage for every list in this crate)
pub trait Storage<T> {
    /// Key type handed out by this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slot is occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` refers to an occupied slot.
    #[inline]
    fn contains(&self, key: Self::Key) -> bool {
        key.is_some() && self.get(key).is_some()
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> Self::Key {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, key: Self::Key) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: Self::Key) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slab::Slab;

    #[test]
    fn insert_get_remove() {
        let mut storage: Slab<u64> = Slab::with_capacity(16);

        let key = Storage::insert(&mut storage, 42);
        assert_eq!(Storage::len(&storage), 1);
        assert_eq!(Storage::get(&storage, key), Some(&42));

        assert_eq!(Storage::remove(&mut storage, key), Some(42));
        assert_eq!(Storage::get(&storage, key), None);
        assert!(Storage::is_empty(&storage));
    }

    #[test]
    fn remove_vacant_returns_none() {
        let mut storage: Slab<u64> = Slab::new();

        let key = Storage::insert(&mut storage, 1);
        Storage::remove(&mut storage, key);

        assert_eq!(Storage::remove(&mut storage, key), None);
        assert_eq!(Storage::remove(&mut storage, 999), None);
    }

    #[test]
    fn contains_rejects_sentinel_and_vacant() {
        let mut storage: Slab<u64> = Slab::new();

        let key = Storage::insert(&mut storage, 7);
        assert!(storage.contains(key));
        assert!(!Storage::contains(&storage, usize::NONE));
        assert!(!Storage::contains(&storage, key + 1));
    }

    #[test]
    fn slot_reuse() {
        let mut storage: Slab<u64> = Slab::new();

        let k0 = Storage::insert(&mut storage, 0);
        let _k1 = Storage::insert(&mut storage, 1);
        Storage::remove(&mut storage, k0);

        let k2 = Storage::insert(&mut storage, 2);
        assert_eq!(k2, k0);
    }
}
