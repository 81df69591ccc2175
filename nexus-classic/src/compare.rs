//! Ordering capability for the priority queue.
//!
//! [`PriorityQueue`](crate::PriorityQueue) never calls `Ord` directly; it
//! asks a [`Compare`] implementation. `cmp(a, b) == Less` means `a` has the
//! higher priority and leaves the queue first.

use core::cmp::Ordering;

/// A total order over `T`.
///
/// Closures of the form `Fn(&T, &T) -> Ordering` implement this trait, so an
/// ad-hoc order can be passed without a named type.
///
/// # Example
///
/// ```
/// use nexus_classic::{Compare, Natural, Reverse};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Reverse.compare(&1, &2), Ordering::Greater);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"aa", &"b"), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` orders strictly before `b`.
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }
}

/// Order given by `T: Ord`. Smallest value has the highest priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverse of `T: Ord`. Largest value has the highest priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse;

impl<T: Ord + ?Sized> Compare<T> for Reverse {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
