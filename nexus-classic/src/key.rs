//! Node handles.
//!
//! Linked lists in this crate address their nodes by key into a node arena
//! rather than by pointer. A key doubles as the link type stored inside each
//! node and as the handle returned to callers, so a reserved sentinel value
//! (`NONE`) stands in for "no link".

/// Key type used for node links and node handles.
///
/// Provides a sentinel value (`NONE`) meaning "no node". Implemented for the
/// unsigned integer types; custom key types (e.g. strongly-typed ids) only
/// need to pick a sentinel.
///
/// # Example
///
/// ```
/// use nexus_classic::Key;
///
/// let key: usize = 42;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// ```
///
/// # Custom Key Types
///
/// ```
/// use nexus_classic::Key;
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// struct TaskId(u32);
///
/// impl Key for TaskId {
///     const NONE: Self = TaskId(u32::MAX);
/// }
///
/// assert!(TaskId::NONE.is_none());
/// assert!(TaskId(7).is_some());
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no node".
    ///
    /// For integer types this is `MAX`.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    fn to_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_key_basics() {
        let key: usize = 42;
        assert!(!key.is_none());
        assert!(key.is_some());
        assert_eq!(key.to_option(), Some(42));

        assert!(usize::NONE.is_none());
        assert!(!usize::NONE.is_some());
        assert_eq!(usize::NONE.to_option(), None);
    }

    #[test]
    fn none_values() {
        assert_eq!(u16::NONE, u16::MAX);
        assert_eq!(u32::NONE, u32::MAX);
        assert_eq!(u64::NONE, u64::MAX);
        assert_eq!(usize::NONE, usize::MAX);
    }
}
