//! Error types shared by every collection in the crate.

/// Errors returned by collection operations.
///
/// All errors signal caller misuse rather than transient conditions. A
/// failed call leaves the collection exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A peek/remove/pop/dequeue was attempted on an empty collection.
    #[error("collection is empty")]
    EmptyCollection,

    /// An argument was absent or not usable, e.g. a node handle that does
    /// not refer to a node of this list.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An index was outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the collection at the time of the call.
        len: usize,
    },
}

/// Result alias for collection operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::EmptyCollection.to_string(), "collection is empty");
        assert_eq!(
            Error::InvalidArgument("node").to_string(),
            "invalid argument: node"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for length 2"
        );
    }
}
