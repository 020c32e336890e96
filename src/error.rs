//! Error types for list operations.

use thiserror::Error;

/// Errors returned by the fallible operations of a [`List`].
///
/// Not-found conditions (`contains`, `index_of`, `remove_item` without a
/// match) are ordinary results and never show up here.
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The list was constructed read-only.
    #[error("list is read only")]
    ReadOnlyViolation,

    /// The index is outside the range accepted by the operation.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The destination buffer cannot hold the copied elements.
    #[error("destination too small: {required} slots required, {capacity} available")]
    OutOfBounds { required: usize, capacity: usize },
}

/// Result alias for list operations.
pub type Result<T, E = ListError> = std::result::Result<T, E>;
