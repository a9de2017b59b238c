//! Errors reported by [`RingBufferDeque`](crate::RingBufferDeque) and its cursors.
//!
//! Every failing operation leaves the deque exactly as it was before the call.

use thiserror::Error;

/// The broad category of a [`DequeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The deque could not hold the requested elements.
    Capacity,
    /// The operation needs at least one live element.
    Empty,
    /// A cursor was dereferenced outside the live range.
    Access,
}

/// An error from a deque or cursor operation.
///
/// # Examples
/// ```
/// use ringdeque::{DequeError, ErrorKind, RingBufferDeque};
/// let mut deque: RingBufferDeque<i32, 1> = RingBufferDeque::new();
/// deque.push_back(1).unwrap();
/// let err = deque.push_back(2).unwrap_err();
/// assert_eq!(err, DequeError::Full { capacity: 1 });
/// assert_eq!(err.kind(), ErrorKind::Capacity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DequeError {
    #[error("sequence of {len} elements exceeds deque capacity {capacity}")]
    Overflow { len: usize, capacity: usize },

    #[error("cannot push to a full deque (capacity {capacity})")]
    Full { capacity: usize },

    #[error("cannot call `{op}` on an empty deque")]
    Empty { op: &'static str },

    #[error("cursor at logical index {index} is outside the live range of {len} elements")]
    Access { index: usize, len: usize },
}

impl DequeError {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DequeError::Overflow { .. } | DequeError::Full { .. } => ErrorKind::Capacity,
            DequeError::Empty { .. } => ErrorKind::Empty,
            DequeError::Access { .. } => ErrorKind::Access,
        }
    }
}
