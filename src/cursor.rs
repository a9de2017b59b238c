//! Bidirectional cursors over the live range of a [`RingBufferDeque`](crate::RingBufferDeque).
//!
//! A cursor sits on a physical slot of the ring and carries the logical index of that slot.
//! Stepping past the last physical slot wraps to the first one (and the other way around), so a
//! cursor walks the live elements in order no matter where they sit in the buffer.
//!
//! Two cursors compare equal when their logical indices are equal. Physical slots cannot be used
//! for this: in a full deque the front slot is also the slot one past the back, so `begin` and
//! `end` sit on the same slot while denoting different positions.
//!
//! Cursors borrow the deque they came from, so any push, pop or clear ends their lifetime.

use crate::error::DequeError;
use crate::index;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A physical slot paired with the logical index it represents, in a ring of `N` slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position<const N: usize> {
    pub(crate) slot: usize,
    pub(crate) index: usize,
}

impl<const N: usize> Position<N> {
    #[inline]
    pub(crate) const fn new(slot: usize, index: usize) -> Self {
        Position { slot, index }
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.slot = index::next(self.slot, N);
        self.index = self.index.wrapping_add(1);
    }

    // wrapping so that stepping back from index 0 lands out of range instead of panicking
    #[inline]
    pub(crate) fn retreat(&mut self) {
        self.slot = index::prev(self.slot, N);
        self.index = self.index.wrapping_sub(1);
    }
}

#[inline]
fn access_error(index: usize, len: usize) -> DequeError {
    log::trace!("rejected cursor access at logical index {index} (len {len})");
    DequeError::Access { index, len }
}

/// A read-only cursor into a [`RingBufferDeque`](crate::RingBufferDeque).
/// Created by [`begin`](crate::RingBufferDeque::begin) and [`end`](crate::RingBufferDeque::end).
///
/// # Examples
/// ```
/// use ringdeque::RingBufferDeque;
/// let deque: RingBufferDeque<i32, 4> = RingBufferDeque::from_array([1, 2, 3]).unwrap();
/// let mut cursor = deque.begin();
/// let mut seen = Vec::new();
/// while cursor != deque.end() {
///     seen.push(*cursor.get().unwrap());
///     cursor.move_next();
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// assert!(cursor.get().is_err());
/// ```
pub struct Cursor<'a, T, const N: usize> {
    ptr: NonNull<T>,
    pos: Position<N>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(ptr: NonNull<T>, pos: Position<N>, len: usize) -> Self {
        Cursor {
            ptr,
            pos,
            len,
            _marker: PhantomData,
        }
    }

    /// The logical index of the cursor, `0` for the front element and `len` for the end position.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// Steps one element towards the back, wrapping around the end of the buffer.
    #[inline]
    pub fn move_next(&mut self) {
        self.pos.advance();
    }

    /// Steps one element towards the front, wrapping around the start of the buffer.
    #[inline]
    pub fn move_prev(&mut self) {
        self.pos.retreat();
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// Returns [`DequeError::Access`] when the cursor is at the end position or anywhere else
    /// outside the live range.
    #[inline]
    pub fn get(&self) -> Result<&'a T, DequeError> {
        if self.pos.index < self.len {
            // SAFETY: the index is in the live range, so the slot holds an initialized element,
            // and the shared borrow of the deque lasts for 'a.
            unsafe { Ok(&*self.ptr.as_ptr().add(self.pos.slot)) }
        } else {
            Err(access_error(self.pos.index, self.len))
        }
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos.index == other.pos.index
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.pos.index)
            .field("slot", &self.pos.slot)
            .field("len", &self.len)
            .finish()
    }
}

/// A cursor with exclusive access to a [`RingBufferDeque`](crate::RingBufferDeque),
/// allowing elements to be modified in place.
/// Created by [`begin_mut`](crate::RingBufferDeque::begin_mut) and [`end_mut`](crate::RingBufferDeque::end_mut).
///
/// # Examples
/// ```
/// use ringdeque::RingBufferDeque;
/// let mut deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2, 3]).unwrap();
/// let mut cursor = deque.end_mut();
/// cursor.move_prev();
/// *cursor.get_mut().unwrap() = 30;
/// assert_eq!(deque, [1, 2, 30]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    ptr: NonNull<T>,
    pos: Position<N>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(ptr: NonNull<T>, pos: Position<N>, len: usize) -> Self {
        CursorMut {
            ptr,
            pos,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.pos.index
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.pos.advance();
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.pos.retreat();
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// Returns [`DequeError::Access`] outside the live range.
    #[inline]
    pub fn get(&self) -> Result<&T, DequeError> {
        if self.pos.index < self.len {
            // SAFETY: live slot, borrowed through &self.
            unsafe { Ok(&*self.ptr.as_ptr().add(self.pos.slot)) }
        } else {
            Err(access_error(self.pos.index, self.len))
        }
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Errors
    /// Returns [`DequeError::Access`] outside the live range.
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.pos.index < self.len {
            // SAFETY: live slot; the returned borrow is tied to &mut self, so it cannot alias
            // another reference handed out by this cursor.
            unsafe { Ok(&mut *self.ptr.as_ptr().add(self.pos.slot)) }
        } else {
            Err(access_error(self.pos.index, self.len))
        }
    }

    /// Consumes the cursor, returning the element under it for the rest of the borrow.
    ///
    /// # Errors
    /// Returns [`DequeError::Access`] outside the live range.
    #[inline]
    pub fn into_mut(self) -> Result<&'a mut T, DequeError> {
        if self.pos.index < self.len {
            // SAFETY: live slot; the cursor is consumed, so this is the only reference it produces.
            unsafe { Ok(&mut *self.ptr.as_ptr().add(self.pos.slot)) }
        } else {
            Err(access_error(self.pos.index, self.len))
        }
    }

    /// Reborrows as a read-only cursor at the same position.
    #[inline]
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.ptr, self.pos, self.len)
    }
}

// SAFETY: a Cursor behaves like &T and a CursorMut like &mut T.
unsafe impl<T: Sync, const N: usize> Send for Cursor<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for Cursor<'_, T, N> {}
unsafe impl<T: Send, const N: usize> Send for CursorMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for CursorMut<'_, T, N> {}

impl<T, const N: usize> PartialEq for CursorMut<'_, T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos.index == other.pos.index
    }
}

impl<T, const N: usize> Eq for CursorMut<'_, T, N> {}

impl<T, const N: usize> Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.pos.index)
            .field("slot", &self.pos.slot)
            .field("len", &self.len)
            .finish()
    }
}
