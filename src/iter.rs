//! Iterators over a [`RingBufferDeque`].

use crate::cursor::{Cursor, Position};
use crate::settings::DropBehavior;
use crate::RingBufferDeque;
use std::fmt::Debug;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over shared references to the elements of a [`RingBufferDeque`], front to back.
/// Created by [`RingBufferDeque::iter`].
///
/// It is a pair of cursors that move towards each other and stop once they compare equal.
pub struct Iter<'a, T, const N: usize> {
    head: Cursor<'a, T, N>,
    tail: Cursor<'a, T, N>,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    #[inline]
    pub(crate) fn new(head: Cursor<'a, T, N>, tail: Cursor<'a, T, N>) -> Self {
        Iter { head, tail }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let item = self.head.get().ok();
        self.head.move_next();
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail.index() - self.head.index();
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail.move_prev();
        self.tail.get().ok()
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Iter {
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T: Debug, const N: usize> Debug for Iter<'_, T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over mutable references to the elements of a [`RingBufferDeque`], front to back.
/// Created by [`RingBufferDeque::iter_mut`].
pub struct IterMut<'a, T, const N: usize> {
    ptr: NonNull<T>,
    head: Position<N>,
    tail: Position<N>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(ptr: NonNull<T>, head: Position<N>, tail: Position<N>) -> Self {
        IterMut {
            ptr,
            head,
            tail,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head.index == self.tail.index {
            return None;
        }
        let slot = self.head.slot;
        self.head.advance();
        // SAFETY: every position between head and tail is a live slot, and each one is
        // yielded at most once, so the mutable references never alias.
        unsafe { Some(&mut *self.ptr.as_ptr().add(slot)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail.index - self.head.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IterMut<'_, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head.index == self.tail.index {
            return None;
        }
        self.tail.retreat();
        // SAFETY: see `next`.
        unsafe { Some(&mut *self.ptr.as_ptr().add(self.tail.slot)) }
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

// SAFETY: IterMut behaves like &mut [T].
unsafe impl<T: Send, const N: usize> Send for IterMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for IterMut<'_, T, N> {}

/// An iterator over the elements owned by a [`RingBufferDeque`].
/// It pops them from the appropriate side as it goes, and the elements it never reached are
/// dropped along with the deque.
pub struct IntoIter<T, const N: usize, DropOrder>
where
    DropOrder: DropBehavior,
{
    pub(crate) deque: RingBufferDeque<T, N, DropOrder>,
}

impl<T, const N: usize, DropOrder> Iterator for IntoIter<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.deque.is_empty() {
            None
        } else {
            self.deque.pop_front().ok()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, const N: usize, DropOrder> DoubleEndedIterator for IntoIter<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.deque.is_empty() {
            None
        } else {
            self.deque.pop_back().ok()
        }
    }
}

impl<T, const N: usize, DropOrder> ExactSizeIterator for IntoIter<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T, const N: usize, DropOrder> FusedIterator for IntoIter<T, N, DropOrder> where
    DropOrder: DropBehavior
{
}

impl<T: Debug, const N: usize, DropOrder> Debug for IntoIter<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}
