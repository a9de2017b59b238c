//! A [`RingBufferDeque`] is a double-ended queue with a capacity fixed at compile time.
//! Its elements live in a single allocation of `N` slots that is treated as a ring, so pushing
//! and popping at either end is O(1) in the worst case and never moves another element.
//! When the ring is full, pushes are rejected rather than evicting anything.

use crate::cursor::{Cursor, CursorMut, Position};
use crate::error::DequeError;
use crate::index;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::settings::{BackToFront, DropBehavior, FrontToBack};
use std::alloc::Layout;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

/// A fixed-capacity double-ended queue backed by a ring buffer of `N` slots.
///
/// # Examples
/// ```
/// use ringdeque::RingBufferDeque;
/// let mut deque: RingBufferDeque<i32, 4> = RingBufferDeque::new();
/// deque.push_back(2).unwrap();
/// deque.push_front(1).unwrap();
/// deque.push_back(3).unwrap();
/// assert_eq!(deque, [1, 2, 3]);
/// assert_eq!(deque.remaining(), 1);
/// ```
///
/// # Capacity
/// `N` must be greater than zero. A zero capacity is rejected when the deque is first
/// constructed, at compile time.
/// ```compile_fail
/// # use ringdeque::RingBufferDeque;
/// let deque: RingBufferDeque<i32, 0> = RingBufferDeque::new();
/// ```
///
/// # Drop Order
/// The default drop order is front-to-back, meaning that elements are dropped in the same order as iteration would happen.
/// This can be changed to back-to-front by using the [`BackToFront`] drop order.
pub struct RingBufferDeque<T, const N: usize, DropOrder = FrontToBack>
where
    DropOrder: DropBehavior,
{
    ptr: NonNull<T>,
    front: usize,
    len: usize,
    _marker: PhantomData<(T, DropOrder)>,
}

unsafe impl<T: Send, const N: usize, DropOrder> Send for RingBufferDeque<T, N, DropOrder> where
    DropOrder: DropBehavior
{
}
unsafe impl<T: Sync, const N: usize, DropOrder> Sync for RingBufferDeque<T, N, DropOrder> where
    DropOrder: DropBehavior
{
}

impl<T, const N: usize> RingBufferDeque<T, N, FrontToBack> {
    /// Creates a new, empty `RingBufferDeque` holding up to `N` elements.
    /// The buffer is allocated up front, so no later operation allocates.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let deque: RingBufferDeque<String, 8> = RingBufferDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::allocated()
    }

    /// Builds a deque from an array literal, front to back.
    ///
    /// # Errors
    /// Returns [`DequeError::Overflow`] if the array is longer than `N`.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::{DequeError, RingBufferDeque};
    /// let deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2, 3]).unwrap();
    /// assert_eq!(deque.front(), Ok(&1));
    /// assert_eq!(deque.back(), Ok(&3));
    ///
    /// let too_long = RingBufferDeque::<i32, 2>::from_array([1, 2, 3]);
    /// assert_eq!(too_long.unwrap_err(), DequeError::Overflow { len: 3, capacity: 2 });
    /// ```
    #[inline]
    pub fn from_array<const M: usize>(array: [T; M]) -> Result<Self, DequeError> {
        Self::from_sequence(array)
    }

    /// Switches the deque to dropping its elements from back to front.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let deque: RingBufferDeque<i32, 2> = RingBufferDeque::from_array([1, 2]).unwrap();
    /// let deque = deque.as_back_to_front();
    /// assert_eq!(deque, [1, 2]);
    /// ```
    #[inline]
    #[must_use = "This deque's drop order has been changed. Please make sure to use the new deque or drop it explicitly."]
    pub fn as_back_to_front(self) -> RingBufferDeque<T, N, BackToFront> {
        self.with_drop_order()
    }
}

impl<T, const N: usize, DropOrder> RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    const NONZERO_CAPACITY: () = assert!(N > 0, "RingBufferDeque capacity must be greater than 0");

    #[inline]
    fn layout() -> Layout {
        Layout::array::<T>(N).expect("capacity overflow")
    }

    fn allocated() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;

        let ptr = if std::mem::size_of::<T>() == 0 {
            NonNull::dangling()
        } else {
            let layout = Self::layout();
            let ptr = unsafe { std::alloc::alloc(layout) };
            match NonNull::new(ptr as *mut T) {
                Some(p) => p,
                None => std::alloc::handle_alloc_error(layout),
            }
        };
        RingBufferDeque {
            ptr,
            front: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a new, empty deque with a specified drop order.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{BackToFront, RingBufferDeque};
    /// let mut deque = RingBufferDeque::<i32, 4>::new_with_drop_order::<BackToFront>();
    /// deque.push_back(1).unwrap();
    /// assert_eq!(deque, [1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn new_with_drop_order<D>() -> RingBufferDeque<T, N, D>
    where
        D: DropBehavior,
    {
        RingBufferDeque::<T, N, D>::allocated()
    }

    /// Changes the drop order of the deque, keeping its storage and contents.
    #[inline]
    #[must_use]
    pub fn with_drop_order<D>(self) -> RingBufferDeque<T, N, D>
    where
        D: DropBehavior,
    {
        let this = ManuallyDrop::new(self);
        RingBufferDeque {
            ptr: this.ptr,
            front: this.front,
            len: this.len,
            _marker: PhantomData,
        }
    }

    /// Builds a deque by pushing every element of `iter` to the back, in order.
    /// The length is checked before anything is pushed.
    ///
    /// # Errors
    /// Returns [`DequeError::Overflow`] if the sequence is longer than `N`.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let deque = RingBufferDeque::<_, 5>::from_sequence(vec!["a", "b"]).unwrap();
    /// assert_eq!(deque, ["a", "b"]);
    /// assert!(RingBufferDeque::<_, 1>::from_sequence(0..2).is_err());
    /// ```
    pub fn from_sequence<I>(iter: I) -> Result<Self, DequeError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let len = iter.len();
        if len > N {
            log::debug!("rejected sequence of {} elements for a deque of capacity {}", len, N);
            return Err(DequeError::Overflow { len, capacity: N });
        }
        let mut deque = Self::allocated();
        for elem in iter {
            deque.push_back(elem)?;
        }
        Ok(deque)
    }

    /// Moves the contents out into a new deque, leaving `self` empty and fully usable.
    /// Equivalent to [`std::mem::take`].
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut source: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2]).unwrap();
    /// let moved = source.take();
    /// assert_eq!(moved, [1, 2]);
    /// assert!(source.is_empty());
    /// source.push_back(3).unwrap();
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::allocated())
    }

    #[inline]
    fn slot_ptr(&self, slot: usize) -> *mut T {
        debug_assert!(slot < N);
        // SAFETY: slot < N keeps the offset inside the allocation (a no-op for ZSTs).
        unsafe { self.ptr.as_ptr().add(slot) }
    }

    #[inline]
    fn back_slot(&self) -> usize {
        index::physical(self.front, self.len, N)
    }

    #[inline]
    fn last_slot(&self) -> usize {
        index::physical(self.front, self.len - 1, N)
    }

    #[inline]
    fn empty_error(op: &'static str) -> DequeError {
        log::trace!("rejected `{}` on an empty deque of capacity {}", op, N);
        DequeError::Empty { op }
    }

    #[inline]
    fn full_error() -> DequeError {
        log::trace!("rejected push to a full deque of capacity {}", N);
        DequeError::Full { capacity: N }
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `N`, the number of elements the deque can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements that can still be pushed.
    #[inline]
    pub fn remaining(&self) -> usize {
        N - self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is live and further pushes will fail.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<u8, 1> = RingBufferDeque::new();
    /// assert!(!deque.is_full());
    /// deque.push_front(7).unwrap();
    /// assert!(deque.is_full());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::{DequeError, RingBufferDeque};
    /// let mut deque: RingBufferDeque<i32, 2> = RingBufferDeque::new();
    /// assert_eq!(deque.front(), Err(DequeError::Empty { op: "front" }));
    /// deque.push_back(1).unwrap();
    /// deque.push_front(0).unwrap();
    /// assert_eq!(deque.front(), Ok(&0));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(Self::empty_error("front"));
        }
        // SAFETY: the front slot is live whenever len > 0.
        unsafe { Ok(&*self.slot_ptr(self.front)) }
    }

    /// Returns the first element mutably.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.is_empty() {
            return Err(Self::empty_error("front_mut"));
        }
        unsafe { Ok(&mut *self.slot_ptr(self.front)) }
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 2> = RingBufferDeque::new();
    /// assert!(deque.back().is_err());
    /// deque.push_back(1).unwrap();
    /// deque.push_front(0).unwrap();
    /// assert_eq!(deque.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(Self::empty_error("back"));
        }
        // SAFETY: the last slot is live whenever len > 0.
        unsafe { Ok(&*self.slot_ptr(self.last_slot())) }
    }

    /// Returns the last element mutably.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.is_empty() {
            return Err(Self::empty_error("back_mut"));
        }
        unsafe { Ok(&mut *self.slot_ptr(self.last_slot())) }
    }

    /// Returns the element at logical position `index`, counting from the front.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([5, 6]).unwrap();
    /// assert_eq!(deque.get(1), Some(&6));
    /// assert_eq!(deque.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let slot = index::physical(self.front, index, N);
            unsafe { Some(&*self.slot_ptr(slot)) }
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = index::physical(self.front, index, N);
            unsafe { Some(&mut *self.slot_ptr(slot)) }
        } else {
            None
        }
    }

    /// Pushes an element to the back of the deque.
    ///
    /// # Errors
    /// Returns [`DequeError::Full`] if the deque already holds `N` elements. The deque is left
    /// unchanged and `elem` is dropped, so check [`is_full`](Self::is_full) first if the value
    /// must be kept.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::{ErrorKind, RingBufferDeque};
    /// let mut deque: RingBufferDeque<i32, 2> = RingBufferDeque::new();
    /// deque.push_back(1).unwrap();
    /// deque.push_back(2).unwrap();
    /// assert_eq!(deque.push_back(3).unwrap_err().kind(), ErrorKind::Capacity);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, elem: T) -> Result<(), DequeError> {
        if self.is_full() {
            return Err(Self::full_error());
        }
        unsafe {
            // "semantically, [the element] is moved" into the slot one past the back
            std::ptr::write(self.slot_ptr(self.back_slot()), elem);
        }
        self.len += 1;
        Ok(())
    }

    /// Pushes an element to the front of the deque.
    ///
    /// # Errors
    /// Returns [`DequeError::Full`] if the deque already holds `N` elements, under the same terms
    /// as [`push_back`](Self::push_back).
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 5> = RingBufferDeque::new();
    /// for i in 1..=3 {
    ///     deque.push_front(i).unwrap();
    /// }
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, elem: T) -> Result<(), DequeError> {
        if self.is_full() {
            return Err(Self::full_error());
        }
        let slot = index::prev(self.front, N);
        unsafe {
            std::ptr::write(self.slot_ptr(slot), elem);
        }
        self.front = slot;
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it.
    /// The slot it occupied no longer owns anything, so whatever the element holds is released
    /// as soon as the caller drops it.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 2> = RingBufferDeque::from_array([42, 10]).unwrap();
    /// assert_eq!(deque.pop_front(), Ok(42));
    /// assert_eq!(deque.pop_front(), Ok(10));
    /// assert!(deque.pop_front().is_err());
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(Self::empty_error("pop_front"));
        }
        let elem = unsafe { std::ptr::read(self.slot_ptr(self.front)) };
        self.front = index::next(self.front, N);
        self.len -= 1;
        Ok(elem)
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 2> = RingBufferDeque::from_array([42, 10]).unwrap();
    /// assert_eq!(deque.pop_back(), Ok(10));
    /// assert_eq!(deque.pop_back(), Ok(42));
    /// assert!(deque.pop_back().is_err());
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(Self::empty_error("pop_back"));
        }
        self.len -= 1;
        Ok(unsafe { std::ptr::read(self.slot_ptr(self.back_slot())) })
    }

    /// Removes and drops all elements in the order given by the deque's drop order,
    /// then moves the front back to the first slot.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2]).unwrap();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// deque.clear();
    /// assert_eq!(deque.len(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.clear_with_order(DropOrder::IS_INVERTED);
    }

    /// Removes and drops all elements, starting at the back if `drop_from_back` is set.
    #[inline]
    pub fn clear_with_order(&mut self, drop_from_back: bool) {
        while (if drop_from_back {
            self.pop_back()
        } else {
            self.pop_front()
        })
        .is_ok()
        {
            // drop the element
        }
        self.front = 0;
    }

    /// Pushes clones of every element of `other` to the back.
    ///
    /// # Errors
    /// Returns [`DequeError::Overflow`] without pushing anything if `other` does not fit in
    /// the remaining space.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 4> = RingBufferDeque::from_array([1]).unwrap();
    /// deque.extend_from_slice(&[2, 3]).unwrap();
    /// assert!(deque.extend_from_slice(&[4, 5]).is_err());
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), DequeError>
    where
        T: Clone,
    {
        if other.len() > self.remaining() {
            let len = self.len + other.len();
            log::debug!("rejected extension to {} elements for a deque of capacity {}", len, N);
            return Err(DequeError::Overflow { len, capacity: N });
        }
        for elem in other {
            self.push_back(elem.clone())?;
        }
        Ok(())
    }

    /// Returns a cursor at the front element (logical index 0).
    /// For an empty deque this is equal to [`end`](Self::end).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.ptr, Position::new(self.front, 0), self.len)
    }

    /// Returns a cursor one past the back element (logical index `len`).
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.ptr, Position::new(self.back_slot(), self.len), self.len)
    }

    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self.ptr, Position::new(self.front, 0), self.len)
    }

    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self.ptr, Position::new(self.back_slot(), self.len), self.len)
    }

    /// Returns a front-to-back iterator over the elements.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2, 3]).unwrap();
    /// deque.pop_front().unwrap();
    /// deque.push_back(4).unwrap();
    /// let items: Vec<_> = deque.iter().copied().collect();
    /// assert_eq!(items, [2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self.begin(), self.end())
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(
            self.ptr,
            Position::new(self.front, 0),
            Position::new(self.back_slot(), self.len),
        )
    }

    /// Returns the live elements as two slices, front part first.
    /// The second slice is empty unless the elements wrap past the end of the buffer.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingBufferDeque;
    /// let mut deque: RingBufferDeque<i32, 3> = RingBufferDeque::new();
    /// deque.push_back(2).unwrap();
    /// deque.push_back(3).unwrap();
    /// deque.push_front(1).unwrap();
    /// assert_eq!(deque.as_slices(), (&[1][..], &[2, 3][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (head_len, tail_len) = self.split_lens();
        unsafe {
            (
                std::slice::from_raw_parts(self.slot_ptr(self.front), head_len),
                std::slice::from_raw_parts(self.ptr.as_ptr(), tail_len),
            )
        }
    }

    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (head_len, tail_len) = self.split_lens();
        // SAFETY: the head covers slots front..front+head_len and the tail 0..tail_len;
        // tail_len is non-zero only when the head runs to slot N-1, so they never overlap.
        unsafe {
            (
                std::slice::from_raw_parts_mut(self.slot_ptr(self.front), head_len),
                std::slice::from_raw_parts_mut(self.ptr.as_ptr(), tail_len),
            )
        }
    }

    #[inline]
    fn split_lens(&self) -> (usize, usize) {
        let head_len = self.len.min(N - self.front);
        (head_len, self.len - head_len)
    }
}

impl<T, const N: usize, DropOrder> Default for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn default() -> Self {
        Self::allocated()
    }
}

impl<T, const N: usize, DropOrder> Drop for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn drop(&mut self) {
        self.clear();
        if std::mem::size_of::<T>() != 0 {
            unsafe {
                std::alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout());
            }
        }
    }
}

impl<T, const N: usize, DropOrder> Clone for RingBufferDeque<T, N, DropOrder>
where
    T: Clone,
    DropOrder: DropBehavior,
{
    /// Deep-copies the live elements into a fresh buffer at the same physical slots.
    #[inline]
    fn clone(&self) -> Self {
        let mut new = Self::allocated();
        new.front = self.front;
        for elem in self.iter() {
            unsafe {
                new.slot_ptr(new.back_slot()).write(elem.clone());
            }
            // len only covers written slots, so unwinding out of a panicking clone drops exactly those
            new.len += 1;
        }
        new
    }
}

impl<T: Debug, const N: usize, DropOrder> Debug for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize, DropOrder> IntoIterator for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;
    type IntoIter = IntoIter<T, N, DropOrder>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T, const N: usize, DropOrder> IntoIterator for &'a RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize, DropOrder> IntoIterator for &'a mut RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize, DropOrder> std::ops::Index<usize> for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {len} but the index is {index}"))
    }
}

impl<T, const N: usize, DropOrder> std::ops::IndexMut<usize> for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {len} but the index is {index}"))
    }
}

impl<T, const N: usize, const M: usize, DropOrder> TryFrom<[T; M]> for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Error = DequeError;

    #[inline]
    fn try_from(array: [T; M]) -> Result<Self, Self::Error> {
        Self::from_sequence(array)
    }
}

impl<T, const N: usize, DropOrder> TryFrom<Vec<T>> for RingBufferDeque<T, N, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Error = DequeError;

    #[inline]
    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_sequence(vec)
    }
}

impl<T, const N: usize, DropOrder> TryFrom<&[T]> for RingBufferDeque<T, N, DropOrder>
where
    T: Clone,
    DropOrder: DropBehavior,
{
    type Error = DequeError;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Self::from_sequence(slice.iter().cloned())
    }
}

// partialeq, eq, partialord, ord, and hash implementations
impl<T, const N: usize, DropOrder> PartialEq for RingBufferDeque<T, N, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize, DropOrder> PartialEq<[T]> for RingBufferDeque<T, N, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize, const M: usize, DropOrder> PartialEq<[T; M]> for RingBufferDeque<T, N, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    #[inline]
    fn eq(&self, other: &[T; M]) -> bool {
        self == &other[..]
    }
}

impl<T, const N: usize, DropOrder> Eq for RingBufferDeque<T, N, DropOrder>
where
    T: Eq,
    DropOrder: DropBehavior,
{
}

impl<T, const N: usize, DropOrder> PartialOrd for RingBufferDeque<T, N, DropOrder>
where
    T: PartialOrd,
    DropOrder: DropBehavior,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, const N: usize, DropOrder> Ord for RingBufferDeque<T, N, DropOrder>
where
    T: Ord,
    DropOrder: DropBehavior,
{
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, const N: usize, DropOrder> std::hash::Hash for RingBufferDeque<T, N, DropOrder>
where
    T: std::hash::Hash,
    DropOrder: DropBehavior,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // same as a slice, so equal deques hash equally however their elements are laid out
        state.write_usize(self.len);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::de::{Error as _, IgnoredAny, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, const N: usize, DropOrder> Serialize for RingBufferDeque<T, N, DropOrder>
    where
        T: Serialize,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'src, T, const N: usize, DropOrder> Deserialize<'src> for RingBufferDeque<T, N, DropOrder>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(DequeVisitor(PhantomData))
        }
    }

    // pushes straight into the deque and stops at the first element past capacity
    struct DequeVisitor<T, const N: usize, DropOrder>(PhantomData<(T, DropOrder)>);

    impl<'src, T, const N: usize, DropOrder> Visitor<'src> for DequeVisitor<T, N, DropOrder>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
    {
        type Value = RingBufferDeque<T, N, DropOrder>;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "a sequence of at most {} elements", N)
        }

        fn visit_seq<A: SeqAccess<'src>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut deque = RingBufferDeque::<T, N, DropOrder>::default();
            while !deque.is_full() {
                match seq.next_element()? {
                    Some(elem) => deque.push_back(elem).map_err(A::Error::custom)?,
                    None => return Ok(deque),
                }
            }
            if seq.next_element::<IgnoredAny>()?.is_none() {
                return Ok(deque);
            }
            let len = N.saturating_add(1).saturating_add(seq.size_hint().unwrap_or(0));
            log::debug!("rejected sequence of at least {} elements for a deque of capacity {}", len, N);
            Err(A::Error::custom(DequeError::Overflow { len, capacity: N }))
        }
    }

}

/// Builds a [`RingBufferDeque`] from a list of elements, front to back.
/// Evaluates to a `Result`, failing with [`DequeError::Overflow`] when there are more elements
/// than the capacity named in the target type.
/// # Examples
/// ```
/// # use ringdeque::{ring_deque, RingBufferDeque};
/// let deque: RingBufferDeque<i32, 5> = ring_deque![1, 2, 3].unwrap();
/// assert_eq!(deque, [1, 2, 3]);
/// assert_eq!(deque.capacity(), 5);
/// ```
/// ```
/// # use ringdeque::{ring_deque, RingBufferDeque};
/// let result: Result<RingBufferDeque<i32, 2>, _> = ring_deque![1, 2, 3];
/// assert!(result.is_err());
/// ```
/// ```
/// # use ringdeque::{ring_deque, RingBufferDeque};
/// let deque: RingBufferDeque<i32, 2> = ring_deque![].unwrap();
/// assert!(deque.is_empty());
/// ```
#[macro_export]
macro_rules! ring_deque {
    () => {
        ::std::result::Result::<_, $crate::DequeError>::Ok($crate::RingBufferDeque::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::RingBufferDeque::from_array([$($x),+])
    };
}

#[cfg(test)]
mod ring_deque_tests {
    use super::*;
    use crate::ErrorKind;
    use std::cell::Cell;
    use std::rc::Rc;

    // counts drops, optionally recording the id of each dropped element
    #[derive(Debug, Clone)]
    struct Tracked {
        id: u32,
        drops: Rc<Cell<u32>>,
        log: Option<Rc<std::cell::RefCell<Vec<u32>>>>,
    }

    impl Tracked {
        fn new(id: u32, drops: &Rc<Cell<u32>>) -> Self {
            Tracked {
                id,
                drops: Rc::clone(drops),
                log: None,
            }
        }

        fn logged(id: u32, drops: &Rc<Cell<u32>>, log: &Rc<std::cell::RefCell<Vec<u32>>>) -> Self {
            Tracked {
                id,
                drops: Rc::clone(drops),
                log: Some(Rc::clone(log)),
            }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
            if let Some(log) = &self.log {
                log.borrow_mut().push(self.id);
            }
        }
    }

    fn filled() -> RingBufferDeque<i32, 5> {
        let mut deque = RingBufferDeque::new();
        for i in 1..=5 {
            deque.push_back(i).unwrap();
        }
        deque
    }

    #[test]
    fn full_deque_rejects_push() {
        let mut deque = filled();
        assert_eq!(deque.front(), Ok(&1));
        assert_eq!(deque.back(), Ok(&5));
        assert!(deque.is_full());
        let err = deque.push_back(6).unwrap_err();
        assert_eq!(err, DequeError::Full { capacity: 5 });
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(deque.push_front(0).unwrap_err().kind(), ErrorKind::Capacity);
        assert_eq!(deque, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn wraparound_after_pops() {
        let mut deque = filled();
        deque.pop_front().unwrap();
        deque.pop_front().unwrap();
        deque.push_back(6).unwrap();
        deque.push_back(7).unwrap();
        let items: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(items, [3, 4, 5, 6, 7]);
        assert_eq!(deque.as_slices(), (&[3, 4, 5][..], &[6, 7][..]));
        assert_eq!(deque.back(), Ok(&7));
    }

    #[test]
    fn empty_deque_rejects_access() {
        let mut deque: RingBufferDeque<i32, 5> = RingBufferDeque::new();
        assert_eq!(deque.front(), Err(DequeError::Empty { op: "front" }));
        assert_eq!(deque.back(), Err(DequeError::Empty { op: "back" }));
        assert_eq!(deque.pop_front(), Err(DequeError::Empty { op: "pop_front" }));
        assert_eq!(deque.pop_back(), Err(DequeError::Empty { op: "pop_back" }));
        assert_eq!(deque.front_mut().unwrap_err().kind(), ErrorKind::Empty);
        assert_eq!(deque.back_mut().unwrap_err().kind(), ErrorKind::Empty);
        assert!(deque.is_empty());
    }

    #[test]
    fn push_front_order() {
        let mut deque: RingBufferDeque<i32, 5> = RingBufferDeque::new();
        deque.push_front(1).unwrap();
        deque.push_front(2).unwrap();
        deque.push_front(3).unwrap();
        let items: Vec<i32> = deque.iter().copied().collect();
        assert_eq!(items, [3, 2, 1]);
    }

    #[test]
    fn copy_is_independent() {
        let full: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2, 3]).unwrap();
        let full_copy = full.clone();
        assert_eq!(full_copy, full);
        assert!(full_copy.is_full());

        let mut original: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2]).unwrap();
        let mut copy = original.clone();
        original.push_back(3).unwrap();
        assert_eq!(copy.len(), 2);
        *copy.front_mut().unwrap() = 10;
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(copy, [10, 2]);
    }

    #[test]
    fn clone_keeps_layout() {
        let mut deque: RingBufferDeque<i32, 4> = RingBufferDeque::new();
        deque.push_back(1).unwrap();
        deque.push_front(0).unwrap();
        let copy = deque.clone();
        assert_eq!(copy.as_slices(), deque.as_slices());
        assert_eq!(copy.begin().index(), 0);
        assert_eq!(copy.end().index(), 2);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([7, 8]).unwrap();
        let mut target: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2, 3]).unwrap();
        target.clone_from(&source);
        assert_eq!(target, [7, 8]);
        assert_eq!(source, [7, 8]);
    }

    #[test]
    fn bidirectional_traversal() {
        let mut deque: RingBufferDeque<i32, 5> = RingBufferDeque::new();
        deque.push_back(2).unwrap();
        deque.push_back(3).unwrap();
        deque.push_front(1).unwrap();
        let forward: Vec<i32> = deque.iter().copied().collect();

        let mut cursor = deque.end();
        let mut backward = Vec::new();
        for _ in 0..deque.len() {
            cursor.move_prev();
            backward.push(*cursor.get().unwrap());
        }
        assert_eq!(cursor, deque.begin());
        backward.reverse();
        assert_eq!(backward, forward);
    }

    #[test]
    fn from_sequence_overflow_builds_nothing() {
        let drops = Rc::new(Cell::new(0));
        let items = vec![Tracked::new(1, &drops), Tracked::new(2, &drops)];
        let result = RingBufferDeque::<Tracked, 1>::try_from(items);
        assert_eq!(result.unwrap_err(), DequeError::Overflow { len: 2, capacity: 1 });
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn try_from_slice_and_array() {
        let slice: &[i32] = &[1, 2];
        let from_slice = RingBufferDeque::<i32, 2>::try_from(slice).unwrap();
        let from_array = RingBufferDeque::<i32, 2>::try_from([1, 2]).unwrap();
        assert_eq!(from_slice, from_array);
        assert!(RingBufferDeque::<i32, 1>::try_from(slice).is_err());
    }

    #[test]
    fn take_leaves_an_empty_usable_deque() {
        let drops = Rc::new(Cell::new(0));
        let mut source: RingBufferDeque<Tracked, 3> = RingBufferDeque::new();
        source.push_back(Tracked::new(1, &drops)).unwrap();
        source.push_back(Tracked::new(2, &drops)).unwrap();

        let moved = std::mem::take(&mut source);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved.front().unwrap().id, 1);
        assert!(source.is_empty());
        assert_eq!(drops.get(), 0);

        source.push_back(Tracked::new(3, &drops)).unwrap();
        drop(source);
        assert_eq!(drops.get(), 1);
        drop(moved);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn pop_releases_the_element() {
        let drops = Rc::new(Cell::new(0));
        let mut deque: RingBufferDeque<Tracked, 2> = RingBufferDeque::new();
        deque.push_back(Tracked::new(1, &drops)).unwrap();
        deque.push_back(Tracked::new(2, &drops)).unwrap();
        drop(deque.pop_back().unwrap());
        assert_eq!(drops.get(), 1);
        drop(deque.pop_front().unwrap());
        assert_eq!(drops.get(), 2);
        drop(deque);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn rejected_push_drops_value_and_keeps_state() {
        let drops = Rc::new(Cell::new(0));
        let mut deque: RingBufferDeque<Tracked, 1> = RingBufferDeque::new();
        deque.push_back(Tracked::new(1, &drops)).unwrap();
        assert!(deque.push_front(Tracked::new(2, &drops)).is_err());
        assert_eq!(drops.get(), 1);
        assert_eq!(deque.len(), 1);
        assert_eq!(deque.front().unwrap().id, 1);
    }

    #[test]
    fn clear_drops_everything_once() {
        let drops = Rc::new(Cell::new(0));
        let mut deque: RingBufferDeque<Tracked, 4> = RingBufferDeque::new();
        for id in 0..4 {
            deque.push_front(Tracked::new(id, &drops)).unwrap();
        }
        deque.clear();
        assert_eq!(drops.get(), 4);
        assert!(deque.is_empty());
        assert_eq!(deque.begin(), deque.end());
        deque.clear();
        assert_eq!(drops.get(), 4);
        deque.push_back(Tracked::new(9, &drops)).unwrap();
        drop(deque);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn drop_order_front_to_back() {
        let drops = Rc::new(Cell::new(0));
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut deque: RingBufferDeque<Tracked, 3> = RingBufferDeque::new();
        for id in 1..=3 {
            deque.push_back(Tracked::logged(id, &drops, &log)).unwrap();
        }
        drop(deque);
        assert_eq!(*log.borrow(), [1, 2, 3]);
    }

    #[test]
    fn drop_order_back_to_front() {
        let drops = Rc::new(Cell::new(0));
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut deque = RingBufferDeque::<Tracked, 3>::new_with_drop_order::<BackToFront>();
        for id in 1..=3 {
            deque.push_back(Tracked::logged(id, &drops, &log)).unwrap();
        }
        drop(deque);
        assert_eq!(*log.borrow(), [3, 2, 1]);

        log.borrow_mut().clear();
        let mut deque: RingBufferDeque<Tracked, 3> = RingBufferDeque::new();
        for id in 1..=3 {
            deque.push_back(Tracked::logged(id, &drops, &log)).unwrap();
        }
        deque.clear_with_order(true);
        assert_eq!(*log.borrow(), [3, 2, 1]);
    }

    #[test]
    fn clone_then_drop_both() {
        let drops = Rc::new(Cell::new(0));
        let mut deque: RingBufferDeque<Tracked, 3> = RingBufferDeque::new();
        deque.push_back(Tracked::new(1, &drops)).unwrap();
        deque.push_front(Tracked::new(0, &drops)).unwrap();
        let copy = deque.clone();
        drop(deque);
        assert_eq!(drops.get(), 2);
        assert_eq!(copy.front().unwrap().id, 0);
        assert_eq!(copy.back().unwrap().id, 1);
        drop(copy);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn into_iter_drops_the_rest() {
        let drops = Rc::new(Cell::new(0));
        let mut deque: RingBufferDeque<Tracked, 3> = RingBufferDeque::new();
        for id in 0..3 {
            deque.push_back(Tracked::new(id, &drops)).unwrap();
        }
        let mut iter = deque.into_iter();
        assert_eq!(iter.next().unwrap().id, 0);
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn index_and_get() {
        let mut deque: RingBufferDeque<i32, 3> = RingBufferDeque::new();
        deque.push_back(2).unwrap();
        deque.push_front(1).unwrap();
        assert_eq!(deque[0], 1);
        assert_eq!(deque[1], 2);
        deque[1] = 20;
        assert_eq!(deque.get(1), Some(&20));
        *deque.get_mut(0).unwrap() = 10;
        assert_eq!(deque, [10, 20]);
        assert_eq!(deque.get_mut(2), None);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_len_panics() {
        let deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1]).unwrap();
        let _value = deque[1];
    }

    #[test]
    fn equality_ignores_layout() {
        let mut a: RingBufferDeque<i32, 3> = RingBufferDeque::new();
        a.push_back(2).unwrap();
        a.push_front(1).unwrap();
        let b: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2]).unwrap();
        assert_ne!(a.as_slices(), b.as_slices());
        assert_eq!(a, b);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |d: &RingBufferDeque<i32, 3>| {
            let mut hasher = DefaultHasher::new();
            d.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));

        let c: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 3]).unwrap();
        assert!(a < c);
        assert_eq!(a.cmp(&c), std::cmp::Ordering::Less);
    }

    #[test]
    fn as_mut_slices_cover_the_live_range() {
        let mut deque: RingBufferDeque<i32, 4> = RingBufferDeque::from_array([1, 2, 3, 4]).unwrap();
        deque.pop_front().unwrap();
        deque.push_back(5).unwrap();
        {
            let (head, tail) = deque.as_mut_slices();
            assert_eq!(head, &mut [2, 3, 4][..]);
            assert_eq!(tail, &mut [5][..]);
            head[0] = 0;
            tail[0] = 0;
        }
        assert_eq!(deque, [0, 3, 4, 0]);
    }

    #[test]
    fn debug_lists_elements() {
        let mut deque: RingBufferDeque<i32, 3> = RingBufferDeque::new();
        deque.push_back(2).unwrap();
        deque.push_front(1).unwrap();
        assert_eq!(format!("{deque:?}"), "[1, 2]");
    }

    #[test]
    fn test_zst_operations() {
        let mut deque = RingBufferDeque::<(), 4>::new();
        deque.push_back(()).unwrap();
        deque.push_front(()).unwrap();
        deque.push_back(()).unwrap();
        deque.push_front(()).unwrap();
        assert!(deque.push_back(()).is_err());
        assert_eq!(deque.len(), 4);
        assert_eq!(deque.pop_front(), Ok(()));
        assert_eq!(deque.iter().count(), 3);
        let copy = deque.clone();
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn zst_at_maximum_capacity_wraps() {
        let mut deque = RingBufferDeque::<(), { usize::MAX }>::new();
        deque.push_back(()).unwrap();
        deque.push_back(()).unwrap();
        deque.pop_front().unwrap();
        // front moves back across slot 0 to the last slot
        deque.push_front(()).unwrap();
        deque.push_front(()).unwrap();
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.remaining(), usize::MAX - 3);
        assert_eq!(deque.iter().count(), 3);
        assert_eq!(deque.iter().rev().count(), 3);
        assert_eq!(deque.back(), Ok(&()));
        assert_eq!(deque.pop_back(), Ok(()));
        assert_eq!(deque.as_slices().0.len() + deque.as_slices().1.len(), 2);
    }

    #[test]
    fn single_slot_deque() {
        let mut deque: RingBufferDeque<i32, 1> = RingBufferDeque::new();
        for i in 0..5 {
            if i % 2 == 0 {
                deque.push_back(i).unwrap();
                assert_eq!(deque.pop_front(), Ok(i));
            } else {
                deque.push_front(i).unwrap();
                assert_eq!(deque.pop_back(), Ok(i));
            }
            assert!(deque.is_empty());
        }
    }

    #[test]
    fn drop_order_conversion_keeps_contents() {
        let deque: RingBufferDeque<i32, 3> = RingBufferDeque::from_array([1, 2]).unwrap();
        let deque = deque.as_back_to_front();
        let deque = deque.with_drop_order::<FrontToBack>();
        assert_eq!(deque, [1, 2]);
    }

    #[test]
    fn move_only_elements() {
        let mut deque: RingBufferDeque<Box<i32>, 2> = RingBufferDeque::new();
        deque.push_back(Box::new(1)).unwrap();
        deque.push_front(Box::new(0)).unwrap();
        assert_eq!(*deque.pop_back().unwrap(), 1);
        assert_eq!(**deque.front().unwrap(), 0);
    }
}
