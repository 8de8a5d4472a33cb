// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Random-access positions inside a [`RingBuffer`].
//!
//! A [`Cursor`] remembers a *physical* slot of the buffer storage. Physical slots wrap around at
//! the capacity boundary, so they do not grow monotonically with the logical position of the
//! elements they hold. Every comparison and every offset is therefore computed after mapping the
//! physical slot to its *linearized* index: the index the slot would have if the buffer were
//! rotated so that its front element sat at physical slot 0.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Index;
use core::ops::Sub;
use core::ops::SubAssign;
use core::ptr;

use crate::RingBuffer;

impl<T> RingBuffer<T> {
    /// Returns a cursor pointing at the front element, or equal to [`end()`](Self::end) if the
    /// buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::<char>::new(3).unwrap();
    /// assert_eq!(buf.begin(), buf.end());
    ///
    /// buf.extend("abcd".chars());
    /// let mut cursor = buf.begin();
    /// assert_eq!(cursor.get(), Some(&'b'));
    ///
    /// cursor.move_next();
    /// cursor.move_next();
    /// assert_eq!(cursor.get(), Some(&'d'));
    ///
    /// cursor.move_next();
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor, buf.end());
    /// ```
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor { buf: self, pos: self.unlinearize_index(0) }
    }

    /// Returns the sentinel cursor positioned one past the back element.
    ///
    /// The sentinel never refers to an element: [`Cursor::get()`] returns `None` for it.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor { buf: self, pos: self.end_index() }
    }

    /// Returns a cursor pointing at the given logical index. An index equal to the length of the
    /// buffer gives the [`end()`](Self::end) sentinel.
    ///
    /// # Panics
    ///
    /// If `index` is greater than the length of the buffer.
    #[inline]
    #[must_use]
    pub fn cursor(&self, index: usize) -> Cursor<'_, T> {
        assert!(index <= self.size,
                "cursor index {index} out of range for buffer of length {}", self.size);
        Cursor { buf: self, pos: self.unlinearize_index(index) }
    }

    /// Physical position of the end sentinel.
    ///
    /// When the buffer is not full this is the tail slot, which holds no element. When the buffer
    /// is full the tail slot is also the front slot, so the sentinel is placed one past the end of
    /// the storage instead.
    #[inline]
    pub(crate) fn end_index(&self) -> usize {
        if self.is_full() {
            self.capacity()
        } else {
            self.tail()
        }
    }

    /// Maps a physical position to the index it would have in a linearized buffer.
    #[inline]
    pub(crate) fn linearize_index(&self, pos: usize) -> usize {
        let capacity = self.capacity();
        debug_assert!(pos <= capacity, "position out-of-bounds");
        if pos == capacity {
            debug_assert!(self.is_full(), "past-the-end position on a buffer that is not full");
            self.size
        } else if pos >= self.start {
            pos - self.start
        } else {
            (capacity - self.start) + pos
        }
    }

    /// Inverse of [`linearize_index()`](Self::linearize_index).
    #[inline]
    pub(crate) fn unlinearize_index(&self, index: usize) -> usize {
        debug_assert!(index <= self.size, "index out-of-bounds");
        if index == self.size {
            self.end_index()
        } else {
            self.physical_index(index)
        }
    }

    /// Physical position following `pos`, wrapping at the end of the storage.
    #[inline]
    pub(crate) fn increment(&self, pos: usize) -> usize {
        debug_assert!(pos < self.capacity(), "cannot increment the end position");
        let next = if pos + 1 == self.capacity() { 0 } else { pos + 1 };
        if next == self.start {
            // Went all the way around a full buffer
            self.end_index()
        } else {
            next
        }
    }

    /// Physical position preceding `pos`, wrapping at the start of the storage.
    #[inline]
    pub(crate) fn decrement(&self, pos: usize) -> usize {
        let pos = if pos == self.capacity() { self.tail() } else { pos };
        if pos == 0 {
            self.capacity() - 1
        } else {
            pos - 1
        }
    }
}

/// A random-access position inside a [`RingBuffer`].
///
/// Cursors are created by [`RingBuffer::begin()`], [`RingBuffer::end()`] and
/// [`RingBuffer::cursor()`]. They borrow the buffer, so the buffer cannot be modified (or
/// [linearized](RingBuffer::linearize)) while a cursor is alive.
///
/// Cursors can be moved by any offset with `+` and `-`, compared with `<`, `>`, `<=`, `>=`, and
/// subtracted from each other to get the number of elements between them. All of these operate on
/// logical positions, so they behave the same no matter where the buffer wraps.
///
/// # Panics
///
/// Moving a cursor before the front element or past the end sentinel panics. Subtracting cursors
/// from two different buffers panics; comparing them with `<` and friends returns `false`.
///
/// # Examples
///
/// ```
/// use ring_buffer::RingBuffer;
///
/// let mut buf = RingBuffer::<u32>::new(4).unwrap();
/// buf.extend(0..10);
/// assert_eq!(buf, [6, 7, 8, 9]);
///
/// let begin = buf.begin();
/// let third = begin + 2;
/// assert_eq!(third.get(), Some(&8));
/// assert_eq!(third - begin, 2);
/// assert_eq!(begin - third, -2);
/// assert!(begin < third && third < buf.end());
/// assert_eq!(third[-1], 7);
/// ```
pub struct Cursor<'a, T> {
    buf: &'a RingBuffer<T>,
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the element under the cursor, or `None` for the end sentinel.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.is_end() {
            None
        } else {
            self.buf.get(self.index())
        }
    }

    /// Returns the logical index of the cursor: `0` for the front element, the length of the
    /// buffer for the end sentinel.
    #[inline]
    pub fn index(&self) -> usize {
        self.buf.linearize_index(self.pos)
    }

    /// Returns the physical slot of the internal storage the cursor points at.
    ///
    /// For the end sentinel of a full buffer this is the capacity of the buffer, one past the last
    /// slot.
    #[inline]
    pub fn physical_index(&self) -> usize {
        self.pos
    }

    /// Returns `true` if this is the end sentinel.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.buf.end_index()
    }

    /// Moves the cursor to the next element, or to the end sentinel if it was on the back element.
    ///
    /// # Panics
    ///
    /// If the cursor already is the end sentinel.
    #[inline]
    pub fn move_next(&mut self) {
        assert!(!self.is_end(), "cannot move a cursor past the end of the buffer");
        self.pos = self.buf.increment(self.pos);
    }

    /// Moves the cursor to the previous element.
    ///
    /// # Panics
    ///
    /// If the cursor is on the front element (or is the end sentinel of an empty buffer).
    #[inline]
    pub fn move_prev(&mut self) {
        assert!(self.index() > 0, "cannot move a cursor before the front of the buffer");
        self.pos = self.buf.decrement(self.pos);
    }

    /// Returns the cursor at logical index `target`, or panics with a message mentioning `offset`.
    fn seek(self, target: Option<usize>, offset: isize) -> Self {
        let len = self.buf.len();
        match target {
            Some(index) if index <= len => Self { buf: self.buf, pos: self.buf.unlinearize_index(index) },
            _ => panic!("cursor offset {offset} from index {} out of range for buffer of length {len}",
                        self.index()),
        }
    }

    fn assert_same_buffer(&self, other: &Self) {
        assert!(ptr::eq(self.buf, other.buf), "cursors belong to different buffers");
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(self, offset: isize) -> Self {
        let index = self.index();
        let target = if offset >= 0 {
            index.checked_add(offset.unsigned_abs())
        } else {
            index.checked_sub(offset.unsigned_abs())
        };
        self.seek(target, offset)
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: isize) -> Self {
        let index = self.index();
        let target = if offset >= 0 {
            index.checked_sub(offset.unsigned_abs())
        } else {
            index.checked_add(offset.unsigned_abs())
        };
        self.seek(target, offset.wrapping_neg())
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, offset: isize) {
        *self = *self + offset;
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, offset: isize) {
        *self = *self - offset;
    }
}

impl<'a, T> Sub<Cursor<'a, T>> for Cursor<'a, T> {
    type Output = isize;

    /// Returns the logical distance between two cursors: the number of
    /// [`move_next()`](Cursor::move_next) calls that bring `other` to `self`, negative if `self`
    /// comes first.
    ///
    /// # Panics
    ///
    /// If the two cursors belong to different buffers.
    #[inline]
    fn sub(self, other: Cursor<'a, T>) -> isize {
        self.assert_same_buffer(&other);
        (self.index() as isize).wrapping_sub(other.index() as isize)
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;

    /// Returns the element `offset` positions away from the cursor.
    ///
    /// # Panics
    ///
    /// If the resulting position is outside of the buffer, or is the end sentinel.
    #[inline]
    fn index(&self, offset: isize) -> &T {
        match (*self + offset).get() {
            Some(item) => item,
            None => panic!("cannot dereference the end of the buffer"),
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.buf, other.buf) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.buf, other.buf) {
            Some(self.index().cmp(&other.index()))
        } else {
            None
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index())
            .field("physical_index", &self.pos)
            .field("current", &self.get())
            .finish()
    }
}
