// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem;
use core::mem::MaybeUninit;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::RangeBounds;
use core::ptr;

use crate::add_mod;
use crate::error::Error;
use crate::error::Result;
use crate::iter::IntoIter;
use crate::iter::Iter;
use crate::iter::IterMut;
use crate::slice_assume_init_mut;
use crate::slice_assume_init_ref;
use crate::sub_mod;

macro_rules! USE {
    () => { "use ring_buffer::RingBuffer;" };
}

macro_rules! NEW {
    ($N:literal,$ty:ty) => {
        concat!("let mut buf = RingBuffer::<",stringify!($ty),">::new(",$N,").unwrap();")
    };
}

/// A fixed-capacity ring buffer.
///
/// The capacity is chosen at runtime by [`RingBuffer::new()`] and never changes. The storage is
/// allocated once, on the heap, and reused for the whole lifetime of the buffer.
///
/// See the [crate-level documentation](crate) for more details and examples.
pub struct RingBuffer<T> {
    /// Number of initialized elements.
    pub(crate) size: usize,
    /// Physical index of the front element.
    pub(crate) start: usize,
    /// Backing storage. Exactly the `size` slots starting at `start` (wrapping around the end of
    /// the slice) are initialized.
    pub(crate) items: Box<[MaybeUninit<T>]>,
}

impl<T> RingBuffer<T> {
    /// Returns an empty `RingBuffer` that can hold up to `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::{Error, RingBuffer};
    ///
    /// let buf = RingBuffer::<u32>::new(16).unwrap();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 16);
    ///
    /// assert_eq!(RingBuffer::<u32>::new(0).unwrap_err(), Error::ZeroCapacity);
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        log::trace!("allocating ring buffer storage for {capacity} elements");
        Ok(Self {
            size: 0,
            start: 0,
            items: Box::new_uninit_slice(capacity),
        })
    }

    /// Returns the capacity of the buffer.
    ///
    /// This is the maximum number of elements that the buffer can hold, and is always the value
    /// passed to [`new()`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    #[doc = NEW!(16, u32)]
    /// assert_eq!(buf.capacity(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(16, u32)]
    /// assert_eq!(buf.len(), 0);
    ///
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// buf.push_back(3);
    /// assert_eq!(buf.len(), 3);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer contains 0 elements.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(16, u32)]
    /// assert!(buf.is_empty());
    ///
    /// buf.push_back(1);
    /// assert!(!buf.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the number of elements in the buffer matches the buffer capacity.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, u32)]
    /// assert!(!buf.is_full());
    ///
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert!(!buf.is_full());
    ///
    /// buf.push_back(3);
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Returns an iterator over the elements of the buffer.
    ///
    /// The iterator advances from front to back. Use [`.rev()`](Iter::rev) to advance from back
    /// to front.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(5, char)]
    /// buf.extend("abc".chars());
    /// let mut it = buf.iter();
    ///
    /// assert_eq!(it.next(), Some(&'a'));
    /// assert_eq!(it.next(), Some(&'b'));
    /// assert_eq!(it.next(), Some(&'c'));
    /// assert_eq!(it.next(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the elements of the buffer that allows modifying each value.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(5, u32)]
    /// buf.extend([1, 2, 3]);
    /// for elem in buf.iter_mut() {
    ///     *elem += 5;
    /// }
    /// assert_eq!(buf, [6, 7, 8]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns an iterator over the specified range of logical positions.
    ///
    /// # Panics
    ///
    /// If the start of the range is greater than the end, or if the end is greater than the length
    /// of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(16, char)]
    /// buf.extend("abcdefghi".chars());
    /// let mut it = buf.range(3..6);
    ///
    /// assert_eq!(it.next(), Some(&'d'));
    /// assert_eq!(it.next(), Some(&'e'));
    /// assert_eq!(it.next(), Some(&'f'));
    /// assert_eq!(it.next(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn range<R>(&self, range: R) -> Iter<'_, T>
        where R: RangeBounds<usize>
    {
        Iter::over_range(self, range)
    }

    /// Returns an iterator over the specified range of logical positions that allows modifying
    /// each value.
    ///
    /// # Panics
    ///
    /// If the start of the range is greater than the end, or if the end is greater than the length
    /// of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(16, i32)]
    /// buf.extend([1, 2, 3, 4, 5, 6]);
    /// for elem in buf.range_mut(..3) {
    ///     *elem *= -1;
    /// }
    /// assert_eq!(buf, [-1, -2, -3, 4, 5, 6]);
    /// ```
    #[inline]
    #[must_use]
    pub fn range_mut<R>(&mut self, range: R) -> IterMut<'_, T>
        where R: RangeBounds<usize>
    {
        IterMut::over_range(self, range)
    }

    /// Rotates the internal storage so that the front element sits at the start of it, and
    /// returns all the elements as a single contiguous slice.
    ///
    /// This method does not allocate and does not change the logical order of the elements.
    /// Afterwards [`is_linearized()`](Self::is_linearized) returns `true`,
    /// [`array_one()`](Self::array_one) covers every element and [`array_two()`](Self::array_two)
    /// is empty, until new elements make the buffer wrap again.
    ///
    /// Calling it again on a buffer that is already linearized does not move anything.
    ///
    /// # Complexity
    ///
    /// *O*(*N*) time, where *N* is the capacity of the buffer, if the elements need to move.
    /// *O*(1) if the buffer is already linearized.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    /// // Create a new buffer, adding more elements than its capacity
    #[doc = NEW!(4, u32)]
    /// buf.extend([1, 4, 3, 0, 2, 5]);
    /// assert_eq!(buf, [3, 0, 2, 5]);
    /// assert!(!buf.is_linearized());
    ///
    /// // The buffer wraps around: as_slices() returns two non-empty slices
    /// assert_eq!(buf.as_slices(), (&[3, 0][..], &[2, 5][..]));
    ///
    /// assert_eq!(buf.linearize(), &mut [3, 0, 2, 5]);
    /// assert!(buf.is_linearized());
    /// assert_eq!(buf.as_slices(), (&[3, 0, 2, 5][..], &[][..]));
    ///
    /// // The slice can be modified in place, for example sorted
    /// buf.linearize().sort();
    /// assert_eq!(buf, [0, 2, 3, 5]);
    /// ```
    pub fn linearize(&mut self) -> &mut [T] {
        let start = self.start;
        let size = self.size;

        if start != 0 {
            if size == 0 || mem::size_of::<T>() == 0 {
                // No bytes to move; only the head needs to be reset
            } else if size <= self.capacity() - start {
                // The elements are already contiguous; shift them to the start of the storage
                log::trace!("linearizing ring buffer: shifting {size} elements by {start}");
                let base = self.items.as_mut_ptr();
                // SAFETY: both `start..start + size` and `0..size` are within `items`; `ptr::copy`
                // allows the two ranges to overlap
                unsafe { ptr::copy(base.add(start), base, size) };
            } else {
                log::trace!("linearizing ring buffer: rotating {} slots by {start}", self.capacity());
                self.items.rotate_left(start);
            }
            self.start = 0;
        }

        // SAFETY: `start` is 0, so the first `size` elements are initialized
        unsafe { slice_assume_init_mut(&mut self.items[..size]) }
    }

    /// Returns `true` if the front element of the buffer is at the start of the internal storage,
    /// meaning that [`as_slices()`](Self::as_slices) returns all the elements in its first slice.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, u32)]
    /// buf.extend([1, 2, 3]);
    /// assert!(buf.is_linearized());
    ///
    /// buf.push_back(4);
    /// assert!(!buf.is_linearized());
    ///
    /// buf.linearize();
    /// assert!(buf.is_linearized());
    /// ```
    #[inline]
    pub const fn is_linearized(&self) -> bool {
        self.start == 0
    }

    /// Returns a pair of slices which contain the elements of this buffer, in order.
    ///
    /// The first slice starts at the front element and runs either to the back element or to the
    /// end of the internal storage; the second slice, if non-empty, is the part that wrapped
    /// around to the start of the internal storage.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, char)]
    /// buf.push_back('a');
    /// buf.push_back('b');
    /// buf.push_back('c');
    /// buf.push_back('d');
    ///
    /// // Buffer is contiguous; second slice is empty
    /// assert_eq!(buf.as_slices(), (&['a', 'b', 'c', 'd'][..], &[][..]));
    ///
    /// buf.push_back('e');
    /// buf.push_back('f');
    ///
    /// // Buffer wraps around; both slices are non-empty
    /// assert_eq!(buf.as_slices(), (&['c', 'd'][..], &['e', 'f'][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.size == 0 {
            return (&[], &[]);
        }

        debug_assert!(self.start < self.capacity(), "start out-of-bounds");
        debug_assert!(self.size <= self.capacity(), "size out-of-bounds");

        let start = self.start;
        let end = self.tail();

        let (front, back) = if start < end {
            (&self.items[start..end], &[][..])
        } else {
            let (back, front) = self.items.split_at(start);
            (front, &back[..end])
        };

        // SAFETY: The elements in these slices are guaranteed to be initialized
        unsafe {
            (slice_assume_init_ref(front), slice_assume_init_ref(back))
        }
    }

    /// Returns a pair of mutable slices which contain the elements of this buffer, in order.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, char)]
    /// buf.extend("abcdef".chars());
    /// assert_eq!(buf, ['c', 'd', 'e', 'f']);
    ///
    /// let (left, right) = buf.as_mut_slices();
    /// assert_eq!(left, &mut ['c', 'd'][..]);
    /// assert_eq!(right, &mut ['e', 'f'][..]);
    ///
    /// left[0] = 'z';
    ///
    /// assert_eq!(buf, ['z', 'd', 'e', 'f']);
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        if self.size == 0 {
            return (&mut [][..], &mut [][..]);
        }

        debug_assert!(self.start < self.capacity(), "start out-of-bounds");
        debug_assert!(self.size <= self.capacity(), "size out-of-bounds");

        let start = self.start;
        let end = self.tail();

        let (front, back) = if start < end {
            (&mut self.items[start..end], &mut [][..])
        } else {
            let (back, front) = self.items.split_at_mut(start);
            (front, &mut back[..end])
        };

        // SAFETY: The elements in these slices are guaranteed to be initialized
        unsafe {
            (slice_assume_init_mut(front), slice_assume_init_mut(back))
        }
    }

    /// Returns the first contiguous run of elements: from the front element to either the back
    /// element or the end of the internal storage.
    ///
    /// Equivalent to `as_slices().0`.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, u32)]
    /// buf.extend([1, 2, 3, 4]);
    /// assert_eq!(buf.array_one(), &[2, 3]);
    /// assert_eq!(buf.array_two(), &[4]);
    /// ```
    #[inline]
    pub fn array_one(&self) -> &[T] {
        self.as_slices().0
    }

    /// Returns the wrapped-around run of elements, starting at the beginning of the internal
    /// storage. Empty if the buffer does not wrap.
    ///
    /// Equivalent to `as_slices().1`.
    #[inline]
    pub fn array_two(&self) -> &[T] {
        self.as_slices().1
    }

    /// Mutable version of [`array_one()`](Self::array_one).
    #[inline]
    pub fn array_one_mut(&mut self) -> &mut [T] {
        self.as_mut_slices().0
    }

    /// Mutable version of [`array_two()`](Self::array_two).
    #[inline]
    pub fn array_two_mut(&mut self) -> &mut [T] {
        self.as_mut_slices().1
    }

    /// Returns a reference to the back element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, char)]
    /// assert_eq!(buf.back(), None);
    ///
    /// buf.push_back('a');
    /// buf.push_back('b');
    /// buf.push_back('c');
    /// assert_eq!(buf.back(), Some(&'c'));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.size.checked_sub(1)?)
    }

    /// Returns a mutable reference to the back element, or `None` if the buffer is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.size.checked_sub(1)?)
    }

    /// Returns a reference to the front element, or `None` if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, char)]
    /// assert_eq!(buf.front(), None);
    ///
    /// buf.push_back('a');
    /// buf.push_back('b');
    /// buf.push_back('c');
    /// assert_eq!(buf.front(), Some(&'a'));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or `None` if the buffer is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the element at the given logical index, or `None` if the element
    /// does not exist.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, char)]
    /// assert_eq!(buf.get(1), None);
    ///
    /// buf.push_back('a');
    /// buf.push_back('b');
    /// buf.push_back('c');
    /// assert_eq!(buf.get(1), Some(&'b'));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        let index = self.physical_index(index);
        // SAFETY: `index` is in a valid range; it is guaranteed to point to an initialized element
        Some(unsafe { self.items[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at the given logical index, or `None` if the
    /// element does not exist.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size {
            return None;
        }
        let index = self.physical_index(index);
        // SAFETY: `index` is in a valid range; it is guaranteed to point to an initialized element
        Some(unsafe { self.items[index].assume_init_mut() })
    }

    /// Returns a reference to the element at the given logical index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than [`len()`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::<char>::new(4).unwrap();
    /// buf.extend("abc".chars());
    ///
    /// assert_eq!(buf.at(0), Ok(&'a'));
    /// assert_eq!(buf.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.size;
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at the given logical index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than [`len()`](Self::len).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.size;
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Appends an element to the back of the buffer.
    ///
    /// If the buffer is full, the element at the front of the buffer is dropped and its slot is
    /// reused. See [`push_back_evict()`](Self::push_back_evict) to get the dropped element back,
    /// and [`try_push_back()`](Self::try_push_back) for a non-overwriting version.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, char)]
    ///
    /// buf.push_back('a'); assert_eq!(buf, ['a']);
    /// buf.push_back('b'); assert_eq!(buf, ['a', 'b']);
    /// buf.push_back('c'); assert_eq!(buf, ['a', 'b', 'c']);
    /// // The buffer is now full; adding more values causes the front elements to be dropped
    /// buf.push_back('d'); assert_eq!(buf, ['b', 'c', 'd']);
    /// buf.push_back('e'); assert_eq!(buf, ['c', 'd', 'e']);
    /// ```
    #[inline]
    pub fn push_back(&mut self, item: T) {
        drop(self.push_back_evict(item));
    }

    /// Appends an element to the back of the buffer, returning the front element if it had to be
    /// evicted to make room.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(2, char)]
    ///
    /// assert_eq!(buf.push_back_evict('a'), None);
    /// assert_eq!(buf.push_back_evict('b'), None);
    /// assert_eq!(buf.push_back_evict('c'), Some('a'));
    /// assert_eq!(buf, ['b', 'c']);
    /// ```
    pub fn push_back_evict(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            // At capacity; the tail slot is the front slot
            let start = self.start;
            // SAFETY: the buffer is full, so the front element is initialized; it is overwritten
            // right away, so it is read only once
            let evicted = unsafe { self.items[start].assume_init_read() };
            self.items[start].write(item);
            self.inc_start();
            Some(evicted)
        } else {
            // Some uninitialized slots left; append at the end
            let tail = self.tail();
            self.items[tail].write(item);
            self.inc_size();
            None
        }
    }

    /// Appends an element to the back of the buffer.
    ///
    /// If the buffer is full, the buffer is not modified and the given element is returned as an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(2, char)]
    ///
    /// assert_eq!(buf.try_push_back('a'), Ok(()));
    /// assert_eq!(buf.try_push_back('b'), Ok(()));
    /// // The buffer is now full; adding more values results in an error
    /// assert_eq!(buf.try_push_back('c'), Err('c'));
    /// assert_eq!(buf, ['a', 'b']);
    /// ```
    pub fn try_push_back(&mut self, item: T) -> core::result::Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let tail = self.tail();
        self.items[tail].write(item);
        self.inc_size();
        Ok(())
    }

    /// Prepends an element to the front of the buffer.
    ///
    /// If the buffer is full, the element at the back of the buffer is dropped and its slot is
    /// reused. See [`push_front_evict()`](Self::push_front_evict) to get the dropped element back,
    /// and [`try_push_front()`](Self::try_push_front) for a non-overwriting version.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, u32)]
    ///
    /// buf.push_front(1); assert_eq!(buf, [1]);
    /// buf.push_front(2); assert_eq!(buf, [2, 1]);
    /// buf.push_front(3); assert_eq!(buf, [3, 2, 1]);
    /// // The buffer is now full; adding more values causes the back elements to be dropped
    /// buf.push_front(4); assert_eq!(buf, [4, 3, 2]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, item: T) {
        drop(self.push_front_evict(item));
    }

    /// Prepends an element to the front of the buffer, returning the back element if it had to
    /// be evicted to make room.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(2, char)]
    ///
    /// assert_eq!(buf.push_front_evict('a'), None);
    /// assert_eq!(buf.push_front_evict('b'), None);
    /// assert_eq!(buf.push_front_evict('c'), Some('a'));
    /// assert_eq!(buf, ['c', 'b']);
    /// ```
    pub fn push_front_evict(&mut self, item: T) -> Option<T> {
        if self.is_full() {
            // At capacity; the slot before the front one holds the back element
            let back = sub_mod(self.start, 1, self.capacity());
            // SAFETY: the buffer is full, so the back element is initialized; it is overwritten
            // right away, so it is read only once
            let evicted = unsafe { self.items[back].assume_init_read() };
            self.items[back].write(item);
            self.start = back;
            Some(evicted)
        } else {
            // Some uninitialized slots left; insert before the start
            self.dec_start();
            let start = self.start;
            self.items[start].write(item);
            self.inc_size();
            None
        }
    }

    /// Prepends an element to the front of the buffer.
    ///
    /// If the buffer is full, the buffer is not modified and the given element is returned as an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(2, char)]
    ///
    /// assert_eq!(buf.try_push_front('a'), Ok(()));
    /// assert_eq!(buf.try_push_front('b'), Ok(()));
    /// assert_eq!(buf.try_push_front('c'), Err('c'));
    /// assert_eq!(buf, ['b', 'a']);
    /// ```
    pub fn try_push_front(&mut self, item: T) -> core::result::Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.dec_start();
        let start = self.start;
        self.items[start].write(item);
        self.inc_size();
        Ok(())
    }

    /// Removes and returns an element from the back of the buffer.
    ///
    /// If the buffer is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, char)]
    /// buf.extend(['a', 'b', 'c']);
    ///
    /// assert_eq!(buf.pop_back(), Some('c'));
    /// assert_eq!(buf.pop_back(), Some('b'));
    /// assert_eq!(buf.pop_back(), Some('a'));
    /// assert_eq!(buf.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let back = self.physical_index(self.size - 1);
        self.dec_size();
        // SAFETY: the slot held the back element, which was initialized; `size` no longer covers
        // it, so it is read only once
        Some(unsafe { self.items[back].assume_init_read() })
    }

    /// Removes and returns an element from the front of the buffer.
    ///
    /// If the buffer is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(3, char)]
    /// buf.extend(['a', 'b', 'c']);
    ///
    /// assert_eq!(buf.pop_front(), Some('a'));
    /// assert_eq!(buf.pop_front(), Some('b'));
    /// assert_eq!(buf.pop_front(), Some('c'));
    /// assert_eq!(buf.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let front = self.start;
        self.dec_size();
        self.inc_start();
        // SAFETY: the slot held the front element, which was initialized; `start` and `size` no
        // longer cover it, so it is read only once
        Some(unsafe { self.items[front].assume_init_read() })
    }

    /// Swap the element at logical index `i` with the element at logical index `j`.
    ///
    /// # Panics
    ///
    /// If either `i` or `j` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(5, char)]
    /// buf.extend(['a', 'b', 'c', 'd']);
    /// buf.swap(0, 3);
    /// assert_eq!(buf, ['d', 'b', 'c', 'a']);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.size, "i index out-of-bounds");
        assert!(j < self.size, "j index out-of-bounds");
        let i = self.physical_index(i);
        let j = self.physical_index(j);
        self.items.swap(i, j);
    }

    /// Shortens the buffer, keeping only the front `len` elements and dropping the rest.
    ///
    /// If `len` is equal or greater to the buffer's current length, this has no effect.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, u32)]
    /// buf.extend([10, 20, 30]);
    ///
    /// buf.truncate_back(1);
    /// assert_eq!(buf, [10]);
    ///
    /// buf.truncate_back(8);
    /// assert_eq!(buf, [10]);
    /// ```
    pub fn truncate_back(&mut self, len: usize) {
        if len >= self.size {
            // Nothing to do
            return;
        }

        let drop_from = self.physical_index(len);
        let drop_len = self.size - len;
        // Shrink first, so that a panicking destructor cannot cause a double drop
        self.size = len;
        // SAFETY: the run was initialized and is no longer covered by `size`
        unsafe { self.drop_run(drop_from, drop_len) };
    }

    /// Shortens the buffer, keeping only the back `len` elements and dropping the rest.
    ///
    /// If `len` is equal or greater to the buffer's current length, this has no effect.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, u32)]
    /// buf.extend([10, 20, 30]);
    ///
    /// buf.truncate_front(1);
    /// assert_eq!(buf, [30]);
    /// ```
    pub fn truncate_front(&mut self, len: usize) {
        if len >= self.size {
            // Nothing to do
            return;
        }

        let drop_from = self.start;
        let drop_len = self.size - len;
        self.start = add_mod(self.start, drop_len, self.capacity());
        self.size = len;
        // SAFETY: the run was initialized and is no longer covered by `start` and `size`
        unsafe { self.drop_run(drop_from, drop_len) };
    }

    /// Drops all the elements in the buffer.
    ///
    /// The storage is kept, so the buffer can be refilled without allocating.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(4, u32)]
    /// buf.extend([10, 20, 30]);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 4);
    /// assert!(buf.is_linearized());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate_back(0);
        self.start = 0;
    }

    /// Maps a logical index to its physical position in `items`.
    #[inline]
    pub(crate) fn physical_index(&self, index: usize) -> usize {
        let capacity = self.capacity();
        debug_assert!(index < capacity, "index out-of-bounds");
        debug_assert!(self.start < capacity, "start out-of-bounds");
        if index < capacity - self.start {
            index + self.start
        } else {
            index - (capacity - self.start)
        }
    }

    /// Physical position one past the back element: the next slot written by a back push.
    #[inline]
    pub(crate) fn tail(&self) -> usize {
        add_mod(self.start, self.size, self.capacity())
    }

    #[inline]
    fn inc_start(&mut self) {
        debug_assert!(self.start < self.capacity(), "start out-of-bounds");
        self.start = add_mod(self.start, 1, self.capacity());
    }

    #[inline]
    fn dec_start(&mut self) {
        debug_assert!(self.start < self.capacity(), "start out-of-bounds");
        self.start = sub_mod(self.start, 1, self.capacity());
    }

    #[inline]
    fn inc_size(&mut self) {
        debug_assert!(self.size < self.capacity(), "size at capacity limit");
        self.size += 1;
    }

    #[inline]
    fn dec_size(&mut self) {
        debug_assert!(self.size > 0, "size is 0");
        self.size -= 1;
    }

    /// Returns the uninitialized slots, in the order a back push would fill them.
    #[inline]
    fn slices_uninit_mut(&mut self) -> (&mut [MaybeUninit<T>], &mut [MaybeUninit<T>]) {
        debug_assert!(self.start < self.capacity(), "start out-of-bounds");
        debug_assert!(self.size < self.capacity(), "no uninitialized slots");

        let start = self.start;
        let end = self.tail();
        if end < start {
            (&mut self.items[end..start], &mut [][..])
        } else {
            let (left, right) = self.items.split_at_mut(end);
            (right, &mut left[..start])
        }
    }

    /// Drops `len` elements starting at physical index `from`, wrapping around the end of the
    /// storage.
    ///
    /// # Safety
    ///
    /// All the elements in the run must be initialized, and must not be reachable through `start`
    /// and `size` anymore.
    unsafe fn drop_run(&mut self, from: usize, len: usize) {
        if len == 0 {
            return;
        }

        let capacity = self.capacity();
        debug_assert!(from < capacity, "start of run out-of-bounds");
        debug_assert!(len <= capacity, "length of run out-of-bounds");

        // Drops all the items in the slice when dropped. This is needed to ensure that all
        // elements are dropped in case a panic occurs during the drop of a single element.
        struct Dropper<'a, T>(&'a mut [MaybeUninit<T>]);

        impl<T> Drop for Dropper<'_, T> {
            #[inline]
            fn drop(&mut self) {
                // SAFETY: the caller of `drop_run` is responsible to check that this slice was
                // initialized.
                unsafe { ptr::drop_in_place(slice_assume_init_mut(self.0)); }
            }
        }

        let (front, back) = if len <= capacity - from {
            (&mut self.items[from..from + len], &mut [][..])
        } else {
            let wrapped = len - (capacity - from);
            let (left, right) = self.items.split_at_mut(from);
            (right, &mut left[..wrapped])
        };

        // Locals are dropped in reverse order: `front` goes first
        let _back = Dropper(back);
        let _front = Dropper(front);
    }
}

impl<T> RingBuffer<T>
    where T: Clone
{
    /// Clones and appends all the elements from the slice to the back of the buffer.
    ///
    /// This is an optimized version of [`extend()`](Self::extend) for slices.
    ///
    /// If slice contains more values than the available capacity, the elements at the front of
    /// the buffer are dropped.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(5, u32)]
    /// buf.extend([1, 2, 3]);
    /// buf.extend_from_slice(&[4, 5, 6, 7]);
    /// assert_eq!(buf, [3, 4, 5, 6, 7]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        fn write_uninit_slice_cloned<T: Clone>(dst: &mut [MaybeUninit<T>], src: &[T]) {
            // Each call to `clone()` may panic, therefore we need to track how many elements we
            // successfully cloned so that we can drop them in case of panic.
            struct Guard<'a, T> {
                dst: &'a mut [MaybeUninit<T>],
                initialized: usize,
            }

            impl<T> Drop for Guard<'_, T> {
                fn drop(&mut self) {
                    let initialized = &mut self.dst[..self.initialized];
                    // SAFETY: this slice contain only initialized objects
                    unsafe { ptr::drop_in_place(slice_assume_init_mut(initialized)); }
                }
            }

            debug_assert_eq!(dst.len(), src.len());
            let mut guard = Guard { dst, initialized: 0 };
            for (slot, item) in guard.dst.iter_mut().zip(src) {
                slot.write(item.clone());
                guard.initialized += 1;
            }

            // All the `clone()` calls succeeded; get rid of the guard without running its `drop()`
            // implementation
            mem::forget(guard);
        }

        if other.is_empty() {
            return;
        }

        let capacity = self.capacity();

        if other.len() < capacity {
            // All the elements of `other` fit into the buffer
            let free_size = capacity - self.size;
            let final_size = if other.len() < free_size {
                // All the elements of `other` fit at the back of the buffer
                self.size + other.len()
            } else {
                // Some of the elements of `other` need to overwrite the front of the buffer
                self.truncate_front(capacity - other.len());
                capacity
            };

            let (right, left) = self.slices_uninit_mut();

            let write_len = core::cmp::min(right.len(), other.len());
            write_uninit_slice_cloned(&mut right[..write_len], &other[..write_len]);

            let other = &other[write_len..];
            debug_assert!(left.len() >= other.len());
            write_uninit_slice_cloned(&mut left[..other.len()], other);

            self.size = final_size;
        } else {
            // `other` overwrites the whole buffer; keep only its last `capacity` elements
            self.clear();

            let other = &other[other.len() - capacity..];
            write_uninit_slice_cloned(&mut self.items, other);

            self.size = capacity;
        }
    }

    /// Clones the elements of the buffer into a new [`Vec`], leaving the buffer unchanged.
    ///
    /// # Examples
    ///
    /// ```
    #[doc = USE!()]
    ///
    #[doc = NEW!(5, u32)]
    /// buf.extend([1, 2, 3]);
    /// let vec: Vec<u32> = buf.to_vec();
    ///
    /// assert_eq!(buf, [1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.size);
        let (front, back) = self.as_slices();
        vec.extend_from_slice(front);
        vec.extend_from_slice(back);
        debug_assert_eq!(vec.len(), self.size);
        vec
    }
}

impl<T> TryFrom<Vec<T>> for RingBuffer<T> {
    type Error = Error;

    /// Turns a vector into a full, linearized buffer whose capacity is the length of the vector.
    ///
    /// The elements are not copied; the vector allocation becomes the buffer storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::try_from(vec![1, 2, 3]).unwrap();
    /// assert!(buf.is_full());
    ///
    /// buf.push_back(4);
    /// assert_eq!(buf, [2, 3, 4]);
    /// ```
    fn try_from(vec: Vec<T>) -> Result<Self> {
        if vec.is_empty() {
            return Err(Error::ZeroCapacity);
        }
        let size = vec.len();
        let items = Box::into_raw(vec.into_boxed_slice()) as *mut [MaybeUninit<T>];
        // SAFETY: `MaybeUninit<T>` has the same size and alignment as `T`, so the allocation
        // layout is unchanged
        let items = unsafe { Box::from_raw(items) };
        Ok(Self { size, start: 0, items })
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = T>
    {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T> Extend<&'a T> for RingBuffer<T>
    where T: Copy
{
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = &'a T>
    {
        iter.into_iter().for_each(|item| self.push_back(*item));
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self)
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    /// # Panics
    ///
    /// If `index` is not less than the length of the buffer. Use [`RingBuffer::at()`] for a
    /// non-panicking version.
    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, U> PartialEq<RingBuffer<U>> for RingBuffer<T>
    where T: PartialEq<U>
{
    fn eq(&self, other: &RingBuffer<U>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (a_left, a_right) = self.as_slices();
        let (b_left, b_right) = other.as_slices();

        match a_left.len().cmp(&b_left.len()) {
            Ordering::Less => {
                let x = a_left.len();
                let y = b_left.len() - x;
                a_left[..] == b_left[..x] && a_right[..y] == b_left[x..] && a_right[y..] == b_right[..]
            },
            Ordering::Greater => {
                let x = b_left.len();
                let y = a_left.len() - x;
                a_left[..x] == b_left[..] && a_left[x..] == b_right[..y] && a_right[..] == b_right[y..]
            },
            Ordering::Equal => {
                a_left == b_left && a_right == b_right
            },
        }
    }
}

impl<T> Eq for RingBuffer<T> where T: Eq {}

impl<T, U> PartialEq<[U]> for RingBuffer<T>
    where T: PartialEq<U>
{
    fn eq(&self, other: &[U]) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (a_left, a_right) = self.as_slices();
        let (b_left, b_right) = other.split_at(a_left.len());

        a_left == b_left && a_right == b_right
    }
}

impl<const M: usize, T, U> PartialEq<[U; M]> for RingBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self == &other[..]
    }
}

impl<'a, T, U> PartialEq<&'a [U]> for RingBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U]) -> bool {
        self == *other
    }
}

impl<'a, T, U> PartialEq<&'a mut [U]> for RingBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a mut [U]) -> bool {
        self == *other
    }
}

impl<'a, const M: usize, T, U> PartialEq<&'a [U; M]> for RingBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U; M]) -> bool {
        self == *other
    }
}

impl<'a, const M: usize, T, U> PartialEq<&'a mut [U; M]> for RingBuffer<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a mut [U; M]) -> bool {
        self == *other
    }
}

impl<T, U> PartialOrd<RingBuffer<U>> for RingBuffer<T>
    where T: PartialOrd<U>
{
    fn partial_cmp(&self, other: &RingBuffer<U>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingBuffer<T>
    where T: Ord
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T> Clone for RingBuffer<T>
    where T: Clone
{
    fn clone(&self) -> Self {
        let mut buf = Self {
            size: 0,
            start: 0,
            items: Box::new_uninit_slice(self.capacity()),
        };
        buf.extend(self.iter().cloned());
        buf
    }

    fn clone_from(&mut self, other: &Self) {
        if self.capacity() != other.capacity() {
            *self = other.clone();
            return;
        }
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T> Drop for RingBuffer<T> {
    #[inline]
    fn drop(&mut self) {
        // `clear()` will make sure that every element is dropped in a safe way
        self.clear();
    }
}

impl<T> fmt::Debug for RingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
