// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Bound;
use core::ops::RangeBounds;
use crate::RingBuffer;

/// An owning [iterator](core::iter::Iterator) over the elements of a [`RingBuffer`].
///
/// This yields the elements of a `RingBuffer` from front to back.
///
/// This struct is created when iterating over a `RingBuffer`. See the documentation for
/// [`IntoIterator`] for more details.
#[derive(Clone)]
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(inner: RingBuffer<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.pop_back()
    }
}

impl<T> fmt::Debug for IntoIter<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// Resolves `range` to a `start..end` pair of logical indexes.
///
/// # Panics
///
/// If the range is decreasing, or if its end is past the length of the buffer.
pub(crate) fn translate_range_bounds<T, R>(buf: &RingBuffer<T>, range: R) -> (usize, usize)
    where R: RangeBounds<usize>
{
    let start = match range.start_bound() {
        Bound::Included(x) => *x,
        Bound::Excluded(x) => x.checked_add(1)
                               .expect("range start index exceeds maximum usize"),
        Bound::Unbounded   => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(x) => x.checked_add(1)
                               .expect("range end index exceeds maximum usize"),
        Bound::Excluded(x) => *x,
        Bound::Unbounded   => buf.len(),
    };

    assert!(end <= buf.len(), "range end index {} out of range for buffer of length {}", end, buf.len());
    assert!(start <= end, "range starts at index {start} but ends at index {end}");

    (start, end)
}

fn slice_take_first<'a, T>(slice: &mut &'a [T]) -> Option<&'a T> {
    let (item, rest) = slice.split_first()?;
    *slice = rest;
    Some(item)
}

fn slice_take_first_mut<'a, T>(slice: &mut &'a mut [T]) -> Option<&'a mut T> {
    let (item, rest) = core::mem::take(slice).split_first_mut()?;
    *slice = rest;
    Some(item)
}

fn slice_take_last<'a, T>(slice: &mut &'a [T]) -> Option<&'a T> {
    let (item, rest) = slice.split_last()?;
    *slice = rest;
    Some(item)
}

fn slice_take_last_mut<'a, T>(slice: &mut &'a mut [T]) -> Option<&'a mut T> {
    let (item, rest) = core::mem::take(slice).split_last_mut()?;
    *slice = rest;
    Some(item)
}

/// Splits the logical range `start..end` of the two runs `front` and `back` into the two pieces
/// that fall inside the range.
fn narrow<'a, T>(front: &'a [T], back: &'a [T], start: usize, end: usize) -> (&'a [T], &'a [T]) {
    debug_assert!(start <= end && end <= front.len() + back.len());
    if end <= front.len() {
        (&front[start..end], &[])
    } else if start >= front.len() {
        (&back[start - front.len()..end - front.len()], &[])
    } else {
        (&front[start..], &back[..end - front.len()])
    }
}

fn narrow_mut<'a, T>(front: &'a mut [T], back: &'a mut [T], start: usize, end: usize) -> (&'a mut [T], &'a mut [T]) {
    debug_assert!(start <= end && end <= front.len() + back.len());
    let split = front.len();
    if end <= split {
        (&mut front[start..end], &mut [])
    } else if start >= split {
        (&mut back[start - split..end - split], &mut [])
    } else {
        (&mut front[start..], &mut back[..end - split])
    }
}

/// An [iterator](core::iter::Iterator) over the elements of a `RingBuffer`.
///
/// This struct is created by [`RingBuffer::iter()`] and [`RingBuffer::range()`]. See their
/// documentation for more details.
pub struct Iter<'a, T> {
    front: &'a [T],
    back: &'a [T],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buf: &'a RingBuffer<T>) -> Self {
        let (front, back) = buf.as_slices();
        Self { front, back }
    }

    pub(crate) fn over_range<R>(buf: &'a RingBuffer<T>, range: R) -> Self
        where R: RangeBounds<usize>
    {
        let (start, end) = translate_range_bounds(buf, range);
        let (front, back) = buf.as_slices();
        let (front, back) = narrow(front, back, start, end);
        Self { front, back }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        slice_take_first(&mut self.front).or_else(|| slice_take_first(&mut self.back))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        slice_take_last(&mut self.back).or_else(|| slice_take_last(&mut self.front))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { front: self.front, back: self.back }
    }
}

impl<T> fmt::Debug for Iter<'_, T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A mutable [iterator](core::iter::Iterator) over the elements of a `RingBuffer`.
///
/// This struct is created by [`RingBuffer::iter_mut()`] and [`RingBuffer::range_mut()`]. See
/// their documentation for more details.
pub struct IterMut<'a, T> {
    front: &'a mut [T],
    back: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(buf: &'a mut RingBuffer<T>) -> Self {
        let (front, back) = buf.as_mut_slices();
        Self { front, back }
    }

    pub(crate) fn over_range<R>(buf: &'a mut RingBuffer<T>, range: R) -> Self
        where R: RangeBounds<usize>
    {
        let (start, end) = translate_range_bounds(buf, range);
        let (front, back) = buf.as_mut_slices();
        let (front, back) = narrow_mut(front, back, start, end);
        Self { front, back }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = slice_take_first_mut(&mut self.front) {
            Some(item)
        } else {
            slice_take_first_mut(&mut self.back)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if let Some(item) = slice_take_last_mut(&mut self.back) {
            Some(item)
        } else {
            slice_take_last_mut(&mut self.front)
        }
    }
}

impl<T> fmt::Debug for IterMut<'_, T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let it = Iter { front: &*self.front, back: &*self.back };
        it.fmt(f)
    }
}
