// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

//! This crate implements a fixed-capacity [ring buffer], also known as circular buffer, cyclic
//! buffer or circular queue.
//!
//! The main struct is [`RingBuffer`]. Its capacity is chosen at runtime, when the buffer is
//! constructed, and never changes afterwards: the backing storage is allocated exactly once.
//! Elements can be added and removed at both ends, and once the capacity is reached, adding an
//! element at one end silently discards the element at the other end.
//!
//! [ring buffer]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! // Initialize a new, empty ring buffer with a capacity of 5 elements
//! let mut buf = RingBuffer::<u32>::new(5).unwrap();
//!
//! // Add a few elements
//! buf.push_back(1);
//! buf.push_back(2);
//! buf.push_back(3);
//! assert_eq!(buf, [1, 2, 3]);
//!
//! // Add more elements to fill the buffer capacity completely
//! buf.push_back(4);
//! buf.push_back(5);
//! assert_eq!(buf, [1, 2, 3, 4, 5]);
//!
//! // Adding more elements than the buffer can contain causes the front elements to be
//! // automatically dropped
//! buf.push_back(6);
//! assert_eq!(buf, [2, 3, 4, 5, 6]); // `1` got dropped to make room for `6`
//! ```
//!
//! A buffer with no room at all makes no sense, so asking for one is an error:
//!
//! ```
//! use ring_buffer::{Error, RingBuffer};
//!
//! assert_eq!(RingBuffer::<u32>::new(0).unwrap_err(), Error::ZeroCapacity);
//! ```
//!
//! # Physical and logical positions
//!
//! Internally the elements live in a single block of `capacity` slots. The front element may sit
//! anywhere in that block, and the sequence wraps around the end of the block back to its start.
//! Indexes passed to methods like [`get()`](RingBuffer::get) are always *logical*: `0` is the
//! front, `len() - 1` is the back, regardless of where the elements physically are.
//!
//! The two physical runs can be accessed without copying through
//! [`as_slices()`](RingBuffer::as_slices) (or [`array_one()`](RingBuffer::array_one) and
//! [`array_two()`](RingBuffer::array_two)), and [`linearize()`](RingBuffer::linearize) rotates
//! the storage in place so that the whole content is a single slice:
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! let mut buf = RingBuffer::<char>::new(4).unwrap();
//! buf.extend("abcdef".chars());
//! assert_eq!(buf.as_slices(), (&['c', 'd'][..], &['e', 'f'][..]));
//!
//! assert_eq!(buf.linearize(), &mut ['c', 'd', 'e', 'f']);
//! assert!(buf.is_linearized());
//! assert_eq!(buf.array_one(), &['c', 'd', 'e', 'f']);
//! assert!(buf.array_two().is_empty());
//! ```
//!
//! # Cursors
//!
//! Besides the usual Rust iterators, the buffer hands out [`Cursor`]s: random-access positions
//! that can be moved by arbitrary offsets, compared, and subtracted. Ordering and distances are
//! always computed in logical space, so they stay correct after the buffer has wrapped around:
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! let mut buf = RingBuffer::<u32>::new(3).unwrap();
//! buf.extend([1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(buf, [5, 6, 7]);
//!
//! let begin = buf.begin();
//! let end = buf.end();
//! assert_eq!(end - begin, 3);
//! assert!(begin < end);
//! assert_eq!((begin + 2).get(), Some(&7));
//! assert_eq!(begin[1], 6);
//! ```
//!
//! # Writing/reading bytes
//!
//! For the special case of a `RingBuffer` containing `u8` elements, bytes can be written and read
//! using the standard [`Write`](std::io::Write) and [`Read`](std::io::Read) traits. Writing past
//! the buffer capacity will overwrite the bytes at the start of the buffer, and reading elements
//! will consume elements from the buffer.
//!
//! ```
//! use ring_buffer::RingBuffer;
//! use std::io::Read;
//! use std::io::Write;
//!
//! let mut buf = RingBuffer::<u8>::new(5).unwrap();
//! assert_eq!(buf, b"");
//!
//! write!(buf, "hello").unwrap();
//! assert_eq!(buf, b"hello");
//!
//! write!(buf, "this string will overflow the buffer and wrap around").unwrap();
//! assert_eq!(buf, b"round");
//!
//! let mut s = String::new();
//! buf.read_to_string(&mut s).expect("failed to read from buffer");
//! assert_eq!(s, "round");
//! assert_eq!(buf, b"");
//! ```
//!
//! # Time complexity
//!
//! | Method                                                                                                   | Complexity                                                         |
//! |----------------------------------------------------------------------------------------------------------|--------------------------------------------------------------------|
//! | [`push_back()`](RingBuffer::push_back), [`push_front()`](RingBuffer::push_front)                         | *O*(1)                                                             |
//! | [`pop_back()`](RingBuffer::pop_back), [`pop_front()`](RingBuffer::pop_front)                             | *O*(1)                                                             |
//! | [`truncate_back(i)`](RingBuffer::truncate_back), [`truncate_front(i)`](RingBuffer::truncate_front)       | *O*(*n* − *i*) for types that implement [`Drop`], *O*(1) otherwise |
//! | [`clear()`](RingBuffer::clear)                                                                           | *O*(*n*) for types that implement [`Drop`], *O*(1) otherwise       |
//! | [`front()`](RingBuffer::front), [`back()`](RingBuffer::back), [`get()`](RingBuffer::get), [`at()`](RingBuffer::at) | *O*(1)                                                   |
//! | [`as_slices()`](RingBuffer::as_slices), [`array_one()`](RingBuffer::array_one)                           | *O*(1)                                                             |
//! | [`linearize()`](RingBuffer::linearize)                                                                   | *O*(*N*) where *N* is the capacity, *O*(1) if already linearized   |
//! | [`Cursor`] arithmetic and comparisons                                                                    | *O*(1)                                                             |
//!
//! # `no_std`
//!
//! This crate can be used in a [`no_std` environment] that provides an allocator (the backing
//! storage is heap-allocated). The `std::io` integration is only available with the `std` feature,
//! which is enabled by default:
//!
//! ```text
//! [dependencies]
//! ring-buffer = { version = "0.1", default-features = false }
//! ```
//!
//! [`no_std` environment]: https://docs.rust-embedded.org/book/intro/no-std.html

#![cfg_attr(not(feature = "std"), no_std)]

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unused_qualifications)]

extern crate alloc;

mod buffer;
mod cursor;
mod error;
mod iter;

#[cfg(feature = "std")]
mod io;

#[cfg(any(feature = "embedded-io", feature = "embedded-io-async"))]
mod embedded_io;


use core::mem::MaybeUninit;

pub use crate::buffer::RingBuffer;
pub use crate::cursor::Cursor;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::iter::IntoIter;
pub use crate::iter::Iter;
pub use crate::iter::IterMut;

/// Returns `(x + y) % m` without risk of overflows if `x + y` cannot fit in `usize`.
///
/// `x` and `y` are expected to be less than, or equal to `m`.
#[inline]
const fn add_mod(x: usize, y: usize, m: usize) -> usize {
    debug_assert!(m > 0);
    debug_assert!(x <= m);
    debug_assert!(y <= m);
    let (z, overflow) = x.overflowing_add(y);
    (z + (overflow as usize) * (usize::MAX % m + 1)) % m
}

/// Returns `(x - y) % m` without risk of underflows if `x - y` is negative.
///
/// `x` and `y` are expected to be less than, or equal to `m`.
#[inline]
const fn sub_mod(x: usize, y: usize, m: usize) -> usize {
    debug_assert!(m > 0);
    debug_assert!(x <= m);
    debug_assert!(y <= m);
    add_mod(x, m - y, m)
}

#[inline]
const unsafe fn slice_assume_init_ref<T>(slice: &[MaybeUninit<T>]) -> &[T] {
    &*(slice as *const [MaybeUninit<T>] as *const [T])
}

#[inline]
unsafe fn slice_assume_init_mut<T>(slice: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(slice as *mut [MaybeUninit<T>] as *mut [T])
}
