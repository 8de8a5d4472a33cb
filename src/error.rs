// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

use thiserror::Error;

/// Errors returned by the fallible operations of [`RingBuffer`](crate::RingBuffer).
///
/// Most misuse of the buffer (indexing past the end with `buf[i]`, moving a cursor outside of the
/// buffer) is a caller bug and panics instead; only construction and [`at()`] report an error.
///
/// [`at()`]: crate::RingBuffer::at
#[derive(Error, Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A buffer was requested with a capacity of zero.
    #[error("invalid argument: ring buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// A logical index was not less than the length of the buffer.
    #[error("index {index} out of range for ring buffer of length {len}")]
    OutOfRange {
        /// The requested logical index.
        index: usize,
        /// The length of the buffer at the time of the request.
        len: usize,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
