// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

use crate::RingBuffer;
use core::convert::Infallible;

#[cfg(feature = "embedded-io")]
use embedded_io::ErrorType;

#[cfg(all(feature = "embedded-io-async", not(feature = "embedded-io")))]
use embedded_io_async::ErrorType;

impl ErrorType for RingBuffer<u8> {
    type Error = Infallible;
}

impl RingBuffer<u8> {
    /// Copies as many bytes as fit from the front of the buffer into `dst`, and removes them.
    fn read_front(&mut self, dst: &mut [u8]) -> usize {
        let (front, back) = self.as_slices();
        let from_front = front.len().min(dst.len());
        dst[..from_front].copy_from_slice(&front[..from_front]);
        let from_back = back.len().min(dst.len() - from_front);
        dst[from_front..from_front + from_back].copy_from_slice(&back[..from_back]);
        let count = from_front + from_back;
        self.truncate_front(self.len() - count);
        count
    }

    fn consume_front(&mut self, amt: usize) {
        let amt = amt.min(self.len());
        self.truncate_front(self.len() - amt);
    }

    fn first_run(&self) -> &[u8] {
        let (front, back) = self.as_slices();
        if !front.is_empty() {
            front
        } else {
            back
        }
    }
}

#[cfg(feature = "embedded-io")]
impl embedded_io::Write for RingBuffer<u8> {
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<usize, Self::Error> {
        self.extend_from_slice(src);
        Ok(src.len())
    }

    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(feature = "embedded-io")]
impl embedded_io::Read for RingBuffer<u8> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.read_front(dst))
    }
}

#[cfg(feature = "embedded-io")]
impl embedded_io::BufRead for RingBuffer<u8> {
    #[inline]
    fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        Ok(self.first_run())
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        self.consume_front(amt)
    }
}

#[cfg(feature = "embedded-io-async")]
impl embedded_io_async::Write for RingBuffer<u8> {
    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn write(&mut self, src: &[u8]) -> Result<usize, Self::Error> {
        self.extend_from_slice(src);
        Ok(src.len())
    }
}

#[cfg(feature = "embedded-io-async")]
impl embedded_io_async::Read for RingBuffer<u8> {
    async fn read(&mut self, dst: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.read_front(dst))
    }
}

#[cfg(feature = "embedded-io-async")]
impl embedded_io_async::BufRead for RingBuffer<u8> {
    async fn fill_buf(&mut self) -> Result<&[u8], Self::Error> {
        Ok(self.first_run())
    }

    fn consume(&mut self, amt: usize) {
        self.consume_front(amt)
    }
}
