// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

use crate::RingBuffer;
use std::io::BufRead;
use std::io::Read;
use std::io::Result;
use std::io::Write;

impl Write for RingBuffer<u8> {
    #[inline]
    fn write(&mut self, src: &[u8]) -> Result<usize> {
        self.extend_from_slice(src);
        Ok(src.len())
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Read for RingBuffer<u8> {
    fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        let (mut front, mut back) = self.as_slices();
        let mut count = front.read(dst)?;
        count += back.read(&mut dst[count..])?;
        self.truncate_front(self.len() - count);
        Ok(count)
    }
}

impl BufRead for RingBuffer<u8> {
    fn fill_buf(&mut self) -> Result<&[u8]> {
        let (front, back) = self.as_slices();
        if !front.is_empty() {
            Ok(front)
        } else {
            Ok(back)
        }
    }

    fn consume(&mut self, amt: usize) {
        let amt = amt.min(self.len());
        self.truncate_front(self.len() - amt);
    }
}
