// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

use ring_buffer::RingBuffer;

/// Builds a buffer of the given capacity that has wrapped around at least twice, holding
/// `0..len` in logical order.
fn wrapped(capacity: usize, len: usize) -> RingBuffer<usize> {
    let mut buf = RingBuffer::new(capacity).unwrap();
    for i in 0..2 * capacity + 1 {
        buf.push_back(i);
    }
    buf.clear();
    for _ in 0..capacity / 2 + 1 {
        buf.push_back(0);
        buf.pop_front();
    }
    buf.extend(0..len);
    buf
}

#[test]
fn begin_end_empty() {
    let buf = RingBuffer::<u32>::new(4).unwrap();
    assert_eq!(buf.begin(), buf.end());
    assert!(buf.begin().is_end());
    assert_eq!(buf.begin().get(), None);
    assert_eq!(buf.end() - buf.begin(), 0);
    assert_eq!(buf.cursor(0), buf.end());
}

#[test]
fn end_sentinel_not_full() {
    let mut buf = RingBuffer::<u32>::new(5).unwrap();
    buf.extend([1, 2, 3, 4, 5, 6, 7]);
    buf.pop_back();
    assert_eq!(buf, [3, 4, 5, 6]);

    let end = buf.end();
    assert!(end.is_end());
    assert_eq!(end.index(), 4);
    assert!(end.physical_index() < buf.capacity());
    assert_eq!(end.get(), None);
    assert_eq!((end - 1).get(), Some(&6));
}

#[test]
fn end_sentinel_full() {
    let mut buf = RingBuffer::<u32>::new(5).unwrap();
    buf.extend([1, 2, 3, 4, 5, 6, 7]);
    assert!(buf.is_full());

    // The tail slot of a full buffer is the front slot; the sentinel sits past the storage instead
    let end = buf.end();
    assert_eq!(end.physical_index(), buf.capacity());
    assert_eq!(end.index(), 5);
    assert_ne!(end, buf.begin());
    assert_eq!(end - buf.begin(), 5);
    assert_eq!(end.get(), None);
    assert_eq!((end - 1).get(), Some(&7));
    assert_eq!((end - 5).get(), Some(&3));
    assert_eq!(end - 5, buf.begin());
}

#[test]
fn ordering_after_wraps() {
    for capacity in 1..8 {
        for len in 0..=capacity {
            let buf = wrapped(capacity, len);
            assert_eq!(buf.len(), len);

            let cursors = (0..=len).map(|i| buf.cursor(i)).collect::<Vec<_>>();
            for (i, a) in cursors.iter().enumerate() {
                assert_eq!(a.index(), i);
                for (j, b) in cursors.iter().enumerate() {
                    assert_eq!(a < b, i < j, "capacity={capacity} len={len} i={i} j={j}");
                    assert_eq!(a == b, i == j, "capacity={capacity} len={len} i={i} j={j}");
                    assert_eq!(*b - *a, j as isize - i as isize);
                }
            }
        }
    }
}

#[test]
fn distance_law() {
    let buf = wrapped(7, 6);
    let begin = buf.begin();
    let end = buf.end();

    for i in 0..=6isize {
        for n in -i..=(6 - i) {
            let c = begin + i;
            assert_eq!((c + n) - c, n);
            assert_eq!(c + n - n, c);
            assert_eq!(c - (-n), c + n);
        }
    }
    assert_eq!(begin + 6, end);
    assert_eq!(end - 6, begin);
}

#[test]
fn add_sub_assign() {
    let buf = wrapped(6, 6);
    assert_eq!(buf, [0, 1, 2, 3, 4, 5]);

    let mut cursor = buf.begin();
    cursor += 4;
    assert_eq!(cursor.get(), Some(&4));
    cursor -= 3;
    assert_eq!(cursor.get(), Some(&1));
    cursor += -1;
    assert_eq!(cursor, buf.begin());
    cursor -= -6;
    assert_eq!(cursor, buf.end());
}

#[test]
fn move_next_prev() {
    let buf = wrapped(5, 5);
    assert!(buf.is_full());

    let mut cursor = buf.begin();
    let mut forward = Vec::new();
    while !cursor.is_end() {
        forward.push(*cursor.get().unwrap());
        cursor.move_next();
    }
    assert_eq!(forward, [0, 1, 2, 3, 4]);
    assert_eq!(cursor, buf.end());

    let mut backward = Vec::new();
    while cursor != buf.begin() {
        cursor.move_prev();
        backward.push(*cursor.get().unwrap());
    }
    assert_eq!(backward, [4, 3, 2, 1, 0]);
}

#[test]
fn offset_index() {
    let buf = wrapped(4, 4);
    let second = buf.cursor(1);
    assert_eq!(second[0], 1);
    assert_eq!(second[-1], 0);
    assert_eq!(second[2], 3);
}

#[test]
fn cursor_matches_get() {
    let buf = wrapped(9, 7);
    for i in 0..buf.len() {
        let cursor = buf.cursor(i);
        assert_eq!(cursor.get(), buf.get(i));
        assert_eq!(cursor.index(), i);
        assert!(!cursor.is_end());
    }
    assert!(buf.cursor(buf.len()).is_end());
}

#[test]
fn different_buffers() {
    let a = wrapped(4, 2);
    let b = wrapped(4, 2);
    let (x, y) = (a.begin(), b.begin());
    assert_ne!(x, y);
    assert_eq!(x.partial_cmp(&y), None);
    assert!(!(x < y));
    assert!(!(x > y));
}

#[test]
#[should_panic(expected = "cursors belong to different buffers")]
fn different_buffers_distance() {
    let a = wrapped(4, 2);
    let b = wrapped(4, 2);
    let _ = a.end() - b.begin();
}

#[test]
#[should_panic(expected = "cannot move a cursor past the end of the buffer")]
fn move_next_past_end() {
    let buf = wrapped(4, 3);
    let mut cursor = buf.end();
    cursor.move_next();
}

#[test]
#[should_panic(expected = "cannot move a cursor before the front of the buffer")]
fn move_prev_before_front() {
    let buf = wrapped(4, 3);
    let mut cursor = buf.begin();
    cursor.move_prev();
}

#[test]
#[should_panic(expected = "out of range for buffer of length 3")]
fn offset_past_end() {
    let buf = wrapped(4, 3);
    let _ = buf.begin() + 4;
}

#[test]
#[should_panic(expected = "out of range for buffer of length 3")]
fn offset_before_front() {
    let buf = wrapped(4, 3);
    let _ = buf.end() - 4;
}

#[test]
#[should_panic(expected = "cannot dereference the end of the buffer")]
fn index_at_end() {
    let buf = wrapped(4, 3);
    let _ = buf.begin()[3];
}

#[test]
#[should_panic(expected = "cursor index 4 out of range for buffer of length 3")]
fn cursor_past_end() {
    let buf = wrapped(4, 3);
    let _ = buf.cursor(4);
}
