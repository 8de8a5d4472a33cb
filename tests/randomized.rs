// Copyright © 2025 ring-buffer contributors
// SPDX-License-Identifier: BSD-3-Clause

#![allow(static_mut_refs)]
#![cfg(feature = "std")]

//! Compare the correctness of `RingBuffer` against a reference implementation (that is assumed to
//! be fully correct).
//!
//! This module applies random actions (like `push_back`, `pop_front`, ...) to a `RingBuffer` and
//! to a reference implementation at the same time, and compares their result after each action.
//! The reference implementation is based on top of `VecDeque`.

use drop_tracker::DropItem;
use drop_tracker::DropTracker;
use rand::distributions::Distribution;
use rand::distributions::Standard;
use rand::distributions::Uniform;
use rand::Rng;
use ring_buffer::RingBuffer;
use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::ops::Deref;
use std::ops::DerefMut;
use std::ops::RangeInclusive;
use std::rc::Rc;

#[cfg(not(miri))]
const ROUNDS: usize = 200_000;

#[cfg(miri)]
const ROUNDS: usize = 200;

#[derive(Clone, Debug)]
enum Action<T> {
    BackMut(T),
    FrontMut(T),
    GetMut(usize, T),
    At(usize),
    PushBack(T),
    PushFront(T),
    PushBackEvict(T),
    PushFrontEvict(T),
    TryPushBack(T),
    TryPushFront(T),
    PopBack,
    PopFront,
    Swap(usize, usize),
    TruncateBack(usize),
    TruncateFront(usize),
    Clear,
    Extend(Vec<T>),
    ExtendFromSlice(Vec<T>),
    RangeMut(RangeInclusive<usize>, Vec<T>),
    Linearize,
}

fn random_vec<T, R: Rng + ?Sized>(rng: &mut R) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let size = rng.gen_range(0..128);
    let mut vec = Vec::with_capacity(size);
    for _ in 0..size {
        vec.push(rng.gen());
    }
    vec
}

impl<T> Distribution<Action<T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action<T> {
        let action_num: u8 = rng.gen_range(0..=11);

        match action_num {
            0 => Action::PushBack(rng.gen()),
            1 => Action::PushFront(rng.gen()),
            2 => Action::PushBackEvict(rng.gen()),
            3 => Action::PushFrontEvict(rng.gen()),
            4 => Action::TryPushBack(rng.gen()),
            5 => Action::TryPushFront(rng.gen()),
            6 => Action::PopBack,
            7 => Action::PopFront,
            8 => Action::Clear,
            9 => Action::Extend(random_vec(rng)),
            10 => Action::ExtendFromSlice(random_vec(rng)),
            11 => Action::Linearize,
            _ => unreachable!(),
        }
    }
}

impl<T> Distribution<Action<T>> for Uniform<usize>
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action<T> {
        fn random_range<D: Distribution<usize>, R: Rng + ?Sized>(
            dist: &D,
            rng: &mut R,
        ) -> RangeInclusive<usize> {
            let low = dist.sample(rng);
            let high = dist.sample(rng).max(low);
            low..=high
        }

        let action_num: u8 = rng.gen_range(0..=19);

        match action_num {
            0 => Action::BackMut(rng.gen()),
            1 => Action::FrontMut(rng.gen()),
            2 => Action::GetMut(self.sample(rng), rng.gen()),
            3 => Action::At(self.sample(rng)),
            4 => Action::PushBack(rng.gen()),
            5 => Action::PushFront(rng.gen()),
            6 => Action::PushBackEvict(rng.gen()),
            7 => Action::PushFrontEvict(rng.gen()),
            8 => Action::TryPushBack(rng.gen()),
            9 => Action::TryPushFront(rng.gen()),
            10 => Action::PopBack,
            11 => Action::PopFront,
            12 => Action::Swap(self.sample(rng), self.sample(rng)),
            13 => Action::TruncateBack(self.sample(rng)),
            14 => Action::TruncateFront(self.sample(rng)),
            15 => Action::Clear,
            16 => Action::Extend(random_vec(rng)),
            17 => Action::ExtendFromSlice(random_vec(rng)),
            18 => Action::RangeMut(random_range(self, rng), random_vec(rng)),
            19 => Action::Linearize,
            _ => unreachable!(),
        }
    }
}

#[derive(Debug)]
struct Reference<T> {
    inner: VecDeque<T>,
    max_len: usize,
}

impl<T> Reference<T> {
    fn new(max_len: usize) -> Self {
        Self {
            inner: VecDeque::new(),
            max_len,
        }
    }

    fn is_full(&self) -> bool {
        self.len() == self.max_len
    }

    fn trim_back(&mut self) -> Option<T> {
        let mut evicted = None;
        while self.len() > self.max_len {
            evicted = self.pop_back();
        }
        evicted
    }

    fn trim_front(&mut self) -> Option<T> {
        let mut evicted = None;
        while self.len() > self.max_len {
            evicted = self.pop_front();
        }
        evicted
    }
}

impl<T> Deref for Reference<T> {
    type Target = VecDeque<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Reference<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum Result<T> {
    None,
    Val(T),
    Vec(Vec<T>),
}

impl<T> From<Option<T>> for Result<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => Self::Val(val),
            None => Self::None,
        }
    }
}

impl<T> From<std::result::Result<(), T>> for Result<T> {
    fn from(res: std::result::Result<(), T>) -> Self {
        match res {
            Ok(()) => Self::None,
            Err(val) => Self::Val(val),
        }
    }
}

impl<T> FromIterator<T> for Result<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let vec = Vec::from_iter(iter);
        Self::Vec(vec)
    }
}

trait Perform<T> {
    fn perform(&mut self, action: Action<T>) -> Result<T>;
}

impl<T> Perform<T> for RingBuffer<T>
where
    T: Clone,
{
    fn perform(&mut self, action: Action<T>) -> Result<T> {
        match action {
            Action::BackMut(elem) => {
                *self.back_mut().unwrap() = elem;
                Result::None
            }
            Action::FrontMut(elem) => {
                *self.front_mut().unwrap() = elem;
                Result::None
            }
            Action::GetMut(index, elem) => {
                *self.get_mut(index).unwrap() = elem;
                Result::None
            }
            Action::At(index) => self.at(index).ok().cloned().into(),
            Action::PushBack(elem) => {
                self.push_back(elem);
                Result::None
            }
            Action::PushFront(elem) => {
                self.push_front(elem);
                Result::None
            }
            Action::PushBackEvict(elem) => self.push_back_evict(elem).into(),
            Action::PushFrontEvict(elem) => self.push_front_evict(elem).into(),
            Action::TryPushBack(elem) => self.try_push_back(elem).into(),
            Action::TryPushFront(elem) => self.try_push_front(elem).into(),
            Action::PopBack => self.pop_back().into(),
            Action::PopFront => self.pop_front().into(),
            Action::Swap(x, y) => {
                self.swap(x, y);
                Result::None
            }
            Action::TruncateBack(index) => {
                self.truncate_back(index);
                Result::None
            }
            Action::TruncateFront(index) => {
                self.truncate_front(index);
                Result::None
            }
            Action::Clear => {
                self.clear();
                Result::None
            }
            Action::Extend(elems) => {
                self.extend(elems);
                Result::None
            }
            Action::ExtendFromSlice(elems) => {
                self.extend_from_slice(&elems[..]);
                Result::None
            }
            Action::RangeMut(range, elems) => {
                self.range_mut(range)
                    .zip(elems)
                    .map(|(elem, replacement)| *elem = replacement)
                    .count();
                Result::None
            }
            Action::Linearize => {
                let result = self.linearize().iter().cloned().collect();
                assert!(self.is_linearized());
                result
            }
        }
    }
}

impl<T> Perform<T> for Reference<T>
where
    T: Clone,
{
    fn perform(&mut self, action: Action<T>) -> Result<T> {
        match action {
            Action::BackMut(elem) => {
                *self.back_mut().unwrap() = elem;
                Result::None
            }
            Action::FrontMut(elem) => {
                *self.front_mut().unwrap() = elem;
                Result::None
            }
            Action::GetMut(index, elem) => {
                *self.get_mut(index).unwrap() = elem;
                Result::None
            }
            Action::At(index) => self.get(index).cloned().into(),
            Action::PushBack(elem) => {
                self.push_back(elem);
                self.trim_front();
                Result::None
            }
            Action::PushFront(elem) => {
                self.push_front(elem);
                self.trim_back();
                Result::None
            }
            Action::PushBackEvict(elem) => {
                self.push_back(elem);
                self.trim_front().into()
            }
            Action::PushFrontEvict(elem) => {
                self.push_front(elem);
                self.trim_back().into()
            }
            Action::TryPushBack(elem) => {
                if self.is_full() {
                    Result::Val(elem)
                } else {
                    self.push_back(elem);
                    Result::None
                }
            }
            Action::TryPushFront(elem) => {
                if self.is_full() {
                    Result::Val(elem)
                } else {
                    self.push_front(elem);
                    Result::None
                }
            }
            Action::PopBack => self.pop_back().into(),
            Action::PopFront => self.pop_front().into(),
            Action::Swap(x, y) => {
                self.swap(x, y);
                Result::None
            }
            Action::TruncateBack(size) => {
                self.truncate(size);
                Result::None
            }
            Action::TruncateFront(size) => {
                while self.len() > size {
                    let _ = self.pop_front();
                }
                Result::None
            }
            Action::Clear => {
                self.clear();
                Result::None
            }
            Action::Extend(elems) | Action::ExtendFromSlice(elems) => {
                self.extend(elems);
                self.trim_front();
                Result::None
            }
            Action::RangeMut(range, elems) => {
                self.range_mut(range)
                    .zip(elems)
                    .map(|(elem, replacement)| *elem = replacement)
                    .count();
                Result::None
            }
            Action::Linearize => self.make_contiguous().iter().cloned().collect(),
        }
    }
}

fn test<T>(capacity: usize)
where
    T: Clone + PartialEq + fmt::Debug,
    Standard: Distribution<T>,
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut reference = Reference::<T>::new(capacity);
    let mut buffer = RingBuffer::<T>::new(capacity).unwrap();
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        // Generate a random action
        let action: Action<T> = if reference.is_empty() {
            <Standard as Distribution<Action<T>>>::sample(&Standard, &mut rng)
        } else {
            Uniform::from(0..reference.len()).sample(&mut rng)
        };

        println!("{action:?}");

        // Perform the action on both the reference implementation and the RingBuffer
        let expected = reference.perform(action.clone());
        let actual = buffer.perform(action);

        // Compare the return value of both implementations
        assert_eq!(expected, actual);

        // Compare the state of both implementations
        let expected_items = reference.iter().cloned().collect::<Vec<T>>();
        #[allow(clippy::eq_op)]
        {
            assert_eq!(buffer, buffer);
        }
        assert_eq!(buffer, &expected_items[..]);
        assert_eq!(buffer.to_vec(), expected_items);

        assert_eq!(reference.len(), buffer.len());
        assert_eq!(reference.is_empty(), buffer.is_empty());
        assert_eq!(reference.is_full(), buffer.is_full());
        assert_eq!(capacity, buffer.capacity());

        assert_eq!(
            reference.iter().collect::<Vec<&T>>(),
            buffer.iter().collect::<Vec<&T>>()
        );
        assert_eq!(
            reference.iter_mut().collect::<Vec<&mut T>>(),
            buffer.iter_mut().collect::<Vec<&mut T>>()
        );

        assert_eq!(
            reference.iter().rev().collect::<Vec<&T>>(),
            buffer.iter().rev().collect::<Vec<&T>>()
        );
        assert_eq!(
            reference.iter_mut().rev().collect::<Vec<&mut T>>(),
            buffer.iter_mut().rev().collect::<Vec<&mut T>>()
        );

        // Walking with a cursor visits the same elements as the iterators
        let begin = buffer.begin();
        let end = buffer.end();
        assert_eq!(end - begin, reference.len() as isize);
        let mut cursor = begin;
        for expected in reference.iter() {
            assert!(cursor < end);
            assert_eq!(cursor.get(), Some(expected));
            cursor.move_next();
        }
        assert_eq!(cursor, end);
        assert!(cursor.get().is_none());
    }
}

#[test]
fn one() {
    test::<u64>(1);
}

#[test]
fn small() {
    test::<u64>(10);
}

#[test]
fn medium() {
    test::<u64>(1_000);
}

#[test]
fn large() {
    test::<u64>(1_000_000);
}

#[test]
fn largest_with_zero_sized_struct() {
    type Zst = ();
    assert_eq!(mem::size_of::<Zst>(), 0);
    test::<Zst>(usize::MAX);
}

#[test]
fn drop() {
    static mut TRACKER: Option<DropTracker<u64>> = None;

    // SAFETY: the assumption is that this test function will be called only once
    unsafe {
        TRACKER.replace(DropTracker::new());
    }

    fn tracker() -> &'static DropTracker<u64> {
        unsafe { TRACKER.as_ref().unwrap() }
    }

    fn tracker_mut() -> &'static mut DropTracker<u64> {
        unsafe { TRACKER.as_mut().unwrap() }
    }

    #[derive(Clone, PartialEq, Eq, Debug)]
    struct Item(Rc<DropItem<u64>>);

    impl Distribution<Item> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Item {
            let n = rng.gen();
            Item(Rc::new(tracker_mut().track(n)))
        }
    }

    test::<Item>(100);

    tracker().assert_fully_dropped();
}
