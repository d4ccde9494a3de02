//
// Copyright (c) 2025 Nathan Fiedler
//

//! A dynamic array implemented as a sliding window over a fixed-capacity
//! ring buffer.
//!
//! The structure consists of two layers: [`FixedArray`], a bounds-checked
//! store of `capacity` slots, and [`RingVector`], which maps a logical
//! sequence of `len` elements onto those slots with modular arithmetic.
//! The window of occupied slots starts in the middle of the store and may
//! wrap around either edge, so both `push` and `push_front` write into a
//! free slot without moving any existing element.
//!
//! # Growth
//!
//! When an insertion finds the store full, the vector allocates a new
//! store of double the capacity and moves the elements into it, re-seeded
//! at the middle of the new store. This leaves equal headroom on both
//! sides for future insertions at either end. Growth is O(n) but happens
//! at most O(log n) times over n insertions, so `push` and `push_front`
//! are amortized O(1). The vector never shrinks.
//!
//! # Performance
//!
//! O(1) get and update, amortized O(1) insert and remove at both ends.

use std::fmt;
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Slot index fell outside the fixed store.
///
/// Only [`FixedArray`] produces this error. [`RingVector`] keeps every
/// index it computes inside the store by construction, so this error
/// surfacing through the vector indicates a defect in the ring
/// arithmetic, not a misuse by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("slot index out of range: {index} not in 0..{capacity}")]
pub struct OutOfRange {
    /// the offending slot index
    pub index: usize,
    /// capacity of the store at the time of access
    pub capacity: usize,
}

/// Fixed-length store of `capacity` slots, each either empty or holding
/// one value.
///
/// The capacity is set at construction and never changes. Every access
/// is bounds-checked and reports [`OutOfRange`] rather than panicking.
/// There is no resize operation; a caller wanting more room builds a new
/// store and moves the values across.
#[derive(Clone)]
pub struct FixedArray<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Construct a store with the given number of empty slots.
    pub fn new(capacity: usize) -> Self {
        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Self { slots }
    }

    /// Borrow the value in the given slot, or `None` if the slot is
    /// empty.
    pub fn get(&self, index: usize) -> Result<Option<&T>, OutOfRange> {
        self.check(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Mutably borrow the value in the given slot.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, OutOfRange> {
        self.check(index)?;
        Ok(self.slots[index].as_mut())
    }

    /// Store a value in the given slot, returning the previous occupant
    /// if the slot was not empty.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, OutOfRange> {
        self.check(index)?;
        Ok(self.slots[index].replace(value))
    }

    /// Clear the given slot, returning the value it held.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, OutOfRange> {
        self.check(index)?;
        Ok(self.slots[index].take())
    }

    /// Return the fixed capacity of the store.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the store has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(OutOfRange {
                index,
                capacity: self.slots.len(),
            })
        }
    }
}

impl<T> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        write!(
            f,
            "FixedArray(capacity: {}, occupied: {})",
            self.slots.len(),
            occupied,
        )
    }
}

/// starting capacity used by `RingVector::new`
const DEFAULT_CAPACITY: usize = 8;

// Slot indices are always reduced modulo the current store capacity, so
// an OutOfRange coming back from the store means the ring arithmetic
// itself is broken.
const BAD_SLOT: &str = "ring slot index within store bounds";

/// Growable sequence backed by a ring buffer, with amortized O(1)
/// insertion and removal at both ends.
///
/// Logical index `i` lives at slot `(start + i) % capacity` of the
/// backing [`FixedArray`]. The window starts centered in the store so
/// that early `push` and `push_front` calls grow away from each other
/// before any wraparound occurs.
pub struct RingVector<T> {
    /// current backing store
    store: FixedArray<T>,
    /// number of elements in the vector
    count: usize,
    /// slot index of the logical first element
    start: usize,
}

impl<T> RingVector<T> {
    /// Return an empty vector with the default capacity of 8.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Return an empty vector whose store holds `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: FixedArray::new(capacity),
            count: 0,
            start: capacity / 2,
        }
    }

    /// Retrieve a reference to the element at the given offset. Negative
    /// offsets count back from the end, so `get(-1)` is the last
    /// element. Out of range offsets in either direction yield `None`.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn get(&self, index: isize) -> Option<&T> {
        let index = self.resolve(index)?;
        self.fetch(index)
    }

    /// Returns a mutable reference to an element, with the same offset
    /// rules as [`get`][Self::get].
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn get_mut(&mut self, index: isize) -> Option<&mut T> {
        let index = self.resolve(index)?;
        let slot = self.slot(index);
        self.store.get_mut(slot).expect(BAD_SLOT)
    }

    /// Store `value` at the given offset, returning the element it
    /// replaced.
    ///
    /// Offsets resolve as in [`get`][Self::get]. An offset equal to the
    /// current length appends; an offset past the end first extends the
    /// vector with `T::default()` placeholders so that every position up
    /// to the target exists. A negative offset reaching before the first
    /// element stores nothing and returns the value as `Err`.
    ///
    /// # Time complexity
    ///
    /// Constant time for in-place stores, O(gap) when extending.
    pub fn set(&mut self, index: isize, value: T) -> Result<Option<T>, T>
    where
        T: Default,
    {
        let index = if index < 0 {
            self.count as isize + index
        } else {
            index
        };
        if index < 0 {
            return Err(value);
        }
        let index = index as usize;
        while self.count < index {
            self.push(T::default());
        }
        if index == self.count {
            self.push(value);
            Ok(None)
        } else {
            let slot = self.slot(index);
            Ok(self.store.set(slot, value).expect(BAD_SLOT))
        }
    }

    /// Appends an element to the back of the vector, growing the store
    /// if it is full.
    ///
    /// # Time complexity
    ///
    /// Amortized O(1); O(n) when a growth event occurs.
    pub fn push(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        let slot = self.slot(self.count);
        self.store.set(slot, value).expect(BAD_SLOT);
        self.count += 1;
    }

    /// Prepends an element to the front of the vector, growing the
    /// store if it is full.
    ///
    /// # Time complexity
    ///
    /// Amortized O(1); O(n) when a growth event occurs.
    pub fn push_front(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.start = (self.start + self.capacity() - 1) % self.capacity();
        self.store.set(self.start, value).expect(BAD_SLOT);
        self.count += 1;
    }

    /// Removes the last element and returns it, or `None` if the vector
    /// is empty. The vacated slot is cleared.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let slot = self.slot(self.count - 1);
        let value = self.store.take(slot).expect(BAD_SLOT);
        self.count -= 1;
        value
    }

    /// Removes the first element and returns it, or `None` if the
    /// vector is empty. The vacated slot is cleared and the window
    /// advances by one.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.store.take(self.start).expect(BAD_SLOT);
        self.start = (self.start + 1) % self.capacity();
        self.count -= 1;
        value
    }

    /// Borrow the first element, or `None` if the vector is empty.
    pub fn first(&self) -> Option<&T> {
        self.fetch(0)
    }

    /// Borrow the last element, or `None` if the vector is empty.
    pub fn last(&self) -> Option<&T> {
        if self.count == 0 {
            None
        } else {
            self.fetch(self.count - 1)
        }
    }

    /// Returns true if some element of the vector equals the given
    /// value. Scans from the front, first match wins.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|el| el == value)
    }

    // Returns an iterator over the vector.
    //
    // The iterator yields all items from front to back. It holds only a
    // position, so iteration can be restarted at any time by calling
    // `iter` again.
    pub fn iter(&self) -> RingIter<'_, T> {
        RingIter {
            array: self,
            index: 0,
        }
    }

    /// Return the number of elements in the vector.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns the total number of elements the vector can hold without
    /// reallocating.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the vector has a length of 0.
    ///
    /// # Time complexity
    ///
    /// Constant time.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clears the vector, dropping all values. The capacity is retained
    /// and the window is re-centered in the store.
    pub fn clear(&mut self) {
        let capacity = self.store.len();
        self.store = FixedArray::new(capacity);
        self.count = 0;
        self.start = capacity / 2;
    }

    /// Replace the store with one of double the capacity and move the
    /// elements across, re-centering the window so that both ends have
    /// headroom again.
    fn grow(&mut self) {
        let old_capacity = self.store.len();
        let new_capacity = (old_capacity * 2).max(1);
        let new_start = new_capacity / 2;
        let mut old = std::mem::replace(&mut self.store, FixedArray::new(new_capacity));
        for i in 0..self.count {
            let slot = (self.start + i) % old_capacity;
            if let Some(value) = old.take(slot).expect(BAD_SLOT) {
                let target = (new_start + i) % new_capacity;
                self.store.set(target, value).expect(BAD_SLOT);
            }
        }
        self.start = new_start;
    }

    /// Map a logical offset to its slot in the store.
    fn slot(&self, index: usize) -> usize {
        (self.start + index) % self.store.len()
    }

    /// Normalize a possibly negative offset into `0..count`.
    fn resolve(&self, index: isize) -> Option<usize> {
        let index = if index < 0 {
            self.count as isize + index
        } else {
            index
        };
        if index < 0 || index as usize >= self.count {
            None
        } else {
            Some(index as usize)
        }
    }

    /// Borrow the element at a normalized offset.
    fn fetch(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.store.get(self.slot(index)).expect(BAD_SLOT)
    }
}

impl<T> Default for RingVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RingVector<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            count: self.count,
            start: self.start,
        }
    }
}

impl<T: fmt::Display> fmt::Display for RingVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for RingVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for RingVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let Some(item) = self.fetch(index) else {
            panic!("index out of bounds: {}", index);
        };
        item
    }
}

impl<T> IndexMut<usize> for RingVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let Some(item) = self.get_mut(index as isize) else {
            panic!("index out of bounds: {}", index);
        };
        item
    }
}

// Structural equality against anything that presents an ordered sequence
// of comparable elements: another ring vector, a slice, an array, or a
// Vec. Lengths must match and elements compare in logical order.
impl<T, U> PartialEq<RingVector<U>> for RingVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &RingVector<U>) -> bool {
        self.count == other.count && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingVector<T> {}

impl<T, U> PartialEq<[U]> for RingVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.count == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T, U> PartialEq<&[U]> for RingVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        *self == **other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for RingVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for RingVector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<A> FromIterator<A> for RingVector<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut arr: RingVector<A> = RingVector::new();
        for value in iter {
            arr.push(value);
        }
        arr
    }
}

impl<A> Extend<A> for RingVector<A> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Immutable ring vector iterator.
pub struct RingIter<'a, T> {
    array: &'a RingVector<T>,
    index: usize,
}

impl<'a, T> Iterator for RingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.fetch(self.index);
        self.index += 1;
        value
    }
}

impl<'a, T> IntoIterator for &'a RingVector<T> {
    type Item = &'a T;
    type IntoIter = RingIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RingVector<T> {
    type Item = T;
    type IntoIter = RingIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RingIntoIter { array: self }
    }
}

/// An iterator that moves out of a ring vector.
pub struct RingIntoIter<T> {
    array: RingVector<T>,
}

impl<T> Iterator for RingIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.array.pop_front()
    }
}
