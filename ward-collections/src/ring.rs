//! Fixed-capacity circular FIFO.
//!
//! Capacity is a compile-time constant and the slots are inline, so no
//! operation allocates. Elements enter at the logical rear and leave at the
//! logical front; the rear is derived as `(front + len - 1) % N`.
//!
//! # Example
//!
//! ```
//! use ward_collections::{Overflow, RingBuffer};
//!
//! let mut ring: RingBuffer<char, 3> = RingBuffer::new();
//! ring.enqueue('A').unwrap();
//! ring.enqueue('B').unwrap();
//! ring.enqueue('C').unwrap();
//!
//! assert!(ring.is_full());
//! assert_eq!(ring.enqueue('D'), Err(Overflow('D')));
//!
//! assert_eq!(ring.dequeue(), Ok('A'));
//! ring.enqueue('D').unwrap();
//!
//! // B moves to the back
//! ring.rotate_once();
//! assert_eq!(ring.iter().copied().collect::<String>(), "CDB");
//! ```
//!
//! # Compile-Time Enforcement
//!
//! A zero capacity fails to compile:
//! ```compile_fail
//! use ward_collections::RingBuffer;
//! let ring = RingBuffer::<u64, 0>::new(); // ERROR: capacity must be > 0
//! ```

use std::fmt;

use crate::config::DEFAULT_RING_CAPACITY;
use crate::{Overflow, Underflow};

/// Ring buffer sized for the default fleet.
pub type DefaultRingBuffer<T> = RingBuffer<T, DEFAULT_RING_CAPACITY>;

/// A fixed-capacity FIFO with wraparound indices.
///
/// `N` must be greater than zero (enforced at compile time).
pub struct RingBuffer<T, const N: usize> {
    /// Inline slots; exactly `len` of them, starting at `front`, are `Some`.
    slots: [Option<T>; N],
    /// Slot holding the logical front.
    front: usize,
    /// Number of live elements.
    len: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Compile-time assertion that N is non-zero.
    const _ASSERT_NONZERO: () = assert!(N > 0, "capacity must be > 0");

    /// Creates an empty ring buffer.
    pub fn new() -> Self {
        // Force the compile-time assertion to be evaluated
        let () = Self::_ASSERT_NONZERO;

        Self {
            slots: std::array::from_fn(|_| None),
            front: 0,
            len: 0,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Appends an item at the logical rear.
    ///
    /// # Errors
    ///
    /// Returns `Err(Overflow(item))` if the buffer is full. The buffer is
    /// left unchanged.
    pub fn enqueue(&mut self, item: T) -> Result<(), Overflow<T>> {
        if self.is_full() {
            tracing::trace!(capacity = N, "ring buffer full, rejecting item");
            return Err(Overflow(item));
        }

        let rear = (self.front + self.len) % N;
        self.slots[rear] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front item.
    ///
    /// Once the last item leaves, the front index resets to slot 0.
    ///
    /// # Errors
    ///
    /// Returns `Err(Underflow)` if the buffer is empty.
    pub fn dequeue(&mut self) -> Result<T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }

        let item = self.slots[self.front].take().ok_or(Underflow)?;
        self.front = (self.front + 1) % N;
        self.len -= 1;

        if self.len == 0 {
            self.front = 0;
        }

        Ok(item)
    }

    /// Returns a reference to the front item.
    ///
    /// # Errors
    ///
    /// Returns `Err(Underflow)` if the buffer is empty.
    #[inline]
    pub fn peek_front(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        self.slots[self.front].as_ref().ok_or(Underflow)
    }

    /// Returns a mutable reference to the front item.
    ///
    /// # Errors
    ///
    /// Returns `Err(Underflow)` if the buffer is empty.
    #[inline]
    pub fn peek_front_mut(&mut self) -> Result<&mut T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        self.slots[self.front].as_mut().ok_or(Underflow)
    }

    /// Returns a reference to the rear (most recently enqueued) item.
    ///
    /// # Errors
    ///
    /// Returns `Err(Underflow)` if the buffer is empty.
    #[inline]
    pub fn peek_back(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        let rear = (self.front + self.len - 1) % N;
        self.slots[rear].as_ref().ok_or(Underflow)
    }

    /// Moves the front item to the rear.
    ///
    /// Same result as a `dequeue` followed by an `enqueue` of that item, but
    /// cannot fail: the element count does not change. No-op with fewer than
    /// two items.
    pub fn rotate_once(&mut self) {
        if self.len <= 1 {
            return;
        }

        // The vacated front slot is the new rear when the buffer is full.
        let item = self.slots[self.front].take();
        let rear = (self.front + self.len) % N;
        self.slots[rear] = item;
        self.front = (self.front + 1) % N;
    }

    /// Drops every item and resets to the empty state.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Returns an iterator over the items, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            ring: self,
            offset: 0,
        }
    }

    /// Visits every item front to back without changing the buffer.
    pub fn for_each_in_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for RingBuffer<T, N> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            front: self.front,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Compares logical contents, ignoring where in the slots they sit.
impl<T: PartialEq, const N: usize> PartialEq for RingBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for RingBuffer<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`RingBuffer`].
pub struct Iter<'a, T, const N: usize> {
    ring: &'a RingBuffer<T, N>,
    offset: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.ring.len {
            return None;
        }

        let idx = (self.ring.front + self.offset) % N;
        self.offset += 1;
        self.ring.slots[idx].as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}
