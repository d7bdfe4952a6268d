//! Array-backed binary max-heap with a pluggable ordering.
//!
//! The ordering is a [`Compare`] predicate where `outranks(a, b)` means
//! "`a` has strictly higher priority than `b`". The heap keeps the element
//! that nothing outranks at position 0 and makes no tie-breaking decision of
//! its own: ties are whatever the comparator says they are.
//!
//! Storage is a `Vec` that doubles when full and never shrinks. Sift-up and
//! sift-down are free functions over a slice, so they know nothing about
//! growth.
//!
//! # Example
//!
//! ```
//! use ward_collections::{BinaryMaxHeap, Compare};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Case {
//!     name: &'static str,
//!     priority: u8,
//! }
//!
//! /// Higher priority first, then ascending name.
//! #[derive(Default)]
//! struct Triage;
//!
//! impl Compare<Case> for Triage {
//!     fn outranks(&self, a: &Case, b: &Case) -> bool {
//!         if a.priority != b.priority {
//!             return a.priority > b.priority;
//!         }
//!         a.name < b.name
//!     }
//! }
//!
//! let mut cases: BinaryMaxHeap<Case, Triage> = BinaryMaxHeap::new();
//! cases.push(Case { name: "Bob", priority: 3 });
//! cases.push(Case { name: "Ann", priority: 3 });
//! cases.push(Case { name: "Cid", priority: 5 });
//!
//! let names: Vec<_> = cases.iter_by_priority().map(|c| c.name).collect();
//! assert_eq!(names, ["Cid", "Ann", "Bob"]);
//!
//! assert_eq!(cases.pop_max().map(|c| c.name), Some("Cid"));
//! assert_eq!(cases.pop_max().map(|c| c.name), Some("Ann"));
//! assert_eq!(cases.pop_max().map(|c| c.name), Some("Bob"));
//! assert!(cases.pop_max().is_none());
//! ```

use std::fmt;

use crate::config::DEFAULT_HEAP_CAPACITY;

/// A strict ordering: `outranks(a, b)` is `true` when `a` comes before `b`.
///
/// Must be a strict weak ordering (irreflexive, transitive). Implemented for
/// [`MaxOrder`], [`MinOrder`] and any `Fn(&T, &T) -> bool`.
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` has strictly higher priority than `b`.
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Largest value first, via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest value first, via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// A priority queue that pops the highest-ranked element first.
#[derive(Clone)]
pub struct BinaryMaxHeap<T, C = MaxOrder> {
    /// Heap-ordered elements; position 0 is the root.
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for BinaryMaxHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> BinaryMaxHeap<T, C> {
    /// Creates an empty heap with the default initial capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_compare(DEFAULT_HEAP_CAPACITY, C::default())
    }

    /// Creates an empty heap with room for at least `capacity` elements.
    ///
    /// A capacity of 0 is raised to 1.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_compare(capacity, C::default())
    }
}

impl<T, C: Compare<T>> BinaryMaxHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    #[inline]
    pub fn with_compare(cmp: C) -> Self {
        Self::with_capacity_and_compare(DEFAULT_HEAP_CAPACITY, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for at least
    /// `capacity` elements.
    pub fn with_capacity_and_compare(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity.max(1)),
            cmp,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the current storage capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator.
    #[inline]
    pub fn compare(&self) -> &C {
        &self.cmp
    }

    /// Inserts an item.
    ///
    /// Doubles the storage first if it is full, then sifts the item up past
    /// every ancestor it outranks. O(log n), amortized over growth.
    pub fn push(&mut self, item: T) {
        self.grow_if_full();

        self.data.push(item);
        let pos = self.data.len() - 1;

        let cmp = &self.cmp;
        sift_up(&mut self.data, pos, |a: &T, b: &T| cmp.outranks(a, b));
    }

    /// Removes and returns the highest-ranked item.
    ///
    /// The last element takes the root's place and sifts down. Returns
    /// `None` if the heap is empty.
    pub fn pop_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let root = self.data.swap_remove(0);

        let cmp = &self.cmp;
        sift_down(&mut self.data, 0, |a: &T, b: &T| cmp.outranks(a, b));

        Some(root)
    }

    /// Returns a reference to the highest-ranked item.
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    /// Drops every item. Storage capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the elements in storage (heap) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator in storage (heap) order.
    ///
    /// Only the first item is guaranteed to be the maximum. Use
    /// [`iter_by_priority`](Self::iter_by_priority) for sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator over every item, highest rank first.
    ///
    /// The heap is not modified: the iterator walks the heap tree keeping a
    /// small frontier of candidate positions. Yielding `k` items costs
    /// O(k log k).
    pub fn iter_by_priority(&self) -> PriorityIter<'_, T, C> {
        let mut frontier = Vec::new();
        if !self.data.is_empty() {
            frontier.push(0);
        }

        PriorityIter {
            data: &self.data,
            cmp: &self.cmp,
            frontier,
            remaining: self.data.len(),
        }
    }

    /// Visits every item highest rank first without changing the heap.
    pub fn for_each_by_priority<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter_by_priority().for_each(visit);
    }

    /// Consumes the heap, returning its items highest rank first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop_max() {
            sorted.push(item);
        }
        sorted
    }

    fn grow_if_full(&mut self) {
        let capacity = self.data.capacity();
        if self.data.len() < capacity {
            return;
        }

        self.data.reserve_exact(capacity.max(1));
        tracing::trace!(
            from = capacity,
            to = self.data.capacity(),
            "heap storage grown"
        );
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryMaxHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryMaxHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

/// Non-destructive iterator over a [`BinaryMaxHeap`] in priority order.
///
/// Created by [`BinaryMaxHeap::iter_by_priority`].
pub struct PriorityIter<'a, T, C> {
    data: &'a [T],
    cmp: &'a C,
    /// Positions whose parents were already yielded, kept as a heap.
    frontier: Vec<usize>,
    remaining: usize,
}

impl<'a, T, C: Compare<T>> Iterator for PriorityIter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }

        let data = self.data;
        let cmp = self.cmp;
        let outranks = |a: &usize, b: &usize| cmp.outranks(&data[*a], &data[*b]);

        let pos = self.frontier.swap_remove(0);
        sift_down(&mut self.frontier, 0, outranks);

        // Children of a yielded node become candidates
        for child in [2 * pos + 1, 2 * pos + 2] {
            if child < data.len() {
                self.frontier.push(child);
                let last = self.frontier.len() - 1;
                sift_up(&mut self.frontier, last, outranks);
            }
        }

        self.remaining -= 1;
        Some(&data[pos])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for PriorityIter<'_, T, C> {}

/// Moves the element at `pos` toward the root while it outranks its parent.
fn sift_up<T, F>(data: &mut [T], mut pos: usize, outranks: F)
where
    F: Fn(&T, &T) -> bool,
{
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if !outranks(&data[pos], &data[parent]) {
            break;
        }
        data.swap(pos, parent);
        pos = parent;
    }
}

/// Moves the element at `pos` toward the leaves while a child outranks it,
/// always swapping with the higher-ranked child.
fn sift_down<T, F>(data: &mut [T], mut pos: usize, outranks: F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();

    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }
        let right = left + 1;

        let mut best = pos;
        if outranks(&data[left], &data[best]) {
            best = left;
        }
        if right < len && outranks(&data[right], &data[best]) {
            best = right;
        }

        if best == pos {
            break;
        }
        data.swap(pos, best);
        pos = best;
    }
}
