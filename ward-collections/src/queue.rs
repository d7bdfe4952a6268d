//! Unbounded FIFO over singly-linked nodes.
//!
//! Nodes are created on enqueue and freed on dequeue. The queue tracks both
//! ends so either operation is O(1); `head` is `NONE` exactly when `tail`
//! is, and the tail node never has a successor.
//!
//! # Example
//!
//! ```
//! use ward_collections::LinkedQueue;
//!
//! let mut admissions = LinkedQueue::new();
//! admissions.enqueue("P001");
//! admissions.enqueue("P002");
//! admissions.enqueue("P003");
//!
//! // Traversal leaves the queue untouched
//! let order: Vec<_> = admissions.iter().copied().collect();
//! assert_eq!(order, ["P001", "P002", "P003"]);
//!
//! assert_eq!(admissions.dequeue(), Some("P001"));
//! assert_eq!(admissions.peek_front(), Some(&"P002"));
//! ```

use std::fmt;

use crate::node::{Chain, NONE, NodeArena};

/// An unbounded first-in first-out queue.
pub struct LinkedQueue<T> {
    nodes: NodeArena<T>,
    head: usize,
    tail: usize,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: NONE,
            tail: NONE,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == NONE
    }

    /// Appends an item at the back. Always succeeds.
    pub fn enqueue(&mut self, item: T) {
        let key = self.nodes.alloc(item, NONE);

        match self.nodes.get_mut(self.tail) {
            Some(tail) => tail.next = key,
            None => self.head = key,
        }
        self.tail = key;
    }

    /// Removes and returns the front item.
    ///
    /// Returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let node = self.nodes.free(self.head)?;

        self.head = node.next;
        if self.head == NONE {
            self.tail = NONE;
        }

        Some(node.data)
    }

    /// Returns a reference to the front item.
    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.data)
    }

    /// Returns a reference to the back item.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.nodes.get(self.tail).map(|node| &node.data)
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.tail = NONE;
    }

    /// Returns an iterator over the items, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self.nodes.chain(self.head),
        }
    }

    /// Visits every item front to back without changing the queue.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    /// Copies every live node front to back into fresh storage.
    fn clone(&self) -> Self {
        let (nodes, head, tail) = self.nodes.copy_chain(self.head);
        Self { nodes, head, tail }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing front-to-back iterator over a [`LinkedQueue`].
pub struct Iter<'a, T> {
    chain: Chain<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chain.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chain.size_hint()
    }
}

/// Owning iterator that dequeues items in FIFO order.
pub struct IntoIter<T> {
    queue: LinkedQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
