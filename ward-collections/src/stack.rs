//! Unbounded LIFO over singly-linked nodes.
//!
//! Pushes and pops happen at the top node only. Cloning a stack copies every
//! node and keeps the order, and the copy shares nothing with the original.
//! [`LinkedStack::take`] moves the whole chain out in O(1) and leaves the
//! source empty.
//!
//! # Example
//!
//! ```
//! use ward_collections::LinkedStack;
//!
//! let mut stock = LinkedStack::new();
//! stock.push("X");
//! stock.push("Y");
//!
//! let snapshot = stock.clone();
//! assert_eq!(stock.pop(), Some("Y"));
//! assert_eq!(snapshot.peek(), Some(&"Y"));
//!
//! let moved = stock.take();
//! assert!(stock.is_empty());
//! assert_eq!(moved.peek(), Some(&"X"));
//! ```

use std::fmt;

use crate::node::{Chain, NONE, NodeArena};

/// An unbounded last-in first-out stack.
pub struct LinkedStack<T> {
    nodes: NodeArena<T>,
    top: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            top: NONE,
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == NONE
    }

    /// Pushes an item on top. Always succeeds.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.top = self.nodes.alloc(item, self.top);
    }

    /// Removes and returns the top item.
    ///
    /// Returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.nodes.free(self.top)?;
        self.top = node.next;
        Some(node.data)
    }

    /// Returns a reference to the top item.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.get(self.top).map(|node| &node.data)
    }

    /// Returns a mutable reference to the top item.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.nodes.get_mut(self.top).map(|node| &mut node.data)
    }

    /// Moves every node into a new stack, leaving this one empty.
    ///
    /// O(1): no node is copied or reallocated.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.top = NONE;
    }

    /// Returns an iterator over the items, top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self.nodes.chain(self.top),
        }
    }

    /// Visits every item top to bottom without changing the stack.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    /// Copies every live node top to bottom into fresh storage.
    fn clone(&self) -> Self {
        tracing::trace!(nodes = self.len(), "deep-copying stack");
        let (nodes, top, _) = self.nodes.copy_chain(self.top);
        Self { nodes, top }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing top-to-bottom iterator over a [`LinkedStack`].
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

/// Owning iterator that pops items in LIFO order.
pub struct IntoIter<T> {
    stack: LinkedStack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
