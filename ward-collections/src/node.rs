//! Singly-linked nodes stored in a slab.
//!
//! Links are slab keys rather than pointers. A node lives in exactly one
//! arena, and unlinking it is a single `free` that hands back ownership of
//! its value. Looking up [`NONE`] always misses, so callers can treat an
//! empty link and a missing node the same way.
//!
//! A slab only marks freed slots vacant, so the arena drops its storage
//! outright once the last node leaves. Copies are built by walking the live
//! chain, never by cloning the slab.

use slab::Slab;

/// Sentinel key meaning "no node".
pub(crate) const NONE: usize = usize::MAX;

/// A value plus the key of the node after it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: usize,
}

/// Growable node storage with stable keys.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    nodes: Slab<Node<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Stores a new node and returns its key.
    #[inline]
    pub(crate) fn alloc(&mut self, data: T, next: usize) -> usize {
        self.nodes.insert(Node { data, next })
    }

    /// Removes the node at `key`, returning it.
    ///
    /// Returns `None` for `NONE` or a key that is not live.
    #[inline]
    pub(crate) fn free(&mut self, key: usize) -> Option<Node<T>> {
        if !self.nodes.contains(key) {
            return None;
        }

        let node = self.nodes.remove(key);
        if self.nodes.is_empty() {
            self.release();
        }
        Some(node)
    }

    #[inline]
    pub(crate) fn get(&self, key: usize) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(key)
    }

    /// Drops every node and the storage behind them.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.release();
    }

    /// Copies the chain starting at `head` into a fresh, densely packed
    /// arena. Returns the arena with the keys of the copied head and tail.
    ///
    /// Only live nodes reachable from `head` are visited.
    pub(crate) fn copy_chain(&self, head: usize) -> (Self, usize, usize)
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.len());
        let mut first = NONE;
        let mut last = NONE;

        for data in self.chain(head) {
            let key = copy.alloc(data.clone(), NONE);
            match copy.get_mut(last) {
                Some(prev) => prev.next = key,
                None => first = key,
            }
            last = key;
        }

        (copy, first, last)
    }

    /// Slots held by the backing storage, live or vacant.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.nodes.capacity()
    }

    fn release(&mut self) {
        self.nodes = Slab::new();
    }

    /// Walks the chain starting at `head`.
    #[inline]
    pub(crate) fn chain(&self, head: usize) -> Chain<'_, T> {
        Chain {
            arena: self,
            current: head,
            remaining: self.len(),
        }
    }
}

/// Borrowing iterator that follows `next` links.
pub(crate) struct Chain<'a, T> {
    arena: &'a NodeArena<T>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.current)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current == NONE {
            (0, Some(0))
        } else {
            (0, Some(self.remaining))
        }
    }
}

impl<T> Clone for Chain<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            current: self.current,
            remaining: self.remaining,
        }
    }
}
