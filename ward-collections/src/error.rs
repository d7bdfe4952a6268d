//! Structural error types.
//!
//! Only the bounded [`RingBuffer`](crate::RingBuffer) reports errors; the
//! unbounded containers signal absence with `None`.

/// Returned when enqueueing into a full ring buffer.
///
/// Carries the rejected item so the caller decides what happens to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ring buffer is full")]
pub struct Overflow<T>(pub T);

impl<T> Overflow<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Returned when reading from an empty ring buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ring buffer is empty")]
pub struct Underflow;
