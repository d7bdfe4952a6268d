//! Small, single-owner containers for ward tracking.
//!
//! Four leaf data structures, each generic over its element type:
//!
//! | Structure | Order | Capacity | Used for |
//! |-----------|-------|----------|----------|
//! | [`RingBuffer`] | FIFO, rotatable | Fixed (const generic) | Ambulance rotation |
//! | [`LinkedQueue`] | FIFO | Unbounded | Patient admission |
//! | [`LinkedStack`] | LIFO | Unbounded | Supply batches |
//! | [`BinaryMaxHeap`] | Priority | Unbounded, doubling | Emergency triage |
//!
//! None of the containers depend on each other, and none validate the
//! contents of the values they hold. The only failures are structural:
//!
//! ```text
//! RingBuffer::enqueue on a full buffer   -> Err(Overflow(item))
//! RingBuffer::dequeue on an empty buffer -> Err(Underflow)
//! pop / dequeue / peek on the others     -> None
//! ```
//!
//! # Quick Start
//!
//! ```
//! use ward_collections::{BinaryMaxHeap, LinkedQueue, LinkedStack, RingBuffer};
//!
//! // Fixed fleet, rotated each shift
//! let mut fleet: RingBuffer<&str, 3> = RingBuffer::new();
//! fleet.enqueue("AMB-1").unwrap();
//! fleet.enqueue("AMB-2").unwrap();
//! fleet.rotate_once();
//! assert_eq!(fleet.peek_front(), Ok(&"AMB-2"));
//!
//! // Admission order
//! let mut patients = LinkedQueue::new();
//! patients.enqueue("P001");
//! patients.enqueue("P002");
//! assert_eq!(patients.dequeue(), Some("P001"));
//!
//! // Most recently stocked first
//! let mut supplies = LinkedStack::new();
//! supplies.push("gauze");
//! supplies.push("saline");
//! assert_eq!(supplies.pop(), Some("saline"));
//!
//! // Highest priority first
//! let mut triage: BinaryMaxHeap<u8> = BinaryMaxHeap::new();
//! triage.push(3);
//! triage.push(5);
//! assert_eq!(triage.pop_max(), Some(5));
//! ```
//!
//! # Ownership
//!
//! Every container exclusively owns its elements. `dequeue`/`pop` hand the
//! value to the caller; peeked references are tied to a shared borrow of
//! the container and cannot outlive the next mutating call.
//!
//! # Logging
//!
//! Growth and rejection events are emitted through [`tracing`] at `TRACE`
//! level. The crate never installs a subscriber.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
mod node;
pub mod queue;
pub mod ring;
pub mod stack;

pub use error::{Overflow, Underflow};
pub use heap::{BinaryMaxHeap, Compare, MaxOrder, MinOrder, PriorityIter};
pub use queue::LinkedQueue;
pub use ring::{DefaultRingBuffer, RingBuffer};
pub use stack::LinkedStack;

/// Default sizing constants.
pub mod config {
    /// Default ring buffer capacity (fleet size).
    pub const DEFAULT_RING_CAPACITY: usize = 10;

    /// Initial heap storage reserved by [`BinaryMaxHeap::new`](crate::BinaryMaxHeap::new).
    pub const DEFAULT_HEAP_CAPACITY: usize = 8;
}
