//! Sequence Container Module
//!
//! Growable, order-preserving element storage.
//!
//! ## Responsibilities
//! - Own a contiguous backing buffer and track the live element count
//! - Grow the buffer on demand (by one for single appends, exactly-sized
//!   for bulk appends) without ever shrinking
//! - Shift elements for positional insert/remove, preserving order
//! - Export independent snapshots of the live range
//!
//! ## Data Structure Choice
//! A boxed slice of `Option<T>` backs the container:
//! - Buffer length is the capacity, so capacity needs no separate field
//! - Spare and vacated slots are `None`, so element destructors run as soon
//!   as a slot leaves the live range
//! - Growth is an allocate-move-replace of the whole buffer, the only place
//!   the backing allocation changes

mod array;
pub mod render;

pub use array::{SeqArray, INITIAL_CAPACITY};
