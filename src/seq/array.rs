//! SeqArray implementation
//!
//! Boxed-slice backed growable sequence with explicit capacity management.

use std::fmt;

use crate::error::{Result, SeqError};

/// Capacity of a freshly constructed container.
pub const INITIAL_CAPACITY: usize = 3;

/// Growable, order-preserving sequence container.
///
/// The buffer length is the capacity; elements in `[0, count)` are live and
/// always `Some`, slots in `[count, capacity)` are spare and always `None`.
/// Capacity never shrinks over the container's lifetime.
pub struct SeqArray<T> {
    storage: Box<[Option<T>]>,
    count: usize,
}

impl<T> SeqArray<T> {
    /// Create an empty container with the initial capacity of 3.
    pub fn new() -> Self {
        Self {
            storage: empty_buffer(INITIAL_CAPACITY),
            count: 0,
        }
    }

    /// Current allocated capacity.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of live elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the container holds at least one element.
    pub fn has_any(&self) -> bool {
        self.count > 0
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Append an element at the end.
    ///
    /// When the container is full, the buffer grows by exactly one slot
    /// before the element is placed. Growing one slot at a time makes a run
    /// of appends O(n) amortized rather than O(1); the policy is kept because
    /// the capacity sequence it produces is part of the observable contract.
    pub fn append(&mut self, item: T) {
        if self.count == self.capacity() {
            self.grow(self.capacity() + 1);
        }
        self.storage[self.count] = Some(item);
        self.count += 1;
    }

    /// Append every element of `items` at the end, in order.
    ///
    /// Unlike repeated [`append`](Self::append), a bulk append grows straight
    /// to the exact required capacity in a single reallocation. An empty
    /// slice leaves the container untouched.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `items` is absent. No mutation occurs on
    /// failure.
    pub fn append_range(&mut self, items: Option<&[T]>) -> Result<()>
    where
        T: Clone,
    {
        let items = items.ok_or(SeqError::InvalidArgument("items"))?;

        let required = self.count + items.len();
        if required > self.capacity() {
            self.grow(required);
        }
        for item in items {
            self.storage[self.count] = Some(item.clone());
            self.count += 1;
        }
        Ok(())
    }

    /// First element of the sequence.
    ///
    /// # Errors
    ///
    /// `EmptyCollection` when the container holds no elements.
    pub fn first(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(SeqError::EmptyCollection);
        }
        // count > 0 guarantees slot 0 is live
        self.storage[0].as_ref().ok_or(SeqError::EmptyCollection)
    }

    /// Index of the first element equal to `item`, or `None`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage[..self.count]
            .iter()
            .position(|slot| slot.as_ref() == Some(item))
    }

    /// Index of the last element equal to `item`, or `None`.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.storage[..self.count]
            .iter()
            .rposition(|slot| slot.as_ref() == Some(item))
    }

    /// Remove the first element equal to `item`.
    ///
    /// Returns `true` when an element was found and removed, `false` when no
    /// element matched (the container is left unchanged).
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Remove every element equal to any member of `items`.
    ///
    /// Survivors keep their relative order; compaction is a single forward
    /// pass over the live range. Capacity is unchanged. Returns the number of
    /// elements removed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `items` is absent. No mutation occurs on
    /// failure.
    pub fn remove_all(&mut self, items: Option<&[T]>) -> Result<usize>
    where
        T: PartialEq,
    {
        let items = items.ok_or(SeqError::InvalidArgument("items"))?;

        let original_count = self.count;
        let mut kept = 0;
        for i in 0..original_count {
            if let Some(element) = self.storage[i].take() {
                if !items.contains(&element) {
                    self.storage[kept] = Some(element);
                    kept += 1;
                }
                // non-survivors drop here
            }
        }
        self.count = kept;
        Ok(original_count - kept)
    }

    /// Remove all elements.
    ///
    /// Capacity is unchanged. Live slots are reset so element destructors
    /// run immediately rather than lingering in the spare region.
    pub fn clear(&mut self) {
        for slot in &mut self.storage[..self.count] {
            *slot = None;
        }
        self.count = 0;
    }

    /// Insert `item` at `index`, shifting later elements one slot rightward.
    ///
    /// `index == count` is valid and behaves exactly like
    /// [`append`](Self::append). Grows by one slot first when full.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index > count`. Validation happens before any
    /// growth or shifting, so a failed insert leaves the container unchanged.
    pub fn insert(&mut self, item: T, index: usize) -> Result<()> {
        if index > self.count {
            return Err(SeqError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        if self.count == self.capacity() {
            self.grow(self.capacity() + 1);
        }

        // Rotate the spare slot at `count` down to `index`, shifting the
        // tail of the live range right by one.
        self.storage[index..=self.count].rotate_right(1);
        self.storage[index] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements one slot
    /// leftward.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= count`.
    fn remove_at(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(SeqError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        // Rotate the removed element to the end of the live range, then
        // vacate that slot so the element drops now.
        self.storage[index..self.count].rotate_left(1);
        self.storage[self.count - 1] = None;
        self.count -= 1;
        Ok(())
    }

    /// Replace the backing buffer with a larger one.
    ///
    /// Allocates a fresh buffer of `new_capacity` slots, moves the live
    /// range across, and swaps it in. This is the only place the backing
    /// allocation changes; cost is O(count) moves.
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.capacity());
        tracing::debug!(
            old_capacity = self.capacity(),
            new_capacity,
            count = self.count,
            "growing storage buffer"
        );

        let mut next = empty_buffer(new_capacity);
        for (dst, src) in next.iter_mut().zip(self.storage[..self.count].iter_mut()) {
            *dst = src.take();
        }
        self.storage = next;
    }

    /// Independent copy of the live range.
    ///
    /// Mutating the returned vector never affects the container, and vice
    /// versa.
    pub fn to_snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.storage[..self.count].iter().cloned().flatten().collect()
    }
}

impl<T> Default for SeqArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqArray")
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field(
                "elements",
                &self.storage[..self.count]
                    .iter()
                    .filter_map(Option::as_ref)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Allocate a buffer of `capacity` vacant slots.
fn empty_buffer<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    buffer.into_boxed_slice()
}
