//! # Array List
//!
//! A generic, contiguous, heap-backed sequence with indexed access,
//! positional insertion and removal, and amortized O(1) append.
//!
//! The list owns a single boxed slice of slots. Slots `[0, length)` hold
//! elements; slots `[length, capacity)` are empty. Insertion and removal
//! open or close a gap with one bulk rotation over the affected range.
//!
//! ## Failure Semantics
//!
//! Every fallible operation returns an [`ArrayListError`]. On any error the
//! length, capacity and element order are exactly what they were before the
//! call. Emptiness is checked before bounds.
//!
//! ## Borrowed Results
//!
//! [`ArrayList::get`] and friends return references into the buffer. A
//! reallocation moves every element, so such a reference must not outlive
//! the next `add`, `remove`, `grow`, `reserve` or `shrink_to_fit`. The borrow
//! checker enforces this: all of those take `&mut self`.
//!
//! ## Thread Safety
//!
//! The list has a single owner and no internal locking. Callers that share
//! one across threads wrap it in a mutex and hold the lock for every call.

use std::fmt;

use crate::config::ArrayListConfig;
use crate::error::{ArrayListError, ArrayListResult, ConfigResult};
use crate::growth::{next_capacity, GrowthFactor};
use crate::{INITIAL_CAPACITY, MIN_CAPACITY};

/// A growable array of `T`.
///
/// # Invariants
///
/// - `length <= capacity`
/// - `capacity >= MIN_CAPACITY`
/// - slot `i` is occupied if and only if `i < length`
///
/// # Example
///
/// ```rust,ignore
/// let mut list: ArrayList<u32> = ArrayList::create()?;
/// list.add_last(1)?;
/// list.add_last(3)?;
/// list.add(1, 2)?;
/// assert_eq!(list.remove(0)?, 1);
/// assert_eq!(list.len(), 2);
/// ```
pub struct ArrayList<T> {
    /// Backing storage. Its length is the capacity.
    buffer: Box<[Option<T>]>,
    /// Number of occupied slots at the front of `buffer`.
    length: usize,
    /// Factor used when `add` finds the buffer full.
    growth: GrowthFactor,
}

/// Allocates `capacity` slots, moving `existing` into the front of them.
///
/// The allocation happens before anything is taken from `existing`, so a
/// failure leaves the caller's storage untouched.
fn allocate_slots<T>(
    capacity: usize,
    existing: &mut [Option<T>],
) -> ArrayListResult<Box<[Option<T>]>> {
    let mut slots: Vec<Option<T>> = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        tracing::warn!(requested = capacity, "array list allocation failed");
        return Err(ArrayListError::Allocation {
            requested: capacity,
        });
    }

    slots.extend(existing.iter_mut().map(Option::take));
    slots.resize_with(capacity, || None);

    Ok(slots.into_boxed_slice())
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`INITIAL_CAPACITY`] slots and a growth
    /// factor of 1.5.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::Allocation`] if the initial buffer cannot be
    /// allocated.
    pub fn create() -> ArrayListResult<Self> {
        Self::with_parts(INITIAL_CAPACITY, GrowthFactor::default())
    }

    /// Creates an empty list from a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`](crate::ConfigError::Invalid) if the
    /// configuration fails validation, or
    /// [`ConfigError::Construction`](crate::ConfigError::Construction) if the
    /// initial buffer cannot be allocated.
    pub fn with_config(config: &ArrayListConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_parts(config.initial_capacity, config.growth)?)
    }

    fn with_parts(capacity: usize, growth: GrowthFactor) -> ArrayListResult<Self> {
        let buffer = allocate_slots(capacity, &mut [])?;
        tracing::trace!(capacity, "created array list");

        Ok(Self {
            buffer,
            length: 0,
            growth,
        })
    }

    /// Releases the list and every element it holds.
    ///
    /// Consuming `self` makes a second destroy, or any use afterwards, a
    /// compile error.
    pub fn destroy(self) {
        tracing::trace!(
            length = self.length,
            capacity = self.capacity(),
            "destroyed array list"
        );
        drop(self);
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Validates an index for access, update or removal.
    fn check_index(&self, index: usize) -> ArrayListResult<()> {
        if self.length == 0 {
            return Err(ArrayListError::EmptyList);
        }
        if index >= self.length {
            return Err(self.out_of_bounds(index));
        }
        Ok(())
    }

    #[inline]
    const fn out_of_bounds(&self, index: usize) -> ArrayListError {
        ArrayListError::IndexOutOfBounds {
            index,
            length: self.length,
        }
    }

    /// Index of the last element.
    fn last_index(&self) -> ArrayListResult<usize> {
        self.length.checked_sub(1).ok_or(ArrayListError::EmptyList)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::EmptyList`] if the list is empty, otherwise
    /// [`ArrayListError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> ArrayListResult<&T> {
        self.check_index(index)?;
        self.buffer
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayList::get`].
    pub fn get_mut(&mut self, index: usize) -> ArrayListResult<&mut T> {
        self.check_index(index)?;
        let err = self.out_of_bounds(index);
        self.buffer
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(err)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::EmptyList`] if the list is empty.
    pub fn get_first(&self) -> ArrayListResult<&T> {
        self.get(0)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::EmptyList`] if the list is empty.
    pub fn get_last(&self) -> ArrayListResult<&T> {
        self.get(self.last_index()?)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayList::get`]. On error `new_value` is dropped and the
    /// list is unchanged.
    pub fn set(&mut self, index: usize, new_value: T) -> ArrayListResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, new_value))
    }

    /// Reallocates the buffer to exactly `new_capacity` slots, keeping every
    /// element at its index.
    ///
    /// A `new_capacity` not above the current capacity is a no-op; capacity
    /// only shrinks through [`ArrayList::shrink_to_fit`].
    ///
    /// # Errors
    ///
    /// [`ArrayListError::Allocation`] if the new buffer cannot be allocated.
    /// The existing buffer and contents are left intact.
    pub fn grow(&mut self, new_capacity: usize) -> ArrayListResult<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate(new_capacity)
    }

    fn reallocate(&mut self, new_capacity: usize) -> ArrayListResult<()> {
        let old_capacity = self.capacity();
        // length <= capacity always holds, so this slice is in bounds.
        let occupied = &mut self.buffer[..self.length];

        self.buffer = allocate_slots(new_capacity, occupied)?;

        tracing::debug!(
            old_capacity,
            new_capacity,
            length = self.length,
            "reallocated array list buffer"
        );
        Ok(())
    }

    /// Ensures room for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::Allocation`] if the required capacity overflows or
    /// cannot be allocated.
    pub fn reserve(&mut self, additional: usize) -> ArrayListResult<()> {
        let required = self
            .length
            .checked_add(additional)
            .ok_or(ArrayListError::Allocation {
                requested: usize::MAX,
            })?;
        self.grow(required)
    }

    /// Shrinks capacity to `max(len(), MIN_CAPACITY)`.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::Allocation`] if the smaller buffer cannot be
    /// allocated. The existing buffer is kept in that case.
    pub fn shrink_to_fit(&mut self) -> ArrayListResult<()> {
        let target = self.length.max(MIN_CAPACITY);
        if target >= self.capacity() {
            return Ok(());
        }
        self.reallocate(target)
    }

    /// Inserts `element` at `index`, shifting later elements up by one.
    ///
    /// `index == len()` appends. Grows the buffer first if it is full.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::IndexOutOfBounds`] if `index > len()`, or
    /// [`ArrayListError::Allocation`] if growth fails. The list is unchanged
    /// on error.
    pub fn add(&mut self, index: usize, element: T) -> ArrayListResult<()> {
        if index > self.length {
            return Err(self.out_of_bounds(index));
        }

        if self.length == self.capacity() {
            let target = next_capacity(self.capacity(), self.growth)?;
            self.grow(target)?;
        }

        let gap = self
            .buffer
            .get_mut(index..=self.length)
            .ok_or(ArrayListError::IndexOutOfBounds {
                index,
                length: self.length,
            })?;
        // The free slot at `length` lands at `index` after the rotation.
        if let Some(free) = gap.last_mut() {
            *free = Some(element);
        }
        gap.rotate_right(1);
        self.length += 1;

        Ok(())
    }

    /// Inserts `element` at the front. O(n).
    ///
    /// # Errors
    ///
    /// [`ArrayListError::Allocation`] if growth fails.
    pub fn add_first(&mut self, element: T) -> ArrayListResult<()> {
        self.add(0, element)
    }

    /// Appends `element`. Amortized O(1).
    ///
    /// # Errors
    ///
    /// [`ArrayListError::Allocation`] if growth fails.
    pub fn add_last(&mut self, element: T) -> ArrayListResult<()> {
        self.add(self.length, element)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// [`ArrayListError::EmptyList`] if the list is empty, otherwise
    /// [`ArrayListError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> ArrayListResult<T> {
        self.check_index(index)?;

        let err = self.out_of_bounds(index);
        let tail = self
            .buffer
            .get_mut(index..self.length)
            .ok_or_else(|| err.clone())?;
        let value = tail.first_mut().and_then(Option::take).ok_or(err)?;
        // The vacated slot moves to `length - 1`.
        tail.rotate_left(1);
        self.length -= 1;

        Ok(value)
    }

    /// Removes and returns the first element. O(n).
    ///
    /// # Errors
    ///
    /// [`ArrayListError::EmptyList`] if the list is empty.
    pub fn remove_first(&mut self) -> ArrayListResult<T> {
        self.remove(0)
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    ///
    /// [`ArrayListError::EmptyList`] if the list is empty.
    pub fn remove_last(&mut self) -> ArrayListResult<T> {
        let index = self.last_index()?;
        self.remove(index)
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.buffer.iter_mut().take(self.length) {
            *slot = None;
        }
        self.length = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.buffer.iter().take(self.length).flatten())
            .finish()
    }
}
