//! # Array List Core
//!
//! One generic, heap-backed, contiguous sequence: [`ArrayList<T>`].
//!
//! ## Guarantees
//!
//! 1. **Amortized O(1) append** - the buffer grows by a factor of 1.5 when full
//! 2. **No implicit shrinking** - only [`ArrayList::shrink_to_fit`] reduces capacity
//! 3. **Rollback on failure** - every error leaves the list exactly as it was
//!
//! ## Errors
//!
//! Every operation except [`ArrayList::len`], [`ArrayList::is_empty`],
//! [`ArrayList::capacity`], [`ArrayList::clear`] and [`ArrayList::destroy`]
//! can fail, and every failure is one of
//! [`ArrayListError::EmptyList`], [`ArrayListError::IndexOutOfBounds`] or
//! [`ArrayListError::Allocation`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use arraylist_core::{ArrayList, ArrayListError};
//!
//! let mut list = ArrayList::create()?;
//! list.add_last(1)?;
//! list.add_last(2)?;
//! list.add_last(3)?;
//! list.add(1, 99)?;               // [1, 99, 2, 3]
//! assert_eq!(list.remove(2)?, 2); // [1, 99, 3]
//!
//! list.clear();
//! assert_eq!(list.remove_last(), Err(ArrayListError::EmptyList));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod array;
pub mod config;
pub mod error;
pub mod growth;

/// Slots allocated by [`ArrayList::create`].
pub const INITIAL_CAPACITY: usize = 10;

/// Smallest capacity a constructed list may have.
pub const MIN_CAPACITY: usize = 10;

pub use array::ArrayList;
pub use config::ArrayListConfig;
pub use error::{ArrayListError, ArrayListResult, ConfigError, ConfigResult};
pub use growth::{next_capacity, GrowthFactor};
