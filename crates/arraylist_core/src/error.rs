//! # Array List Error Types
//!
//! All errors that can occur while using an [`ArrayList`](crate::ArrayList)
//! or loading its configuration.

use thiserror::Error;

/// Errors returned by fallible [`ArrayList`](crate::ArrayList) operations.
///
/// Success is `Ok(_)`. The three variants below are mutually exclusive per
/// call, and emptiness is always checked before bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayListError {
    /// The operation needs at least one element and the list is empty.
    #[error("operation requires a non-empty list")]
    EmptyList,

    /// The supplied index fails the operation's bound.
    ///
    /// Access and removal require `index < length`; insertion allows
    /// `index <= length`.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        length: usize,
    },

    /// The allocator could not provide a buffer of the requested capacity.
    #[error("failed to allocate buffer for {requested} elements")]
    Allocation {
        /// Number of element slots that were requested.
        requested: usize,
    },
}

/// Result type for array list operations.
pub type ArrayListResult<T> = Result<T, ArrayListError>;

/// Errors that can occur while loading an [`ArrayListConfig`](crate::ArrayListConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(String),

    /// The configuration text is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but violates a constraint.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The configuration was valid but the list could not be built from it.
    #[error("failed to construct list: {0}")]
    Construction(#[from] ArrayListError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
