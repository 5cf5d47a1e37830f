//! Error types for set operations.

use thiserror::Error;

/// Reasons a value cannot be stored in (or looked up for removal from) a set.
///
/// Contention is never surfaced: retries happen internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// The value is larger than the set's maximum value.
    #[error("value {value} exceeds maximum {max_value}")]
    Overflow { value: u64, max_value: u64 },

    /// The value maps past the fixed capacity chosen at construction.
    #[error("value {value} maps to word {index}, beyond capacity of {capacity} words")]
    CapacityExceeded {
        value: u64,
        index: usize,
        capacity: usize,
    },
}

/// Result alias for set operations.
pub type Result<T> = core::result::Result<T, SetError>;
