//! Construction options and their normalization.
//!
//! Malformed values are never rejected. They are replaced by defaults
//! (with a `warn!` when the caller asked for something unusable).

use crate::constants::{DEFAULT_MAX_VALUE, INITIAL_CAPACITY, MAXIMUM};
use crate::fixed::FixedSet;
use crate::growable::GrowableSet;
use crate::packing::{Freezable, Layout};

/// Builder for [`FixedSet`] and [`GrowableSet`].
///
/// # Example
/// ```rust
/// use packed_intset::{IntSet, SetOptions};
///
/// let set = SetOptions::new().max_value(1000).fixed::<packed_intset::Dense32>();
/// assert!(set.insert(999));
/// assert!(!set.insert(1001));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    max_value: Option<u64>,
    capacity_hint: Option<usize>,
}

/// Options after normalization for a concrete layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Resolved {
    /// Largest storable value.
    pub max_value: u64,
    /// Initial capacity in words.
    pub capacity: usize,
    /// Words needed to hold `max_value`.
    pub max_words: usize,
}

impl SetOptions {
    /// Options with every field left to its default.
    pub const fn new() -> Self {
        Self {
            max_value: None,
            capacity_hint: None,
        }
    }

    /// Largest value the set may hold.
    ///
    /// 0 selects the family default; values above [`MAXIMUM`] are clamped.
    pub const fn max_value(mut self, max_value: u64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Initial capacity in words.
    ///
    /// For a fixed set this is the permanent capacity; values past it are
    /// rejected with [`crate::SetError::CapacityExceeded`].
    pub const fn capacity_hint(mut self, words: usize) -> Self {
        self.capacity_hint = Some(words);
        self
    }

    /// Build a fixed-capacity set.
    pub fn fixed<L: Layout>(self) -> FixedSet<L> {
        FixedSet::from_resolved(self.resolve_fixed::<L>())
    }

    /// Build a growable set.
    pub fn growable<L: Freezable>(self) -> GrowableSet<L> {
        GrowableSet::from_resolved(self.resolve_growable::<L>())
    }

    pub(crate) fn resolve_fixed<L: Layout>(&self) -> Resolved {
        let max_value = normalize_max(self.max_value, DEFAULT_MAX_VALUE);
        let max_words = L::words_for(max_value);
        let capacity = normalize_capacity(self.capacity_hint, max_words, max_words);
        Resolved {
            max_value,
            capacity,
            max_words,
        }
    }

    pub(crate) fn resolve_growable<L: Freezable>(&self) -> Resolved {
        let max_value = normalize_max(self.max_value, MAXIMUM);
        let max_words = L::words_for(max_value);
        let capacity =
            normalize_capacity(self.capacity_hint, INITIAL_CAPACITY.min(max_words), max_words);
        Resolved {
            max_value,
            capacity,
            max_words,
        }
    }
}

fn normalize_max(requested: Option<u64>, default: u64) -> u64 {
    match requested {
        None | Some(0) => default,
        Some(max) if max > MAXIMUM => {
            log::warn!("max value {max} above limit, clamping to {MAXIMUM}");
            MAXIMUM
        }
        Some(max) => max,
    }
}

fn normalize_capacity(hint: Option<usize>, default: usize, max_words: usize) -> usize {
    match hint {
        None => default,
        Some(0) => {
            log::warn!("capacity hint of 0 words, using {default}");
            default
        }
        Some(words) => words.min(max_words),
    }
}
