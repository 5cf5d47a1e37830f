//! Fixed-capacity concurrent set.
//!
//! The word array is allocated once at construction and never moves, so
//! no frozen marker is needed. Only the logical length grows, lazily, as
//! higher words are first written.
//!
//! # Performance
//! - `load`: O(1), wait-free
//! - `load_or_store` / `load_and_delete`: O(1) expected, lock-free CAS loop
//! - `range`: O(length) words

use core::fmt;

use crate::bitmap;
use crate::config::{Resolved, SetOptions};
use crate::count::Cardinality;
use crate::error::{Result, SetError};
use crate::iter::{self, Iter};
use crate::packing::{Dense64, Layout};
use crate::set::{write_members, IntSet, WordSet};
use crate::word::Word;
use crate::words::{BitUpdate, WordArray};

/// Concurrent integer set backed by a fixed array of words.
///
/// # Type Parameters
/// * `L` - Packing layout (default [`Dense64`]: 64 members per word)
///
/// # Example
/// ```rust
/// use packed_intset::{FixedSet, IntSet};
///
/// let set = FixedSet::<packed_intset::Dense64>::new(100);
/// set.insert(7);
/// set.insert(31);
/// set.insert(32);
/// set.remove(31);
/// assert_eq!(set.to_sorted_vec(), vec![7, 32]);
/// ```
pub struct FixedSet<L: Layout = Dense64> {
    max_value: u64,
    count: Cardinality,
    words: WordArray<L>,
}

impl<L: Layout> FixedSet<L> {
    /// Create an empty set holding values in `0..=max_value`.
    ///
    /// `max_value` of 0 selects the default (256); values above
    /// [`crate::MAXIMUM`] are clamped.
    ///
    /// # Performance
    /// O(max_value / WIDTH) - every word is allocated upfront
    pub fn new(max_value: u64) -> Self {
        SetOptions::new().max_value(max_value).fixed()
    }

    /// Create an empty set with an explicit word capacity.
    ///
    /// Values mapping past `capacity` words report
    /// [`SetError::CapacityExceeded`] even when below `max_value`.
    pub fn with_capacity(max_value: u64, capacity: usize) -> Self {
        SetOptions::new()
            .max_value(max_value)
            .capacity_hint(capacity)
            .fixed()
    }

    pub(crate) fn from_resolved(resolved: Resolved) -> Self {
        Self {
            max_value: resolved.max_value,
            count: Cardinality::exact(0),
            words: WordArray::zeroed(resolved.capacity),
        }
    }

    /// Allocated number of words.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }
}

impl<L: Layout> IntSet for FixedSet<L> {
    #[inline]
    fn max_value(&self) -> u64 {
        self.max_value
    }

    #[inline]
    fn load(&self, value: u64) -> bool {
        if value > self.max_value {
            return false;
        }
        let (index, offset) = L::locate(value);
        if index >= self.words.len() {
            return false;
        }
        bitmap::is_set::<L>(self.words.load(index), offset)
    }

    fn load_or_store(&self, value: u64) -> Result<bool> {
        if value > self.max_value {
            return Err(SetError::Overflow {
                value,
                max_value: self.max_value,
            });
        }
        let (index, offset) = L::locate(value);
        if !self.words.ratchet_len(index) {
            return Err(SetError::CapacityExceeded {
                value,
                index,
                capacity: self.words.capacity(),
            });
        }
        match self.words.insert_bit(index, offset) {
            BitUpdate::Changed => {
                self.count.increment();
                Ok(false)
            }
            BitUpdate::Unchanged => Ok(true),
            BitUpdate::Frozen => unreachable!("fixed set word {index} carries a frozen marker"),
        }
    }

    fn load_and_delete(&self, value: u64) -> Result<bool> {
        if value > self.max_value {
            return Err(SetError::Overflow {
                value,
                max_value: self.max_value,
            });
        }
        let (index, offset) = L::locate(value);
        if index >= self.words.len() {
            return Ok(false);
        }
        match self.words.remove_bit(index, offset) {
            BitUpdate::Changed => {
                self.count.decrement();
                Ok(true)
            }
            BitUpdate::Unchanged => Ok(false),
            BitUpdate::Frozen => unreachable!("fixed set word {index} carries a frozen marker"),
        }
    }

    fn range<F: FnMut(u64) -> bool>(&self, visit: F) {
        iter::scan(self, visit);
    }

    fn size(&self) -> usize {
        self.count.get_or_rescan(|| self.words.count_members())
    }

    /// Zero every live word. The logical length is kept.
    fn clear(&self) {
        for index in 0..self.words.len() {
            if let Some(removed) = self.words.clear_word(index) {
                self.count.subtract(removed);
            }
        }
    }
}

impl<L: Layout> WordSet for FixedSet<L> {
    type Layout = L;

    #[inline]
    fn word_len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn word_at(&self, index: usize) -> L::Word {
        if index < self.words.capacity() {
            L::payload(self.words.load(index))
        } else {
            <L::Word as Word>::ZERO
        }
    }

    fn snapshot_words(&self) -> Vec<L::Word> {
        self.words.snapshot()
    }

    fn from_words(max_value: u64, words: Vec<L::Word>) -> Self {
        let resolved = SetOptions::new().max_value(max_value).resolve_fixed::<L>();
        Self {
            max_value: resolved.max_value,
            count: Cardinality::stale(),
            words: WordArray::from_words(words, resolved.capacity),
        }
    }
}

impl<L: Layout> Default for FixedSet<L> {
    fn default() -> Self {
        SetOptions::new().fixed()
    }
}

impl<L: Layout> Clone for FixedSet<L> {
    fn clone(&self) -> Self {
        Self::from_words(self.max_value, self.snapshot_words())
    }
}

impl<L: Layout> PartialEq for FixedSet<L> {
    fn eq(&self, other: &Self) -> bool {
        bitmap::equal(&self.snapshot_words(), &other.snapshot_words())
    }
}

impl<L: Layout> Eq for FixedSet<L> {}

impl<L: Layout> fmt::Debug for FixedSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedSet")
            .field("layout", &L::NAME)
            .field("max_value", &self.max_value)
            .field("len", &self.words.len())
            .field("capacity", &self.words.capacity())
            .finish()
    }
}

impl<L: Layout> fmt::Display for FixedSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(self, f)
    }
}

impl<'a, L: Layout> IntoIterator for &'a FixedSet<L> {
    type Item = u64;
    type IntoIter = Iter<'a, FixedSet<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
