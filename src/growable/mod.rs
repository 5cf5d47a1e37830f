//! Growable concurrent set.
//!
//! Storage lives in a generation behind an [`ArcSwap`] handle. When a
//! value maps past the current capacity, one elected thread migrates every
//! word into a larger generation while other threads keep operating. Words
//! use a [`Freezable`] layout whose top bit fences a word during migration.
//!
//! Every operation re-reads the handle on each retry.

mod generation;
mod migrate;

use core::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::bitmap;
use crate::config::{Resolved, SetOptions};
use crate::count::Cardinality;
use crate::error::{Result, SetError};
use crate::iter::{self, Iter};
use crate::packing::{Freezable, Reserved63};
use crate::set::{write_members, IntSet, WordSet};
use crate::word::Word;
use crate::words::BitUpdate;

use generation::Generation;

/// Concurrent integer set whose storage grows on demand.
///
/// # Type Parameters
/// * `L` - Freezable packing layout (default [`Reserved63`]: 63 members per word)
///
/// # Example
/// ```rust
/// use packed_intset::{GrowableSet, IntSet};
///
/// let set = GrowableSet::<packed_intset::Reserved31>::new();
/// set.insert(5);
/// set.insert(1_000_000);
/// assert_eq!(set.to_sorted_vec(), vec![5, 1_000_000]);
/// ```
pub struct GrowableSet<L: Freezable = Reserved63> {
    max_value: u64,

    /// Words needed to hold `max_value`; capacity never grows past this.
    max_words: usize,

    count: Cardinality,
    generation: ArcSwap<Generation<L>>,
}

impl<L: Freezable> GrowableSet<L> {
    /// Create an empty set accepting values up to [`crate::MAXIMUM`].
    pub fn new() -> Self {
        SetOptions::new().growable()
    }

    /// Create an empty set accepting values up to `max_value`.
    ///
    /// 0 selects [`crate::MAXIMUM`]; larger values are clamped to it.
    pub fn with_max_value(max_value: u64) -> Self {
        SetOptions::new().max_value(max_value).growable()
    }

    pub(crate) fn from_resolved(resolved: Resolved) -> Self {
        Self {
            max_value: resolved.max_value,
            max_words: resolved.max_words,
            count: Cardinality::exact(0),
            generation: ArcSwap::from_pointee(Generation::zeroed(resolved.capacity)),
        }
    }

    /// Capacity in words of the current generation.
    pub fn capacity(&self) -> usize {
        self.generation.load().words.capacity()
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    fn overflow(&self, value: u64) -> SetError {
        SetError::Overflow {
            value,
            max_value: self.max_value,
        }
    }
}

impl<L: Freezable> IntSet for GrowableSet<L> {
    #[inline]
    fn max_value(&self) -> u64 {
        self.max_value
    }

    fn load(&self, value: u64) -> bool {
        if value > self.max_value {
            return false;
        }
        let (index, offset) = L::locate(value);
        let generation = self.generation.load();
        if index >= generation.words.len() {
            return false;
        }
        bitmap::is_set::<L>(generation.words.load(index), offset)
    }

    fn load_or_store(&self, value: u64) -> Result<bool> {
        if value > self.max_value {
            return Err(self.overflow(value));
        }
        let (index, offset) = L::locate(value);
        loop {
            let generation = self.reserve(index);
            match generation.words.insert_bit(index, offset) {
                BitUpdate::Changed => {
                    self.count.increment();
                    return Ok(false);
                }
                BitUpdate::Unchanged => return Ok(true),
                BitUpdate::Frozen => std::thread::yield_now(),
            }
        }
    }

    fn load_and_delete(&self, value: u64) -> Result<bool> {
        if value > self.max_value {
            return Err(self.overflow(value));
        }
        let (index, offset) = L::locate(value);
        loop {
            let generation = self.generation.load();
            if index >= generation.words.len() {
                return Ok(false);
            }
            match generation.words.remove_bit(index, offset) {
                BitUpdate::Changed => {
                    self.count.decrement();
                    return Ok(true);
                }
                BitUpdate::Unchanged => return Ok(false),
                BitUpdate::Frozen => std::thread::yield_now(),
            }
        }
    }

    fn range<F: FnMut(u64) -> bool>(&self, visit: F) {
        iter::scan(self, visit);
    }

    fn size(&self) -> usize {
        self.count
            .get_or_rescan(|| self.generation.load().words.count_members())
    }

    /// Zero every live word, restarting on the new generation if a
    /// migration freezes a word first.
    fn clear(&self) {
        'generation: loop {
            let generation = self.generation.load_full();
            for index in 0..generation.words.len() {
                match generation.words.clear_word(index) {
                    Some(removed) => self.count.subtract(removed),
                    None => {
                        std::thread::yield_now();
                        continue 'generation;
                    }
                }
            }
            return;
        }
    }
}

impl<L: Freezable> WordSet for GrowableSet<L> {
    type Layout = L;

    fn word_len(&self) -> usize {
        self.generation.load().words.len()
    }

    fn word_at(&self, index: usize) -> L::Word {
        let generation = self.generation.load();
        if index < generation.words.capacity() {
            L::payload(generation.words.load(index))
        } else {
            <L::Word as Word>::ZERO
        }
    }

    fn snapshot_words(&self) -> Vec<L::Word> {
        self.generation.load().words.snapshot()
    }

    fn from_words(max_value: u64, words: Vec<L::Word>) -> Self {
        let resolved = SetOptions::new()
            .max_value(max_value)
            .resolve_growable::<L>();
        let capacity = resolved.capacity.max(words.len());
        Self {
            max_value: resolved.max_value,
            max_words: resolved.max_words,
            count: Cardinality::stale(),
            generation: ArcSwap::new(Arc::new(Generation::from_words(words, capacity))),
        }
    }
}

impl<L: Freezable> Default for GrowableSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Freezable> Clone for GrowableSet<L> {
    fn clone(&self) -> Self {
        Self::from_words(self.max_value, self.snapshot_words())
    }
}

impl<L: Freezable> PartialEq for GrowableSet<L> {
    fn eq(&self, other: &Self) -> bool {
        bitmap::equal(&self.snapshot_words(), &other.snapshot_words())
    }
}

impl<L: Freezable> Eq for GrowableSet<L> {}

impl<L: Freezable> FromIterator<u64> for GrowableSet<L> {
    /// Values above [`crate::MAXIMUM`] are skipped.
    fn from_iter<I: IntoIterator<Item = u64>>(values: I) -> Self {
        let set = Self::new();
        set.insert_all(values);
        set
    }
}

impl<L: Freezable> fmt::Debug for GrowableSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableSet")
            .field("layout", &L::NAME)
            .field("max_value", &self.max_value)
            .field("generation", &*self.generation.load())
            .finish()
    }
}

impl<L: Freezable> fmt::Display for GrowableSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(self, f)
    }
}

impl<'a, L: Freezable> IntoIterator for &'a GrowableSet<L> {
    type Item = u64;
    type IntoIter = Iter<'a, GrowableSet<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
