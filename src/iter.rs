//! Ascending iteration over word-backed sets.
//!
//! # Algorithm
//! 1. Snapshot the live word count once
//! 2. For each word index, load the word once (frozen marker stripped)
//! 3. Extract members with `trailing_zeros` and `w & (w - 1)`
//!
//! Words are read one at a time from the live set, so this is not a
//! snapshot of the whole set.

use crate::bitmap;
use crate::packing::Layout;
use crate::set::WordSet;
use crate::word::Word;

type WordOf<S> = <<S as WordSet>::Layout as Layout>::Word;

/// Iterator over members in ascending order.
///
/// # Example
/// ```rust
/// use packed_intset::{FixedSet, IntSet};
///
/// let set = FixedSet::<packed_intset::Dense64>::new(200);
/// set.insert(10);
/// set.insert(130);
///
/// let values: Vec<u64> = set.iter().collect();
/// assert_eq!(values, vec![10, 130]);
/// ```
pub struct Iter<'a, S: WordSet> {
    set: &'a S,

    /// Live word count when iteration started.
    len: usize,

    /// Index of the next word to load.
    next_index: usize,

    /// Index the cached word was loaded from.
    current_index: usize,

    /// Members of the current word not yet yielded.
    remaining_bits: WordOf<S>,
}

impl<'a, S: WordSet> Iter<'a, S> {
    pub(crate) fn new(set: &'a S) -> Self {
        Self {
            set,
            len: set.word_len(),
            next_index: 0,
            current_index: 0,
            remaining_bits: <WordOf<S> as Word>::ZERO,
        }
    }
}

impl<S: WordSet> Iterator for Iter<'_, S> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        while self.remaining_bits.is_zero() {
            if self.next_index >= self.len {
                return None;
            }
            self.current_index = self.next_index;
            self.remaining_bits = self.set.word_at(self.next_index);
            self.next_index += 1;
        }

        let offset = self.remaining_bits.trailing_zeros();
        self.remaining_bits = self.remaining_bits.clear_lowest();
        Some(<S::Layout as Layout>::value_at(self.current_index, offset))
    }
}

/// Drive `visit` over every member of `set`, stopping when it returns `false`.
///
/// Shared body of the `range` implementations.
pub(crate) fn scan<S, F>(set: &S, mut visit: F)
where
    S: WordSet,
    F: FnMut(u64) -> bool,
{
    let len = set.word_len();
    for index in 0..len {
        let word = set.word_at(index);
        if word.is_zero() {
            continue;
        }
        if !bitmap::for_each_set_bit::<S::Layout, F>(index, word, &mut visit) {
            return;
        }
    }
}
