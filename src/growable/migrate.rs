//! Capacity migration for growable sets.
//!
//! # Protocol
//! 1. A writer whose index is past the current capacity races a CAS on
//!    the generation's `resizing` flag. Exactly one thread wins.
//! 2. The winner sets the frozen marker on every word with `fetch_or`,
//!    which also yields the word's final payload, and copies that payload
//!    into a fresh, unpublished generation.
//! 3. The winner publishes the new generation with a single
//!    compare-and-swap on the handle.
//!
//! Migration never changes membership, so the cached count carries over.
//!
//! Any writer that meets a frozen word yields and retries against the
//! current handle, so no update applied to the old generation is lost.

use std::sync::Arc;

use crate::growth::grown_capacity;
use crate::packing::Freezable;
use crate::word::Word;

use super::generation::Generation;
use super::GrowableSet;

impl<L: Freezable> GrowableSet<L> {
    /// Return a generation whose length covers `index`, migrating if needed.
    pub(super) fn reserve(&self, index: usize) -> Arc<Generation<L>> {
        loop {
            let current = self.generation.load_full();
            if current.words.ratchet_len(index) {
                return current;
            }
            if current.try_claim() {
                self.migrate(&current, index + 1);
            } else {
                std::thread::yield_now();
            }
        }
    }

    /// Move every word of `old` into a larger generation and publish it.
    ///
    /// Must only be called by the thread that won `old.try_claim()`.
    ///
    /// # Panics
    /// Panics if the handle no longer points at `old`: only the migration
    /// winner may replace it.
    fn migrate(&self, old: &Arc<Generation<L>>, required: usize) {
        let old_capacity = old.words.capacity();
        let capacity = grown_capacity(old_capacity, required)
            .min(self.max_words)
            .max(required);

        let mut payload: Vec<L::Word> = (0..old_capacity).map(|i| old.words.freeze(i)).collect();
        payload.resize(required.max(old_capacity), <L::Word as Word>::ZERO);

        let next = Arc::new(Generation::from_words(payload, capacity));
        let previous = self.generation.compare_and_swap(old, Arc::clone(&next));
        if !Arc::ptr_eq(&*previous, old) {
            panic!("BUG: generation handle replaced during migration by a thread that did not win the election");
        }

        log::debug!(
            "{} set migrated: capacity {} -> {} words (required {})",
            L::NAME,
            old_capacity,
            capacity,
            required
        );
    }
}
