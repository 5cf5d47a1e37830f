//! One published generation of a growable set's storage.

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::packing::Freezable;
use crate::words::WordArray;

/// Word storage plus the migration election flag.
///
/// Once a generation is superseded its words are all frozen and nothing
/// mutates it again; it is dropped when the last reader releases it.
pub(crate) struct Generation<L: Freezable> {
    /// Set by the single thread elected to migrate out of this generation.
    resizing: AtomicBool,

    pub(crate) words: WordArray<L>,
}

impl<L: Freezable> Generation<L> {
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            resizing: AtomicBool::new(false),
            words: WordArray::zeroed(capacity),
        }
    }

    pub fn from_words(words: Vec<L::Word>, capacity: usize) -> Self {
        Self {
            resizing: AtomicBool::new(false),
            words: WordArray::from_words(words, capacity),
        }
    }

    /// Try to become the migration winner for this generation.
    ///
    /// # Returns
    /// `true` for exactly one caller over the generation's lifetime
    #[inline]
    pub fn try_claim(&self) -> bool {
        self.resizing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl<L: Freezable> fmt::Debug for Generation<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("resizing", &self.resizing.load(Ordering::Relaxed))
            .field("words", &self.words)
            .finish()
    }
}
