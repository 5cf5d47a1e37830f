//! Shared atomic word storage with a ratcheting logical length.

use core::fmt;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::bitmap;
use crate::packing::Layout;
use crate::word::{AtomicWord, Word};

type Cell<L> = <<L as Layout>::Word as Word>::Atomic;

/// Outcome of a compare-and-swap bit update on one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitUpdate {
    /// This call flipped the bit.
    Changed,
    /// The bit was already in the requested state.
    Unchanged,
    /// The word carries the frozen marker; the caller must retry elsewhere.
    Frozen,
}

/// Fixed-capacity array of atomic words.
///
/// Capacity never changes after construction. `len` is the high-water
/// mark of words that have ever been written: it only grows, and words at
/// or past it are guaranteed zero.
///
/// # Type Parameters
/// * `L` - Packing layout of the stored words
///
/// # Memory Layout
/// - Words stored contiguously in a boxed slice
/// - Index-based access
pub(crate) struct WordArray<L: Layout> {
    /// Number of live words (monotonic).
    len: AtomicUsize,

    /// Storage, always fully allocated.
    data: Box<[Cell<L>]>,

    _layout: PhantomData<L>,
}

impl<L: Layout> WordArray<L> {
    /// Create an all-zero array with `len == 0`.
    ///
    /// # Performance
    /// O(capacity) - allocates and zeroes every word upfront
    pub fn zeroed(capacity: usize) -> Self {
        let data = (0..capacity)
            .map(|_| <Cell<L> as AtomicWord<L::Word>>::new(<L::Word as Word>::ZERO))
            .collect();
        Self {
            len: AtomicUsize::new(0),
            data,
            _layout: PhantomData,
        }
    }

    /// Create an array holding `words` followed by zeros up to `capacity`.
    ///
    /// `len` starts at `words.len()`. Capacity is raised to fit `words`.
    pub fn from_words(words: Vec<L::Word>, capacity: usize) -> Self {
        let len = words.len();
        let capacity = capacity.max(len);
        let data = words
            .into_iter()
            .chain(core::iter::repeat(<L::Word as Word>::ZERO))
            .take(capacity)
            .map(<Cell<L> as AtomicWord<L::Word>>::new)
            .collect();
        Self {
            len: AtomicUsize::new(len),
            data,
            _layout: PhantomData,
        }
    }

    /// Allocated number of words.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Current high-water mark.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Load the raw word at `index` (frozen marker included).
    ///
    /// # Panics
    /// Panics if `index >= capacity`
    #[inline(always)]
    pub fn load(&self, index: usize) -> L::Word {
        self.data[index].load(Ordering::Acquire)
    }

    /// Raise `len` to at least `index + 1`.
    ///
    /// A thread only extends the length if nobody already extended it past
    /// the target. Contention yields the scheduler between attempts.
    ///
    /// # Returns
    /// `false` if `index` is beyond capacity (length untouched)
    pub fn ratchet_len(&self, index: usize) -> bool {
        if index >= self.data.len() {
            return false;
        }
        let target = index + 1;
        let mut current = self.len.load(Ordering::Acquire);
        while current < target {
            match self.len.compare_exchange_weak(
                current,
                target,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => {
                    current = actual;
                    std::thread::yield_now();
                }
            }
        }
        true
    }

    /// Set bit `offset` of word `index` with a CAS loop.
    pub fn insert_bit(&self, index: usize, offset: u32) -> BitUpdate {
        self.update(index, |w| {
            if bitmap::is_set::<L>(w, offset) {
                None
            } else {
                Some(bitmap::with_bit::<L>(w, offset))
            }
        })
    }

    /// Clear bit `offset` of word `index` with a CAS loop.
    pub fn remove_bit(&self, index: usize, offset: u32) -> BitUpdate {
        self.update(index, |w| {
            if bitmap::is_set::<L>(w, offset) {
                Some(bitmap::without_bit::<L>(w, offset))
            } else {
                None
            }
        })
    }

    /// Zero word `index`.
    ///
    /// # Returns
    /// Number of members removed, or `None` if the word is frozen
    pub fn clear_word(&self, index: usize) -> Option<usize> {
        let cell = &self.data[index];
        let mut current = cell.load(Ordering::Acquire);
        loop {
            if L::is_frozen(current) {
                return None;
            }
            if current.is_zero() {
                return Some(0);
            }
            match cell.compare_exchange_weak(
                current,
                <L::Word as Word>::ZERO,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(current.count_ones() as usize),
                Err(actual) => current = actual,
            }
        }
    }

    /// Set the frozen marker on word `index`.
    ///
    /// # Returns
    /// Member bits the word held at the instant it was frozen
    #[inline]
    pub fn freeze(&self, index: usize) -> L::Word {
        L::payload(self.data[index].fetch_or(L::FROZEN, Ordering::AcqRel))
    }

    /// Copy the member bits of words `0..len` (frozen marker stripped).
    ///
    /// Each word is read with one atomic load; the result is not a
    /// consistent snapshot under concurrent writes.
    pub fn snapshot(&self) -> Vec<L::Word> {
        self.data[..self.len()]
            .iter()
            .map(|cell| L::payload(cell.load(Ordering::Acquire)))
            .collect()
    }

    /// Count members across words `0..len`.
    pub fn count_members(&self) -> usize {
        self.data[..self.len()]
            .iter()
            .map(|cell| L::payload(cell.load(Ordering::Acquire)).count_ones() as usize)
            .sum()
    }

    fn update<F>(&self, index: usize, mut next: F) -> BitUpdate
    where
        F: FnMut(L::Word) -> Option<L::Word>,
    {
        let cell = &self.data[index];
        let mut current = cell.load(Ordering::Acquire);
        loop {
            if L::is_frozen(current) {
                return BitUpdate::Frozen;
            }
            let Some(new) = next(current) else {
                return BitUpdate::Unchanged;
            };
            match cell.compare_exchange_weak(current, new, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => return BitUpdate::Changed,
                Err(actual) => current = actual,
            }
        }
    }
}

impl<L: Layout> fmt::Debug for WordArray<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordArray")
            .field("layout", &L::NAME)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
