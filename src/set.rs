//! Traits shared by every set family.
//!
//! [`IntSet`] is the public query/mutate surface. [`WordSet`] exposes the
//! packed words so the algebra layer can work a word at a time.

use core::fmt;

use crate::error::Result;
use crate::packing::Layout;

/// Concurrent set of non-negative integers up to [`IntSet::max_value`].
///
/// Every method takes `&self`: sets are shared between threads by
/// reference (or `Arc`) and synchronize internally.
///
/// The required methods are the primitive operations. The provided ones
/// build the convenience surface on top of them.
pub trait IntSet {
    /// Largest value the set can hold.
    fn max_value(&self) -> u64;

    /// Membership test. Values above the maximum are never members.
    fn load(&self, value: u64) -> bool;

    /// Insert `value`.
    ///
    /// # Returns
    /// * `Ok(true)` - value was already present
    /// * `Ok(false)` - value was inserted by this call
    /// * `Err(_)` - value cannot be stored; membership unchanged
    fn load_or_store(&self, value: u64) -> Result<bool>;

    /// Delete `value`.
    ///
    /// # Returns
    /// * `Ok(true)` - value was present and removed by this call
    /// * `Ok(false)` - value was absent
    /// * `Err(_)` - value above the maximum
    fn load_and_delete(&self, value: u64) -> Result<bool>;

    /// Visit members in ascending order until `visit` returns `false`.
    ///
    /// Not a snapshot: concurrent updates may or may not be observed, but
    /// no member is visited twice.
    fn range<F: FnMut(u64) -> bool>(&self, visit: F);

    /// Number of members. Rescans if the cached count is stale.
    fn size(&self) -> usize;

    /// Remove every member.
    fn clear(&self);

    /// Insert `value`, returning `false` only if it cannot be stored.
    #[inline]
    fn store(&self, value: u64) -> bool {
        self.load_or_store(value).is_ok()
    }

    /// Delete `value`, returning `false` only if it is above the maximum.
    #[inline]
    fn delete(&self, value: u64) -> bool {
        self.load_and_delete(value).is_ok()
    }

    #[inline]
    fn contains(&self, value: u64) -> bool {
        self.load(value)
    }

    /// Same as [`IntSet::store`].
    #[inline]
    fn insert(&self, value: u64) -> bool {
        self.store(value)
    }

    /// Same as [`IntSet::delete`].
    #[inline]
    fn remove(&self, value: u64) -> bool {
        self.delete(value)
    }

    /// Insert `value`, reporting `(was_present, ok)`.
    fn insert_reporting_prior(&self, value: u64) -> (bool, bool) {
        match self.load_or_store(value) {
            Ok(present) => (present, true),
            Err(_) => (false, false),
        }
    }

    /// Remove `value`, reporting `(was_present, ok)`.
    fn remove_reporting_prior(&self, value: u64) -> (bool, bool) {
        match self.load_and_delete(value) {
            Ok(present) => (present, true),
            Err(_) => (false, false),
        }
    }

    /// Insert every value, skipping those that cannot be stored.
    fn insert_all<I: IntoIterator<Item = u64>>(&self, values: I) {
        for value in values {
            self.store(value);
        }
    }

    /// Remove every value.
    fn remove_all<I: IntoIterator<Item = u64>>(&self, values: I) {
        for value in values {
            self.delete(value);
        }
    }

    /// Visit every member in ascending order.
    fn for_each<F: FnMut(u64)>(&self, mut visit: F) {
        self.range(|value| {
            visit(value);
            true
        });
    }

    /// True when the set has no members. Stops at the first member found.
    fn is_empty(&self) -> bool {
        let mut empty = true;
        self.range(|_| {
            empty = false;
            false
        });
        empty
    }

    /// Members in ascending order.
    fn to_sorted_vec(&self) -> Vec<u64> {
        let mut out = Vec::new();
        self.for_each(|value| out.push(value));
        out
    }
}

/// A set stored as an array of words in layout [`WordSet::Layout`].
///
/// Two sets with the same `Layout` and the same concrete type can be
/// combined word by word.
pub trait WordSet: IntSet + Sized {
    /// Packing layout of the stored words.
    type Layout: Layout;

    /// Number of live words.
    fn word_len(&self) -> usize;

    /// Member bits of word `index` (frozen marker stripped, zero past the end).
    fn word_at(&self, index: usize) -> <Self::Layout as Layout>::Word;

    /// Member bits of every live word.
    fn snapshot_words(&self) -> Vec<<Self::Layout as Layout>::Word>;

    /// Build a set from member words. The cached count starts stale.
    fn from_words(max_value: u64, words: Vec<<Self::Layout as Layout>::Word>) -> Self;
}

/// Render members as `{1 2 3}`.
pub(crate) fn write_members<S: IntSet>(set: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    let mut result = Ok(());
    let mut first = true;
    set.range(|value| {
        result = if first {
            write!(f, "{value}")
        } else {
            write!(f, " {value}")
        };
        first = false;
        result.is_ok()
    });
    result?;
    f.write_str("}")
}
