//! Conversions between set families and word layouts.

use crate::fixed::FixedSet;
use crate::growable::GrowableSet;
use crate::packing::{repack, Freezable, Layout};
use crate::set::WordSet;

/// Re-encode `set` as a set of type `D` with the same maximum value.
///
/// # Performance
/// O(n + m) - n source words, m members
///
/// # Example
/// ```rust
/// use packed_intset::{convert, FixedSet, GrowableSet, IntSet};
///
/// let fixed = FixedSet::<packed_intset::Dense16>::new(100);
/// fixed.insert_all([1, 50, 99]);
///
/// let growable: GrowableSet<packed_intset::Reserved31> = convert(&fixed);
/// assert_eq!(growable.to_sorted_vec(), vec![1, 50, 99]);
/// ```
pub fn convert<S: WordSet, D: WordSet>(set: &S) -> D {
    let words = repack::<S::Layout, D::Layout>(&set.snapshot_words());
    D::from_words(set.max_value(), words)
}

impl<L: Layout> FixedSet<L> {
    /// Copy into a growable set with layout `G`.
    pub fn to_growable<G: Freezable>(&self) -> GrowableSet<G> {
        convert(self)
    }

    /// Copy into a fixed set with layout `D`.
    pub fn to_fixed<D: Layout>(&self) -> FixedSet<D> {
        convert(self)
    }
}

impl<L: Freezable> GrowableSet<L> {
    /// Copy into a fixed set with layout `D`, sized for the same maximum.
    pub fn to_fixed<D: Layout>(&self) -> FixedSet<D> {
        convert(self)
    }

    /// Copy into a growable set with layout `G`.
    pub fn to_growable<G: Freezable>(&self) -> GrowableSet<G> {
        convert(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{Dense16, Dense32, Dense64, Reserved15, Reserved31, Reserved63};
    use crate::set::IntSet;

    const VALUES: [u64; 6] = [0, 14, 15, 31, 62, 63];

    #[test]
    fn test_fixed_to_growable() {
        let fixed = FixedSet::<Dense32>::new(100);
        fixed.insert_all(VALUES);
        let growable = fixed.to_growable::<Reserved15>();
        assert_eq!(growable.to_sorted_vec(), VALUES.to_vec());
        assert_eq!(growable.max_value(), 100);
        assert_eq!(growable.size(), VALUES.len());
    }

    #[test]
    fn test_growable_to_fixed() {
        let growable = GrowableSet::<Reserved63>::with_max_value(5_000);
        growable.insert_all(VALUES);
        growable.insert(4_999);
        let fixed = growable.to_fixed::<Dense16>();
        assert_eq!(fixed.max_value(), 5_000);
        assert!(fixed.contains(4_999));
        assert_eq!(fixed.size(), VALUES.len() + 1);
        assert!(fixed.insert(5_000));
    }

    #[test]
    fn test_layout_changes() {
        let a = FixedSet::<Dense64>::new(64);
        a.insert_all(VALUES);
        let b = a.to_fixed::<Dense16>();
        assert_eq!(b.to_sorted_vec(), a.to_sorted_vec());

        let g = GrowableSet::<Reserved31>::new();
        g.insert_all(VALUES);
        let h = g.to_growable::<Reserved63>();
        assert_eq!(h.to_sorted_vec(), VALUES.to_vec());
        assert!(h.insert(1_000_000));
    }

    #[test]
    fn test_convert_empty() {
        let fixed = FixedSet::<Dense16>::new(10);
        let growable: GrowableSet<Reserved31> = convert(&fixed);
        assert!(growable.is_empty());
        assert_eq!(growable.size(), 0);
    }
}
