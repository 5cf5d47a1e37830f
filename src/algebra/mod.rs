//! Set algebra: union, intersection, difference, symmetric difference,
//! equality and copy.
//!
//! Two code paths:
//! - **Word path**: operands of the same concrete type (same family and
//!   layout) are combined a word at a time via [`SetAlgebra`].
//! - **Merge path**: operands of any two shapes are decoded into ascending
//!   member lists and merged element by element via [`merge`].
//!
//! [`AnySet`] picks between them at runtime. Every result is a new set;
//! operands are never mutated.

mod any;
mod sorted_merge;

pub use any::AnySet;
pub use sorted_merge::{merge, merge_equal};

use crate::bitmap;
use crate::set::WordSet;

/// The four combining operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    Union,
    Intersect,
    Difference,
    SymmetricDifference,
}

impl SetOp {
    /// Largest value the result of `a op b` may need to hold.
    ///
    /// - union, symmetric difference: the larger maximum
    /// - intersection: the smaller maximum
    /// - difference: the left operand's maximum
    #[inline]
    pub fn output_max(self, a_max: u64, b_max: u64) -> u64 {
        match self {
            SetOp::Union | SetOp::SymmetricDifference => a_max.max(b_max),
            SetOp::Intersect => a_max.min(b_max),
            SetOp::Difference => a_max,
        }
    }
}

/// Set operations producing a new set of the same type.
///
/// # Example
/// ```rust
/// use packed_intset::{FixedSet, IntSet, SetAlgebra};
///
/// let a = FixedSet::<packed_intset::Dense64>::new(36);
/// let b = FixedSet::<packed_intset::Dense64>::new(100);
/// a.insert_all(0..=5);
/// b.insert_all(4..=8);
///
/// assert_eq!(a.union(&b).to_sorted_vec(), (0..=8).collect::<Vec<_>>());
/// assert_eq!(a.intersect(&b).to_sorted_vec(), vec![4, 5]);
/// assert_eq!(a.difference(&b).to_sorted_vec(), vec![0, 1, 2, 3]);
/// ```
pub trait SetAlgebra: Sized {
    fn union(&self, other: &Self) -> Self;
    fn intersect(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Same members, regardless of capacity or trailing empty words.
    fn equal(&self, other: &Self) -> bool;

    /// Independent copy with the same maximum value.
    fn duplicate(&self) -> Self;
}

/// Word path, available to every word-backed set.
///
/// # Performance
/// O(n / WIDTH) - one pass over the words of each operand
impl<S: WordSet> SetAlgebra for S {
    fn union(&self, other: &Self) -> Self {
        combine(SetOp::Union, self, other)
    }

    fn intersect(&self, other: &Self) -> Self {
        combine(SetOp::Intersect, self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        combine(SetOp::Difference, self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        combine(SetOp::SymmetricDifference, self, other)
    }

    fn equal(&self, other: &Self) -> bool {
        bitmap::equal(&self.snapshot_words(), &other.snapshot_words())
    }

    fn duplicate(&self) -> Self {
        S::from_words(self.max_value(), self.snapshot_words())
    }
}

fn combine<S: WordSet>(op: SetOp, a: &S, b: &S) -> S {
    let (x, y) = (a.snapshot_words(), b.snapshot_words());
    let words = match op {
        SetOp::Union => bitmap::union(&x, &y),
        SetOp::Intersect => bitmap::intersect(&x, &y),
        SetOp::Difference => bitmap::difference(&x, &y),
        SetOp::SymmetricDifference => bitmap::symmetric_difference(&x, &y),
    };
    S::from_words(op.output_max(a.max_value(), b.max_value()), words)
}

/// `a ∪ b`.
pub fn union<S: SetAlgebra>(a: &S, b: &S) -> S {
    a.union(b)
}

/// `a ∩ b`.
pub fn intersect<S: SetAlgebra>(a: &S, b: &S) -> S {
    a.intersect(b)
}

/// `a \ b`.
pub fn difference<S: SetAlgebra>(a: &S, b: &S) -> S {
    a.difference(b)
}

/// `a △ b`.
pub fn symmetric_difference<S: SetAlgebra>(a: &S, b: &S) -> S {
    a.symmetric_difference(b)
}

pub fn equal<S: SetAlgebra>(a: &S, b: &S) -> bool {
    a.equal(b)
}

pub fn copy<S: SetAlgebra>(set: &S) -> S {
    set.duplicate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedSet;
    use crate::growable::GrowableSet;
    use crate::packing::{Dense16, Dense64, Reserved31};
    use crate::set::IntSet;

    fn fixed(max: u64, values: impl IntoIterator<Item = u64>) -> FixedSet<Dense64> {
        let set = FixedSet::new(max);
        set.insert_all(values);
        set
    }

    #[test]
    fn test_example_with_different_capacities() {
        let a = fixed(36, 0..=5);
        let b = fixed(100, 4..=8);

        let u = union(&a, &b);
        assert_eq!(u.to_sorted_vec(), (0..=8).collect::<Vec<_>>());
        assert_eq!(u.max_value(), 100);

        let i = intersect(&a, &b);
        assert_eq!(i.to_sorted_vec(), vec![4, 5]);
        assert_eq!(i.max_value(), 36);

        let d = difference(&a, &b);
        assert_eq!(d.to_sorted_vec(), vec![0, 1, 2, 3]);
        assert_eq!(d.max_value(), 36);

        let x = symmetric_difference(&a, &b);
        assert_eq!(x.to_sorted_vec(), vec![0, 1, 2, 3, 6, 7, 8]);
    }

    #[test]
    fn test_operands_not_mutated() {
        let a = fixed(200, [1, 150]);
        let b = fixed(200, [1, 2]);
        let _ = a.symmetric_difference(&b);
        let _ = a.difference(&b);
        assert_eq!(a.to_sorted_vec(), vec![1, 150]);
        assert_eq!(b.to_sorted_vec(), vec![1, 2]);
    }

    #[test]
    fn test_lengths_differ() {
        let a = FixedSet::<Dense16>::new(1000);
        let b = FixedSet::<Dense16>::new(1000);
        a.insert_all([1, 900]);
        b.insert(1);
        assert_eq!(a.word_len(), 57);
        assert_eq!(b.word_len(), 1);

        assert_eq!(a.union(&b).to_sorted_vec(), vec![1, 900]);
        assert_eq!(b.union(&a).to_sorted_vec(), vec![1, 900]);
        assert_eq!(a.intersect(&b).to_sorted_vec(), vec![1]);
        assert_eq!(b.difference(&a).to_sorted_vec(), Vec::<u64>::new());
        assert_eq!(a.difference(&b).to_sorted_vec(), vec![900]);
        assert_eq!(b.symmetric_difference(&a).to_sorted_vec(), vec![900]);
    }

    #[test]
    fn test_equal_ignores_capacity() {
        let a = fixed(1000, [3, 7]);
        let b = fixed(10, [3, 7]);
        a.insert(999);
        a.remove(999);
        assert!(equal(&a, &b));
        b.insert(8);
        assert!(!equal(&a, &b));
    }

    #[test]
    fn test_empty_operands() {
        let a = fixed(100, []);
        let b = fixed(100, [5]);
        assert_eq!(a.union(&b).to_sorted_vec(), vec![5]);
        assert!(a.intersect(&b).is_empty());
        assert!(a.difference(&b).is_empty());
        assert!(equal(&a, &fixed(50, [])));
    }

    #[test]
    fn test_copy_is_independent() {
        let a = fixed(100, [1, 2, 3]);
        let c = copy(&a);
        assert!(equal(&a, &c));
        assert_eq!(c.size(), 3);
        c.insert(4);
        assert!(!a.contains(4));
    }

    #[test]
    fn test_growable_word_path() {
        let a = GrowableSet::<Reserved31>::new();
        let b = GrowableSet::<Reserved31>::new();
        a.insert_all([1, 40, 5_000]);
        b.insert_all([40, 41]);

        let u = a.union(&b);
        assert_eq!(u.to_sorted_vec(), vec![1, 40, 41, 5_000]);
        assert_eq!(u.size(), 4);
        assert_eq!(a.intersect(&b).to_sorted_vec(), vec![40]);

        u.insert(1_000_000);
        assert!(u.contains(1_000_000));
    }

    #[test]
    fn test_output_max() {
        assert_eq!(SetOp::Union.output_max(10, 20), 20);
        assert_eq!(SetOp::Intersect.output_max(10, 20), 10);
        assert_eq!(SetOp::Difference.output_max(30, 20), 30);
        assert_eq!(SetOp::SymmetricDifference.output_max(10, 20), 20);
    }
}
