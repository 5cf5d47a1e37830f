//! Element-at-a-time set algebra for operands of any two shapes.

use core::cmp::Ordering;

use super::SetOp;
use crate::set::IntSet;

impl SetOp {
    /// (keep left-only members, keep members of both, keep right-only members)
    #[inline]
    fn keeps(self) -> (bool, bool, bool) {
        match self {
            SetOp::Union => (true, true, true),
            SetOp::Intersect => (false, true, false),
            SetOp::Difference => (true, false, false),
            SetOp::SymmetricDifference => (true, false, true),
        }
    }
}

/// Compute `a op b` by sorted merge, inserting the result into `out`.
///
/// Each operand is decoded once via `range` into an ascending list; the
/// lists are then walked with two cursors. Members `out` cannot hold are
/// skipped.
///
/// # Arguments
/// * `op` - Operator to apply
/// * `a` - Left operand
/// * `b` - Right operand
/// * `out` - Destination set, normally empty
///
/// # Performance
/// O(|a| + |b|) members, plus one insert per output member
///
/// # Example
/// ```rust
/// use packed_intset::{merge, FixedSet, GrowableSet, IntSet, SetOp};
///
/// let a = FixedSet::<packed_intset::Dense16>::new(100);
/// let b = GrowableSet::<packed_intset::Reserved31>::new();
/// a.insert_all([1, 2, 3]);
/// b.insert_all([2, 3, 4]);
///
/// let out = GrowableSet::<packed_intset::Reserved63>::new();
/// merge(SetOp::Intersect, &a, &b, &out);
/// assert_eq!(out.to_sorted_vec(), vec![2, 3]);
/// ```
pub fn merge<A, B, O>(op: SetOp, a: &A, b: &B, out: &O)
where
    A: IntSet,
    B: IntSet,
    O: IntSet,
{
    let (left_only, both, right_only) = op.keeps();
    let xs = a.to_sorted_vec();
    let ys = b.to_sorted_vec();

    let (mut i, mut j) = (0, 0);
    while i < xs.len() && j < ys.len() {
        match xs[i].cmp(&ys[j]) {
            Ordering::Less => {
                if left_only {
                    out.store(xs[i]);
                }
                i += 1;
            }
            Ordering::Greater => {
                if right_only {
                    out.store(ys[j]);
                }
                j += 1;
            }
            Ordering::Equal => {
                if both {
                    out.store(xs[i]);
                }
                i += 1;
                j += 1;
            }
        }
    }
    if left_only {
        out.insert_all(xs[i..].iter().copied());
    }
    if right_only {
        out.insert_all(ys[j..].iter().copied());
    }
}

/// Compare two sets of any shapes by their members.
pub fn merge_equal<A: IntSet, B: IntSet>(a: &A, b: &B) -> bool {
    a.to_sorted_vec() == b.to_sorted_vec()
}
