//! Runtime-tagged set over every supported shape.

use core::convert::identity;
use core::fmt;

use super::{merge, merge_equal, SetAlgebra, SetOp};
use crate::constants::MAXIMUM;
use crate::error::Result;
use crate::fixed::FixedSet;
use crate::growable::GrowableSet;
use crate::packing::{Dense16, Dense32, Dense64, Reserved15, Reserved31, Reserved63};
use crate::set::{write_members, IntSet};

/// A set of any family and layout, chosen at runtime.
///
/// Operands of the same variant combine word by word. Operands of
/// different variants fall back to a sorted merge whose result is a
/// [`AnySet::Growable63`] sized for the combined maximum.
///
/// # Example
/// ```rust
/// use packed_intset::{AnySet, FixedSet, GrowableSet, IntSet, SetAlgebra};
///
/// let a = AnySet::from(FixedSet::<packed_intset::Dense32>::new(100));
/// let b = AnySet::from(GrowableSet::<packed_intset::Reserved15>::new());
/// a.insert_all([1, 2]);
/// b.insert_all([2, 3]);
///
/// let u = a.union(&b);
/// assert!(matches!(u, AnySet::Growable63(_)));
/// assert_eq!(u.to_sorted_vec(), vec![1, 2, 3]);
/// ```
pub enum AnySet {
    Fixed64(FixedSet<Dense64>),
    Fixed32(FixedSet<Dense32>),
    Fixed16(FixedSet<Dense16>),
    Growable63(GrowableSet<Reserved63>),
    Growable31(GrowableSet<Reserved31>),
    Growable15(GrowableSet<Reserved15>),
}

macro_rules! dispatch {
    ($set:expr, $inner:ident => $body:expr) => {
        match $set {
            AnySet::Fixed64($inner) => $body,
            AnySet::Fixed32($inner) => $body,
            AnySet::Fixed16($inner) => $body,
            AnySet::Growable63($inner) => $body,
            AnySet::Growable31($inner) => $body,
            AnySet::Growable15($inner) => $body,
        }
    };
}

/// Apply `$body` when both operands are the same variant, wrapping each
/// arm's result with `$wrap`. Mismatched variants yield `None`.
macro_rules! same_shape {
    ($wrap:path; $a:expr, $b:expr, |$x:ident, $y:ident| $body:expr) => {
        match ($a, $b) {
            (AnySet::Fixed64($x), AnySet::Fixed64($y)) => Some($wrap($body)),
            (AnySet::Fixed32($x), AnySet::Fixed32($y)) => Some($wrap($body)),
            (AnySet::Fixed16($x), AnySet::Fixed16($y)) => Some($wrap($body)),
            (AnySet::Growable63($x), AnySet::Growable63($y)) => Some($wrap($body)),
            (AnySet::Growable31($x), AnySet::Growable31($y)) => Some($wrap($body)),
            (AnySet::Growable15($x), AnySet::Growable15($y)) => Some($wrap($body)),
            _ => None,
        }
    };
}

macro_rules! impl_from {
    ($($variant:ident($set:ty)),* $(,)?) => {
        $(
            impl From<$set> for AnySet {
                fn from(set: $set) -> Self {
                    AnySet::$variant(set)
                }
            }
        )*
    };
}

impl_from!(
    Fixed64(FixedSet<Dense64>),
    Fixed32(FixedSet<Dense32>),
    Fixed16(FixedSet<Dense16>),
    Growable63(GrowableSet<Reserved63>),
    Growable31(GrowableSet<Reserved31>),
    Growable15(GrowableSet<Reserved15>),
);

impl AnySet {
    /// Layout name of the active variant, e.g. `"reserved31"`.
    pub fn layout_name(&self) -> &'static str {
        use crate::packing::Layout;
        match self {
            AnySet::Fixed64(_) => Dense64::NAME,
            AnySet::Fixed32(_) => Dense32::NAME,
            AnySet::Fixed16(_) => Dense16::NAME,
            AnySet::Growable63(_) => Reserved63::NAME,
            AnySet::Growable31(_) => Reserved31::NAME,
            AnySet::Growable15(_) => Reserved15::NAME,
        }
    }

    fn combine(&self, op: SetOp, other: &Self) -> Self {
        let same = same_shape!(AnySet::from; self, other, |a, b| match op {
            SetOp::Union => a.union(b),
            SetOp::Intersect => a.intersect(b),
            SetOp::Difference => a.difference(b),
            SetOp::SymmetricDifference => a.symmetric_difference(b),
        });
        same.unwrap_or_else(|| {
            let max_value = op
                .output_max(self.max_value(), other.max_value())
                .min(MAXIMUM);
            let out = GrowableSet::<Reserved63>::with_max_value(max_value);
            merge(op, self, other, &out);
            AnySet::Growable63(out)
        })
    }
}

impl IntSet for AnySet {
    fn max_value(&self) -> u64 {
        dispatch!(self, s => s.max_value())
    }

    fn load(&self, value: u64) -> bool {
        dispatch!(self, s => s.load(value))
    }

    fn load_or_store(&self, value: u64) -> Result<bool> {
        dispatch!(self, s => s.load_or_store(value))
    }

    fn load_and_delete(&self, value: u64) -> Result<bool> {
        dispatch!(self, s => s.load_and_delete(value))
    }

    fn range<F: FnMut(u64) -> bool>(&self, visit: F) {
        dispatch!(self, s => s.range(visit))
    }

    fn size(&self) -> usize {
        dispatch!(self, s => s.size())
    }

    fn clear(&self) {
        dispatch!(self, s => s.clear())
    }
}

impl SetAlgebra for AnySet {
    fn union(&self, other: &Self) -> Self {
        self.combine(SetOp::Union, other)
    }

    fn intersect(&self, other: &Self) -> Self {
        self.combine(SetOp::Intersect, other)
    }

    fn difference(&self, other: &Self) -> Self {
        self.combine(SetOp::Difference, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        self.combine(SetOp::SymmetricDifference, other)
    }

    fn equal(&self, other: &Self) -> bool {
        same_shape!(identity; self, other, |a, b| a.equal(b))
            .unwrap_or_else(|| merge_equal(self, other))
    }

    fn duplicate(&self) -> Self {
        dispatch!(self, s => AnySet::from(s.duplicate()))
    }
}

impl Clone for AnySet {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl PartialEq for AnySet {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for AnySet {}

impl fmt::Debug for AnySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, s => f.debug_tuple("AnySet").field(s).finish())
    }
}

impl fmt::Display for AnySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(self, f)
    }
}
