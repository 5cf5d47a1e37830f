//! Algebraic laws for the word path and the merge path.

use std::collections::BTreeSet;

use packed_intset::{
    copy, difference, equal, intersect, symmetric_difference, union, AnySet, Dense16, Dense64,
    FixedSet, GrowableSet, IntSet, Reserved15, Reserved31, SetAlgebra,
};
use proptest::prelude::*;

const MAX: u64 = 2_000;

fn values() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(0..=MAX, 0..80)
}

fn fixed(max: u64, values: &BTreeSet<u64>) -> FixedSet<Dense16> {
    let set = FixedSet::new(max);
    set.insert_all(values.iter().copied());
    set
}

fn growable(values: &BTreeSet<u64>) -> GrowableSet<Reserved31> {
    let set = GrowableSet::new();
    set.insert_all(values.iter().copied());
    set
}

fn sorted(values: impl IntoIterator<Item = u64>) -> Vec<u64> {
    let mut out: Vec<u64> = values.into_iter().collect();
    out.sort_unstable();
    out
}

proptest! {
    #[test]
    fn union_commutes(xs in values(), ys in values()) {
        let (a, b) = (growable(&xs), growable(&ys));
        prop_assert!(equal(&union(&a, &b), &union(&b, &a)));
    }

    #[test]
    fn intersect_with_self_is_identity(xs in values()) {
        let a = fixed(MAX, &xs);
        prop_assert!(intersect(&a, &a).equal(&a));
    }

    #[test]
    fn difference_with_self_is_empty(xs in values()) {
        let a = growable(&xs);
        prop_assert!(difference(&a, &a).is_empty());
    }

    #[test]
    fn union_absorbs_difference(xs in values(), ys in values()) {
        let (a, b) = (fixed(MAX, &xs), fixed(MAX, &ys));
        let direct = union(&a, &b);
        let via_difference = union(&a, &difference(&b, &a));
        prop_assert!(direct.equal(&via_difference));
    }

    #[test]
    fn inclusion_exclusion(xs in values(), ys in values()) {
        let (a, b) = (growable(&xs), growable(&ys));
        prop_assert_eq!(
            union(&a, &b).size() + intersect(&a, &b).size(),
            a.size() + b.size()
        );
    }

    #[test]
    fn operators_match_btreeset(xs in values(), ys in values(), a_max in 100..=MAX, b_max in 100..=MAX) {
        let xs: BTreeSet<u64> = xs.into_iter().filter(|&x| x <= a_max).collect();
        let ys: BTreeSet<u64> = ys.into_iter().filter(|&y| y <= b_max).collect();
        let (a, b) = (fixed(a_max, &xs), fixed(b_max, &ys));

        prop_assert_eq!(a.union(&b).to_sorted_vec(), sorted(xs.union(&ys).copied()));
        prop_assert_eq!(a.intersect(&b).to_sorted_vec(), sorted(xs.intersection(&ys).copied()));
        prop_assert_eq!(a.difference(&b).to_sorted_vec(), sorted(xs.difference(&ys).copied()));
        prop_assert_eq!(
            symmetric_difference(&a, &b).to_sorted_vec(),
            sorted(xs.symmetric_difference(&ys).copied())
        );
    }

    #[test]
    fn mixed_shapes_agree_with_same_shape(xs in values(), ys in values()) {
        let same_a = AnySet::from(fixed(MAX, &xs));
        let same_b = AnySet::from(fixed(MAX, &ys));
        let mixed_b = AnySet::from({
            let set = GrowableSet::<Reserved15>::new();
            set.insert_all(ys.iter().copied());
            set
        });

        prop_assert_eq!(same_a.union(&same_b), same_a.union(&mixed_b));
        prop_assert_eq!(same_a.intersect(&same_b), same_a.intersect(&mixed_b));
        prop_assert_eq!(same_a.difference(&same_b), same_a.difference(&mixed_b));
        prop_assert_eq!(
            same_a.symmetric_difference(&same_b),
            same_a.symmetric_difference(&mixed_b)
        );
        prop_assert!(same_b.equal(&mixed_b));
    }

    #[test]
    fn copy_is_equal_and_independent(xs in values(), extra in 0..=MAX) {
        let a = growable(&xs);
        let c = copy(&a);
        prop_assert!(equal(&a, &c));
        c.insert(extra);
        prop_assert_eq!(a.contains(extra), xs.contains(&extra));
    }
}

#[test]
fn test_concrete_example() {
    let a = FixedSet::<Dense64>::new(36);
    let b = FixedSet::<Dense64>::new(100);
    a.insert_all(0..=5);
    b.insert_all(4..=8);

    assert_eq!(union(&a, &b).to_sorted_vec(), (0..=8).collect::<Vec<_>>());
    assert_eq!(intersect(&a, &b).to_sorted_vec(), vec![4, 5]);
    assert_eq!(difference(&a, &b).to_sorted_vec(), vec![0, 1, 2, 3]);
}
