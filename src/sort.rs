//! Counting sort built on a fixed set.
//!
//! Suited to slices whose values span a small range and repeat often.

use std::collections::HashMap;

use crate::constants::MAXIMUM;
use crate::fixed::FixedSet;
use crate::packing::Dense64;
use crate::set::IntSet;

/// Sort `values` in place, ascending.
///
/// Distinct values are ordered by inserting their offsets from the minimum
/// into a [`FixedSet`]; repeats are counted separately and expanded while
/// walking the set. When the value range is more than twice the slice
/// length (or beyond [`MAXIMUM`]) this falls back to `sort_unstable`.
///
/// # Performance
/// O(n + range) time, O(distinct) extra space for counts
///
/// # Example
/// ```rust
/// let mut values = [3, -1, 3, 0, -1, 3];
/// packed_intset::counting_sort(&mut values);
/// assert_eq!(values, [-1, -1, 0, 3, 3, 3]);
/// ```
pub fn counting_sort(values: &mut [i32]) {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return;
    };
    let span = (max as i64 - min as i64) as u64;
    if span > 2 * values.len() as u64 || span > MAXIMUM {
        values.sort_unstable();
        return;
    }

    let order = FixedSet::<Dense64>::new(span.max(1));
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &value in values.iter() {
        let offset = (value as i64 - min as i64) as u64;
        order.insert(offset);
        *counts.entry(offset).or_insert(0) += 1;
    }

    let mut next = 0;
    order.for_each(|offset| {
        let value = (min as i64 + offset as i64) as i32;
        let repeats = counts.get(&offset).copied().unwrap_or(0);
        values[next..next + repeats].fill(value);
        next += repeats;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_with_negatives_and_repeats() {
        let mut values = [
            0, -2, -1, 1, 1, 2, 1, 1, 3, 2, 1, 5, 2, 1, 1, 3, 5, 1, 2, 3,
        ];
        counting_sort(&mut values);
        assert_eq!(
            values,
            [-2, -1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 5, 5]
        );
    }

    #[test]
    fn test_wide_range_falls_back() {
        let mut values = [1_000_000, -5, 42];
        counting_sort(&mut values);
        assert_eq!(values, [-5, 42, 1_000_000]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        counting_sort(&mut empty);

        let mut same = [7, 7, 7];
        counting_sort(&mut same);
        assert_eq!(same, [7, 7, 7]);

        let mut extremes = [i32::MAX, i32::MIN];
        counting_sort(&mut extremes);
        assert_eq!(extremes, [i32::MIN, i32::MAX]);
    }

    #[test]
    fn test_matches_std_sort() {
        let mut values: Vec<i32> = (0..500).map(|i| (i * 37 % 101) - 50).collect();
        let mut expected = values.clone();
        expected.sort();
        counting_sort(&mut values);
        assert_eq!(values, expected);
    }
}
