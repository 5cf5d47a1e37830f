//! Capacity growth policy for growable sets.

use crate::constants::GROWTH_THRESHOLD;

/// Compute the next capacity (in words) for a growable set.
///
/// - If `required` exceeds twice the old capacity, jump straight to it.
/// - Below [`GROWTH_THRESHOLD`] words, double.
/// - Otherwise add 25% repeatedly until `required` fits.
///
/// The result is always at least `required`. Callers clamp it to the
/// words needed for the set's maximum value.
///
/// # Arguments
/// * `old` - Current capacity in words
/// * `required` - Minimum number of words needed
///
/// # Performance
/// O(log(required / old)) - only loops in the 25% regime
pub fn grown_capacity(old: usize, required: usize) -> usize {
    let doubled = old.saturating_mul(2);
    if required > doubled {
        return required;
    }
    if old < GROWTH_THRESHOLD {
        return doubled.max(required);
    }
    let mut capacity = old;
    while capacity < required {
        capacity = capacity.saturating_add((capacity / 4).max(1));
    }
    capacity.max(old.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubles_below_threshold() {
        assert_eq!(grown_capacity(8, 9), 16);
        assert_eq!(grown_capacity(512, 600), 1024);
    }

    #[test]
    fn test_jumps_to_large_requirement() {
        assert_eq!(grown_capacity(8, 100), 100);
        assert_eq!(grown_capacity(2048, 5000), 5000);
    }

    #[test]
    fn test_quarter_steps_above_threshold() {
        assert_eq!(grown_capacity(1024, 1025), 1280);
        assert_eq!(grown_capacity(1024, 1300), 1600);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(grown_capacity(0, 1), 1);
        assert_eq!(grown_capacity(0, 0), 0);
    }

    #[test]
    fn test_always_fits_required() {
        for old in [1usize, 7, 100, 1023, 1024, 4096] {
            for extra in [1usize, 2, old / 2 + 1, old, old * 2, old * 3] {
                let required = old + extra;
                assert!(grown_capacity(old, required) >= required);
            }
        }
    }
}
