//! Single-bit operations on a loaded word.

use crate::packing::Layout;
use crate::word::Word;

/// Check if the member bit at `offset` is set.
///
/// # Arguments
/// * `word` - Word as loaded from storage (frozen marker allowed)
/// * `offset` - Bit offset (0 to WIDTH-1)
///
/// # Performance
/// O(1) - single AND
#[inline(always)]
pub fn is_set<L: Layout>(word: L::Word, offset: u32) -> bool {
    !(word & L::mask(offset)).is_zero()
}

/// Return `word` with the bit at `offset` set.
///
/// The frozen marker, if any, is preserved.
#[inline(always)]
pub fn with_bit<L: Layout>(word: L::Word, offset: u32) -> L::Word {
    word | L::mask(offset)
}

/// Return `word` with the bit at `offset` cleared.
///
/// The frozen marker, if any, is preserved.
#[inline(always)]
pub fn without_bit<L: Layout>(word: L::Word, offset: u32) -> L::Word {
    word & !L::mask(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{Dense16, Reserved31};

    #[test]
    fn test_set_and_clear() {
        let w = with_bit::<Dense16>(0, 3);
        assert!(is_set::<Dense16>(w, 3));
        assert!(!is_set::<Dense16>(w, 4));
        assert_eq!(without_bit::<Dense16>(w, 3), 0);
    }

    #[test]
    fn test_frozen_marker_preserved() {
        let frozen = Reserved31::FROZEN;
        let w = with_bit::<Reserved31>(frozen, 30);
        assert!(Reserved31::is_frozen(w));
        assert!(is_set::<Reserved31>(w, 30));

        let w = without_bit::<Reserved31>(w, 30);
        assert_eq!(w, frozen);
    }
}
