//! Decoding members of loaded words.

use crate::packing::Layout;
use crate::word::Word;

/// Visit every member encoded in `word` (stored at `index`) in ascending order.
///
/// The frozen marker is stripped before decoding.
///
/// # Arguments
/// * `index` - Word index the value was loaded from
/// * `word` - Word as loaded from storage
/// * `visit` - Called with each member; return `false` to stop
///
/// # Returns
/// `false` if `visit` asked to stop, `true` otherwise
///
/// # Performance
/// O(k) for k members - `w & (w - 1)` per member
#[inline]
pub fn for_each_set_bit<L, F>(index: usize, word: L::Word, visit: &mut F) -> bool
where
    L: Layout,
    F: FnMut(u64) -> bool,
{
    let mut bits = L::payload(word);
    while !bits.is_zero() {
        if !visit(L::value_at(index, bits.trailing_zeros())) {
            return false;
        }
        bits = bits.clear_lowest();
    }
    true
}
