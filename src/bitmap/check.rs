//! Comparison and emptiness checks over slices of member words.

use crate::word::Word;

/// Compare two word slices as sets.
///
/// Words are compared over the common prefix. Every word of the longer
/// slice past that prefix must be zero, so trailing empty words never
/// make two sets unequal.
///
/// # Returns
/// `true` if both slices encode the same members
///
/// # Performance
/// O(max(n, m)) - stops at the first difference
#[inline]
pub fn equal<W: Word>(a: &[W], b: &[W]) -> bool {
    let common = a.len().min(b.len());
    if a[..common] != b[..common] {
        return false;
    }
    let tail = if a.len() > common { &a[common..] } else { &b[common..] };
    is_empty(tail)
}

/// Check if no word has any bit set.
#[inline]
pub fn is_empty<W: Word>(words: &[W]) -> bool {
    words.iter().all(|w| w.is_zero())
}
