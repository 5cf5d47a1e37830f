//! Bulk word-wise operators over slices of member words.
//!
//! Operands may have different lengths. A missing word behaves as zero,
//! so each output is only as long as the operator can make nonzero.
//! Inputs must already have the frozen marker stripped.

use crate::word::Word;

/// Word-wise OR.
///
/// # Returns
/// `max(a.len(), b.len())` words; the tail is copied from the longer operand.
///
/// # Performance
/// O(n) - single pass, no per-bit work
#[inline]
pub fn union<W: Word>(a: &[W], b: &[W]) -> Vec<W> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = long.to_vec();
    for (dst, &w) in out.iter_mut().zip(short) {
        *dst = *dst | w;
    }
    out
}

/// Word-wise AND.
///
/// # Returns
/// `min(a.len(), b.len())` words.
#[inline]
pub fn intersect<W: Word>(a: &[W], b: &[W]) -> Vec<W> {
    a.iter().zip(b).map(|(&x, &y)| x & y).collect()
}

/// Word-wise AND-NOT (`a` minus `b`).
///
/// # Returns
/// `a.len()` words; words of `a` past the end of `b` are kept as is.
#[inline]
pub fn difference<W: Word>(a: &[W], b: &[W]) -> Vec<W> {
    let mut out = a.to_vec();
    for (dst, &w) in out.iter_mut().zip(b) {
        *dst = *dst & !w;
    }
    out
}

/// Word-wise XOR.
///
/// # Returns
/// `max(a.len(), b.len())` words; the tail is copied from the longer operand.
#[inline]
pub fn symmetric_difference<W: Word>(a: &[W], b: &[W]) -> Vec<W> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = long.to_vec();
    for (dst, &w) in out.iter_mut().zip(short) {
        *dst = *dst ^ w;
    }
    out
}
