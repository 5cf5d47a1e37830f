//! Packing layouts: how integer values map onto bits of a word array.
//!
//! A value `x` lives at word `x / WIDTH`, bit `x % WIDTH`.
//!
//! - [`Dense`] uses every bit of the word (16/32/64 values per word).
//! - [`Reserved`] keeps the top bit as a frozen marker for migration
//!   (15/31/63 values per word). Only growable sets need it.

use core::fmt;
use core::marker::PhantomData;

use crate::word::Word;

/// A packing scheme over a [`Word`].
pub trait Layout: Send + Sync + 'static {
    /// Underlying machine word.
    type Word: Word;

    /// Number of member bits per word.
    const WIDTH: u32;

    /// Marker bit used to fence a word during migration (zero if none).
    const FROZEN: Self::Word;

    /// Mask of the bits that hold members.
    const PAYLOAD: Self::Word;

    /// Short human-readable name, e.g. `"dense64"`.
    const NAME: &'static str;

    /// Map a value to its (word index, bit offset).
    ///
    /// # Performance
    /// O(1) - one division and one remainder
    #[inline(always)]
    fn locate(value: u64) -> (usize, u32) {
        let width = Self::WIDTH as u64;
        ((value / width) as usize, (value % width) as u32)
    }

    /// Inverse of [`Layout::locate`].
    #[inline(always)]
    fn value_at(index: usize, offset: u32) -> u64 {
        index as u64 * Self::WIDTH as u64 + offset as u64
    }

    /// Number of words needed to hold every value in `0..=max_value`.
    #[inline]
    fn words_for(max_value: u64) -> usize {
        (max_value / Self::WIDTH as u64) as usize + 1
    }

    /// Single-bit mask for `offset`.
    #[inline(always)]
    fn mask(offset: u32) -> Self::Word {
        <Self::Word as Word>::bit(offset)
    }

    /// Member bits of `word` (frozen marker stripped).
    #[inline(always)]
    fn payload(word: Self::Word) -> Self::Word {
        word & Self::PAYLOAD
    }

    /// True when `word` carries the frozen marker.
    #[inline(always)]
    fn is_frozen(word: Self::Word) -> bool {
        !(word & Self::FROZEN).is_zero()
    }
}

/// Layout that reserves a frozen-marker bit.
///
/// Only these layouts can back a growable set.
pub trait Freezable: Layout {}

/// Every bit of `W` is a member bit.
pub struct Dense<W>(PhantomData<fn() -> W>);

/// The top bit of `W` is the frozen marker; the rest are member bits.
pub struct Reserved<W>(PhantomData<fn() -> W>);

macro_rules! impl_layouts {
    ($word:ty, $dense:literal, $reserved:literal) => {
        impl Layout for Dense<$word> {
            type Word = $word;
            const WIDTH: u32 = <$word>::BITS;
            const FROZEN: $word = 0;
            const PAYLOAD: $word = <$word>::MAX;
            const NAME: &'static str = $dense;
        }

        impl Layout for Reserved<$word> {
            type Word = $word;
            const WIDTH: u32 = <$word>::BITS - 1;
            const FROZEN: $word = <$word as Word>::HIGH_BIT;
            const PAYLOAD: $word = <$word as Word>::LOW_BITS;
            const NAME: &'static str = $reserved;
        }

        impl Freezable for Reserved<$word> {}
    };
}

impl_layouts!(u64, "dense64", "reserved63");
impl_layouts!(u32, "dense32", "reserved31");
impl_layouts!(u16, "dense16", "reserved15");

impl<W> fmt::Debug for Dense<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dense")
    }
}

impl<W> fmt::Debug for Reserved<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reserved")
    }
}

/// 64 members per `u64` word.
pub type Dense64 = Dense<u64>;
/// 32 members per `u32` word.
pub type Dense32 = Dense<u32>;
/// 16 members per `u16` word.
pub type Dense16 = Dense<u16>;
/// 63 members per `u64` word plus a frozen marker.
pub type Reserved63 = Reserved<u64>;
/// 31 members per `u32` word plus a frozen marker.
pub type Reserved31 = Reserved<u32>;
/// 15 members per `u16` word plus a frozen marker.
pub type Reserved15 = Reserved<u16>;

/// Re-encode a word array from layout `S` into layout `D`.
///
/// Frozen markers in the source are ignored. The output is just long
/// enough to hold the largest member (empty for an empty source).
///
/// # Performance
/// O(n + m) - n source words, m members
pub fn repack<S: Layout, D: Layout>(src: &[S::Word]) -> Vec<D::Word> {
    let mut out: Vec<D::Word> = Vec::new();
    for (index, &word) in src.iter().enumerate() {
        let mut bits = S::payload(word);
        while !bits.is_zero() {
            let value = S::value_at(index, bits.trailing_zeros());
            let (dst_index, dst_offset) = D::locate(value);
            if dst_index >= out.len() {
                out.resize(dst_index + 1, <D::Word as Word>::ZERO);
            }
            out[dst_index] = out[dst_index] | D::mask(dst_offset);
            bits = bits.clear_lowest();
        }
    }
    out
}
