//! Machine words used as packed bitmaps (u16, u32, u64).

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};
use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU64, Ordering};

/// Unsigned integer usable as one word of a packed bitmap.
///
/// Supports u16, u32 and u64 with zero-cost abstraction. Each type pairs
/// with its native atomic so shared storage never needs a lock.
pub trait Word:
    Copy
    + Eq
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Atomic cell holding one word.
    type Atomic: AtomicWord<Self>;

    /// Number of bits in the word.
    const BITS: u32;

    /// All bits clear.
    const ZERO: Self;

    /// Only the most significant bit set.
    const HIGH_BIT: Self;

    /// Every bit except the most significant one.
    const LOW_BITS: Self;

    /// Word with only bit `offset` set.
    ///
    /// # Arguments
    /// * `offset` - Bit position (0 to BITS-1)
    ///
    /// # Performance
    /// O(1) - single shift in native register size
    fn bit(offset: u32) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Position of the lowest set bit, or BITS if the word is zero.
    fn trailing_zeros(self) -> u32;

    /// Clear the lowest set bit (`w & (w - 1)`).
    ///
    /// # Performance
    /// O(1) - BLSR on targets that have it
    fn clear_lowest(self) -> Self;

    /// True when no bit is set.
    #[inline(always)]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Atomic cell over a [`Word`].
///
/// Mirrors the subset of `core::sync::atomic` the sets rely on.
pub trait AtomicWord<W>: Send + Sync {
    /// Create a cell with an initial value.
    fn new(value: W) -> Self;

    /// Load the current value.
    fn load(&self, ordering: Ordering) -> W;

    /// Bitwise OR, returning the previous value.
    fn fetch_or(&self, value: W, ordering: Ordering) -> W;

    /// Weak compare-and-exchange (may fail spuriously).
    fn compare_exchange_weak(
        &self,
        current: W,
        new: W,
        success: Ordering,
        failure: Ordering,
    ) -> Result<W, W>;
}

macro_rules! impl_word {
    ($word:ty, $atomic:ty) => {
        impl Word for $word {
            type Atomic = $atomic;

            const BITS: u32 = <$word>::BITS;
            const ZERO: Self = 0;
            const HIGH_BIT: Self = 1 << (<$word>::BITS - 1);
            const LOW_BITS: Self = <$word>::MAX >> 1;

            #[inline(always)]
            fn bit(offset: u32) -> Self {
                1 << offset
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$word>::count_ones(self)
            }

            #[inline(always)]
            fn trailing_zeros(self) -> u32 {
                <$word>::trailing_zeros(self)
            }

            #[inline(always)]
            fn clear_lowest(self) -> Self {
                self & self.wrapping_sub(1)
            }
        }

        impl AtomicWord<$word> for $atomic {
            #[inline(always)]
            fn new(value: $word) -> Self {
                <$atomic>::new(value)
            }

            #[inline(always)]
            fn load(&self, ordering: Ordering) -> $word {
                <$atomic>::load(self, ordering)
            }

            #[inline(always)]
            fn fetch_or(&self, value: $word, ordering: Ordering) -> $word {
                <$atomic>::fetch_or(self, value, ordering)
            }

            #[inline(always)]
            fn compare_exchange_weak(
                &self,
                current: $word,
                new: $word,
                success: Ordering,
                failure: Ordering,
            ) -> Result<$word, $word> {
                <$atomic>::compare_exchange_weak(self, current, new, success, failure)
            }
        }
    };
}

impl_word!(u16, AtomicU16);
impl_word!(u32, AtomicU32);
impl_word!(u64, AtomicU64);
