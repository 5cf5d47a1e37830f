//! Limits and defaults shared by every set family.

/// Default largest storable value for a fixed set constructed without one.
pub const DEFAULT_MAX_VALUE: u64 = 256;

/// Hard upper bound on any set's largest storable value.
///
/// 2^24 words of 31 payload bits each. Requests above this are clamped.
pub const MAXIMUM: u64 = (1 << 24) * 31;

/// Initial number of words allocated by a growable set.
pub const INITIAL_CAPACITY: usize = 8;

/// Word count below which a growable set doubles its capacity.
///
/// At or above this size capacity grows in 25% steps instead.
pub const GROWTH_THRESHOLD: usize = 1024;
