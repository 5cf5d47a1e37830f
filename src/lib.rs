//! # packed-intset
//!
//! Lock-free, bit-packed sets of non-negative integers.
//! Share one set between many threads without an external lock.
//!
//! ## Features
//! - [`FixedSet`]: storage sized once at construction; wait-free lookups
//! - [`GrowableSet`]: storage grows on demand via a frozen-word migration
//!   that never loses a concurrent insert or delete
//! - Word-level [`SetAlgebra`] (union, intersection, difference, symmetric
//!   difference, equality, copy) across operands of different capacities
//! - [`AnySet`] for mixing word widths and families, with a sorted-merge
//!   fallback
//! - 16/32/64-bit words through the [`Layout`] trait
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use packed_intset::{GrowableSet, IntSet};
//!
//! let set = Arc::new(GrowableSet::<packed_intset::Reserved63>::new());
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || {
//!             for x in (t..1000).step_by(4) {
//!                 set.insert(x);
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert_eq!(set.size(), 1000);
//! ```

mod algebra;
mod bitmap;
mod config;
mod constants;
mod convert;
mod count;
mod error;
mod fixed;
mod growable;
mod growth;
mod iter;
mod packing;
mod set;
mod sort;
mod word;
mod words;

pub use algebra::{
    copy, difference, equal, intersect, merge, merge_equal, symmetric_difference, union, AnySet,
    SetAlgebra, SetOp,
};
pub use config::SetOptions;
pub use constants::{DEFAULT_MAX_VALUE, GROWTH_THRESHOLD, INITIAL_CAPACITY, MAXIMUM};
pub use convert::convert;
pub use error::SetError;
pub use fixed::FixedSet;
pub use growable::GrowableSet;
pub use growth::grown_capacity;
pub use iter::Iter;
pub use packing::{
    repack, Dense, Dense16, Dense32, Dense64, Freezable, Layout, Reserved, Reserved15, Reserved31,
    Reserved63,
};
pub use set::{IntSet, WordSet};
pub use sort::counting_sort;
pub use word::{AtomicWord, Word};
