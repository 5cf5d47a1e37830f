//! Word-level bitmap operations shared by every set family.
//!
//! These functions work on plain (already loaded) words and slices of
//! words. Anything that touches shared atomic storage lives in
//! [`crate::words`].

mod basic;
mod bulk;
mod check;
mod search;

pub use basic::{is_set, with_bit, without_bit};
pub use bulk::{difference, intersect, symmetric_difference, union};
pub use check::equal;
pub use search::for_each_set_bit;
