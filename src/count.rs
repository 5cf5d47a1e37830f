//! Cached cardinality with an explicit stale flag.

use core::sync::atomic::{AtomicBool, AtomicIsize, Ordering};

/// Approximate member count maintained alongside a set.
///
/// Inserts and deletes adjust the count incrementally. Sets built in bulk
/// start *stale*: the first size query rescans the words and caches the
/// result. Under concurrent mutation the value may briefly lag.
#[derive(Debug)]
pub(crate) struct Cardinality {
    count: AtomicIsize,
    stale: AtomicBool,
}

impl Cardinality {
    /// Known count.
    pub fn exact(count: usize) -> Self {
        Self {
            count: AtomicIsize::new(count as isize),
            stale: AtomicBool::new(false),
        }
    }

    /// Unknown count; the next query rescans.
    pub fn stale() -> Self {
        Self {
            count: AtomicIsize::new(0),
            stale: AtomicBool::new(true),
        }
    }

    #[inline(always)]
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn decrement(&self) {
        self.count.fetch_sub(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn subtract(&self, n: usize) {
        self.count.fetch_sub(n as isize, Ordering::Relaxed);
    }

    /// Replace the cached value with a fresh count and clear the stale flag.
    pub fn reset(&self, count: usize) {
        self.count.store(count as isize, Ordering::Relaxed);
        self.stale.store(false, Ordering::Release);
    }

    /// Current count, rescanning first if stale.
    ///
    /// # Arguments
    /// * `rescan` - Full scan of the owning set, run only when stale
    pub fn get_or_rescan<F: FnOnce() -> usize>(&self, rescan: F) -> usize {
        if self.stale.load(Ordering::Acquire) {
            let count = rescan();
            log::trace!("rescanned stale cardinality: {count}");
            self.reset(count);
        }
        self.count.load(Ordering::Relaxed).max(0) as usize
    }
}
