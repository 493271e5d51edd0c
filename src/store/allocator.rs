//! Lock-free id allocation.

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic id counter.
///
/// `next()` increments first and returns the new value, so an allocator
/// started at `n` hands out `n + 1` first. Ids are never reused.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    /// Create an allocator whose last handed-out id is `last`
    pub fn starting_at(last: i64) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    /// Allocate the next id
    pub fn next(&self) -> i64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last id handed out (or the starting value if none yet)
    pub fn current(&self) -> i64 {
        self.last.load(Ordering::SeqCst)
    }
}
