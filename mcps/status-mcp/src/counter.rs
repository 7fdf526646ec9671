//! Served-request counter

use std::sync::atomic::{AtomicU64, Ordering};

/// Count of requests served since the counter was created
///
/// Starts at zero and only ever grows. Increments are atomic, so concurrent
/// handlers never lose updates.
#[derive(Debug, Default)]
pub struct RequestCounter {
    served: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one served request, returning the new total
    pub fn increment(&self) -> u64 {
        self.served.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current total
    pub fn get(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }
}
