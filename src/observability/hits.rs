//! Process-wide hit counter for the static site.
//!
//! # Responsibilities
//! - Count every request that reaches the `/app` prefix
//! - Expose the count to the admin metrics page
//! - Support an explicit reset from the admin API
//!
//! # Design Decisions
//! - Owned by `AppState` and shared via `Arc`, never a global static
//! - Relaxed ordering: increments must not be lost, but no other memory
//!   ordering is observable through the counter

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter, cleared only through [`HitCounter::reset`].
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Set the counter back to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn counts_every_increment_across_threads() {
        let counter = Arc::new(HitCounter::new());
        let threads = 8u64;
        let per_thread = 1_000u64;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        counter.increment();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.read(), threads * per_thread);
    }

    #[test]
    fn reset_returns_to_zero() {
        let counter = HitCounter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.read(), 2);

        counter.reset();
        assert_eq!(counter.read(), 0);
    }

    #[test]
    fn read_has_no_side_effect() {
        let counter = HitCounter::new();
        counter.increment();
        assert_eq!(counter.read(), 1);
        assert_eq!(counter.read(), 1);
    }
}
