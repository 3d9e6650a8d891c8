//! Cache-related metrics for tracking region performance
//!
//! ## Design
//! - **SeqCst ordering** for atomics used in hit_rate calculation (derived metric)
//! - **No locking needed** - simple atomic counters

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hit, miss and write counters for one cache region.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    /// Number of reads that found an entry
    pub cache_hits: AtomicUsize,
    /// Number of reads that found nothing
    pub cache_misses: AtomicUsize,
    /// Number of entries written
    pub cache_writes: AtomicUsize,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_write(&self) {
        self.cache_writes.fetch_add(1, Ordering::SeqCst);
    }

    /// Cache hit rate as a percentage (0.0 to 100.0)
    ///
    /// Returns 0.0 if no reads have been recorded.
    ///
    /// ```text
    /// hit_rate = (hits / (hits + misses)) * 100.0
    /// ```
    pub fn get_hit_rate(&self) -> f64 {
        let hits = self.get_hits();
        let misses = self.get_misses();

        let total = hits + misses;
        if total == 0 {
            return 0.0;
        }

        (hits as f64 / total as f64) * 100.0
    }

    pub fn get_hits(&self) -> usize {
        self.cache_hits.load(Ordering::SeqCst)
    }

    pub fn get_misses(&self) -> usize {
        self.cache_misses.load(Ordering::SeqCst)
    }

    pub fn get_writes(&self) -> usize {
        self.cache_writes.load(Ordering::SeqCst)
    }

    /// Total number of reads (hits + misses)
    pub fn get_total(&self) -> usize {
        self.get_hits() + self.get_misses()
    }
}
