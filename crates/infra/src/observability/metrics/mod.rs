//! Metrics collection modules
//!
//! Thread-safe counters kept by the in-memory cache regions.

pub mod cache;

pub use cache::CacheMetrics;
