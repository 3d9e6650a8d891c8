//! Cache region backed by `moka`
//!
//! Entries are keyed by the lowercased cache key so lookups ignore case.
//! Each entry carries the options it was written with, and a per-entry
//! [`Expiry`] turns them into a lifetime:
//!
//! - **Absolute expiration**: measured from the last write
//! - **Sliding expiration**: renewed on every read, never past the absolute
//!   deadline when both are set
//!
//! Capacity eviction is left to `moka`. Priority is stored with the entry but
//! does not influence eviction.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use entcache_core::CacheRegion;
use entcache_domain::{Cachable, CacheEntryOptions, CacheKey, CachePayload, Result};
use moka::future::Cache;
use moka::Expiry;

use crate::observability::metrics::CacheMetrics;

/// Value stored in the `moka` cache.
#[derive(Debug)]
struct RegionEntry {
    cachable: Cachable<CachePayload>,
    options: CacheEntryOptions,
}

struct EntryExpiry;

impl Expiry<String, Arc<RegionEntry>> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Arc<RegionEntry>,
        _created_at: Instant,
    ) -> Option<Duration> {
        remaining_lifetime(&value.options, Duration::ZERO)
    }

    fn expire_after_read(
        &self,
        _key: &String,
        value: &Arc<RegionEntry>,
        read_at: Instant,
        duration_until_expiry: Option<Duration>,
        last_modified_at: Instant,
    ) -> Option<Duration> {
        if value.options.sliding_expiration.is_none() {
            return duration_until_expiry;
        }
        remaining_lifetime(&value.options, read_at.saturating_duration_since(last_modified_at))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Arc<RegionEntry>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        remaining_lifetime(&value.options, Duration::ZERO)
    }
}

/// Lifetime left for an entry written `age` ago and touched just now.
fn remaining_lifetime(options: &CacheEntryOptions, age: Duration) -> Option<Duration> {
    let absolute = options.absolute_expiration.map(|deadline| deadline.saturating_sub(age));
    match (absolute, options.sliding_expiration) {
        (Some(absolute), Some(sliding)) => Some(absolute.min(sliding)),
        (absolute, sliding) => absolute.or(sliding),
    }
}

/// Named in-memory cache region.
pub struct MemoryCacheRegion {
    name: String,
    entries: Cache<String, Arc<RegionEntry>>,
    metrics: Arc<CacheMetrics>,
}

impl MemoryCacheRegion {
    /// Create a region holding at most `max_capacity` entries.
    pub fn new(name: impl Into<String>, max_capacity: u64) -> Self {
        let name = name.into();
        let entries = Cache::builder()
            .name(&name)
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();

        tracing::debug!(cache = %name, max_capacity, "memory cache region created");

        Self { name, entries, metrics: Arc::new(CacheMetrics::new()) }
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Options the entry under `key` was written with.
    pub async fn entry_options(&self, key: &CacheKey) -> Option<CacheEntryOptions> {
        self.entries.get(&key.normalized()).await.map(|entry| entry.options.clone())
    }

    /// Number of live entries, after pending maintenance has run.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

#[async_trait]
impl CacheRegion for MemoryCacheRegion {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &CacheKey) -> Result<Option<CachePayload>> {
        match self.entries.get(&key.normalized()).await {
            Some(entry) => {
                self.metrics.record_hit();
                Ok(Some(entry.cachable.value().clone()))
            }
            None => {
                self.metrics.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(
        &self,
        key: &CacheKey,
        value: Cachable<CachePayload>,
        options: &CacheEntryOptions,
    ) -> Result<()> {
        tracing::trace!(
            cache = %self.name,
            item_key = %key,
            payload = value.value().kind(),
            "writing cache entry"
        );
        let entry = RegionEntry { cachable: value, options: options.clone() };
        self.entries.insert(key.normalized(), Arc::new(entry)).await;
        self.metrics.record_write();
        Ok(())
    }
}
