//! Region provider handing out in-memory regions by name

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use entcache_core::{CacheRegion, CacheRegionProvider, RequestContext};
use entcache_domain::{EntityCacheError, RegionSettings, Result};

use super::memory_region::MemoryCacheRegion;
use crate::observability::metrics::CacheMetrics;

/// Creates regions on first use and hands the same instance out afterwards.
///
/// Region names are matched exactly.
pub struct MemoryRegionProvider {
    regions: DashMap<String, Arc<MemoryCacheRegion>>,
    settings: RegionSettings,
}

impl MemoryRegionProvider {
    pub fn new(settings: RegionSettings) -> Self {
        Self { regions: DashMap::new(), settings }
    }

    /// The region called `cache_name`, created if missing.
    ///
    /// # Errors
    /// Returns `EntityCacheError::Config` for an empty name.
    pub fn get_or_create(&self, cache_name: &str) -> Result<Arc<MemoryCacheRegion>> {
        if cache_name.trim().is_empty() {
            return Err(EntityCacheError::Config("cache name must not be empty".to_string()));
        }

        let region = self
            .regions
            .entry(cache_name.to_string())
            .or_insert_with(|| {
                Arc::new(MemoryCacheRegion::new(cache_name, self.settings.max_capacity))
            })
            .clone();
        Ok(region)
    }

    /// Names of the regions created so far, sorted.
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Metrics of an existing region.
    pub fn metrics(&self, cache_name: &str) -> Option<Arc<CacheMetrics>> {
        self.regions.get(cache_name).map(|region| region.metrics())
    }
}

impl Default for MemoryRegionProvider {
    fn default() -> Self {
        Self::new(RegionSettings::default())
    }
}

#[async_trait]
impl CacheRegionProvider for MemoryRegionProvider {
    async fn region(
        &self,
        cache_name: &str,
        _context: &RequestContext,
    ) -> Result<Arc<dyn CacheRegion>> {
        let region: Arc<dyn CacheRegion> = self.get_or_create(cache_name)?;
        Ok(region)
    }
}
