//! Port interfaces for the cache blocks
//!
//! These traits define the boundaries between the cache coordination logic
//! and the infrastructure that resolves policies, hosts cache regions, and
//! serializes entities.

use std::sync::Arc;

use async_trait::async_trait;
use entcache_domain::{
    Cachable, CacheEntryOptions, CacheKey, CachePayload, CachePolicy, Entity, EntityType, Result,
};

use crate::context::RequestContext;

/// Trait for mapping an entity type to its caching parameters
pub trait CachePolicyResolver: Send + Sync {
    /// Resolve the policy for `entity_type`.
    ///
    /// Fails with `PolicyUnavailable` when the type has no policy.
    fn resolve(&self, entity_type: &EntityType, context: &RequestContext) -> Result<CachePolicy>;
}

/// Trait for resolving a named cache region
#[async_trait]
pub trait CacheRegionProvider: Send + Sync {
    async fn region(
        &self,
        cache_name: &str,
        context: &RequestContext,
    ) -> Result<Arc<dyn CacheRegion>>;
}

/// A named key-value store shared across requests
///
/// Failures surface as `CacheBackend` errors and are propagated by the cache
/// blocks without retry.
#[async_trait]
pub trait CacheRegion: Send + Sync {
    /// Region name, used in log fields
    fn name(&self) -> &str;

    /// Get the payload stored under `key`, if any
    async fn get(&self, key: &CacheKey) -> Result<Option<CachePayload>>;

    /// Store `value` under `key` with the policy's entry options
    async fn set(
        &self,
        key: &CacheKey,
        value: Cachable<CachePayload>,
        options: &CacheEntryOptions,
    ) -> Result<()>;
}

/// Trait for converting entities to and from their serialized string form
#[async_trait]
pub trait EntitySerializer: Send + Sync {
    async fn serialize(&self, entity: &Entity) -> Result<String>;

    async fn deserialize(&self, serialized: &str) -> Result<Entity>;
}
