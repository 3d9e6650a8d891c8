//! Cache store block - runs after the authoritative fetch

use std::sync::Arc;

use entcache_domain::{
    Cachable, CacheHit, CacheKey, CacheLoggingPolicy, CacheMode, CachePayload, CachePolicy,
    Entity, Result,
};
use tracing::{debug, info, Instrument};

use super::keys;
use super::ports::{CachePolicyResolver, CacheRegion, CacheRegionProvider, EntitySerializer};
use crate::context::RequestContext;

/// Writes a retrieved entity into its cache region.
///
/// The write is skipped when the same key was served from cache earlier in
/// the request, so an entity is never written back right after being read.
pub struct CacheStore {
    policies: Arc<dyn CachePolicyResolver>,
    regions: Arc<dyn CacheRegionProvider>,
    serializer: Arc<dyn EntitySerializer>,
}

impl CacheStore {
    pub fn new(
        policies: Arc<dyn CachePolicyResolver>,
        regions: Arc<dyn CacheRegionProvider>,
        serializer: Arc<dyn EntitySerializer>,
    ) -> Self {
        Self { policies, regions, serializer }
    }

    /// Store `entity` and hand it back unchanged.
    ///
    /// `None` is passed through without touching the cache.
    ///
    /// # Errors
    ///
    /// Propagates `PolicyUnavailable`, `CacheBackend` and `Serialization`
    /// failures. Nothing is written when serialization fails.
    pub async fn run(
        &self,
        entity: Option<Arc<Entity>>,
        context: &mut RequestContext,
    ) -> Result<Option<Arc<Entity>>> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        let span = context.span().clone();
        self.store(&entity, context).instrument(span).await?;
        Ok(Some(entity))
    }

    async fn store(&self, entity: &Arc<Entity>, context: &mut RequestContext) -> Result<()> {
        let item_key = keys::store_key(entity, context);

        if context.get_models::<CacheHit>().any(|hit| hit.item_key == item_key) {
            return Ok(());
        }

        let policy = self.policies.resolve(&entity.entity_type, context)?;
        if !policy.allow_caching {
            if context.policy_or_default::<CacheLoggingPolicy>().log_skip_cache {
                info!(
                    event = "memcache.skip.disabled",
                    entity_type = %entity.entity_type,
                    item_key = %item_key,
                    "caching disabled for entity type"
                );
            }
            return Ok(());
        }

        let region = self.regions.region(&policy.cache_name, context).await?;

        match policy.mode {
            CacheMode::Entity => {
                let value = Cachable::new(CachePayload::Entity(Arc::clone(entity)));
                region.set(&item_key, value, &policy.entry_options).await?;

                info!(
                    event = "memcache.entity.add",
                    entity_type = %entity.entity_type,
                    item_key = %item_key,
                    cache = region.name(),
                    "entity added to cache"
                );
                Ok(())
            }
            CacheMode::SerializedString => {
                self.store_serialized(entity, &item_key, &policy, region.as_ref(), context).await
            }
        }
    }

    async fn store_serialized(
        &self,
        entity: &Arc<Entity>,
        item_key: &CacheKey,
        policy: &CachePolicy,
        region: &dyn CacheRegion,
        context: &mut RequestContext,
    ) -> Result<()> {
        let Some(found) = context.found_entity(&entity.id) else {
            info!(
                event = "memcache.string.no_found_entity",
                item_key = %item_key,
                cache = region.name(),
                "store requested but no entity was found for this request"
            );
            return Ok(());
        };

        if found.found_in_cache {
            debug!(
                event = "memcache.string.already_in_cache",
                item_key = %item_key,
                cache = region.name(),
                "entity already cached"
            );
            return Ok(());
        }

        let memoized = found.serialized().map(str::to_owned);
        let source = found.entity.clone();

        let serialized = match memoized {
            Some(serialized) => serialized,
            None => {
                let source = source.unwrap_or_else(|| Arc::clone(entity));
                let serialized = self.serializer.serialize(&source).await?;
                if let Some(found) = context.found_entity_mut(&entity.id) {
                    found.serialized_entity = Some(serialized.clone());
                }
                serialized
            }
        };

        let value = Cachable::new(CachePayload::Serialized(serialized));
        region.set(item_key, value, &policy.entry_options).await?;

        info!(
            event = "memcache.string.add",
            entity_type = %entity.entity_type,
            item_key = %item_key,
            cache = region.name(),
            "serialized entity added to cache"
        );
        Ok(())
    }
}
