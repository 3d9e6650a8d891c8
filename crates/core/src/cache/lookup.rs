//! Cache lookup block - runs before the authoritative fetch

use std::sync::Arc;

use entcache_domain::constants::DEFAULT_ENTITY_VERSION;
use entcache_domain::{
    CacheHit, CacheKey, CacheMode, CachePayload, CacheRequest, EntityReference, FoundEntity,
    IgnorePublishedPolicy, Result,
};
use tracing::{debug, info, Instrument};

use super::keys;
use super::ports::{CachePolicyResolver, CacheRegion, CacheRegionProvider};
use crate::context::RequestContext;

/// Looks an entity up in its cache region before authoritative retrieval.
///
/// On a hit the cached entity (or its serialized form) is placed on the
/// returned reference, and `CacheHit` / `FoundEntity` records are left on
/// the context for later stages. A miss returns the reference unchanged.
pub struct CacheLookup {
    policies: Arc<dyn CachePolicyResolver>,
    regions: Arc<dyn CacheRegionProvider>,
}

impl CacheLookup {
    pub fn new(
        policies: Arc<dyn CachePolicyResolver>,
        regions: Arc<dyn CacheRegionProvider>,
    ) -> Self {
        Self { policies, regions }
    }

    /// Run the lookup for `reference`.
    ///
    /// # Errors
    ///
    /// Propagates `PolicyUnavailable` from the policy resolver and
    /// `CacheBackend` failures from the region. Misses and unpublished hits
    /// are not errors.
    pub async fn run(
        &self,
        reference: EntityReference,
        context: &mut RequestContext,
    ) -> Result<EntityReference> {
        let span = context.span().clone();
        self.lookup(reference, context).instrument(span).await
    }

    async fn lookup(
        &self,
        reference: EntityReference,
        context: &mut RequestContext,
    ) -> Result<EntityReference> {
        let policy = self.policies.resolve(&reference.entity_type, context)?;
        if !policy.allow_caching {
            return Ok(reference);
        }

        let (item_key, version) = keys::lookup_key(&reference, context);
        context.add_model(CacheRequest::new(reference.entity_id.clone(), version));

        debug!(
            entity_type = %reference.entity_type,
            item_key = %item_key,
            "looking up entity in cache"
        );

        let region = self.regions.region(&policy.cache_name, context).await?;

        match policy.mode {
            CacheMode::Entity => {
                Self::lookup_entity(reference, item_key, region.as_ref(), context).await
            }
            CacheMode::SerializedString => {
                Self::lookup_serialized(reference, item_key, region.as_ref(), context).await
            }
        }
    }

    async fn lookup_entity(
        mut reference: EntityReference,
        item_key: CacheKey,
        region: &dyn CacheRegion,
        context: &mut RequestContext,
    ) -> Result<EntityReference> {
        let Some(entity) = region.get(&item_key).await?.and_then(CachePayload::into_entity) else {
            info!(
                event = "memcache.entity.miss",
                entity_type = %reference.entity_type,
                item_key = %item_key,
                cache = region.name(),
                "cache miss"
            );
            return Ok(reference);
        };

        if !entity.published && !context.has_policy::<IgnorePublishedPolicy>() {
            debug!(
                event = "memcache.entity.not_published",
                entity_type = %reference.entity_type,
                item_key = %item_key,
                cache = region.name(),
                "cached entity is not published"
            );
            return Ok(reference);
        }

        debug!(
            event = "memcache.entity.hit",
            entity_type = %reference.entity_type,
            item_key = %item_key,
            cache = region.name(),
            "cache hit"
        );

        context.add_model(CacheHit::new(item_key));
        context.add_object(FoundEntity::cached_entity(
            reference.entity_id.clone(),
            Arc::clone(&entity),
        ));
        reference.entity = Some(entity);

        Ok(reference)
    }

    async fn lookup_serialized(
        mut reference: EntityReference,
        item_key: CacheKey,
        region: &dyn CacheRegion,
        context: &mut RequestContext,
    ) -> Result<EntityReference> {
        let Some(serialized) =
            region.get(&item_key).await?.and_then(CachePayload::into_serialized)
        else {
            info!(
                event = "memcache.string.miss",
                entity_type = %reference.entity_type,
                item_key = %item_key,
                cache = region.name(),
                "cache miss"
            );
            return Ok(reference);
        };

        debug!(
            event = "memcache.string.hit",
            entity_type = %reference.entity_type,
            item_key = %item_key,
            cache = region.name(),
            "cache hit"
        );

        context.add_model(CacheHit::new(item_key));
        context.add_object(FoundEntity::cached_serialized(
            reference.entity_id.clone(),
            serialized.clone(),
            reference.entity_version.unwrap_or(DEFAULT_ENTITY_VERSION),
        ));
        reference.serialized_entity = Some(serialized);

        Ok(reference)
    }
}
