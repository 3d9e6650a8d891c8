//! Entity finder service - core business logic

use std::sync::Arc;

use entcache_domain::{CacheRequest, Entity, EntityReference, FoundEntity, Result};
use tracing::debug;

use super::ports::EntityRepository;
use crate::cache::ports::{CachePolicyResolver, CacheRegionProvider, EntitySerializer};
use crate::cache::{keys, CacheLookup, CacheStore};
use crate::context::RequestContext;

/// Entity retrieval with a read-through/write-through cache in front of the
/// authoritative store.
pub struct EntityFinder {
    lookup: CacheLookup,
    store: CacheStore,
    policies: Arc<dyn CachePolicyResolver>,
    serializer: Arc<dyn EntitySerializer>,
    repository: Arc<dyn EntityRepository>,
}

impl EntityFinder {
    /// Create a new entity finder
    pub fn new(
        policies: Arc<dyn CachePolicyResolver>,
        regions: Arc<dyn CacheRegionProvider>,
        serializer: Arc<dyn EntitySerializer>,
        repository: Arc<dyn EntityRepository>,
    ) -> Self {
        Self {
            lookup: CacheLookup::new(Arc::clone(&policies), Arc::clone(&regions)),
            store: CacheStore::new(Arc::clone(&policies), regions, Arc::clone(&serializer)),
            policies,
            serializer,
            repository,
        }
    }

    /// Find an entity: cache first, then the repository, then cache it.
    ///
    /// A serialized cache hit is deserialized and attached to the request's
    /// `FoundEntity` record. A repository hit is recorded as a `FoundEntity`
    /// with `found_in_cache = false` before the store runs.
    pub async fn find_entity(
        &self,
        reference: EntityReference,
        context: &mut RequestContext,
    ) -> Result<Option<Arc<Entity>>> {
        let reference = self.lookup.run(reference, context).await?;

        let entity = if let Some(entity) = reference.entity.clone() {
            Some(entity)
        } else if let Some(serialized) = reference.serialized_entity.as_deref() {
            let entity = Arc::new(self.serializer.deserialize(serialized).await?);
            if let Some(found) = context.found_entity_mut(&reference.entity_id) {
                found.entity = Some(Arc::clone(&entity));
            }
            Some(entity)
        } else {
            self.fetch(&reference, context).await?
        };

        self.store.run(entity, context).await
    }

    /// Check whether an entity exists, answering from cache when possible.
    pub async fn entity_exists(
        &self,
        reference: EntityReference,
        context: &mut RequestContext,
    ) -> Result<bool> {
        let reference = self.lookup.run(reference, context).await?;
        if reference.is_resolved() {
            return Ok(true);
        }

        self.repository.exists(&reference.entity_type, &reference.entity_id).await
    }

    /// Version lookup keyed on. Without a lookup marker (caching disabled)
    /// the same precedence is applied directly.
    fn fetch_version(reference: &EntityReference, context: &RequestContext) -> Option<i32> {
        match context.get_model::<CacheRequest>(|request| request.matches(&reference.entity_id)) {
            Some(request) => request.version,
            None => keys::lookup_key(reference, context).1,
        }
    }

    async fn fetch(
        &self,
        reference: &EntityReference,
        context: &mut RequestContext,
    ) -> Result<Option<Arc<Entity>>> {
        let version = Self::fetch_version(reference, context);
        let fetched = self
            .repository
            .find(&reference.entity_type, &reference.entity_id, version)
            .await?;

        let Some(entity) = fetched else {
            debug!(
                entity_type = %reference.entity_type,
                entity_id = %reference.entity_id,
                entity_version = ?version,
                "entity not found in repository"
            );
            return Ok(None);
        };

        let entity = Arc::new(entity);
        let cached_as_entity =
            self.policies.resolve(&reference.entity_type, context)?.cache_as_entity();
        context.add_object(FoundEntity::fetched(Arc::clone(&entity), cached_as_entity));

        Ok(Some(entity))
    }
}
