//! In-memory mocks for the core ports

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use entcache_core::{
    CachePolicyResolver, CacheRegion, CacheRegionProvider, EntityRepository, EntitySerializer,
    RequestContext,
};
use entcache_domain::{
    Cachable, CacheEntryOptions, CacheKey, CachePayload, CachePolicy, Entity, EntityCacheError,
    EntityType, Result as DomainResult,
};

/// Policy resolver backed by a fixed list of (type, policy) pairs.
#[derive(Default)]
pub struct StaticPolicyResolver {
    policies: Vec<(EntityType, CachePolicy)>,
    resolutions: AtomicUsize,
}

impl StaticPolicyResolver {
    pub fn with_policy(mut self, entity_type: EntityType, policy: CachePolicy) -> Self {
        self.policies.push((entity_type, policy));
        self
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl CachePolicyResolver for StaticPolicyResolver {
    fn resolve(
        &self,
        entity_type: &EntityType,
        _context: &RequestContext,
    ) -> DomainResult<CachePolicy> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.policies
            .iter()
            .find(|(candidate, _)| candidate == entity_type)
            .map(|(_, policy)| policy.clone())
            .ok_or_else(|| EntityCacheError::PolicyUnavailable(entity_type.to_string()))
    }
}

/// Cache region that records every call.
pub struct RecordingRegion {
    name: String,
    entries: Mutex<HashMap<String, (Cachable<CachePayload>, CacheEntryOptions)>>,
    gets: AtomicUsize,
    sets: AtomicUsize,
    failure: Mutex<Option<EntityCacheError>>,
}

impl RecordingRegion {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Mutex::new(HashMap::new()),
            gets: AtomicUsize::new(0),
            sets: AtomicUsize::new(0),
            failure: Mutex::new(None),
        }
    }

    /// Put a payload in the region without counting it as a write.
    pub fn seed(&self, key: &str, payload: CachePayload) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_lowercase(), (Cachable::new(payload), CacheEntryOptions::default()));
    }

    /// Make every subsequent get/set fail with `error`.
    pub fn fail_with(&self, error: EntityCacheError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn payload(&self, key: &str) -> Option<CachePayload> {
        self.entries
            .lock()
            .unwrap()
            .get(&key.to_lowercase())
            .map(|(cachable, _)| cachable.value().clone())
    }

    pub fn options(&self, key: &str) -> Option<CacheEntryOptions> {
        self.entries.lock().unwrap().get(&key.to_lowercase()).map(|(_, options)| options.clone())
    }

    fn check_failure(&self) -> DomainResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CacheRegion for RecordingRegion {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &CacheKey) -> DomainResult<Option<CachePayload>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&key.normalized())
            .map(|(cachable, _)| cachable.value().clone()))
    }

    async fn set(
        &self,
        key: &CacheKey,
        value: Cachable<CachePayload>,
        options: &CacheEntryOptions,
    ) -> DomainResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.entries.lock().unwrap().insert(key.normalized(), (value, options.clone()));
        Ok(())
    }
}

/// Region provider handing out one `RecordingRegion` per name.
#[derive(Default)]
pub struct RecordingRegionProvider {
    regions: Mutex<HashMap<String, Arc<RecordingRegion>>>,
    resolutions: AtomicUsize,
}

impl RecordingRegionProvider {
    pub fn region_named(&self, name: &str) -> Arc<RecordingRegion> {
        self.regions
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(RecordingRegion::new(name)))
            .clone()
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    /// Total gets and sets across every region handed out.
    pub fn region_calls(&self) -> usize {
        self.regions.lock().unwrap().values().map(|region| region.gets() + region.sets()).sum()
    }
}

#[async_trait]
impl CacheRegionProvider for RecordingRegionProvider {
    async fn region(
        &self,
        cache_name: &str,
        _context: &RequestContext,
    ) -> DomainResult<Arc<dyn CacheRegion>> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        Ok(self.region_named(cache_name))
    }
}

/// JSON serializer that counts serialize calls.
#[derive(Default)]
pub struct CountingSerializer {
    serializations: AtomicUsize,
    fail: bool,
}

impl CountingSerializer {
    pub fn failing() -> Self {
        Self { serializations: AtomicUsize::new(0), fail: true }
    }

    pub fn serializations(&self) -> usize {
        self.serializations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntitySerializer for CountingSerializer {
    async fn serialize(&self, entity: &Entity) -> DomainResult<String> {
        self.serializations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EntityCacheError::Serialization("serializer unavailable".into()));
        }
        Ok(serde_json::to_string(entity)?)
    }

    async fn deserialize(&self, serialized: &str) -> DomainResult<Entity> {
        Ok(serde_json::from_str(serialized)?)
    }
}

/// Authoritative store holding a fixed set of entities.
#[derive(Default)]
pub struct InMemoryRepository {
    entities: Mutex<Vec<Entity>>,
    finds: AtomicUsize,
}

impl InMemoryRepository {
    pub fn insert(&self, entity: Entity) {
        self.entities.lock().unwrap().push(entity);
    }

    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityRepository for InMemoryRepository {
    async fn find(
        &self,
        entity_type: &EntityType,
        entity_id: &str,
        entity_version: Option<i32>,
    ) -> DomainResult<Option<Entity>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        let entities = self.entities.lock().unwrap();
        Ok(entities
            .iter()
            .filter(|entity| entity.entity_type == *entity_type && entity.has_id(entity_id))
            .filter(|entity| entity_version.map_or(true, |v| entity.entity_version == v))
            .max_by_key(|entity| entity.entity_version)
            .cloned())
    }

    async fn exists(&self, entity_type: &EntityType, entity_id: &str) -> DomainResult<bool> {
        let entities = self.entities.lock().unwrap();
        Ok(entities
            .iter()
            .any(|entity| entity.entity_type == *entity_type && entity.has_id(entity_id)))
    }
}
