//! Shared test helpers for `entcache-core` integration tests.
//!
//! Lightweight in-memory implementations of every core port, instrumented
//! with call counters so tests can assert how often the cache backend, the
//! serializer, and the repository were touched.

#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use entcache_core::{CacheLookup, CacheStore, EntityFinder};
use entcache_domain::{CachePolicy, EntityType};

pub use mocks::{
    CountingSerializer, InMemoryRepository, RecordingRegion, RecordingRegionProvider,
    StaticPolicyResolver,
};

pub const SELLABLE_ITEM: &str = "SellableItem";

/// All collaborators of the cache blocks, wired for one test.
pub struct Harness {
    pub policies: Arc<StaticPolicyResolver>,
    pub regions: Arc<RecordingRegionProvider>,
    pub serializer: Arc<CountingSerializer>,
    pub repository: Arc<InMemoryRepository>,
}

impl Harness {
    /// Harness with a single policy for `SellableItem`.
    pub fn with_policy(policy: CachePolicy) -> Self {
        Self {
            policies: Arc::new(
                StaticPolicyResolver::default().with_policy(EntityType::new(SELLABLE_ITEM), policy),
            ),
            regions: Arc::new(RecordingRegionProvider::default()),
            serializer: Arc::new(CountingSerializer::default()),
            repository: Arc::new(InMemoryRepository::default()),
        }
    }

    pub fn lookup(&self) -> CacheLookup {
        CacheLookup::new(self.policies.clone(), self.regions.clone())
    }

    pub fn store(&self) -> CacheStore {
        CacheStore::new(self.policies.clone(), self.regions.clone(), self.serializer.clone())
    }

    pub fn finder(&self) -> EntityFinder {
        EntityFinder::new(
            self.policies.clone(),
            self.regions.clone(),
            self.serializer.clone(),
            self.repository.clone(),
        )
    }
}
