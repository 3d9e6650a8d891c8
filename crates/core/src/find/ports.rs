//! Port interfaces for the authoritative entity store

use async_trait::async_trait;
use entcache_domain::{Entity, EntityType, Result};

/// Trait for reading entities from the authoritative store
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Fetch an entity, at `entity_version` when given or the latest otherwise
    async fn find(
        &self,
        entity_type: &EntityType,
        entity_id: &str,
        entity_version: Option<i32>,
    ) -> Result<Option<Entity>>;

    /// Check whether any version of an entity exists
    async fn exists(&self, entity_type: &EntityType, entity_id: &str) -> Result<bool>;
}
