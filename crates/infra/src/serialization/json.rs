//! JSON entity serializer

use async_trait::async_trait;
use entcache_core::EntitySerializer;
use entcache_domain::{Entity, Result};

/// Serializes entities with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEntitySerializer;

#[async_trait]
impl EntitySerializer for JsonEntitySerializer {
    async fn serialize(&self, entity: &Entity) -> Result<String> {
        Ok(serde_json::to_string(entity)?)
    }

    async fn deserialize(&self, serialized: &str) -> Result<Entity> {
        Ok(serde_json::from_str(serialized)?)
    }
}
