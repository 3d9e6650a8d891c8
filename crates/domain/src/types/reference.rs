//! Entity reference handed through the find-entity pipeline

use std::sync::Arc;

use super::entity::{Entity, EntityType};

/// Request for one logical entity, plus the slots a cache hit fills in.
///
/// The identifying fields are immutable for the duration of a lookup; only
/// `entity` or `serialized_entity` are set when the cache answers.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityReference {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub entity_version: Option<i32>,
    pub entity: Option<Arc<Entity>>,
    pub serialized_entity: Option<String>,
}

impl EntityReference {
    pub fn new(entity_type: impl Into<EntityType>, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            entity_version: None,
            entity: None,
            serialized_entity: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, entity_version: i32) -> Self {
        self.entity_version = Some(entity_version);
        self
    }

    /// Whether a previous stage already produced a result.
    pub fn is_resolved(&self) -> bool {
        self.entity.is_some() || self.serialized_entity.is_some()
    }
}
