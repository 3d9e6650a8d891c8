//! Request-scoped markers
//!
//! Facts recorded on the request context by one pipeline stage for later
//! stages to consult. Markers are appended during a request and never
//! removed; lookups match the entity id without regard to case.

use std::sync::Arc;

use super::entity::Entity;
use super::key::CacheKey;
use crate::utils::eq_ignore_case;

/// An earlier stage asked for a specific version of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedVersion {
    pub entity_id: String,
    pub entity_version: i32,
}

impl RequestedVersion {
    pub fn new(entity_id: impl Into<String>, entity_version: i32) -> Self {
        Self { entity_id: entity_id.into(), entity_version }
    }

    pub fn matches(&self, entity_id: &str) -> bool {
        eq_ignore_case(&self.entity_id, entity_id)
    }
}

/// The version (if any) cache lookup used to build its key.
///
/// Cache store replays it so both phases derive the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRequest {
    pub entity_id: String,
    pub version: Option<i32>,
}

impl CacheRequest {
    pub fn new(entity_id: impl Into<String>, version: Option<i32>) -> Self {
        Self { entity_id: entity_id.into(), version }
    }

    pub fn matches(&self, entity_id: &str) -> bool {
        eq_ignore_case(&self.entity_id, entity_id)
    }
}

/// A key that was satisfied from cache during this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheHit {
    pub item_key: CacheKey,
}

impl CacheHit {
    pub fn new(item_key: CacheKey) -> Self {
        Self { item_key }
    }
}

/// Result record for an entity id found during this request.
///
/// Written by cache lookup on a hit or by the authoritative fetch, and
/// updated in place by cache store when it serializes the entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoundEntity {
    pub entity_id: String,
    pub entity: Option<Arc<Entity>>,
    pub serialized_entity: Option<String>,
    pub entity_version: i32,
    pub found_in_cache: bool,
    pub cached_as_entity: bool,
}

impl FoundEntity {
    /// Record for an entity served from cache in structured form.
    pub fn cached_entity(entity_id: impl Into<String>, entity: Arc<Entity>) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_version: entity.entity_version,
            entity: Some(entity),
            serialized_entity: None,
            found_in_cache: true,
            cached_as_entity: true,
        }
    }

    /// Record for an entity served from cache in serialized form.
    pub fn cached_serialized(
        entity_id: impl Into<String>,
        serialized_entity: String,
        entity_version: i32,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity: None,
            serialized_entity: Some(serialized_entity),
            entity_version,
            found_in_cache: true,
            cached_as_entity: false,
        }
    }

    /// Record for an entity fetched from the authoritative store.
    pub fn fetched(entity: Arc<Entity>, cached_as_entity: bool) -> Self {
        Self {
            entity_id: entity.id.clone(),
            entity_version: entity.entity_version,
            entity: Some(entity),
            serialized_entity: None,
            found_in_cache: false,
            cached_as_entity,
        }
    }

    pub fn matches(&self, entity_id: &str) -> bool {
        eq_ignore_case(&self.entity_id, entity_id)
    }

    /// The memoized serialized form, ignoring an empty string.
    pub fn serialized(&self) -> Option<&str> {
        self.serialized_entity.as_deref().filter(|serialized| !serialized.is_empty())
    }
}
