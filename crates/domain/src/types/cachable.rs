//! Envelope written into cache regions

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::entity::Entity;
use crate::constants::CACHABLE_FORMAT_VERSION;

/// Payload held by a cache region entry.
///
/// A region read that finds the variant other than the one its policy asks
/// for is treated as a miss.
#[derive(Debug, Clone, PartialEq)]
pub enum CachePayload {
    Entity(Arc<Entity>),
    Serialized(String),
}

impl CachePayload {
    pub fn into_entity(self) -> Option<Arc<Entity>> {
        match self {
            Self::Entity(entity) => Some(entity),
            Self::Serialized(_) => None,
        }
    }

    pub fn into_serialized(self) -> Option<String> {
        match self {
            Self::Serialized(serialized) => Some(serialized),
            Self::Entity(_) => None,
        }
    }

    /// Short name used in log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Entity(_) => "entity",
            Self::Serialized(_) => "serialized",
        }
    }
}

/// Value written into a cache region: the payload plus a format tag.
///
/// Created at write time and opaque to the cache layer afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Cachable<T> {
    value: T,
    version: u32,
    cached_at: DateTime<Utc>,
}

impl<T> Cachable<T> {
    pub fn new(value: T) -> Self {
        Self { value, version: CACHABLE_FORMAT_VERSION, cached_at: Utc::now() }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    pub fn cached_at(&self) -> DateTime<Utc> {
        self.cached_at
    }
}
