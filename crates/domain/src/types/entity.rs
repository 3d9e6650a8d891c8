//! Entity model

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DEFAULT_ENTITY_VERSION;
use crate::utils::eq_ignore_case;

/// Logical entity type name, e.g. `SellableItem` or `Customer`.
///
/// Type names select the caching policy and are compared without regard to
/// case.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(String);

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.0, &other.0)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A structured domain object identified by (type, id, version).
///
/// Entities handed out by the cache layer are wrapped in `Arc` and are
/// read-only through that handle. Callers that need to modify one clone it
/// first, so cached state is never changed in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub entity_type: EntityType,
    #[serde(default = "default_entity_version")]
    pub entity_version: i32,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

fn default_entity_version() -> i32 {
    DEFAULT_ENTITY_VERSION
}

impl Entity {
    /// Create a published entity at the default version with no properties.
    pub fn new(entity_type: impl Into<EntityType>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            entity_version: DEFAULT_ENTITY_VERSION,
            published: true,
            properties: Map::new(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, entity_version: i32) -> Self {
        self.entity_version = entity_version;
        self
    }

    #[must_use]
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Whether this entity carries the given id (case-insensitive).
    pub fn has_id(&self, entity_id: &str) -> bool {
        eq_ignore_case(&self.id, entity_id)
    }
}
