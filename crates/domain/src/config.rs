//! Cache layer configuration
//!
//! Maps entity type names to caching policies. Loaded from the environment or
//! a TOML/JSON file by the infrastructure crate.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REGION_MAX_CAPACITY;
use crate::types::{CacheLoggingPolicy, CachePolicy, EntityType};

/// Top-level configuration for the entity cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Policy applied to entity types without an explicit entry.
    ///
    /// When absent, resolving an unlisted type fails with
    /// `PolicyUnavailable`.
    #[serde(default)]
    pub default_policy: Option<CachePolicy>,
    #[serde(default)]
    pub policies: Vec<EntityPolicy>,
    #[serde(default)]
    pub regions: RegionSettings,
    #[serde(default)]
    pub logging: CacheLoggingPolicy,
}

impl CacheSettings {
    /// Policy for `entity_type`: the first matching entry, else the default.
    pub fn policy_for(&self, entity_type: &EntityType) -> Option<&CachePolicy> {
        self.policies
            .iter()
            .find(|entry| entry.entity_type == *entity_type)
            .map(|entry| &entry.policy)
            .or(self.default_policy.as_ref())
    }
}

/// Policy entry for one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPolicy {
    pub entity_type: EntityType,
    #[serde(flatten)]
    pub policy: CachePolicy,
}

/// Sizing for in-memory cache regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSettings {
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

fn default_max_capacity() -> u64 {
    DEFAULT_REGION_MAX_CAPACITY
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self { max_capacity: DEFAULT_REGION_MAX_CAPACITY }
    }
}
