//! Cache policies
//!
//! A [`CachePolicy`] is resolved per entity type by an external resolver and
//! is read-only to the cache layer. Request-level policies
//! ([`IgnorePublishedPolicy`], [`CacheLoggingPolicy`]) live on the request
//! context.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_NAME;
use crate::impl_domain_enum_conversions;
use crate::utils::serde::option_duration_secs;

/// How entities of one type are held in their cache region.
///
/// The two payload shapes never mix within one entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// The structured entity is cached as-is.
    #[default]
    Entity,
    /// The serialized string form of the entity is cached.
    SerializedString,
}

impl_domain_enum_conversions!(CacheMode {
    Entity => "entity",
    SerializedString => "serialized_string",
});

/// Relative importance of an entry, passed through to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePriority {
    Low,
    #[default]
    Normal,
    High,
    NeverRemove,
}

impl_domain_enum_conversions!(CachePriority {
    Low => "low",
    Normal => "normal",
    High => "high",
    NeverRemove => "never_remove",
});

/// Entry options handed to the cache backend on every write.
///
/// Opaque to the cache layer: it neither computes nor enforces expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryOptions {
    /// Lifetime of an entry measured from its write.
    #[serde(default, with = "option_duration_secs")]
    pub absolute_expiration: Option<Duration>,
    /// Idle lifetime, renewed on every read.
    #[serde(default, with = "option_duration_secs")]
    pub sliding_expiration: Option<Duration>,
    #[serde(default)]
    pub priority: CachePriority,
}

impl CacheEntryOptions {
    #[must_use]
    pub fn with_absolute_expiration(mut self, expiration: Duration) -> Self {
        self.absolute_expiration = Some(expiration);
        self
    }

    #[must_use]
    pub fn with_sliding_expiration(mut self, expiration: Duration) -> Self {
        self.sliding_expiration = Some(expiration);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: CachePriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Caching parameters for one entity type.
///
/// Missing fields deserialize to the defaults: caching allowed, structured
/// entities, the default region, no expiry options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    pub allow_caching: bool,
    pub mode: CacheMode,
    pub cache_name: String,
    pub entry_options: CacheEntryOptions,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            allow_caching: true,
            mode: CacheMode::Entity,
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            entry_options: CacheEntryOptions::default(),
        }
    }
}

impl CachePolicy {
    /// Policy caching structured entities in `cache_name`.
    pub fn entity(cache_name: impl Into<String>) -> Self {
        Self { cache_name: cache_name.into(), ..Self::default() }
    }

    /// Policy caching serialized entities in `cache_name`.
    pub fn serialized(cache_name: impl Into<String>) -> Self {
        Self { cache_name: cache_name.into(), mode: CacheMode::SerializedString, ..Self::default() }
    }

    /// Policy with caching turned off.
    pub fn disabled() -> Self {
        Self { allow_caching: false, ..Self::default() }
    }

    #[must_use]
    pub fn with_entry_options(mut self, entry_options: CacheEntryOptions) -> Self {
        self.entry_options = entry_options;
        self
    }

    pub const fn cache_as_entity(&self) -> bool {
        matches!(self.mode, CacheMode::Entity)
    }
}

/// Request policy: surface unpublished entities served from cache.
///
/// Without it a cached entity whose `published` flag is false is treated as
/// a cache miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnorePublishedPolicy;

/// Request policy controlling optional cache log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheLoggingPolicy {
    /// Log every store skipped because caching is disabled for the type.
    #[serde(default)]
    pub log_skip_cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_select_mode() {
        assert!(CachePolicy::entity("Items").cache_as_entity());
        assert!(!CachePolicy::serialized("Items").cache_as_entity());
        assert!(!CachePolicy::disabled().allow_caching);
    }

    #[test]
    fn test_mode_parses_from_config_strings() {
        assert_eq!("serialized_string".parse::<CacheMode>(), Ok(CacheMode::SerializedString));
        assert_eq!("Entity".parse::<CacheMode>(), Ok(CacheMode::Entity));
        assert!("string".parse::<CacheMode>().is_err());
    }

    #[test]
    fn test_entry_options_deserialize_from_seconds() {
        let options: CacheEntryOptions = serde_json::from_str(
            r#"{"absolute_expiration":600,"priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(options.absolute_expiration, Some(Duration::from_secs(600)));
        assert_eq!(options.sliding_expiration, None);
        assert_eq!(options.priority, CachePriority::High);
    }
}
