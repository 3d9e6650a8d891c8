//! Error types used throughout the cache layer

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the entity cache layer.
///
/// Cache misses and unpublished entities are not errors; they surface as an
/// unmodified return value. Everything here propagates to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EntityCacheError {
    /// No caching policy could be resolved for an entity type.
    #[error("Cache policy unavailable: {0}")]
    PolicyUnavailable(String),

    /// A cache region get/set failed (timeout, connectivity, poisoned state).
    #[error("Cache backend error: {0}")]
    CacheBackend(String),

    /// The entity serializer failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EntityCacheError {
    /// Whether retrying the enclosing operation may succeed.
    ///
    /// Only backend failures are transient; the cache layer itself never
    /// retries, this is a hint for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::CacheBackend(_))
    }

    /// Stable label suitable for log fields and metrics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PolicyUnavailable(_) => "policy_unavailable",
            Self::CacheBackend(_) => "cache_backend",
            Self::Serialization(_) => "serialization",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for EntityCacheError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

/// Result type alias for entity cache operations
pub type Result<T> = std::result::Result<T, EntityCacheError>;
