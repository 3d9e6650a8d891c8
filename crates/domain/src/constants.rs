//! Domain constants
//!
//! Centralized location for the constants shared by cache lookup, cache store
//! and the cache backends.

/// Separator placed between the entity id and its version in a cache key.
pub const KEY_VERSION_SEPARATOR: &str = "-";

/// Format tag written into every `Cachable` envelope.
pub const CACHABLE_FORMAT_VERSION: u32 = 1;

/// Version recorded for a serialized hit when no version was requested.
pub const DEFAULT_ENTITY_VERSION: i32 = 1;

/// Region used when a policy does not name one.
pub const DEFAULT_CACHE_NAME: &str = "Entities";

/// Default upper bound on entries held by one in-memory region.
pub const DEFAULT_REGION_MAX_CAPACITY: u64 = 10_000;

// Configuration environment variables
pub const ENV_CONFIG_PATH: &str = "ENTCACHE_CONFIG_PATH";
pub const ENV_DEFAULT_CACHE_NAME: &str = "ENTCACHE_DEFAULT_CACHE_NAME";
pub const ENV_DEFAULT_MODE: &str = "ENTCACHE_DEFAULT_MODE";
pub const ENV_DEFAULT_EXPIRATION_SECS: &str = "ENTCACHE_DEFAULT_EXPIRATION_SECS";
pub const ENV_REGION_MAX_CAPACITY: &str = "ENTCACHE_REGION_MAX_CAPACITY";
pub const ENV_LOG_SKIP_CACHE: &str = "ENTCACHE_LOG_SKIP_CACHE";
