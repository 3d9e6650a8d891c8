//! Domain types and models
//!
//! The entity model, the cache key, cache policies, the envelope written to
//! cache regions, and the request-scoped markers exchanged between cache
//! lookup and cache store.

pub mod cachable;
pub mod entity;
pub mod key;
pub mod markers;
pub mod policy;
pub mod reference;

pub use cachable::{Cachable, CachePayload};
pub use entity::{Entity, EntityType};
pub use key::CacheKey;
pub use markers::{CacheHit, CacheRequest, FoundEntity, RequestedVersion};
pub use policy::{
    CacheEntryOptions, CacheLoggingPolicy, CacheMode, CachePolicy, CachePriority,
    IgnorePublishedPolicy,
};
pub use reference::EntityReference;
