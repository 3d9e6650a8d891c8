//! # Entcache Core
//!
//! Cache coordination logic for the entity retrieval pipeline - no
//! infrastructure dependencies.
//!
//! This crate contains:
//! - The per-request [`RequestContext`] and its markers
//! - Port interfaces (traits) for policies, cache regions, serialization and
//!   the authoritative entity store
//! - [`CacheLookup`] and [`CacheStore`], run before and after authoritative
//!   retrieval
//! - [`EntityFinder`], the find-entity / does-entity-exist workflows built on
//!   top of them
//!
//! ## Architecture Principles
//! - Only depends on `entcache-domain`
//! - No cache backend, database, or serialization format code
//! - All external dependencies via traits

pub mod cache;
pub mod context;
pub mod find;

// Re-export specific items to avoid ambiguity
pub use cache::ports::{CachePolicyResolver, CacheRegion, CacheRegionProvider, EntitySerializer};
pub use cache::{CacheLookup, CacheStore};
pub use context::RequestContext;
pub use find::ports::EntityRepository;
pub use find::EntityFinder;
