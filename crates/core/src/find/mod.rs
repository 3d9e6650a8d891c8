//! Find-entity and does-entity-exist workflows
//!
//! Wires [`CacheLookup`](crate::CacheLookup) and
//! [`CacheStore`](crate::CacheStore) around the authoritative entity store.

pub mod ports;
pub mod service;

pub use service::EntityFinder;
