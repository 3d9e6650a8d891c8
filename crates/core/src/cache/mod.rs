//! Read-through/write-through cache blocks
//!
//! [`CacheLookup`] runs before the authoritative fetch and short-circuits it
//! on a hit; [`CacheStore`] runs after it and writes the entity back unless
//! the entity was itself served from cache during this request. The two
//! derive the same key through the markers they leave on the
//! [`RequestContext`](crate::RequestContext).

pub mod keys;
pub mod lookup;
pub mod ports;
pub mod store;

pub use lookup::CacheLookup;
pub use store::CacheStore;
