//! # Entity Cache Infrastructure
//!
//! Infrastructure implementations of the `entcache-core` ports.
//!
//! This crate contains:
//! - `moka`-backed in-memory cache regions and the region registry
//! - The configuration-driven cache policy resolver
//! - JSON entity serialization
//! - Configuration loading (environment, TOML, JSON)
//! - Tracing setup and per-region cache metrics
//!
//! ## Architecture
//! - Implements traits defined in `entcache-core`
//! - Contains all "impure" code (clocks, environment, files, global
//!   subscriber)

pub mod cache;
pub mod config;
pub mod observability;
pub mod policy;
pub mod serialization;

// Re-export commonly used items
pub use cache::{MemoryCacheRegion, MemoryRegionProvider};
pub use observability::{init_tracing, LogFormat};
pub use policy::ConfiguredPolicyResolver;
pub use serialization::JsonEntitySerializer;
