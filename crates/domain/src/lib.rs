//! # Entcache Domain
//!
//! Business domain types for the entity cache layer.
//!
//! This crate contains:
//! - Entity, reference and cache key types
//! - Cache policies and the `Cachable` envelope written to cache regions
//! - Request-scoped markers shared between cache lookup and cache store
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other entcache crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
