//! Configuration loading
//!
//! Loads `CacheSettings` from environment variables and files.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
