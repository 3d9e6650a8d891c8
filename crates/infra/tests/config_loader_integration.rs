//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading cache settings from files.

use std::time::Duration;

use entcache_domain::{CacheMode, CachePriority, EntityType};
use entcache_infra::config;

#[test]
fn test_load_config_from_toml_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("entcache.toml");
    std::fs::write(
        &path,
        r#"
[default_policy]
cache_name = "Entities"

[[policies]]
entity_type = "SellableItem"
mode = "serialized_string"
cache_name = "Catalog"

[policies.entry_options]
absolute_expiration = 3600
sliding_expiration = 300
priority = "never_remove"

[[policies]]
entity_type = "Cart"
allow_caching = false

[regions]
max_capacity = 5000

[logging]
log_skip_cache = true
"#,
    )
    .expect("Failed to write config");

    let settings = config::load_from_file(Some(path)).expect("Failed to load TOML config");

    let sellable = settings.policy_for(&EntityType::new("SELLABLEITEM")).unwrap();
    assert_eq!(sellable.mode, CacheMode::SerializedString);
    assert_eq!(sellable.cache_name, "Catalog");
    assert_eq!(sellable.entry_options.absolute_expiration, Some(Duration::from_secs(3600)));
    assert_eq!(sellable.entry_options.sliding_expiration, Some(Duration::from_secs(300)));
    assert_eq!(sellable.entry_options.priority, CachePriority::NeverRemove);

    assert!(!settings.policy_for(&EntityType::new("Cart")).unwrap().allow_caching);
    assert_eq!(settings.policy_for(&EntityType::new("Customer")).unwrap().cache_name, "Entities");
    assert_eq!(settings.regions.max_capacity, 5000);
    assert!(settings.logging.log_skip_cache);
}

#[test]
fn test_load_config_from_json_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("entcache.json");
    std::fs::write(
        &path,
        r#"{
            "policies": [
                { "entity_type": "SellableItem", "cache_name": "Catalog" }
            ]
        }"#,
    )
    .expect("Failed to write config");

    let settings = config::load_from_file(Some(path)).expect("Failed to load JSON config");

    let sellable = settings.policy_for(&EntityType::new("SellableItem")).unwrap();
    assert!(sellable.allow_caching);
    assert!(sellable.cache_as_entity());
    assert!(settings.policy_for(&EntityType::new("Customer")).is_none());
    assert!(!settings.logging.log_skip_cache);
}

#[test]
fn test_load_config_with_unknown_mode_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("entcache.toml");
    std::fs::write(
        &path,
        r#"
[[policies]]
entity_type = "SellableItem"
mode = "compressed"
"#,
    )
    .expect("Failed to write config");

    assert!(config::load_from_file(Some(path)).is_err());
}
