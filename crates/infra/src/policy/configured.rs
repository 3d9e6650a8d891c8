//! Policy resolver backed by `CacheSettings`

use entcache_core::{CachePolicyResolver, RequestContext};
use entcache_domain::{CachePolicy, CacheSettings, EntityCacheError, EntityType, Result};

/// Resolves policies from loaded configuration.
///
/// Entity types are matched case-insensitively; the first listed entry wins,
/// then the default policy. A type covered by neither is an error.
#[derive(Debug, Clone)]
pub struct ConfiguredPolicyResolver {
    settings: CacheSettings,
}

impl ConfiguredPolicyResolver {
    pub fn new(settings: CacheSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// A fresh request context carrying the configured logging policy.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new().with_policy(self.settings.logging)
    }
}

impl CachePolicyResolver for ConfiguredPolicyResolver {
    fn resolve(&self, entity_type: &EntityType, _context: &RequestContext) -> Result<CachePolicy> {
        self.settings.policy_for(entity_type).cloned().ok_or_else(|| {
            tracing::warn!(entity_type = %entity_type, "no cache policy configured");
            EntityCacheError::PolicyUnavailable(entity_type.to_string())
        })
    }
}
