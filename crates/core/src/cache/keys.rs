//! Cache key derivation shared by lookup and store
//!
//! Lookup decides which version (if any) goes into the key and records the
//! decision as a `CacheRequest` marker; store replays that marker instead of
//! recomputing, so both phases land on the same key within a request.

use entcache_domain::{CacheKey, CacheRequest, Entity, EntityReference, RequestedVersion};

use crate::context::RequestContext;

/// Key used by cache lookup, together with the version it was built from.
///
/// Version precedence: the reference's explicit version, then the first
/// `RequestedVersion` marker for the id, then none.
pub fn lookup_key(
    reference: &EntityReference,
    context: &RequestContext,
) -> (CacheKey, Option<i32>) {
    let version = reference.entity_version.or_else(|| {
        context
            .get_model::<RequestedVersion>(|requested| requested.matches(&reference.entity_id))
            .map(|requested| requested.entity_version)
    });

    (CacheKey::new(&reference.entity_id, version), version)
}

/// Key used by cache store for `entity`.
///
/// A `CacheRequest` marker for the id wins, including one recorded without a
/// version (unversioned key). Without any marker the entity's own version is
/// used.
pub fn store_key(entity: &Entity, context: &RequestContext) -> CacheKey {
    let version = match context.get_model::<CacheRequest>(|request| request.matches(&entity.id)) {
        Some(request) => request.version,
        None => Some(entity.entity_version),
    };

    CacheKey::new(&entity.id, version)
}
