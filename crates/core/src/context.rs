//! Per-request scratch space shared by the pipeline stages
//!
//! A [`RequestContext`] lives exactly as long as one logical retrieval
//! request and is passed by `&mut` through every stage, so no locking is
//! needed. It holds three append-only bags:
//!
//! - **models**: markers such as `RequestedVersion`, `CacheRequest` and
//!   `CacheHit`
//! - **objects**: result records such as `FoundEntity`
//! - **policies**: request-level switches such as `IgnorePublishedPolicy`
//!
//! Queries walk a bag in insertion order and return the first value of the
//! requested type that satisfies the predicate.

use std::any::Any;
use std::fmt;

use entcache_domain::{FoundEntity, RequestedVersion};
use tracing::Span;
use uuid::Uuid;

/// Ordered, heterogeneous, append-only collection.
#[derive(Default)]
struct Bag {
    items: Vec<Box<dyn Any + Send + Sync>>,
}

impl Bag {
    fn push<T: Any + Send + Sync>(&mut self, item: T) {
        self.items.push(Box::new(item));
    }

    fn iter<T: Any>(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|item| item.downcast_ref::<T>())
    }

    fn first<T: Any>(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.iter::<T>().find(|item| predicate(item))
    }

    fn first_mut<T: Any>(&mut self, predicate: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.items
            .iter_mut()
            .filter_map(|item| item.downcast_mut::<T>())
            .find(|item| predicate(item))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Request-scoped context handed to every pipeline stage.
pub struct RequestContext {
    request_id: Uuid,
    span: Span,
    models: Bag,
    objects: Bag,
    policies: Bag,
}

impl RequestContext {
    /// Create a context with a fresh request id and tracing span.
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4())
    }

    pub fn with_request_id(request_id: Uuid) -> Self {
        let span = tracing::info_span!("entity_request", request_id = %request_id);
        Self {
            request_id,
            span,
            models: Bag::default(),
            objects: Bag::default(),
            policies: Bag::default(),
        }
    }

    /// Builder form of [`add_policy`](Self::add_policy).
    #[must_use]
    pub fn with_policy<T: Any + Send + Sync>(mut self, policy: T) -> Self {
        self.add_policy(policy);
        self
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Span the cache blocks run under
    pub fn span(&self) -> &Span {
        &self.span
    }

    // === Models ===

    pub fn add_model<T: Any + Send + Sync>(&mut self, model: T) {
        self.models.push(model);
    }

    /// First model of type `T` matching `predicate`
    pub fn get_model<T: Any>(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.models.first(predicate)
    }

    /// All models of type `T`, in insertion order
    pub fn get_models<T: Any>(&self) -> impl Iterator<Item = &T> {
        self.models.iter::<T>()
    }

    /// Record that an explicit version of `entity_id` was requested.
    pub fn request_version(&mut self, entity_id: impl Into<String>, entity_version: i32) {
        self.add_model(RequestedVersion::new(entity_id, entity_version));
    }

    // === Objects ===

    pub fn add_object<T: Any + Send + Sync>(&mut self, object: T) {
        self.objects.push(object);
    }

    pub fn get_object<T: Any>(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.objects.first(predicate)
    }

    pub fn get_object_mut<T: Any>(&mut self, predicate: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.objects.first_mut(predicate)
    }

    pub fn get_objects<T: Any>(&self) -> impl Iterator<Item = &T> {
        self.objects.iter::<T>()
    }

    /// First `FoundEntity` recorded for `entity_id`
    pub fn found_entity(&self, entity_id: &str) -> Option<&FoundEntity> {
        self.get_object::<FoundEntity>(|found| found.matches(entity_id))
    }

    pub fn found_entity_mut(&mut self, entity_id: &str) -> Option<&mut FoundEntity> {
        self.get_object_mut::<FoundEntity>(|found| found.matches(entity_id))
    }

    // === Policies ===

    pub fn add_policy<T: Any + Send + Sync>(&mut self, policy: T) {
        self.policies.push(policy);
    }

    pub fn has_policy<T: Any>(&self) -> bool {
        self.policies.iter::<T>().next().is_some()
    }

    /// First policy of type `T`, or its default when none was added
    pub fn policy_or_default<T: Any + Clone + Default>(&self) -> T {
        self.policies.iter::<T>().next().cloned().unwrap_or_default()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("request_id", &self.request_id)
            .field("models", &self.models.len())
            .field("objects", &self.objects.len())
            .field("policies", &self.policies.len())
            .finish()
    }
}
