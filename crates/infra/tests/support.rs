//! Shared helpers for `entcache-infra` integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use entcache_core::EntityRepository;
use entcache_domain::{Entity, EntityType, Result};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Repository over a fixed list of entities.
#[derive(Default)]
pub struct FixtureRepository {
    entities: Vec<Entity>,
    finds: Mutex<usize>,
}

impl FixtureRepository {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities, finds: Mutex::new(0) }
    }

    pub fn finds(&self) -> usize {
        *self.finds.lock().unwrap()
    }
}

#[async_trait]
impl EntityRepository for FixtureRepository {
    async fn find(
        &self,
        entity_type: &EntityType,
        entity_id: &str,
        entity_version: Option<i32>,
    ) -> Result<Option<Entity>> {
        *self.finds.lock().unwrap() += 1;
        Ok(self
            .entities
            .iter()
            .filter(|entity| entity.entity_type == *entity_type && entity.has_id(entity_id))
            .filter(|entity| entity_version.map_or(true, |v| entity.entity_version == v))
            .max_by_key(|entity| entity.entity_version)
            .cloned())
    }

    async fn exists(&self, entity_type: &EntityType, entity_id: &str) -> Result<bool> {
        Ok(self
            .entities
            .iter()
            .any(|entity| entity.entity_type == *entity_type && entity.has_id(entity_id)))
    }
}

/// Layer recording the `event` field of every tracing event.
#[derive(Clone, Default)]
pub struct EventCapture {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventCapture {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, code: &str) -> usize {
        self.events.lock().unwrap().iter().filter(|event| *event == code).count()
    }
}

struct EventCodeVisitor(Option<String>);

impl Visit for EventCodeVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" && self.0.is_none() {
            self.0 = Some(format!("{value:?}").trim_matches('"').to_string());
        }
    }
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventCodeVisitor(None);
        event.record(&mut visitor);
        if let Some(code) = visitor.0 {
            self.events.lock().unwrap().push(code);
        }
    }
}
