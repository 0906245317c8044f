//! Vec-backed repository.
//!
//! # Responsibility
//! - Store entities in insertion order and serve CRUD by linear scan.
//! - Emit metadata-only diagnostics for every mutation.
//!
//! # Invariants
//! - Entity payloads never reach the log; only ids and outcome do.
//! - Removing an entity keeps the relative order of the rest.

use crate::model::{Entity, EntityId};
use crate::repo::Repository;
use log::{debug, warn};

/// In-memory repository over an ordered `Vec`.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entities: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    /// Seeds a repository with `entities`, keeping their order as-is.
    fn from(entities: Vec<T>) -> Self {
        Self { entities }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    fn position(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id() == id)
    }

    /// Iterates stored entities in insertion order.
    ///
    /// Used by specialized repositories that add secondary lookups.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get_by_id(&self, id: EntityId) -> Option<&T> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    fn get_all(&self) -> &[T] {
        &self.entities
    }

    fn add(&mut self, entity: T) {
        let id = entity.id();
        if self.position(id).is_some() {
            warn!(
                "event=entity_add module=repo status=duplicate_id kind={} id={}",
                kind_name::<T>(),
                id
            );
        }
        self.entities.push(entity);
        debug!(
            "event=entity_add module=repo status=ok kind={} id={} count={}",
            kind_name::<T>(),
            id,
            self.entities.len()
        );
    }

    fn update(&mut self, entity: T) {
        let id = entity.id();
        match self.position(id) {
            Some(index) => {
                self.entities[index] = entity;
                debug!(
                    "event=entity_update module=repo status=ok kind={} id={} index={}",
                    kind_name::<T>(),
                    id,
                    index
                );
            }
            None => debug!(
                "event=entity_update module=repo status=noop kind={} id={}",
                kind_name::<T>(),
                id
            ),
        }
    }

    fn delete(&mut self, id: EntityId) {
        match self.position(id) {
            Some(index) => {
                self.entities.remove(index);
                debug!(
                    "event=entity_delete module=repo status=ok kind={} id={} count={}",
                    kind_name::<T>(),
                    id,
                    self.entities.len()
                );
            }
            None => debug!(
                "event=entity_delete module=repo status=noop kind={} id={}",
                kind_name::<T>(),
                id
            ),
        }
    }
}

/// Short type name for log lines, e.g. `Customer`.
fn kind_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
