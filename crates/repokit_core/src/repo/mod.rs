//! Repository contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define the CRUD contract every repository exposes.
//! - Keep lookup semantics (first match wins, absent is `None`) in one place.
//!
//! # Invariants
//! - Not-found on `get_by_id`/`update`/`delete` is never an error.
//! - `get_all` preserves insertion order.

use crate::model::{Entity, EntityId};

pub mod customer_repo;
pub mod memory_repo;

/// CRUD contract over entities keyed by `EntityId`.
pub trait Repository<T: Entity> {
    /// Returns the first stored entity with `id`, or `None`.
    fn get_by_id(&self, id: EntityId) -> Option<&T>;
    /// Live view of all stored entities in insertion order.
    fn get_all(&self) -> &[T];
    /// Appends `entity`. Duplicate ids are accepted.
    fn add(&mut self, entity: T);
    /// Replaces the first entity sharing `entity.id()` in place; no-op when absent.
    fn update(&mut self, entity: T);
    /// Removes the first entity with `id`; no-op when absent.
    fn delete(&mut self, id: EntityId);
}
