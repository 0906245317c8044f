//! Entity model shared by every repository.
//!
//! # Responsibility
//! - Define the identifier capability that repositories key on.
//! - Define concrete entity records stored by the demo repositories.
//!
//! # Invariants
//! - Every stored record exposes an `EntityId` through `Entity::id`.
//! - Id uniqueness is advisory; nothing in this module enforces it.

pub mod customer;

/// Integer key used to address entities inside a repository.
pub type EntityId = i32;

/// Capability required from any record kept in a repository.
pub trait Entity {
    /// Returns the identifier this record is addressed by.
    fn id(&self) -> EntityId;
}
