//! In-memory generic repository with a customer specialization.
//!
//! Entities expose an integer id through `Entity`; `InMemoryRepository`
//! serves CRUD over them by linear scan, and `CustomerRepository` adds an
//! email lookup on top.

pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LogTarget};
pub use model::customer::Customer;
pub use model::{Entity, EntityId};
pub use repo::customer_repo::CustomerRepository;
pub use repo::memory_repo::InMemoryRepository;
pub use repo::Repository;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
