//! Customer repository with secondary email lookup.
//!
//! # Responsibility
//! - Reuse the generic in-memory CRUD for `Customer` records.
//! - Resolve customers by email without regard to letter case.
//!
//! # Invariants
//! - Email matching is ordinal: each char is compared by its simple
//!   uppercase mapping, independent of any locale.
//! - First match in insertion order wins.

use crate::model::customer::Customer;
use crate::model::EntityId;
use crate::repo::memory_repo::InMemoryRepository;
use crate::repo::Repository;
use log::debug;

/// `Customer` repository built by composition over `InMemoryRepository`.
#[derive(Debug, Clone, Default)]
pub struct CustomerRepository {
    inner: InMemoryRepository<Customer>,
}

impl CustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first customer whose email equals `email` ignoring case.
    pub fn get_by_email(&self, email: &str) -> Option<&Customer> {
        let found = self
            .inner
            .iter()
            .find(|customer| eq_ignore_case(&customer.email, email));
        debug!(
            "event=customer_lookup module=repo by=email status={}",
            if found.is_some() { "hit" } else { "miss" }
        );
        found
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<Vec<Customer>> for CustomerRepository {
    fn from(customers: Vec<Customer>) -> Self {
        Self {
            inner: InMemoryRepository::from(customers),
        }
    }
}

impl Repository<Customer> for CustomerRepository {
    fn get_by_id(&self, id: EntityId) -> Option<&Customer> {
        self.inner.get_by_id(id)
    }

    fn get_all(&self) -> &[Customer] {
        self.inner.get_all()
    }

    fn add(&mut self, entity: Customer) {
        self.inner.add(entity);
    }

    fn update(&mut self, entity: Customer) {
        self.inner.update(entity);
    }

    fn delete(&mut self, id: EntityId) {
        self.inner.delete(id);
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    left.chars().count() == right.chars().count()
        && left
            .chars()
            .zip(right.chars())
            .all(|(l, r)| l == r || simple_upper(l) == simple_upper(r))
}

/// Single-char uppercase mapping; chars that expand (`ß` -> `SS`) stay as-is.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}
