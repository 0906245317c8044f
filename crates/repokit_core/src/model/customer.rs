//! Customer entity.
//!
//! # Invariants
//! - `email` is stored as given; case folding happens only at lookup time.

use crate::model::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Customer record addressed by integer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    /// Compared case-insensitively by `CustomerRepository::get_by_email`.
    pub email: String,
}

impl Customer {
    pub fn new(id: EntityId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for Customer {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}",
            self.id, self.name, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Customer;
    use crate::model::Entity;

    #[test]
    fn entity_id_reads_id_field() {
        let customer = Customer::new(7, "Ada", "ada@example.com");
        assert_eq!(customer.id(), 7);
    }

    #[test]
    fn display_renders_listing_line() {
        let customer = Customer::new(1, "John Doe", "john.doe@example.com");
        assert_eq!(
            customer.to_string(),
            "ID: 1, Name: John Doe, Email: john.doe@example.com"
        );
    }
}
