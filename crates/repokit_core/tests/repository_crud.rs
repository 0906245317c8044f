use repokit_core::{Entity, EntityId, InMemoryRepository, Repository};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Order {
    id: EntityId,
    total_cents: i64,
}

impl Entity for Order {
    fn id(&self) -> EntityId {
        self.id
    }
}

fn order(id: EntityId, total_cents: i64) -> Order {
    Order { id, total_cents }
}

#[test]
fn added_entities_are_found_by_id() {
    let mut repo = InMemoryRepository::new();
    let orders = vec![order(10, 500), order(-3, 0), order(42, 1_999)];
    for entry in &orders {
        repo.add(entry.clone());
    }

    for entry in &orders {
        assert_eq!(repo.get_by_id(entry.id), Some(entry));
    }
    assert_eq!(repo.get_by_id(11), None);
}

#[test]
fn get_all_preserves_insertion_order() {
    let mut repo = InMemoryRepository::new();
    repo.add(order(3, 1));
    repo.add(order(1, 2));
    repo.add(order(2, 3));

    let ids: Vec<EntityId> = repo.get_all().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn count_tracks_adds_minus_successful_deletes() {
    let mut repo = InMemoryRepository::new();
    repo.add(order(1, 100));
    repo.add(order(1, 200));
    repo.add(order(2, 300));
    assert_eq!(repo.get_all().len(), 3);

    repo.delete(1);
    repo.delete(99);
    assert_eq!(repo.get_all().len(), 2);

    repo.delete(1);
    repo.delete(2);
    assert!(repo.is_empty());
}

#[test]
fn update_replaces_matching_entity() {
    let mut repo = InMemoryRepository::new();
    repo.add(order(1, 100));
    repo.add(order(2, 200));

    repo.update(order(2, 250));

    assert_eq!(repo.get_by_id(2), Some(&order(2, 250)));
    assert_eq!(repo.get_all(), &[order(1, 100), order(2, 250)]);
}

#[test]
fn update_unknown_id_leaves_collection_unchanged() {
    let mut repo = InMemoryRepository::new();
    repo.add(order(1, 100));
    repo.add(order(2, 200));
    let before = repo.get_all().to_vec();

    repo.update(order(3, 999));

    assert_eq!(repo.get_all(), before.as_slice());
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let mut repo = InMemoryRepository::new();
    repo.add(order(1, 100));
    let before = repo.get_all().to_vec();

    repo.delete(2);

    assert_eq!(repo.get_all(), before.as_slice());
}

#[test]
fn operations_on_empty_repository_are_silent() {
    let mut repo: InMemoryRepository<Order> = InMemoryRepository::new();

    repo.update(order(1, 1));
    repo.delete(1);

    assert!(repo.is_empty());
    assert_eq!(repo.get_by_id(1), None);
}

#[test]
fn repository_is_usable_through_trait_object() {
    let mut repo = InMemoryRepository::new();
    let dyn_repo: &mut dyn Repository<Order> = &mut repo;

    dyn_repo.add(order(7, 70));
    dyn_repo.update(order(7, 77));

    assert_eq!(dyn_repo.get_by_id(7).map(|o| o.total_cents), Some(77));
    assert_eq!(repo.len(), 1);
}
