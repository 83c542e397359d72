use std::rc::Rc;

use code_samples::repository::{Entity, EntityId, InMemoryRepository, Repository};
use proptest::prelude::*;

fn build(ids: &[EntityId]) -> (InMemoryRepository<Entity>, Vec<Rc<Entity>>) {
    let handles: Vec<Rc<Entity>> = ids
        .iter()
        .enumerate()
        .map(|(n, &id)| Rc::new(Entity::new(id, format!("entity-{n}"))))
        .collect();
    let mut repository: InMemoryRepository<Entity> = InMemoryRepository::default();
    for handle in &handles {
        repository.add(Rc::clone(handle));
    }
    (repository, handles)
}

fn names(entities: &[Rc<Entity>]) -> Vec<String> {
    entities.iter().map(|entity| entity.name.clone()).collect()
}

#[test]
fn find_orders_five_one_three_by_id() {
    let (repository, _) = build(&[5, 1, 3]);
    let ids: Vec<EntityId> = repository.find(&|_| true).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn with_entities_keeps_existing_collection() {
    let existing = vec![
        Rc::new(Entity::new(2, "b")),
        Rc::new(Entity::new(1, "a")),
    ];
    let repository = InMemoryRepository::with_entities(existing.clone());
    assert_eq!(names(&repository.get_all()), vec!["b", "a"]);
    assert!(Rc::ptr_eq(&repository.get_by_id(1).unwrap(), &existing[1]));
}

proptest! {
    #[test]
    fn get_all_preserves_insertion_order(ids in prop::collection::vec(-50i32..50, 0..40)) {
        let (repository, handles) = build(&ids);
        prop_assert_eq!(names(&repository.get_all()), names(&handles));
    }

    #[test]
    fn find_is_sorted_and_stable(ids in prop::collection::vec(0i32..10, 0..40)) {
        let (repository, handles) = build(&ids);
        let found = repository.find(&|_| true);

        let mut expected = handles.clone();
        expected.sort_by_key(|entity| entity.id);
        prop_assert_eq!(names(&found), names(&expected));
    }

    #[test]
    fn find_matches_filter(ids in prop::collection::vec(0i32..100, 0..40), threshold in 0i32..100) {
        let (repository, _) = build(&ids);
        let found = repository.find(&|entity| entity.id >= threshold);
        let expected = ids.iter().filter(|&&id| id >= threshold).count();

        prop_assert_eq!(found.len(), expected);
        prop_assert!(found.iter().all(|entity| entity.id >= threshold));
    }

    #[test]
    fn get_by_id_returns_first_inserted(ids in prop::collection::vec(0i32..10, 1..40), probe in 0i32..12) {
        let (repository, handles) = build(&ids);
        let expected = handles.iter().find(|entity| entity.id == probe);

        match (repository.get_by_id(probe), expected) {
            (Some(found), Some(expected)) => prop_assert!(Rc::ptr_eq(&found, expected)),
            (None, None) => {}
            (found, expected) => prop_assert!(false, "mismatch: {:?} vs {:?}", found, expected),
        }
    }

    #[test]
    fn remove_then_lookup_is_absent(ids in prop::collection::hash_set(0i32..1000, 1..40), pick in any::<prop::sample::Index>()) {
        let ids: Vec<EntityId> = ids.into_iter().collect();
        let (mut repository, handles) = build(&ids);
        let target = &handles[pick.index(handles.len())];

        prop_assert!(repository.remove(target));
        prop_assert!(repository.get_by_id(target.id).is_none());
        prop_assert_eq!(repository.len(), handles.len() - 1);
        prop_assert!(!repository.remove(target));
    }
}
